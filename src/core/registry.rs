use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::models::{Person, PersonKind};
use std::collections::BTreeSet;

/// The three record kinds seen as one tagged collection.
pub struct RegistryLogic;

impl RegistryLogic {
    /// Every record, tagged: all volunteers, then all guests, then all
    /// staff, each group in store order.
    pub fn all_people(store: &dyn RecordStore) -> AppResult<Vec<Person>> {
        let volunteers = store.get_volunteers()?;
        let guests = store.get_guests()?;
        let staff = store.get_staff()?;

        let mut people = Vec::with_capacity(volunteers.len() + guests.len() + staff.len());
        people.extend(volunteers.into_iter().map(Person::from));
        people.extend(guests.into_iter().map(Person::from));
        people.extend(staff.into_iter().map(Person::from));
        Ok(people)
    }

    /// Records of a single kind, tagged.
    pub fn people_of_kind(store: &dyn RecordStore, kind: PersonKind) -> AppResult<Vec<Person>> {
        let people = match kind {
            PersonKind::Volunteer => store.get_volunteers()?.into_iter().map(Person::from).collect(),
            PersonKind::Guest => store.get_guests()?.into_iter().map(Person::from).collect(),
            PersonKind::Staff => store.get_staff()?.into_iter().map(Person::from).collect(),
        };
        Ok(people)
    }

    /// Hard delete by composite key. `false` when no such row exists.
    pub fn delete_person(store: &dyn RecordStore, kind: PersonKind, id: i64) -> AppResult<bool> {
        let removed = store.delete_person(kind, id)?;
        if removed {
            tracing::info!(%kind, id, "person deleted");
        } else {
            tracing::debug!(%kind, id, "delete found no row");
        }
        Ok(removed)
    }

    pub fn unique_volunteer_names(store: &dyn RecordStore) -> AppResult<Vec<String>> {
        Ok(distinct_sorted(
            store.get_volunteers()?.into_iter().map(|v| v.name),
        ))
    }

    pub fn unique_staff_names(store: &dyn RecordStore) -> AppResult<Vec<String>> {
        Ok(distinct_sorted(store.get_staff()?.into_iter().map(|s| s.name)))
    }

    /// Distinct names of `kind`, sorted.
    pub fn unique_names(store: &dyn RecordStore, kind: PersonKind) -> AppResult<Vec<String>> {
        match kind {
            PersonKind::Volunteer => Self::unique_volunteer_names(store),
            PersonKind::Staff => Self::unique_staff_names(store),
            PersonKind::Guest => Ok(distinct_sorted(
                store.get_guests()?.into_iter().map(|g| g.name),
            )),
        }
    }
}

/// Each name once, ascending byte order.
fn distinct_sorted(names: impl Iterator<Item = String>) -> Vec<String> {
    names.collect::<BTreeSet<_>>().into_iter().collect()
}
