use super::{guest::Guest, kind::PersonKind, staff::Staff, volunteer::Volunteer};
use serde::Serialize;

/// Unified registry entry. Serializes as the record's own fields plus a
/// `"type"` tag naming the kind it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    Volunteer(Volunteer),
    Guest(Guest),
    Staff(Staff),
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Volunteer(_) => PersonKind::Volunteer,
            Person::Guest(_) => PersonKind::Guest,
            Person::Staff(_) => PersonKind::Staff,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Person::Volunteer(v) => v.id,
            Person::Guest(g) => g.id,
            Person::Staff(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Volunteer(v) => &v.name,
            Person::Guest(g) => &g.name,
            Person::Staff(s) => &s.name,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Person::Volunteer(v) => &v.date,
            Person::Guest(g) => &g.date,
            Person::Staff(s) => &s.date,
        }
    }
}

impl From<Volunteer> for Person {
    fn from(v: Volunteer) -> Self {
        Person::Volunteer(v)
    }
}

impl From<Guest> for Person {
    fn from(g: Guest) -> Self {
        Person::Guest(g)
    }
}

impl From<Staff> for Person {
    fn from(s: Staff) -> Self {
        Person::Staff(s)
    }
}
