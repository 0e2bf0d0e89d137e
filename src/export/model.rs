use crate::models::Person;
use serde::Serialize;

/// Flat row for the CSV export: the union of all three record shapes,
/// with the kind tag first. Columns a kind does not have stay empty.
#[derive(Serialize, Clone, Debug, Default)]
pub struct PersonExport {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub area: Option<String>,
    pub activities: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub join_newsletter: Option<bool>,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub tour_guide: Option<String>,
    pub notes: Option<String>,
}

impl From<&Person> for PersonExport {
    fn from(p: &Person) -> Self {
        let base = PersonExport {
            kind: p.kind().as_str().to_string(),
            id: p.id(),
            name: p.name().to_string(),
            date: p.date().to_string(),
            ..Default::default()
        };

        match p {
            Person::Volunteer(v) => PersonExport {
                time_in: Some(v.time_in.clone()),
                time_out: v.time_out.clone(),
                area: Some(v.area.to_db_str().to_string()),
                activities: Some(v.activities.clone()),
                ..base
            },
            Person::Guest(g) => PersonExport {
                email: Some(g.email.clone()),
                phone: g.phone.clone(),
                reason: Some(g.reason.to_db_str().to_string()),
                join_newsletter: Some(g.join_newsletter),
                bride_name: g.bride_name.clone(),
                groom_name: g.groom_name.clone(),
                tour_guide: g.tour_guide.clone(),
                ..base
            },
            Person::Staff(s) => PersonExport {
                time_in: s.time_in.clone(),
                time_out: s.time_out.clone(),
                notes: s.notes.clone(),
                ..base
            },
        }
    }
}
