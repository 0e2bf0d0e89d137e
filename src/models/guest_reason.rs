use serde::Serialize;

/// Why a guest came to the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestReason {
    Wedding,
    Historic,
    Volunteer,
    Donation,
    Other,
}

impl GuestReason {
    pub const ALL: [GuestReason; 5] = [
        GuestReason::Wedding,
        GuestReason::Historic,
        GuestReason::Volunteer,
        GuestReason::Donation,
        GuestReason::Other,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            GuestReason::Wedding => "wedding",
            GuestReason::Historic => "historic",
            GuestReason::Volunteer => "volunteer",
            GuestReason::Donation => "donation",
            GuestReason::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        GuestReason::ALL.into_iter().find(|r| r.to_db_str() == s)
    }

    pub fn from_input(s: &str) -> Option<Self> {
        GuestReason::from_db_str(&s.trim().to_lowercase())
    }

    pub fn is_wedding(&self) -> bool {
        matches!(self, GuestReason::Wedding)
    }

    pub fn slugs() -> String {
        GuestReason::ALL
            .iter()
            .map(|r| r.to_db_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
