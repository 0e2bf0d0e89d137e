use serde::Serialize;

/// Where a volunteer spends their shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkArea {
    Tours,
    Gardens,
    Events,
    GiftShop,
    Maintenance,
    Office,
    Other,
}

impl WorkArea {
    pub const ALL: [WorkArea; 7] = [
        WorkArea::Tours,
        WorkArea::Gardens,
        WorkArea::Events,
        WorkArea::GiftShop,
        WorkArea::Maintenance,
        WorkArea::Office,
        WorkArea::Other,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkArea::Tours => "tours",
            WorkArea::Gardens => "gardens",
            WorkArea::Events => "events",
            WorkArea::GiftShop => "gift-shop",
            WorkArea::Maintenance => "maintenance",
            WorkArea::Office => "office",
            WorkArea::Other => "other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        WorkArea::ALL.into_iter().find(|a| a.to_db_str() == s)
    }

    /// Helper: accept user input in any case, with spaces or underscores
    /// in place of dashes ("Gift Shop" → gift-shop).
    pub fn from_input(s: &str) -> Option<Self> {
        let slug = s.trim().to_lowercase().replace([' ', '_'], "-");
        WorkArea::from_db_str(&slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkArea::Tours => "Tours",
            WorkArea::Gardens => "Gardens",
            WorkArea::Events => "Events",
            WorkArea::GiftShop => "Gift Shop",
            WorkArea::Maintenance => "Maintenance",
            WorkArea::Office => "Office",
            WorkArea::Other => "Other",
        }
    }

    pub fn slugs() -> String {
        WorkArea::ALL
            .iter()
            .map(|a| a.to_db_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
