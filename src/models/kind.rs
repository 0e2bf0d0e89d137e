use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminator of the three record kinds held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Volunteer,
    Guest,
    Staff,
}

impl PersonKind {
    pub const ALL: [PersonKind; 3] = [PersonKind::Volunteer, PersonKind::Guest, PersonKind::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Volunteer => "volunteer",
            PersonKind::Guest => "guest",
            PersonKind::Staff => "staff",
        }
    }

    /// Backing table of the SQLite store.
    pub fn table(&self) -> &'static str {
        match self {
            PersonKind::Volunteer => "volunteers",
            PersonKind::Guest => "guests",
            PersonKind::Staff => "staff",
        }
    }

    /// Parse a tag as sent by clients (case-insensitive).
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "volunteer" => Some(Self::Volunteer),
            "guest" => Some(Self::Guest),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonKind {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonKind::from_tag(s).ok_or_else(|| {
            crate::errors::ValidationErrors::single(
                "type",
                format!("unknown person type '{s}' (expected volunteer, guest or staff)"),
            )
            .into()
        })
    }
}
