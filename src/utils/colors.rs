/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color of the type tag in people listings.
pub fn color_for_kind(kind: crate::models::PersonKind) -> &'static str {
    use crate::models::PersonKind;
    match kind {
        PersonKind::Volunteer => GREEN,
        PersonKind::Guest => BLUE,
        PersonKind::Staff => MAGENTA,
    }
}
