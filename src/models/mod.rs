pub mod guest;
pub mod guest_reason;
mod input;
pub mod kind;
pub mod person;
pub mod staff;
pub mod stats;
pub mod volunteer;
pub mod work_area;

pub use guest::{Guest, GuestInput, NewGuest};
pub use guest_reason::GuestReason;
pub use kind::PersonKind;
pub use person::Person;
pub use staff::{NewStaff, Staff, StaffInput};
pub use stats::Stats;
pub use volunteer::{NewVolunteer, Volunteer, VolunteerInput};
pub use work_area::WorkArea;
