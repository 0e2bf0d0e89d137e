pub mod backup;
pub mod checkin;
pub mod config;
pub mod log;
pub mod registry;
pub mod stats;

pub use checkin::CheckinLogic;
pub use registry::RegistryLogic;
pub use stats::StatsLogic;
