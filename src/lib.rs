pub mod calendar;
pub mod config;
pub(crate) mod config_validation;
pub mod hours;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod persistence;
pub mod schedule;
pub mod session;

pub use calendar::{CourseCalendar, day_name};
pub use config::{ClassDay, CourseConfig};
pub use hours::{HourType, effective_hours};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteConfigStore;
pub use persistence::{
    ConfigStore, PersistenceError, export_schedule_to_csv, load_config_from_json,
    load_config_or_default, save_config_to_json, validate_config,
};
pub use schedule::{
    CourseSchedule, MAX_SCAN_DAYS, RECOVERY_EXTRA_HOURS, ScheduleSummary, generate, summarize,
};
pub use session::{Session, sessions_to_dataframe};
