use super::PersistenceResult;
use crate::calendar::CourseCalendar;
use crate::config::CourseConfig;
use crate::session::Session;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Persist a configuration snapshot verbatim as pretty JSON.
pub fn save_config_to_json<P: AsRef<Path>>(
    config: &CourseConfig,
    path: P,
) -> PersistenceResult<()> {
    super::validate_config(config)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<CourseConfig> {
    let file = File::open(path)?;
    let config: CourseConfig = serde_json::from_reader(file)?;
    super::validate_config(&config)?;
    Ok(config)
}

/// A missing or corrupt snapshot is "no saved state yet": callers get the
/// default configuration instead of an error.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> CourseConfig {
    load_config_from_json(path).unwrap_or_default()
}

#[derive(Serialize)]
struct SessionCsvRecord {
    number: u32,
    date: String,
    day_name: String,
    session_type: String,
    chrono_hours: f64,
    eff_hours: String,
    acc_hours: String,
    notes: String,
}

impl SessionCsvRecord {
    fn from_session(session: &Session, calendar: &CourseCalendar) -> Self {
        let mut notes = Vec::new();
        if let Some(name) = calendar.holiday_name(session.date) {
            notes.push(format!("Feriado: {name}"));
        }
        if session.is_mid_course {
            notes.push("Mitad del curso".to_string());
        }

        let session_type = if session.is_recovery {
            "Recuperación"
        } else {
            "Normal"
        };

        Self {
            number: session.number,
            date: session.date.format("%Y-%m-%d").to_string(),
            day_name: session.day_name.clone(),
            session_type: session_type.to_string(),
            chrono_hours: session.chrono_hours,
            eff_hours: format!("{:.2}", session.eff_hours),
            acc_hours: format!("{:.2}", session.acc_hours),
            notes: notes.join(" | "),
        }
    }
}

/// Serialize a generated schedule into a spreadsheet-style CSV, one row
/// per session, annotating holiday matches and the midpoint row.
pub fn export_schedule_to_csv<P: AsRef<Path>>(
    sessions: &[Session],
    calendar: &CourseCalendar,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for session in sessions {
        writer.serialize(SessionCsvRecord::from_session(session, calendar))?;
    }
    writer.flush()?;
    Ok(())
}
