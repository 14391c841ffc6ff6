use chrono::NaiveDate;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One generated class meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// 1-based ordinal among generated sessions.
    pub number: u32,
    pub date: NaiveDate,
    /// Spanish weekday label (Lunes..Sábado).
    pub day_name: String,
    /// Positional: true for the first `recovery_sessions_count` sessions.
    pub is_recovery: bool,
    /// True for the single session whose accrual first reaches half the
    /// course target.
    pub is_mid_course: bool,
    /// Nominal chronological duration; recovery sessions run 30 minutes
    /// longer than normal ones.
    pub chrono_hours: f64,
    /// `chrono_hours` converted into accounted hours.
    pub eff_hours: f64,
    /// Running accounted-hours total up to and including this session.
    pub acc_hours: f64,
}

/// Columnar view of a generated schedule, used by the CLI table renderer
/// and kept alongside the CSV export as the tabular interchange form.
pub fn sessions_to_dataframe(sessions: &[Session]) -> PolarsResult<DataFrame> {
    let numbers: Vec<i32> = sessions.iter().map(|s| s.number as i32).collect();
    let dates: Vec<i32> = sessions.iter().map(|s| date_to_i32(s.date)).collect();
    let day_names: Vec<&str> = sessions.iter().map(|s| s.day_name.as_str()).collect();
    let is_recovery: Vec<bool> = sessions.iter().map(|s| s.is_recovery).collect();
    let is_mid_course: Vec<bool> = sessions.iter().map(|s| s.is_mid_course).collect();
    let chrono_hours: Vec<f64> = sessions.iter().map(|s| s.chrono_hours).collect();
    let eff_hours: Vec<f64> = sessions.iter().map(|s| s.eff_hours).collect();
    let acc_hours: Vec<f64> = sessions.iter().map(|s| s.acc_hours).collect();

    let date_series =
        Series::new(PlSmallStr::from_static("date"), dates).cast(&DataType::Date)?;

    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("number"), numbers).into_column(),
        date_series.into_column(),
        Series::new(PlSmallStr::from_static("day_name"), day_names).into_column(),
        Series::new(PlSmallStr::from_static("is_recovery"), is_recovery).into_column(),
        Series::new(PlSmallStr::from_static("is_mid_course"), is_mid_course).into_column(),
        Series::new(PlSmallStr::from_static("chrono_hours"), chrono_hours).into_column(),
        Series::new(PlSmallStr::from_static("eff_hours"), eff_hours).into_column(),
        Series::new(PlSmallStr::from_static("acc_hours"), acc_hours).into_column(),
    ])
}

fn date_to_i32(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (date - epoch).num_days() as i32
}
