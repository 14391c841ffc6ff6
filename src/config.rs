use crate::hours::HourType;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weekdays a course may meet on. Sunday is not a variant: Chilean
/// training schedules never run Sunday sessions, so the type rules it out
/// instead of the generator filtering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ClassDay {
    pub const ALL: [ClassDay; 6] = [
        ClassDay::Monday,
        ClassDay::Tuesday,
        ClassDay::Wednesday,
        ClassDay::Thursday,
        ClassDay::Friday,
        ClassDay::Saturday,
    ];

    pub fn weekday(self) -> Weekday {
        match self {
            ClassDay::Monday => Weekday::Mon,
            ClassDay::Tuesday => Weekday::Tue,
            ClassDay::Wednesday => Weekday::Wed,
            ClassDay::Thursday => Weekday::Thu,
            ClassDay::Friday => Weekday::Fri,
            ClassDay::Saturday => Weekday::Sat,
        }
    }

    /// Sunday has no class-day counterpart.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(ClassDay::Monday),
            Weekday::Tue => Some(ClassDay::Tuesday),
            Weekday::Wed => Some(ClassDay::Wednesday),
            Weekday::Thu => Some(ClassDay::Thursday),
            Weekday::Fri => Some(ClassDay::Friday),
            Weekday::Sat => Some(ClassDay::Saturday),
            Weekday::Sun => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassDay::Monday => "monday",
            ClassDay::Tuesday => "tuesday",
            ClassDay::Wednesday => "wednesday",
            ClassDay::Thursday => "thursday",
            ClassDay::Friday => "friday",
            ClassDay::Saturday => "saturday",
        }
    }

    pub fn from_str(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "monday" => Some(ClassDay::Monday),
            "tuesday" => Some(ClassDay::Tuesday),
            "wednesday" => Some(ClassDay::Wednesday),
            "thursday" => Some(ClassDay::Thursday),
            "friday" => Some(ClassDay::Friday),
            "saturday" => Some(ClassDay::Saturday),
            _ => None,
        }
    }
}

/// Everything the generator needs to lay out a course. Treated as
/// read-only input; generation never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub course_name: String,
    pub start_date: Option<NaiveDate>,
    pub class_days: Vec<ClassDay>,
    pub total_hours: f64,
    pub hour_type: HourType,
    pub hours_per_session: f64,
    pub recovery_sessions_count: u32,
    pub custom_excluded_dates: Vec<NaiveDate>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            start_date: None,
            class_days: vec![ClassDay::Monday, ClassDay::Wednesday],
            total_hours: 40.0,
            hour_type: HourType::Pedagogical,
            hours_per_session: 2.0,
            recovery_sessions_count: 0,
            custom_excluded_dates: Vec::new(),
        }
    }
}

impl CourseConfig {
    pub fn class_weekdays(&self) -> HashSet<Weekday> {
        self.class_days.iter().map(|day| day.weekday()).collect()
    }

    pub fn excluded_date_set(&self) -> HashSet<NaiveDate> {
        self.custom_excluded_dates.iter().copied().collect()
    }

    pub fn toggle_class_day(&mut self, day: ClassDay) {
        if let Some(idx) = self.class_days.iter().position(|d| *d == day) {
            self.class_days.remove(idx);
        } else {
            self.class_days.push(day);
        }
    }

    pub fn add_excluded_date(&mut self, date: NaiveDate) {
        if !self.custom_excluded_dates.contains(&date) {
            self.custom_excluded_dates.push(date);
        }
    }

    pub fn remove_excluded_date(&mut self, date: NaiveDate) {
        self.custom_excluded_dates.retain(|d| *d != date);
    }
}
