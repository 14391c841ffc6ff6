use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Calendar rules for one scheduling year: which dates are holidays and
/// what they are called. Built once and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCalendar {
    holidays: BTreeMap<NaiveDate, String>,
}

/// Chilean national holidays for 2026. (month, day, display name).
const CHILEAN_HOLIDAYS_2026: [(u32, u32, &str); 16] = [
    (1, 1, "Año Nuevo"),
    (4, 3, "Viernes Santo"),
    (4, 4, "Sábado Santo"),
    (5, 1, "Día del Trabajador"),
    (5, 21, "Día de las Glorias Navales"),
    (6, 29, "San Pedro y San Pablo"),
    (7, 16, "Día de la Virgen del Carmen"),
    (8, 15, "Asunción de la Virgen"),
    (9, 18, "Independencia Nacional"),
    (9, 19, "Glorias del Ejército"),
    (9, 20, "Feriado Puente Fiestas Patrias"),
    (10, 12, "Día de la Raza"),
    (10, 31, "Día de las Iglesias Evangélicas"),
    (11, 1, "Día de Todos los Santos"),
    (12, 8, "Inmaculada Concepción"),
    (12, 25, "Navidad"),
];

impl Default for CourseCalendar {
    fn default() -> Self {
        Self::chilean_2026()
    }
}

impl CourseCalendar {
    /// Calendar carrying the fixed Chilean 2026 holiday table.
    pub fn chilean_2026() -> Self {
        let mut calendar = Self::empty();
        for (month, day, name) in CHILEAN_HOLIDAYS_2026 {
            let date = NaiveDate::from_ymd_opt(2026, month, day)
                .expect("holiday table contains a valid 2026 date");
            calendar.add_holiday(date, name);
        }
        calendar
    }

    pub fn empty() -> Self {
        Self {
            holidays: BTreeMap::new(),
        }
    }

    pub fn add_holiday(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }

    /// Exact-match lookup; returns the display name for holiday dates.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// All holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.holidays.iter().map(|(date, name)| (*date, name.as_str()))
    }

    /// A date is excluded from class scheduling iff it falls on a Sunday,
    /// matches the holiday table, or appears in the custom exclusion set.
    pub fn is_excluded(&self, date: NaiveDate, custom_excluded: &HashSet<NaiveDate>) -> bool {
        date.weekday() == Weekday::Sun
            || self.is_holiday(date)
            || custom_excluded.contains(&date)
    }
}

/// Spanish weekday label, as shown on generated sessions. Localizing
/// further is a renderer concern.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn table_has_expected_entries() {
        let calendar = CourseCalendar::chilean_2026();
        assert_eq!(calendar.holidays().count(), 16);
        assert_eq!(calendar.holiday_name(d(2026, 1, 1)), Some("Año Nuevo"));
        assert_eq!(
            calendar.holiday_name(d(2026, 9, 18)),
            Some("Independencia Nacional")
        );
        assert_eq!(calendar.holiday_name(d(2026, 1, 2)), None);
    }

    #[test]
    fn exclusion_covers_sundays_holidays_and_custom_dates() {
        let calendar = CourseCalendar::chilean_2026();
        let custom = HashSet::from([d(2026, 3, 10)]);

        // 2026-01-04 is a Sunday
        assert!(calendar.is_excluded(d(2026, 1, 4), &custom));
        assert!(calendar.is_excluded(d(2026, 1, 1), &custom));
        assert!(calendar.is_excluded(d(2026, 3, 10), &custom));
        // 2026-01-05 is an ordinary Monday
        assert!(!calendar.is_excluded(d(2026, 1, 5), &custom));
    }
}
