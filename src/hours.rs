//! Hour-accounting conversion.
//!
//! A course's nominal (chronological) per-session duration is converted to
//! "accounted" hours by a fixed multiplier keyed on [`HourType`]:
//! chronological ×1, pedagogical ×60/45, DGAI ×60/35. Unrecognized labels
//! fall back to [`HourType::Chronological`] (×1, no error), matching the
//! original behavior, so the enum carries manual serde impls over
//! `as_str`/`from_label`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a course measures its hours; selects the conversion multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourType {
    /// Clock hours, ×1.
    Chronological,
    /// Pedagogical hours of 45 minutes, ×60/45.
    Pedagogical,
    /// DGAI hours of 35 minutes, ×60/35.
    Dgai,
}

impl HourType {
    /// Conversion factor from chronological hours to accounted hours.
    pub fn multiplier(self) -> f64 {
        match self {
            HourType::Chronological => 1.0,
            HourType::Pedagogical => 60.0 / 45.0,
            HourType::Dgai => 60.0 / 35.0,
        }
    }

    /// Lowercase snapshot label.
    pub fn as_str(self) -> &'static str {
        match self {
            HourType::Chronological => "chronological",
            HourType::Pedagogical => "pedagogical",
            HourType::Dgai => "dgai",
        }
    }

    /// Parse a label; anything unrecognized maps to `Chronological` (×1,
    /// no error), as the original conversion table does.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "pedagogical" => HourType::Pedagogical,
            "dgai" => HourType::Dgai,
            _ => HourType::Chronological,
        }
    }
}

impl Default for HourType {
    fn default() -> Self {
        HourType::Chronological
    }
}

impl Serialize for HourType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HourType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(HourType::from_label(&label))
    }
}

/// Accounted hours for a chronological duration under the given hour type.
/// Pure and total.
pub fn effective_hours(chronological: f64, hour_type: HourType) -> f64 {
    chronological * hour_type.multiplier()
}
