use serde::{Deserialize, Serialize};
use std::fmt;

use crate::relative_date::RelativeDate;
use crate::util::parse_duration_minutes;

/// Coarse three-level classification of session effort.
///
/// Labels that are not one of the three levels are kept verbatim in
/// `Unrecognized` so the badge can still show them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    Light,
    Moderate,
    High,
    Unrecognized(String),
}

impl Intensity {
    /// Parse a display label. Accepts the Indonesian labels used by the
    /// session data as well as English names, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "ringan" | "light" => Intensity::Light,
            "sedang" | "moderate" => Intensity::Moderate,
            "tinggi" | "high" => Intensity::High,
            _ => Intensity::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Intensity::Light => "Ringan",
            Intensity::Moderate => "Sedang",
            Intensity::High => "Tinggi",
            Intensity::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Intensity {
    fn from(label: String) -> Self {
        Intensity::from_label(&label)
    }
}

impl From<Intensity> for String {
    fn from(intensity: Intensity) -> Self {
        intensity.label().to_string()
    }
}

/// Display glyph for a session. Opaque to everything except the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityIcon {
    Run,
    Yoga,
    Cycling,
    Strength,
    Swim,
    Walk,
    #[default]
    Generic,
}

impl ActivityIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ActivityIcon::Run => "🏃",
            ActivityIcon::Yoga => "🧘",
            ActivityIcon::Cycling => "🚴",
            ActivityIcon::Strength => "💪",
            ActivityIcon::Swim => "🏊",
            ActivityIcon::Walk => "🚶",
            ActivityIcon::Generic => "•",
        }
    }
}

/// One recorded exercise occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_label: String,
    pub date_label: String,
    pub calories_burned: u32,
    pub heart_rate_avg_bpm: u16,
    pub oxygen_avg_percent: u8,
    pub intensity: Intensity,
    #[serde(default)]
    pub icon: ActivityIcon,
}

impl ExerciseSession {
    /// Minutes derived from the duration label; 0 when the label is not parseable
    pub fn duration_minutes(&self) -> u32 {
        parse_duration_minutes(&self.duration_label)
    }

    pub fn relative_date(&self) -> Option<RelativeDate> {
        RelativeDate::parse(&self.date_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(duration: &str, date: &str) -> ExerciseSession {
        ExerciseSession {
            id: 1,
            kind: "Lari Pagi".to_string(),
            duration_label: duration.to_string(),
            date_label: date.to_string(),
            calories_burned: 320,
            heart_rate_avg_bpm: 145,
            oxygen_avg_percent: 96,
            intensity: Intensity::Moderate,
            icon: ActivityIcon::Run,
        }
    }

    #[test]
    fn test_intensity_from_source_labels() {
        assert_eq!(Intensity::from_label("Ringan"), Intensity::Light);
        assert_eq!(Intensity::from_label("Sedang"), Intensity::Moderate);
        assert_eq!(Intensity::from_label("Tinggi"), Intensity::High);
    }

    #[test]
    fn test_intensity_from_english_labels_any_case() {
        assert_eq!(Intensity::from_label("light"), Intensity::Light);
        assert_eq!(Intensity::from_label(" MODERATE "), Intensity::Moderate);
        assert_eq!(Intensity::from_label("High"), Intensity::High);
    }

    #[test]
    fn test_intensity_unrecognized_keeps_label() {
        let intensity = Intensity::from_label("Ekstrem");
        assert_eq!(intensity, Intensity::Unrecognized("Ekstrem".to_string()));
        assert_eq!(intensity.to_string(), "Ekstrem");
    }

    #[test]
    fn test_intensity_serializes_as_label() {
        let json = serde_json::to_string(&Intensity::High).unwrap();
        assert_eq!(json, "\"Tinggi\"");
        let back: Intensity = serde_json::from_str("\"Ringan\"").unwrap();
        assert_eq!(back, Intensity::Light);
    }

    #[test]
    fn test_session_json_uses_type_key() {
        let json = serde_json::to_value(session("45 menit", "Hari ini, 06:30")).unwrap();
        assert_eq!(json["type"], "Lari Pagi");
        assert_eq!(json["icon"], "run");
        assert_eq!(json["intensity"], "Sedang");
    }

    #[test]
    fn test_session_missing_icon_defaults_to_generic() {
        let json = r#"{
            "id": 9,
            "type": "Senam",
            "duration_label": "15 menit",
            "date_label": "Kemarin",
            "calories_burned": 90,
            "heart_rate_avg_bpm": 100,
            "oxygen_avg_percent": 97,
            "intensity": "Ringan"
        }"#;
        let parsed: ExerciseSession = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.icon, ActivityIcon::Generic);
        assert_eq!(parsed.intensity, Intensity::Light);
    }

    #[test]
    fn test_session_duration_minutes() {
        assert_eq!(session("45 menit", "Hari ini").duration_minutes(), 45);
        assert_eq!(session("N/A", "Hari ini").duration_minutes(), 0);
    }

    #[test]
    fn test_session_relative_date() {
        let parsed = session("45 menit", "2 hari lalu, 16:00").relative_date().unwrap();
        assert_eq!(parsed.days_ago, 2);
        assert!(session("45 menit", "someday").relative_date().is_none());
    }
}
