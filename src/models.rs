use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the six fixed mood categories, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Static display metadata for a mood category.
pub struct MoodConfig {
    pub score: u8,
    pub label: &'static str,
    pub icon: &'static str,
    pub hex: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 6] = [Mood::A, Mood::B, Mood::C, Mood::D, Mood::E, Mood::F];

    pub fn config(self) -> &'static MoodConfig {
        match self {
            Mood::A => &MoodConfig { score: 5, label: "Incrível", icon: "😄", hex: "#10b981" },
            Mood::B => &MoodConfig { score: 4, label: "Bom", icon: "🙂", hex: "#2dd4bf" },
            Mood::C => &MoodConfig { score: 3, label: "Normal", icon: "😐", hex: "#60a5fa" },
            Mood::D => &MoodConfig { score: 2, label: "Cansado", icon: "😴", hex: "#818cf8" },
            Mood::E => &MoodConfig { score: 1, label: "Mal", icon: "😫", hex: "#fb7185" },
            Mood::F => &MoodConfig { score: 0, label: "Terrível", icon: "💀", hex: "#94a3b8" },
        }
    }

    pub fn score(self) -> u8 {
        self.config().score
    }

    pub fn code(self) -> &'static str {
        match self {
            Mood::A => "A",
            Mood::B => "B",
            Mood::C => "C",
            Mood::D => "D",
            Mood::E => "E",
            Mood::F => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Mood> {
        match code {
            "A" => Some(Mood::A),
            "B" => Some(Mood::B),
            "C" => Some(Mood::C),
            "D" => Some(Mood::D),
            "E" => Some(Mood::E),
            "F" => Some(Mood::F),
            _ => None,
        }
    }
}

/// Tags offered by the entry form. Users may only pick from this vocabulary.
pub const DEFAULT_TAGS: [&str; 7] =
    ["Trabalho", "Família", "Treino", "Estudos", "Lazer", "Sono", "Saúde"];

/// One logged day. Saving a day again replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: String,
}

/// Date-keyed entry map, one record per `YYYY-MM-DD` key.
pub type Entries = BTreeMap<String, MoodRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub birth_date: String,
    pub user_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            birth_date: "1990-01-01".to_string(),
            user_name: "Viajante".to_string(),
        }
    }
}

/// The whole in-memory state; also the backup export document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    pub entries: Entries,
    pub settings: Settings,
}

/// Backup import payload; either key may be absent for a partial restore.
#[derive(Debug, Deserialize)]
pub struct BackupImport {
    pub entries: Option<Entries>,
    pub settings: Option<Settings>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub mood: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MonthStats {
    pub count: usize,
    pub average: f64,
    pub grade: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub day: u32,
    pub score: u8,
    pub logged: bool,
}

#[derive(Debug, Serialize)]
pub struct LifeWeeks {
    pub lived: u64,
    pub total: u64,
    pub percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: String,
    pub today: Option<MoodRecord>,
    pub streak: u32,
    pub month: MonthStats,
    pub trend: Vec<TrendPoint>,
    pub quote: crate::quotes::Quote,
    pub life: LifeWeeks,
}

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub entries_replaced: bool,
    pub settings_replaced: bool,
}

/// Drops blank tags and duplicates, keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !kept.iter().any(|seen| seen == tag) {
            kept.push(tag.to_string());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_serializes_as_letter_code() {
        let json = serde_json::to_string(&Mood::A).unwrap();
        assert_eq!(json, "\"A\"");
        let back: Mood = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(back, Mood::F);
    }

    #[test]
    fn mood_from_code_rejects_unknown() {
        assert_eq!(Mood::from_code("C"), Some(Mood::C));
        assert_eq!(Mood::from_code("G"), None);
        assert_eq!(Mood::from_code(""), None);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = MoodRecord {
            mood: Mood::B,
            note: "caminhada no parque".to_string(),
            tags: vec!["Treino".to_string(), "Lazer".to_string()],
            timestamp: "2024-03-10T21:15:00-03:00".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: MoodRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_without_note_or_tags_still_parses() {
        let back: MoodRecord =
            serde_json::from_str(r#"{"mood":"C","timestamp":"2024-03-10T08:00:00Z"}"#).unwrap();
        assert_eq!(back.mood, Mood::C);
        assert!(back.note.is_empty());
        assert!(back.tags.is_empty());
    }

    #[test]
    fn settings_defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.birth_date, "1990-01-01");
        assert_eq!(settings.user_name, "Viajante");
    }

    #[test]
    fn normalize_tags_dedupes_and_trims() {
        let tags = vec![
            "Treino".to_string(),
            " Treino ".to_string(),
            "".to_string(),
            "Sono".to_string(),
        ];
        assert_eq!(normalize_tags(tags), vec!["Treino", "Sono"]);
    }
}
