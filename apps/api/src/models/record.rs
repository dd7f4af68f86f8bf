use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp format used in persisted records: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coarse experience tier derived from the parsed years-of-experience count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Fresher,
    Intermediate,
    Experienced,
}

impl Level {
    /// `<3` → Fresher, `3..=7` → Intermediate, `>7` → Experienced.
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=2 => Level::Fresher,
            3..=7 => Level::Intermediate,
            _ => Level::Experienced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fresher => "Fresher",
            Level::Intermediate => "Intermediate",
            Level::Experienced => "Experienced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted analysis result, tied to an uploaded document.
///
/// The record is immutable after creation; the only mutation of the store is
/// a whole-document rewrite on deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Opaque record id. Also names the stored file on disk, so the
    /// client-supplied filename never becomes a path component.
    pub id: Uuid,
    /// Best-effort candidate name guess; falls back to the original filename.
    pub name: String,
    /// Original uploaded filename, kept as metadata only.
    pub filename: String,
    /// Ordered-unique (sorted) union of lower-cased noun phrases and
    /// recognized named entities.
    pub skills: Vec<String>,
    /// Heuristically parsed years of experience; 0 if none found.
    pub experience: u32,
    pub level: Level,
    /// Capture time, fixed format `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Location of the stored uploaded file.
    pub file_path: String,
}

/// On-disk shape of the store: a single JSON object with a `users` list,
/// pretty-printed UTF-8. This is the contract other tools may read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    pub users: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundary_two_is_fresher() {
        assert_eq!(Level::from_years(2), Level::Fresher);
    }

    #[test]
    fn test_level_boundary_three_is_intermediate() {
        assert_eq!(Level::from_years(3), Level::Intermediate);
    }

    #[test]
    fn test_level_boundary_seven_is_intermediate() {
        assert_eq!(Level::from_years(7), Level::Intermediate);
    }

    #[test]
    fn test_level_boundary_eight_is_experienced() {
        assert_eq!(Level::from_years(8), Level::Experienced);
    }

    #[test]
    fn test_level_zero_is_fresher() {
        assert_eq!(Level::from_years(0), Level::Fresher);
    }

    #[test]
    fn test_level_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Level::Intermediate).unwrap(),
            r#""Intermediate""#
        );
    }

    #[test]
    fn test_empty_document_has_users_key() {
        let json = serde_json::to_string(&StoreDocument::default()).unwrap();
        assert_eq!(json, r#"{"users":[]}"#);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = Record {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            filename: "jane.pdf".to_string(),
            skills: vec!["data science".to_string(), "machine learning".to_string()],
            experience: 5,
            level: Level::Intermediate,
            timestamp: "2024-01-15 10:30:00".to_string(),
            file_path: "uploads/abc.pdf".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.name, "Jane Doe");
        assert_eq!(back.skills, record.skills);
        assert_eq!(back.experience, 5);
        assert_eq!(back.level, Level::Intermediate);
    }
}
