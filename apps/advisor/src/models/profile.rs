use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::SkillSet;

pub const DEFAULT_NAME: &str = "Student";

/// A user's self-reported profile, persisted as `{name, skills, createdAt}`.
///
/// `skills` holds the raw strings as entered. Normalization happens on every
/// read via `normalized_skills`, never in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "createdAt", alias = "created_at", with = "iso_utc")]
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// New profile stamped with the current UTC time. A blank name becomes "Student".
    pub fn new(name: &str, skills: Vec<String>) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            skills,
            created_at: Utc::now(),
        }
    }

    pub fn normalized_skills(&self) -> SkillSet {
        SkillSet::from_raw(&self.skills)
    }
}

/// ISO-8601 UTC with a trailing `Z`, e.g. `2025-01-31T09:30:00.123456Z`.
mod iso_utc {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
