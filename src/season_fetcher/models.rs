use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A competitive season as returned by the seasons API.
///
/// Top-level seasons ("episodes") have no parent; the playable sub-periods
/// ("acts") carry the uuid of their episode in `parent_uuid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub uuid: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub season_type: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end_time: DateTime<Utc>,
    #[serde(rename = "parentUuid", default)]
    pub parent_uuid: Option<String>,
}

impl Season {
    /// True for act-level seasons, which are the only ones that can be
    /// "current". Episode umbrellas have no parent.
    pub fn is_act(&self) -> bool {
        self.parent_uuid.is_some()
    }

    /// Strict date-range containment check against a single instant.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_time < instant && instant < self.end_time
    }
}

/// Response for `GET /v1/seasons`
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonListResponse {
    pub data: Vec<Season>,
}

/// Response for `GET /v1/seasons/{uuid}`
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonResponse {
    pub data: Season,
}
