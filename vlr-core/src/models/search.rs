//! Search models (`/search`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category filter of a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    /// Every kind of result.
    #[default]
    All,
    /// Teams only.
    Teams,
    /// Players only.
    Players,
    /// Events only.
    Events,
    /// Series only.
    Series,
}

impl SearchCategory {
    /// Query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Teams => "teams",
            Self::Players => "players",
            Self::Events => "events",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "teams" => Ok(Self::Teams),
            "players" => Ok(Self::Players),
            "events" => Ok(Self::Events),
            "series" => Ok(Self::Series),
            other => Err(CoreError::InvalidValue(format!(
                "unknown search category: {other}"
            ))),
        }
    }
}

/// Kind of entity a search result points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// A team.
    Team,
    /// A player.
    Player,
    /// An event.
    Event,
    /// A series.
    Series,
}

impl SearchKind {
    /// Parses the first path segment of a result href.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "team" => Some(Self::Team),
            "player" => Some(Self::Player),
            "event" => Some(Self::Event),
            "series" => Some(Self::Series),
            _ => None,
        }
    }
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Entity ID.
    pub id: String,
    /// Absolute entity URL.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Secondary line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entity kind.
    #[serde(rename = "type")]
    pub kind: SearchKind,
}
