//! Upcoming / live match listing models (`/matches`).

use serde::{Deserialize, Serialize};

/// Banner status of a listed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomingStatus {
    /// Currently being played.
    #[serde(rename = "LIVE")]
    Live,
    /// Scheduled.
    #[serde(rename = "Upcoming")]
    Upcoming,
}

impl IncomingStatus {
    /// Parses the banner text; anything but `LIVE` counts as upcoming.
    pub fn from_banner(text: &str) -> Self {
        if text.trim() == "LIVE" {
            Self::Live
        } else {
            Self::Upcoming
        }
    }
}

/// A contestant in a listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingTeam {
    /// Team name (`"TBD"` when not decided yet).
    pub name: String,
    /// Flag code, `"un"` when unknown.
    pub country_code: String,
    /// Score, only present while live.
    pub score: Option<u32>,
}

/// Event badge of a listing row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingEvent {
    /// Tournament name.
    pub name: String,
    /// Stage label.
    pub stage: String,
    /// Small icon URL.
    pub icon_url: String,
}

/// One card from the upcoming / live list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMatch {
    /// Match ID.
    pub id: String,
    /// Relative match href, kept as-is.
    pub url: String,
    /// Date label of the day group.
    pub date: String,
    /// Start time label.
    pub time: String,
    /// Live or upcoming.
    pub status: IncomingStatus,
    /// Time until start, absent when live.
    pub eta: Option<String>,
    /// Contestants in page order.
    pub teams: Vec<IncomingTeam>,
    /// Event badge.
    pub event: IncomingEvent,
    /// Stats availability badge.
    pub stats_status: String,
    /// VODs availability badge.
    pub vods_status: String,
}
