//! Team match history models (`/team/matches/{id}`).
//!
//! The same match card format is embedded in player pages, so
//! [`TeamMatch`] is shared by both extractors.

use serde::{Deserialize, Serialize};

/// Outcome of a match or a single map, from the listed team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Listed team won.
    Win,
    /// Listed team lost.
    Loss,
    /// Neither (unplayed or tied).
    Draw,
}

/// Whether the match card points at a scheduled or finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMatchStatus {
    /// Not played yet.
    Upcoming,
    /// Finished.
    Completed,
}

/// Scores for both sides plus the derived outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    /// Listed team's score.
    pub own: u32,
    /// Opponent's score.
    pub opponent: u32,
    /// Derived outcome.
    pub status: MatchOutcome,
}

/// An agent picked in one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPick {
    /// Agent name (derived from the icon file name).
    pub name: String,
    /// Icon URL.
    pub image_url: String,
}

/// Agent compositions of both teams for one map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamComposition {
    /// Listed team's agents.
    pub own: Vec<AgentPick>,
    /// Opponent's agents.
    pub opponent: Vec<AgentPick>,
}

/// One map of a listed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchGame {
    /// Map name.
    pub map: String,
    /// Map stats URL.
    pub url: String,
    /// Map score.
    pub result: ScoreLine,
    /// Agent compositions.
    pub agent_compositions: TeamComposition,
}

/// Event badge of a listed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchEvent {
    /// Event name.
    pub name: String,
    /// Stage label.
    pub stage: String,
    /// Event icon URL.
    pub icon_url: Option<String>,
}

/// Opponent of a listed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchOpponent {
    /// Opponent name.
    pub name: String,
    /// Opponent tag.
    pub tag: String,
    /// Opponent logo URL.
    pub logo_url: Option<String>,
}

/// A match from a team's (or player's) match history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    /// Match ID.
    pub id: String,
    /// Match page URL.
    pub url: String,
    /// Event badge.
    pub event: TeamMatchEvent,
    /// Opponent.
    pub opponent: TeamMatchOpponent,
    /// Series score.
    pub result: ScoreLine,
    /// VOD labels.
    pub vods: Vec<String>,
    /// Date label.
    pub date: String,
    /// Per-map details.
    pub games: Vec<TeamMatchGame>,
    /// Scheduled or finished.
    pub status: TeamMatchStatus,
}

/// One page of a paginated match history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchesPage {
    /// Matches on this page.
    pub matches: Vec<TeamMatch>,
    /// Whether the pagination control reports a further page.
    pub has_next_page: bool,
}
