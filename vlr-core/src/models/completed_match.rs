//! Completed match models (`/{match_id}`).
//!
//! Team-oriented fields are normalized so that `team1` is always the series
//! winner; per-map data is swapped accordingly.

use serde::{Deserialize, Serialize};

/// Header info for one side of the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    /// Team name.
    pub name: String,
    /// Logo URL.
    pub logo_url: String,
    /// Team page URL.
    pub link: String,
    /// Elo shown next to the name, brackets stripped.
    pub elo: String,
    /// Maps won in the series.
    pub score: Option<u32>,
}

/// A per-side stat cell: overall, attack and defense halves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    /// Both sides.
    pub all: String,
    /// Attack side.
    pub attack: String,
    /// Defense side.
    pub defense: String,
}

/// An agent icon with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIcon {
    /// Icon URL.
    pub icon_url: String,
    /// Agent name.
    pub name: String,
}

/// One player's stat line for one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMapStats {
    /// Player name.
    pub name: String,
    /// Player page URL.
    pub link: String,
    /// Agents played.
    pub agents: Vec<AgentIcon>,
    /// Rating.
    pub rating: StatValue,
    /// Average combat score.
    pub acs: StatValue,
    /// Kills.
    pub k: StatValue,
    /// Deaths.
    pub d: StatValue,
    /// Assists.
    pub a: StatValue,
    /// Kill-death difference.
    pub kd_diff: StatValue,
    /// KAST.
    pub kast: StatValue,
    /// Average damage per round.
    pub adr: StatValue,
    /// Headshot percentage.
    pub hs_percent: StatValue,
    /// First kills.
    pub fk: StatValue,
    /// First deaths.
    pub fd: StatValue,
    /// First kill difference.
    pub fk_diff: StatValue,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Spike defused.
    Defuse,
    /// Team eliminated.
    Elim,
    /// Spike detonated.
    Boom,
    /// Time ran out.
    Time,
    /// Unrecognized icon.
    Unknown,
}

impl RoundOutcome {
    /// Maps the outcome icon name (e.g. `"elim"`) to an outcome.
    pub fn from_icon_name(name: &str) -> Self {
        match name {
            "defuse" => Self::Defuse,
            "elim" => Self::Elim,
            "boom" => Self::Boom,
            "time" => Self::Time,
            _ => Self::Unknown,
        }
    }
}

/// Side that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundSide {
    /// Attackers.
    T,
    /// Defenders.
    Ct,
}

/// One round of a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Round number (1-based).
    pub round_num: u32,
    /// Side of the round winner.
    pub winning_team_side: RoundSide,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Outcome icon URL.
    pub outcome_icon_url: String,
}

/// Rounds won per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    /// Attack rounds won.
    pub attack: Option<u32>,
    /// Defense rounds won.
    pub defense: Option<u32>,
}

/// One played map of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMatchMap {
    /// Map name.
    pub name: String,
    /// Duration label (e.g. `"54:47"`).
    pub duration: String,
    /// Rounds won by team 1.
    pub team1_score: Option<u32>,
    /// Rounds won by team 2.
    pub team2_score: Option<u32>,
    /// Team 1 side split.
    pub team1_side_stats: SideStats,
    /// Team 2 side split.
    pub team2_side_stats: SideStats,
    /// Round timeline.
    pub rounds: Vec<Round>,
    /// Team 1 player lines.
    pub team1_stats: Vec<PlayerMapStats>,
    /// Team 2 player lines.
    pub team2_stats: Vec<PlayerMapStats>,
}

impl CompletedMatchMap {
    /// Swaps every team-oriented field.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            name: self.name,
            duration: self.duration,
            team1_score: self.team2_score,
            team2_score: self.team1_score,
            team1_side_stats: self.team2_side_stats,
            team2_side_stats: self.team1_side_stats,
            rounds: self.rounds,
            team1_stats: self.team2_stats,
            team2_stats: self.team1_stats,
        }
    }
}

/// Event header of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    /// Event name.
    pub name: String,
    /// Series / stage label.
    pub series: String,
    /// Event page URL.
    pub link: String,
    /// Event image URL.
    pub image_url: String,
}

/// A past encounter between the two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    /// Score (e.g. `"2-1"`).
    pub result: String,
    /// Match page URL.
    pub link: String,
    /// Date label.
    pub date: String,
    /// True when team 1 of the header won.
    pub win: bool,
}

/// A recent match of one of the teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastMatch {
    /// Opponent name.
    pub opponent_name: String,
    /// Opponent logo URL.
    pub opponent_logo_url: String,
    /// Score (e.g. `"1-2"`).
    pub result: String,
    /// Match page URL.
    pub link: String,
    /// Date label.
    pub date: String,
    /// True when the team won.
    pub win: bool,
}

/// A named external link (stream or VOD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLink {
    /// Label.
    pub name: String,
    /// URL.
    pub link: String,
}

/// A finished match with full per-map statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMatch {
    /// Match ID.
    pub id: String,
    /// Event header.
    pub event: EventInfo,
    /// Date label.
    pub date: String,
    /// Time label.
    pub time: String,
    /// UTC timestamp as provided by the page.
    pub utc_timestamp: String,
    /// Game patch label.
    pub patch: String,
    /// Series winner.
    pub team1: MatchTeam,
    /// Series loser.
    pub team2: MatchTeam,
    /// Status banner (always `"final"` case-insensitively).
    pub status: String,
    /// Best-of label.
    pub best_of: String,
    /// Streams.
    pub streams: Vec<MatchLink>,
    /// VODs.
    pub vods: Vec<MatchLink>,
    /// Played maps.
    pub maps: Vec<CompletedMatchMap>,
    /// Head-to-head history.
    pub head2head: Vec<HeadToHead>,
    /// Past matches of the left header team.
    pub past_matches_team1: Vec<PastMatch>,
    /// Past matches of the right header team.
    pub past_matches_team2: Vec<PastMatch>,
}
