//! Player profile models (`/player/{id}`).

use serde::{Deserialize, Serialize};

use super::team::Social;
use super::team_match::TeamMatch;

/// Time window of the agent statistics table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentStatTimespan {
    /// Last 30 days.
    #[serde(rename = "30d")]
    D30,
    /// Last 60 days (site default).
    #[default]
    #[serde(rename = "60d")]
    D60,
    /// Last 90 days.
    #[serde(rename = "90d")]
    D90,
    /// All time.
    #[serde(rename = "all")]
    All,
}

impl AgentStatTimespan {
    /// Parses the active filter label, falling back to the default window.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "30d" => Self::D30,
            "90d" => Self::D90,
            "all" => Self::All,
            _ => Self::D60,
        }
    }

    /// Label as shown on the site.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D30 => "30d",
            Self::D60 => "60d",
            Self::D90 => "90d",
            Self::All => "all",
        }
    }
}

/// Aggregated stats for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAgentStats {
    /// Agent name.
    pub name: String,
    /// Agent icon URL.
    pub image_url: String,
    /// Usage label (e.g. `"(12) 40%"`).
    #[serde(rename = "use")]
    pub usage: String,
    /// Rounds played.
    pub rounds: Option<u32>,
    /// Rating.
    pub rating: Option<f64>,
    /// Average combat score.
    pub acs: Option<f64>,
    /// Kill/death ratio.
    pub kd: Option<f64>,
    /// Average damage per round.
    pub adr: Option<f64>,
    /// KAST percentage.
    pub kast: Option<f64>,
    /// Kills per round.
    pub kpr: Option<f64>,
    /// Assists per round.
    pub apr: Option<f64>,
    /// First kills per round.
    pub fkpr: Option<f64>,
    /// First deaths per round.
    pub fdpr: Option<f64>,
    /// Kills.
    pub kills: Option<u32>,
    /// Deaths.
    pub deaths: Option<u32>,
    /// Assists.
    pub assists: Option<u32>,
    /// First kills.
    pub first_kills: Option<u32>,
    /// First deaths.
    pub first_deaths: Option<u32>,
}

/// Agent stats table with its time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAgentStatsBlock {
    /// Active time window.
    pub timespan: AgentStatTimespan,
    /// One row per agent.
    pub stats: Vec<PlayerAgentStats>,
}

/// A current or past team of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeam {
    /// Team ID.
    pub id: String,
    /// Team page URL.
    pub url: String,
    /// Team name.
    pub name: String,
    /// Logo URL.
    pub logo_url: String,
    /// Tenure label.
    pub date_range: String,
    /// True for past teams.
    pub is_past: bool,
}

/// An event placement of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEventPlacement {
    /// Event name.
    pub event_name: String,
    /// Event page URL.
    pub event_url: String,
    /// Placement label.
    pub placement: String,
    /// Team the player represented.
    pub team: String,
    /// Prize money, if any.
    pub winnings: Option<String>,
    /// Year (0 when unknown).
    pub year: i32,
}

/// A news article linked from a player page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNews {
    /// Headline.
    pub title: String,
    /// Article URL.
    pub url: String,
    /// Date label.
    pub date: String,
}

/// Country shown in the player header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCountry {
    /// Country name.
    pub name: String,
    /// Flag code.
    pub code: String,
}

/// Full player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player ID.
    pub id: String,
    /// Player page URL.
    pub url: String,
    /// In-game alias.
    pub alias: String,
    /// Real name.
    pub real_name: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Country.
    pub country: PlayerCountry,
    /// Social links.
    pub socials: Vec<Social>,
    /// Total winnings label.
    pub total_winnings: String,
    /// Agent statistics.
    pub agent_stats: PlayerAgentStatsBlock,
    /// Recent matches.
    pub recent_matches: Vec<TeamMatch>,
    /// Current and past teams.
    pub teams: Vec<PlayerTeam>,
    /// Event placements.
    pub event_placements: Vec<PlayerEventPlacement>,
    /// Latest news.
    pub news: Vec<PlayerNews>,
}
