//! Team profile models (`/team/{id}`).

use serde::{Deserialize, Serialize};

/// A social or website link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Link label or network name.
    pub name: String,
    /// Absolute URL.
    pub url: String,
}

/// An active player on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    /// Player ID.
    pub id: String,
    /// Player page URL.
    pub url: String,
    /// In-game alias.
    pub alias: String,
    /// Real name, when shown.
    pub real_name: Option<String>,
    /// Flag code (e.g. `"de"`).
    pub country_code: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Whether the player is marked as captain.
    pub is_captain: bool,
}

/// A staff member on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStaff {
    /// Staff ID.
    pub id: String,
    /// Staff page URL.
    pub url: String,
    /// Alias.
    pub alias: String,
    /// Real name, when shown.
    pub real_name: Option<String>,
    /// Flag code.
    pub country_code: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Role label (e.g. `"head coach"`).
    pub role: String,
}

/// Players and staff of a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    /// Active players.
    pub players: Vec<RosterPlayer>,
    /// Staff members.
    pub staff: Vec<RosterStaff>,
}

/// Win/loss record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLine {
    /// Wins.
    pub wins: u32,
    /// Losses.
    pub losses: u32,
}

/// Regional ranking block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRanking {
    /// Rank in region (0 when unranked).
    pub rank: u32,
    /// Region label.
    pub region: String,
    /// Rating points.
    pub rating: u32,
    /// Streak record.
    pub record: RecordLine,
}

/// A recent result listed on the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    /// Match ID.
    pub id: String,
    /// Match page URL.
    pub url: String,
    /// Opponent display name.
    pub opponent_name: String,
    /// Opponent tag.
    pub opponent_tag: String,
    /// Raw result text (e.g. `"2 : 1"`).
    pub result: String,
    /// Team score, when numeric.
    pub team_score: Option<u32>,
    /// Opponent score, when numeric.
    pub opponent_score: Option<u32>,
    /// Event name.
    pub event_name: String,
    /// Event stage.
    pub event_stage: String,
    /// Date label.
    pub date: String,
}

/// An event placement listed on the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPlacement {
    /// Event page URL.
    pub url: String,
    /// Event name.
    pub event_name: String,
    /// Placement label.
    pub placement: String,
    /// Prize money, if any.
    pub winnings: Option<String>,
    /// Year of the event (0 when unknown).
    pub year: i32,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Article URL.
    pub url: String,
    /// Headline.
    pub title: String,
    /// Date label.
    pub date: String,
}

/// Full team profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID.
    pub id: String,
    /// Team page URL.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Short tag.
    pub tag: String,
    /// Logo URL.
    pub logo_url: String,
    /// Country label.
    pub country: String,
    /// Flag code.
    pub country_code: String,
    /// Website, if any.
    pub website: Option<String>,
    /// Social links.
    pub socials: Vec<Social>,
    /// Total winnings label (`"N/A"` when absent).
    pub total_winnings: String,
    /// Ranking block.
    pub ranking: TeamRanking,
    /// Roster.
    pub roster: TeamRoster,
    /// Recent results.
    pub recent_results: Vec<RecentMatch>,
    /// Event placements.
    pub event_placements: Vec<EventPlacement>,
    /// Related news.
    pub related_news: Vec<NewsArticle>,
}
