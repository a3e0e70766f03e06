//! Domain models for the vlr.gg scraper.
//!
//! One submodule per page family, plus the envelope every client call
//! returns.
//!
//! ## Submodules
//!
//! - [`envelope`] - Envelope, call info and metrics snapshot
//! - [`team`] - Team profile
//! - [`player`] - Player profile
//! - [`team_match`] - Match history cards (team and player pages)
//! - [`completed_match`] - Finished match page
//! - [`incoming_match`] - Upcoming / live listing
//! - [`search`] - Search hits
//! - [`transaction`] - Roster transactions

pub mod completed_match;
pub mod envelope;
pub mod incoming_match;
pub mod player;
pub mod search;
pub mod team;
pub mod team_match;
pub mod transaction;

pub use completed_match::{
    AgentIcon, CompletedMatch, CompletedMatchMap, EventInfo, HeadToHead, MatchLink, MatchTeam,
    PastMatch, PlayerMapStats, Round, RoundOutcome, RoundSide, SideStats, StatValue,
};
pub use envelope::{CallInfo, Envelope, MetricsReport};
pub use incoming_match::{IncomingEvent, IncomingMatch, IncomingStatus, IncomingTeam};
pub use player::{
    AgentStatTimespan, Player, PlayerAgentStats, PlayerAgentStatsBlock, PlayerCountry,
    PlayerEventPlacement, PlayerNews, PlayerTeam,
};
pub use search::{SearchCategory, SearchKind, SearchResult};
pub use team::{
    EventPlacement, NewsArticle, RecentMatch, RecordLine, RosterPlayer, RosterStaff, Social, Team,
    TeamRanking, TeamRoster,
};
pub use team_match::{
    AgentPick, MatchOutcome, ScoreLine, TeamComposition, TeamMatch, TeamMatchEvent, TeamMatchGame,
    TeamMatchOpponent, TeamMatchStatus, TeamMatchesPage,
};
pub use transaction::{TeamTransaction, TransactionAction, TransactionPlayer};
