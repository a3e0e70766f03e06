// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # VLR Core
//!
//! Core types and models shared by every crate of the vlr.gg scraper.
//!
//! This crate has no I/O. It provides:
//!
//! - Domain models produced by the page extractors
//! - The retrieval envelope returned by every client call
//! - Error types for extraction failures
//!
//! ## Key Types
//!
//! ### Envelope
//! - [`Envelope`] - Result wrapper carrying [`CallInfo`]
//! - [`MetricsReport`] - Snapshot of the cumulative call metrics
//!
//! ### Entities
//! - [`Team`], [`Player`] - Profile pages
//! - [`CompletedMatch`], [`IncomingMatch`], [`TeamMatch`] - Match data
//! - [`SearchResult`] - Search hits
//! - [`TeamTransaction`] - Roster moves

pub mod error;
pub mod models;

// Re-export error types
pub use error::{CoreError, ExtractionError};

// Re-export all model types
pub use models::{
    // Envelope
    CallInfo,
    Envelope,
    MetricsReport,
    // Teams
    EventPlacement,
    NewsArticle,
    RecentMatch,
    RecordLine,
    RosterPlayer,
    RosterStaff,
    Social,
    Team,
    TeamRanking,
    TeamRoster,
    // Players
    AgentStatTimespan,
    Player,
    PlayerAgentStats,
    PlayerAgentStatsBlock,
    PlayerCountry,
    PlayerEventPlacement,
    PlayerNews,
    PlayerTeam,
    // Completed matches
    AgentIcon,
    CompletedMatch,
    CompletedMatchMap,
    EventInfo,
    HeadToHead,
    MatchLink,
    MatchTeam,
    PastMatch,
    PlayerMapStats,
    Round,
    RoundOutcome,
    RoundSide,
    SideStats,
    StatValue,
    // Incoming matches
    IncomingEvent,
    IncomingMatch,
    IncomingStatus,
    IncomingTeam,
    // Team matches
    AgentPick,
    MatchOutcome,
    ScoreLine,
    TeamMatch,
    TeamMatchEvent,
    TeamMatchGame,
    TeamMatchOpponent,
    TeamMatchStatus,
    TeamMatchesPage,
    TeamComposition,
    // Search
    SearchCategory,
    SearchKind,
    SearchResult,
    // Transactions
    TeamTransaction,
    TransactionAction,
    TransactionPlayer,
};
