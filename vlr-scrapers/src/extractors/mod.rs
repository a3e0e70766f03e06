//! One extractor per vlr.gg page family.
//!
//! Every extractor is a zero-I/O value implementing
//! [`vlr_fetch::Extractor`] (or [`vlr_fetch::PageExtractor`] for paginated
//! listings). Missing optional sections yield empty values; only a page
//! that lacks its defining header fails with an [`ExtractionError`].
//!
//! [`ExtractionError`]: vlr_core::ExtractionError

pub mod completed_match;
pub mod incoming;
pub mod player;
pub mod search;
pub mod team;
pub mod team_matches;
pub mod transactions;

pub use completed_match::CompletedMatchExtractor;
pub use incoming::IncomingMatchesExtractor;
pub use player::PlayerExtractor;
pub use search::SearchExtractor;
pub use team::TeamExtractor;
pub use team_matches::{TeamMatchesExtractor, match_cards};
pub use transactions::TeamTransactionsExtractor;
