// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # VLR Scrapers
//!
//! Page extractors for vlr.gg and the [`VlrClient`] facade that runs them
//! through the fetch pipeline.
//!
//! ## Supported Pages
//!
//! | Page | Extractor | Client method | Paginated |
//! |------|-----------|---------------|-----------|
//! | `/team/{id}` | [`TeamExtractor`] | `get_team` | no |
//! | `/player/{id}` | [`PlayerExtractor`] | `get_player` | no |
//! | `/{id}` | [`CompletedMatchExtractor`] | `get_completed_match` | no |
//! | `/matches` | [`IncomingMatchesExtractor`] | `list_incoming_matches` | no |
//! | `/team/matches/{id}` | [`TeamMatchesExtractor`] | `get_team_matches` | yes |
//! | `/search` | [`SearchExtractor`] | `search` | no |
//! | `/team/transactions/{id}` | [`TeamTransactionsExtractor`] | `get_team_transactions` | no |
//!
//! ## Usage
//!
//! ```ignore
//! use vlr_scrapers::VlrClient;
//!
//! let client = VlrClient::new()?;
//! let team = client.get_team("2", true).await?;
//! println!("{} ({})", team.data.name, team.data.tag);
//! println!("success rate: {:.2}", team.info.success_rate);
//! ```

pub mod client;
pub mod extractors;
pub mod html;
pub mod urls;

pub use client::{VlrClient, VlrClientBuilder};
pub use extractors::{
    CompletedMatchExtractor, IncomingMatchesExtractor, PlayerExtractor, SearchExtractor,
    TeamExtractor, TeamMatchesExtractor, TeamTransactionsExtractor,
};
pub use urls::BASE_URL;
