//! Roster transaction models (`/team/transactions/{id}`).

use serde::{Deserialize, Serialize};

/// What happened to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    /// Joined the team.
    #[default]
    Join,
    /// Left the team.
    Leave,
    /// Benched / inactive.
    Inactive,
}

/// Player referenced by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPlayer {
    /// Player ID.
    pub id: String,
    /// Player page URL.
    pub url: String,
    /// Alias.
    pub alias: String,
    /// Real name.
    pub real_name: String,
    /// Flag code.
    pub country_code: String,
}

/// One row of a team's transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTransaction {
    /// Date label.
    pub date: String,
    /// Action.
    pub action: TransactionAction,
    /// Player.
    pub player: TransactionPlayer,
    /// Position / role.
    pub position: String,
    /// Source link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}
