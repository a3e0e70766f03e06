//! Team roster transaction extractor (`/team/transactions/{id}`).

use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{ExtractionError, TeamTransaction, TransactionAction, TransactionPlayer};
use vlr_fetch::Extractor;

use crate::html::{attr, find, find_all, has_class, mod_class, path_segment, select_all, text, text_at};
use crate::urls::normalize;

/// Extracts the transaction log of a team.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamTransactionsExtractor;

impl Extractor for TeamTransactionsExtractor {
    type Output = Vec<TeamTransaction>;

    fn name(&self) -> &str {
        "team_transactions"
    }

    fn extract(&self, document: &Html) -> Result<Vec<TeamTransaction>, ExtractionError> {
        let transactions = select_all(document, "table.wf-faux-table tbody tr.txn-item")?
            .into_iter()
            .map(transaction)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = transactions.len(), "Extracted transactions");
        Ok(transactions)
    }
}

fn action(row: ElementRef<'_>) -> Result<TransactionAction, ExtractionError> {
    Ok(match find(row, ".txn-item-action")? {
        Some(el) if has_class(el, "mod-leave") => TransactionAction::Leave,
        Some(el) if has_class(el, "mod-inactive") => TransactionAction::Inactive,
        _ => TransactionAction::Join,
    })
}

fn transaction(row: ElementRef<'_>) -> Result<TeamTransaction, ExtractionError> {
    let cells = find_all(row, "td")?;
    let cell = |i: usize| cells.get(i).copied();

    let country_code = match cell(2) {
        Some(td) => find(td, "i.flag")?.and_then(mod_class).unwrap_or_default(),
        None => String::new(),
    };

    let player = match cell(3) {
        Some(td) => {
            let link = find(td, "a")?;
            let href = link.and_then(|a| attr(a, "href")).unwrap_or_default();
            TransactionPlayer {
                id: path_segment(&href, 2),
                url: normalize(&href),
                alias: link.map(text).unwrap_or_default(),
                real_name: text_at(td, ".ge-text-light")?,
                country_code,
            }
        }
        None => TransactionPlayer {
            id: String::new(),
            url: String::new(),
            alias: String::new(),
            real_name: String::new(),
            country_code,
        },
    };

    let reference_url = match cell(5) {
        Some(td) => find(td, "a")?
            .and_then(|a| attr(a, "href"))
            .filter(|href| !href.is_empty())
            .map(|href| normalize(&href)),
        None => None,
    };

    Ok(TeamTransaction {
        date: cell(0).map(text).unwrap_or_default(),
        action: action(row)?,
        player,
        position: cell(4).map(text).unwrap_or_default(),
        reference_url,
    })
}
