//! Upcoming and live match listing extractor (`/matches`).

use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{ExtractionError, IncomingEvent, IncomingMatch, IncomingStatus, IncomingTeam};
use vlr_fetch::Extractor;

use crate::html::{
    attr, attr_at, find, find_all, first_text_node, has_class, last_text_node, leading_u32,
    mod_class, path_segment, select_all, text_at,
};

/// Name shown for a slot whose team is not decided yet.
pub const TBD_TEAM: &str = "TBD";

/// Country code used when a team has no flag.
pub const UNKNOWN_COUNTRY: &str = "un";

/// Extracts the date-grouped match cards of the `/matches` listing.
///
/// Card URLs are kept relative, exactly as linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomingMatchesExtractor;

impl Extractor for IncomingMatchesExtractor {
    type Output = Vec<IncomingMatch>;

    fn name(&self) -> &str {
        "incoming_matches"
    }

    fn extract(&self, document: &Html) -> Result<Vec<IncomingMatch>, ExtractionError> {
        let mut matches = Vec::new();
        let mut current_date = String::new();

        // Date labels and the cards they head are siblings in the main column.
        for block in select_all(document, ".col.mod-1 > div")? {
            if has_class(block, "wf-label") {
                current_date = first_text_node(block).unwrap_or_default();
                continue;
            }
            if !has_class(block, "wf-card") {
                continue;
            }
            for item in find_all(block, "a.match-item")? {
                let Some(url) = attr(item, "href").filter(|h| !h.is_empty()) else {
                    continue;
                };
                matches.push(incoming_match(item, url, &current_date)?);
            }
        }

        debug!(count = matches.len(), "Extracted incoming matches");
        Ok(matches)
    }
}

fn incoming_match(
    item: ElementRef<'_>,
    url: String,
    date: &str,
) -> Result<IncomingMatch, ExtractionError> {
    let status = IncomingStatus::from_banner(&text_at(item, ".ml-status")?);
    let eta = match status {
        IncomingStatus::Upcoming => Some(text_at(item, ".ml-eta")?),
        IncomingStatus::Live => None,
    };

    let teams = find_all(item, ".match-item-vs-team")?
        .into_iter()
        .map(team)
        .collect::<Result<Vec<_>, _>>()?;

    let badges = find_all(item, ".match-item-vod")?;
    let badge = |i: usize| {
        badges
            .get(i)
            .and_then(|b| last_text_node(*b))
            .unwrap_or_default()
    };

    let event = match find(item, ".match-item-event")? {
        Some(container) => IncomingEvent {
            name: last_text_node(container).unwrap_or_default(),
            stage: text_at(container, ".match-item-event-series")?,
            icon_url: attr_at(item, ".match-item-icon img", "src")?.unwrap_or_default(),
        },
        None => IncomingEvent::default(),
    };

    Ok(IncomingMatch {
        id: path_segment(&url, 1),
        url,
        date: date.to_string(),
        time: text_at(item, ".match-item-time")?,
        status,
        eta,
        teams,
        event,
        stats_status: badge(0),
        vods_status: badge(1),
    })
}

fn team(el: ElementRef<'_>) -> Result<IncomingTeam, ExtractionError> {
    let name = text_at(el, ".match-item-vs-team-name .text-of")?;
    Ok(IncomingTeam {
        name: if name.is_empty() {
            TBD_TEAM.to_string()
        } else {
            name
        },
        country_code: find(el, ".flag")?
            .and_then(mod_class)
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        score: leading_u32(&text_at(el, ".match-item-vs-team-score")?),
    })
}

// ============================================================================
// Tests
// ============================================================================
