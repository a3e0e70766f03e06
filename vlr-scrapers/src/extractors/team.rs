//! Team profile extractor (`/team/{id}`).

use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{
    EventPlacement, ExtractionError, NewsArticle, RecentMatch, RecordLine, RosterPlayer,
    RosterStaff, Social, Team, TeamRanking, TeamRoster,
};
use vlr_fetch::Extractor;

use crate::html::{
    attr, attr_at, child_elements, find, find_all, find_last, first_text_node, leading_int,
    leading_u32, matches, mod_class, own_text, parent, path_segment, prev_element, section_after,
    select_all, select_first, text, text_at,
};
use crate::urls::normalize;

/// Separator between event name and stage on result cards.
const EVENT_SEPARATOR: char = '\u{22c5}';

/// Placeholder for teams without recorded winnings.
pub const NO_WINNINGS: &str = "N/A";

/// Extracts a [`Team`] from a team profile page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamExtractor;

impl Extractor for TeamExtractor {
    type Output = Team;

    fn name(&self) -> &str {
        "team"
    }

    fn extract(&self, document: &Html) -> Result<Team, ExtractionError> {
        let header = select_first(document, ".team-header")?
            .ok_or_else(|| ExtractionError::missing(".team-header"))?;

        let href = select_first(document, "a.wf-nav-item.mod-active")?
            .and_then(|a| attr(a, "href"))
            .unwrap_or_default();

        let country_code = find(header, ".team-header-country i.flag")?
            .and_then(mod_class)
            .unwrap_or_default();

        let website = attr_at(header, ".team-header-links a:first-child", "href")?
            .filter(|href| !href.is_empty());

        let socials = find_all(header, ".team-header-links a[href*='x.com']")?
            .into_iter()
            .map(|a| Social {
                name: text(a),
                url: attr(a, "href").unwrap_or_default(),
            })
            .collect();

        let total_winnings = total_winnings(document)?.unwrap_or_else(|| NO_WINNINGS.to_string());

        let team = Team {
            id: path_segment(&href, 2),
            url: normalize(&href),
            name: text_at(header, ".team-header-name h1")?,
            tag: text_at(header, ".team-header-name h2")?,
            logo_url: normalize(&attr_at(header, ".team-header-logo img", "src")?.unwrap_or_default()),
            country: text_at(header, ".team-header-country")?,
            country_code,
            website,
            socials,
            total_winnings,
            ranking: ranking(document)?,
            roster: roster(document)?,
            recent_results: recent_results(document)?,
            event_placements: event_placements(document)?,
            related_news: related_news(document)?,
        };

        debug!(
            id = %team.id,
            players = team.roster.players.len(),
            results = team.recent_results.len(),
            "Extracted team"
        );
        Ok(team)
    }
}

/// Text of the `span` right after the "Total Winnings" label, if any.
pub(crate) fn total_winnings(document: &Html) -> Result<Option<String>, ExtractionError> {
    let label = select_all(document, "div.wf-module-label")?
        .into_iter()
        .find(|el| text(*el).contains("Total Winnings"));

    let Some(label) = label else {
        return Ok(None);
    };
    let value = label
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "span")
        .map(text)
        .filter(|s| !s.is_empty());
    Ok(value)
}

fn ranking(document: &Html) -> Result<TeamRanking, ExtractionError> {
    let Some(info) = select_first(document, ".core-rating-block.mod-active .team-rating-info")? else {
        return Ok(TeamRanking::default());
    };

    let rating = find(info, ".mod-rating .rating-num")?
        .and_then(first_text_node)
        .and_then(|t| leading_u32(&t))
        .unwrap_or(0);

    Ok(TeamRanking {
        rank: leading_u32(&text_at(info, ".mod-rank .rank-num")?).unwrap_or(0),
        region: text_at(info, ".mod-rank .rating-txt")?,
        rating,
        record: RecordLine {
            wins: leading_u32(&text_at(info, ".mod-streak .win")?).unwrap_or(0),
            losses: leading_u32(&text_at(info, ".mod-streak .loss")?).unwrap_or(0),
        },
    })
}

// ============================================================================
// Roster
// ============================================================================

struct RosterEntry {
    id: String,
    url: String,
    alias: String,
    real_name: Option<String>,
    country_code: String,
    avatar_url: String,
}

fn roster_entry(item: ElementRef<'_>) -> Result<RosterEntry, ExtractionError> {
    let href = attr_at(item, "a", "href")?.unwrap_or_default();
    let name = find(item, ".team-roster-item-name-alias")?;
    let real_name = text_at(item, ".team-roster-item-name-real")?;

    Ok(RosterEntry {
        id: path_segment(&href, 2),
        url: normalize(&href),
        alias: name.map(own_text).unwrap_or_default(),
        real_name: Some(real_name).filter(|s| !s.is_empty()),
        country_code: match name {
            Some(name) => find(name, "i.flag")?.and_then(mod_class).unwrap_or_default(),
            None => String::new(),
        },
        avatar_url: normalize(&attr_at(item, ".team-roster-item-img img", "src")?.unwrap_or_default()),
    })
}

/// Group label (`players` / `staff`) of the block holding `item`.
fn roster_group(item: ElementRef<'_>) -> Result<Option<String>, ExtractionError> {
    let Some(label) = parent(item).and_then(prev_element) else {
        return Ok(None);
    };
    if matches(label, ".wf-module-label")? {
        Ok(Some(text(label).to_lowercase()))
    } else {
        Ok(None)
    }
}

fn roster(document: &Html) -> Result<TeamRoster, ExtractionError> {
    let mut roster = TeamRoster::default();

    for item in select_all(document, ".team-roster-item")? {
        match roster_group(item)?.as_deref() {
            Some("players") => {
                let entry = roster_entry(item)?;
                let is_captain = find(item, ".team-roster-item-name-alias .fa-star")?.is_some();
                roster.players.push(RosterPlayer {
                    id: entry.id,
                    url: entry.url,
                    alias: entry.alias,
                    real_name: entry.real_name,
                    country_code: entry.country_code,
                    avatar_url: entry.avatar_url,
                    is_captain,
                });
            }
            Some("staff") => {
                let entry = roster_entry(item)?;
                let role = text_at(item, ".team-roster-item-name-role")?;
                roster.staff.push(RosterStaff {
                    id: entry.id,
                    url: entry.url,
                    alias: entry.alias,
                    real_name: entry.real_name,
                    country_code: entry.country_code,
                    avatar_url: entry.avatar_url,
                    role,
                });
            }
            _ => {}
        }
    }

    Ok(roster)
}

// ============================================================================
// Sections
// ============================================================================

fn recent_results(document: &Html) -> Result<Vec<RecentMatch>, ExtractionError> {
    let Some(section) = section_after(document, "h2", "Recent Results")? else {
        return Ok(Vec::new());
    };

    find_all(section, "a.m-item")?
        .into_iter()
        .map(|item| -> Result<RecentMatch, ExtractionError> {
            let href = attr(item, "href").unwrap_or_default();
            let scores = find_all(item, ".m-item-result > span")?;
            let score_at = |i: usize| {
                scores
                    .get(i)
                    .and_then(|s| leading_int(&text(*s)))
                    .and_then(|v| u32::try_from(v).ok())
            };

            let event = text_at(item, ".m-item-event")?;
            let mut parts = event.split(EVENT_SEPARATOR).map(str::trim);
            let event_name = parts.next().unwrap_or_default().to_string();
            let event_stage = parts.next().unwrap_or_default().to_string();

            Ok(RecentMatch {
                id: path_segment(&href, 1),
                url: normalize(&href),
                opponent_name: find_last(item, ".m-item-team-name")?.map(text).unwrap_or_default(),
                opponent_tag: find_last(item, ".m-item-team-tag")?.map(text).unwrap_or_default(),
                result: text_at(item, ".m-item-result")?,
                team_score: score_at(0),
                opponent_score: score_at(1),
                event_name,
                event_stage,
                date: text_at(item, ".m-item-date")?,
            })
        })
        .collect()
}

fn event_placements(document: &Html) -> Result<Vec<EventPlacement>, ExtractionError> {
    let Some(section) = section_after(document, "h2", "Event Placements")? else {
        return Ok(Vec::new());
    };

    let mut placements = Vec::new();
    for item in find_all(section, "a.team-event-item")? {
        let Some(placement) = find(item, "div[style='margin-top: 5px; line-height: 1.2;']")? else {
            continue;
        };

        let year = child_elements(item)
            .last()
            .and_then(|last| leading_int(&text(*last)))
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(0);
        let winnings = text_at(placement, "span[style*='font-weight: 700']")?;

        placements.push(EventPlacement {
            url: normalize(&attr(item, "href").unwrap_or_default()),
            event_name: text_at(item, ".text-of")?,
            placement: text_at(placement, ".team-event-item-series")?,
            winnings: Some(winnings).filter(|w| !w.is_empty()),
            year,
        });
    }
    Ok(placements)
}

fn related_news(document: &Html) -> Result<Vec<NewsArticle>, ExtractionError> {
    let Some(section) = section_after(document, "h2", "Related News")? else {
        return Ok(Vec::new());
    };

    find_all(section, "a.wf-module-item")?
        .into_iter()
        .map(|item| -> Result<NewsArticle, ExtractionError> {
            Ok(NewsArticle {
                url: normalize(&attr(item, "href").unwrap_or_default()),
                title: text_at(item, "div[style*='font-weight: 500']")?,
                date: text_at(item, ".ge-text-light")?,
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
