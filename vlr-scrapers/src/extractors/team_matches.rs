//! Team match history extractor (`/team/matches/{id}/?page=N`).
//!
//! Player profiles embed the same match cards, so [`match_cards`] is shared
//! with the player extractor.

use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{
    AgentPick, ExtractionError, MatchOutcome, ScoreLine, TeamComposition, TeamMatch,
    TeamMatchEvent, TeamMatchGame, TeamMatchOpponent, TeamMatchStatus, TeamMatchesPage,
};
use vlr_fetch::{Extractor, Page, PageExtractor};

use crate::html::{
    attr, attr_at, child_elements, clean_text, find, find_all, has_class, leading_u32,
    path_segment, select_all, select_first, text, text_at,
};
use crate::urls::normalize;

/// Extracts the match cards of a team's match history.
///
/// As a [`PageExtractor`] it drives pagination; as an [`Extractor`] it
/// yields a single [`TeamMatchesPage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamMatchesExtractor;

impl PageExtractor for TeamMatchesExtractor {
    type Item = TeamMatch;

    fn name(&self) -> &str {
        "team_matches"
    }

    fn extract_page(&self, document: &Html) -> Result<Page<TeamMatch>, ExtractionError> {
        let matches = match_cards(document)?;
        let has_next = has_next_page(document)?;
        debug!(count = matches.len(), has_next, "Extracted match page");
        Ok(Page::new(matches, has_next))
    }
}

impl Extractor for TeamMatchesExtractor {
    type Output = TeamMatchesPage;

    fn name(&self) -> &str {
        "team_matches_page"
    }

    fn extract(&self, document: &Html) -> Result<TeamMatchesPage, ExtractionError> {
        let Page { items, has_next } = self.extract_page(document)?;
        Ok(TeamMatchesPage {
            matches: items,
            has_next_page: has_next,
        })
    }
}

/// Whether the pager shows a page after the active one.
fn has_next_page(document: &Html) -> Result<bool, ExtractionError> {
    let Some(pager) = select_first(document, ".action-container-pages")? else {
        return Ok(false);
    };
    Ok(child_elements(pager)
        .last()
        .is_some_and(|last| !has_class(*last, "mod-active")))
}

// ============================================================================
// Match cards
// ============================================================================

/// Parses every `a.wf-card.m-item` match card of `document`.
///
/// Cards whose href has no match id are skipped.
pub fn match_cards(document: &Html) -> Result<Vec<TeamMatch>, ExtractionError> {
    let mut matches = Vec::new();
    for card in select_all(document, "a.wf-card.m-item")? {
        let href = attr(card, "href").unwrap_or_default();
        let id = path_segment(&href, 1);
        if id.is_empty() {
            continue;
        }

        let result_el = find(card, ".m-item-result")?;
        let (result, match_id) = match result_el {
            Some(el) => (score_line(el)?, attr(el, "data-match-id")),
            None => (
                ScoreLine {
                    own: 0,
                    opponent: 0,
                    status: MatchOutcome::Draw,
                },
                None,
            ),
        };

        let games = match match_id {
            Some(match_id) => games(document, &match_id)?,
            None => Vec::new(),
        };

        matches.push(TeamMatch {
            status: if href.contains('?') {
                TeamMatchStatus::Upcoming
            } else {
                TeamMatchStatus::Completed
            },
            url: normalize(&href),
            id,
            event: event(card)?,
            opponent: opponent(card)?,
            result,
            vods: find_all(card, ".m-item-vods .wf-tag .full")?
                .into_iter()
                .map(text)
                .collect(),
            date: text_at(card, ".m-item-date")?,
            games,
        });
    }
    Ok(matches)
}

fn non_empty(url: String) -> Option<String> {
    Some(url).filter(|u| !u.is_empty())
}

fn event(card: ElementRef<'_>) -> Result<TeamMatchEvent, ExtractionError> {
    let info = find(card, ".m-item-event .text-of")?;
    let (name, stage) = match info {
        Some(info) => (text_at(info, "div:first-child")?, text_without_divs(info)),
        None => (String::new(), String::new()),
    };
    Ok(TeamMatchEvent {
        name,
        stage,
        icon_url: non_empty(normalize(
            &attr_at(card, ".m-item-thumb img", "src")?.unwrap_or_default(),
        )),
    })
}

/// Text of `el` with its `div` children left out.
fn text_without_divs(el: ElementRef<'_>) -> String {
    let joined: String = el
        .children()
        .filter(|child| {
            ElementRef::wrap(*child).is_none_or(|e| e.value().name() != "div")
        })
        .flat_map(|child| match ElementRef::wrap(child) {
            Some(e) => e.text().map(str::to_string).collect::<Vec<_>>(),
            None => child
                .value()
                .as_text()
                .map(|t| vec![t.to_string()])
                .unwrap_or_default(),
        })
        .collect();
    clean_text(&joined)
}

fn opponent(card: ElementRef<'_>) -> Result<TeamMatchOpponent, ExtractionError> {
    let team = find(card, ".m-item-team.mod-right")?;
    let (name, tag) = match team {
        Some(team) => (
            text_at(team, ".m-item-team-name")?,
            text_at(team, ".m-item-team-tag")?,
        ),
        None => (String::new(), String::new()),
    };
    Ok(TeamMatchOpponent {
        name,
        tag,
        logo_url: non_empty(normalize(
            &attr_at(card, ".m-item-logo.mod-right img", "src")?.unwrap_or_default(),
        )),
    })
}

fn score_line(result: ElementRef<'_>) -> Result<ScoreLine, ExtractionError> {
    let scores = find_all(result, "span")?;
    let score_at = |i: usize| scores.get(i).and_then(|s| leading_u32(&text(*s))).unwrap_or(0);

    let status = if has_class(result, "mod-win") {
        MatchOutcome::Win
    } else if has_class(result, "mod-loss") {
        MatchOutcome::Loss
    } else {
        MatchOutcome::Draw
    };

    Ok(ScoreLine {
        own: score_at(0),
        opponent: score_at(1),
        status,
    })
}

/// Per-map rows listed under the card with match id `match_id`.
fn games(document: &Html, match_id: &str) -> Result<Vec<TeamMatchGame>, ExtractionError> {
    let css = format!("div.m-item-games.match-id-{match_id} > a.m-item-games-item");
    select_all(document, &css)?
        .into_iter()
        .map(|game| -> Result<TeamMatchGame, ExtractionError> {
            let score = text_at(game, ".score")?;
            let mut parts = score.split('-').map(|s| leading_u32(s.trim()).unwrap_or(0));
            let own = parts.next().unwrap_or(0);
            let opponent = parts.next().unwrap_or(0);

            Ok(TeamMatchGame {
                map: text_at(game, ".map")?,
                url: normalize(&attr(game, "href").unwrap_or_default()),
                result: ScoreLine {
                    own,
                    opponent,
                    status: if own > opponent {
                        MatchOutcome::Win
                    } else {
                        MatchOutcome::Loss
                    },
                },
                agent_compositions: TeamComposition {
                    own: agent_picks(game, ".m-item-games-comp:not(.mod-right) img")?,
                    opponent: agent_picks(game, ".m-item-games-comp.mod-right img")?,
                },
            })
        })
        .collect()
}

fn agent_picks(game: ElementRef<'_>, css: &str) -> Result<Vec<AgentPick>, ExtractionError> {
    Ok(find_all(game, css)?
        .into_iter()
        .map(|img| {
            let src = attr(img, "src").unwrap_or_default();
            let file = src.rsplit('/').next().unwrap_or_default();
            AgentPick {
                name: file.replace(".png", ""),
                image_url: normalize(&src),
            }
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vlr_fetch::{Extracted, run_extractor, run_page_extractor};

    const MATCHES_PAGE: &str = r#"
<html><body>
<a class="wf-card fc-flex m-item" href="/353177/sentinels-vs-loud-champions-tour">
  <div class="m-item-thumb"><img src="//owcdn.net/img/vct.png"></div>
  <div class="m-item-event">
    <div class="text-of">
      <div>Champions Tour 2024</div>
      Playoffs <span>⋅</span> Final
    </div>
  </div>
  <div class="m-item-team"><span class="m-item-team-name">Sentinels</span></div>
  <div class="m-item-logo mod-right"><img src="//owcdn.net/img/loud.png"></div>
  <div class="m-item-team mod-right">
    <span class="m-item-team-name">LOUD</span>
    <span class="m-item-team-tag">LOUD</span>
  </div>
  <div class="m-item-result mod-win" data-match-id="353177"><span>2</span><span>1</span></div>
  <div class="m-item-vods"><div class="wf-tag"><span class="full">Map 1</span></div></div>
  <div class="m-item-date">2024/06/01</div>
</a>
<div class="m-item-games match-id-353177">
  <a class="m-item-games-item" href="/353177/sentinels-vs-loud/?game=1">
    <div class="map">Bind</div>
    <div class="score">13 - 7</div>
    <div class="m-item-games-comp"><img src="/img/vlr/game/agents/jett.png"><img src="/img/vlr/game/agents/sova.png"></div>
    <div class="m-item-games-comp mod-right"><img src="/img/vlr/game/agents/raze.png"></div>
  </a>
  <a class="m-item-games-item" href="/353177/sentinels-vs-loud/?game=2">
    <div class="map">Haven</div>
    <div class="score">9-13</div>
  </a>
</div>
<a class="wf-card m-item" href="/360000/sentinels-vs-g2/?tab=upcoming">
  <div class="m-item-result"><span>&ndash;</span></div>
</a>
<a class="wf-card m-item" href="">
  <div class="m-item-date">ignored</div>
</a>
<div class="action-container-pages">
  <span class="btn mod-page mod-active">1</span>
  <a class="btn mod-page" href="?page=2">2</a>
</div>
</body></html>
"#;

    #[test]
    fn test_match_card_fields() {
        let page = run_page_extractor(&TeamMatchesExtractor, MATCHES_PAGE).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_next);

        let m = &page.items[0];
        assert_eq!(m.id, "353177");
        assert_eq!(m.status, TeamMatchStatus::Completed);
        assert_eq!(m.event.name, "Champions Tour 2024");
        assert_eq!(m.event.stage, "Playoffs ⋅ Final");
        assert_eq!(m.event.icon_url.as_deref(), Some("https://owcdn.net/img/vct.png"));
        assert_eq!(m.opponent.name, "LOUD");
        assert_eq!(m.opponent.tag, "LOUD");
        assert_eq!(m.result.own, 2);
        assert_eq!(m.result.opponent, 1);
        assert_eq!(m.result.status, MatchOutcome::Win);
        assert_eq!(m.vods, vec!["Map 1".to_string()]);
        assert_eq!(m.date, "2024/06/01");
    }

    #[test]
    fn test_match_card_games() {
        let page = run_page_extractor(&TeamMatchesExtractor, MATCHES_PAGE).unwrap();
        let games = &page.items[0].games;
        assert_eq!(games.len(), 2);

        assert_eq!(games[0].map, "Bind");
        assert_eq!(games[0].result.own, 13);
        assert_eq!(games[0].result.status, MatchOutcome::Win);
        let names: Vec<_> = games[0]
            .agent_compositions
            .own
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["jett", "sova"]);
        assert_eq!(games[0].agent_compositions.opponent[0].name, "raze");
        assert_eq!(
            games[0].agent_compositions.opponent[0].image_url,
            "https://www.vlr.gg/img/vlr/game/agents/raze.png"
        );

        assert_eq!(games[1].result.status, MatchOutcome::Loss);
        assert!(games[1].agent_compositions.own.is_empty());
    }

    #[test]
    fn test_upcoming_card_defaults() {
        let page = run_page_extractor(&TeamMatchesExtractor, MATCHES_PAGE).unwrap();
        let upcoming = &page.items[1];
        assert_eq!(upcoming.status, TeamMatchStatus::Upcoming);
        assert_eq!(upcoming.result.own, 0);
        assert_eq!(upcoming.result.status, MatchOutcome::Draw);
        assert!(upcoming.event.icon_url.is_none());
        assert!(upcoming.games.is_empty());
    }

    #[test]
    fn test_last_page_detection() {
        let html = r#"<div class="action-container-pages">
            <a class="btn mod-page" href="?page=1">1</a>
            <span class="btn mod-page mod-active">2</span>
        </div>"#;
        let page = run_page_extractor(&TeamMatchesExtractor, html).unwrap();
        assert!(!page.has_next);
        assert!(page.items.is_empty());

        let no_pager = run_page_extractor(&TeamMatchesExtractor, "<p></p>").unwrap();
        assert!(!no_pager.has_next);
    }

    #[test]
    fn test_single_page_extractor() {
        let Extracted::Value(page) = run_extractor(&TeamMatchesExtractor, MATCHES_PAGE).unwrap() else {
            panic!("unexpected short circuit");
        };
        assert!(page.has_next_page);
        assert_eq!(page.matches.len(), 2);
    }
}
