//! Completed match extractor (`/{id}`).
//!
//! Teams are reported winner first: when the right-hand team won, both the
//! header teams and every team-oriented map field are swapped.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{
    AgentIcon, CompletedMatch, CompletedMatchMap, EventInfo, ExtractionError, HeadToHead,
    MatchLink, MatchTeam, PastMatch, PlayerMapStats, Round, RoundOutcome, RoundSide, SideStats,
    StatValue,
};
use vlr_fetch::Extractor;

use crate::html::{
    attr, attr_at, find, find_all, find_last, first_text_node, has_class, leading_u32,
    select_all, select_first, text, text_all, text_at,
};
use crate::urls::BASE_URL;

// ============================================================================
// Regex Patterns
// ============================================================================

/// Round outcome icon, e.g. `/img/vlr/game/round/elim.webp`.
static ROUND_ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"round/(\w+)\.webp").expect("Invalid regex"));

/// Status note of a finished match.
const FINAL_STATUS: &str = "final";

// ============================================================================
// Extractor
// ============================================================================

/// Extracts a [`CompletedMatch`] from a match page.
///
/// Pages whose status note is not "final" short-circuit to `None`.
#[derive(Debug, Clone)]
pub struct CompletedMatchExtractor {
    match_id: String,
}

impl CompletedMatchExtractor {
    /// Creates an extractor for match `match_id`.
    pub fn new(match_id: impl Into<String>) -> Self {
        Self {
            match_id: match_id.into(),
        }
    }
}

impl Extractor for CompletedMatchExtractor {
    type Output = Option<CompletedMatch>;

    fn name(&self) -> &str {
        "completed_match"
    }

    fn short_circuit(&self, document: &Html) -> Option<Self::Output> {
        let status = select_first(document, ".match-header-vs-note")
            .ok()
            .flatten()
            .map(text)
            .unwrap_or_default();
        if status.to_lowercase() == FINAL_STATUS {
            None
        } else {
            debug!(match_id = %self.match_id, status = %status, "Match is not final");
            Some(None)
        }
    }

    fn extract(&self, document: &Html) -> Result<Self::Output, ExtractionError> {
        let main = select_first(document, ".col.mod-3")?
            .ok_or_else(|| ExtractionError::missing(".col.mod-3"))?;

        let dates = find_all(main, ".match-header-date > .moment-tz-convert")?;
        let notes = find_all(main, ".match-header-vs-note")?;

        let score = text_at(main, ".match-header-vs-score .js-spoiler")?.replace(' ', "");
        let mut halves = score.split(':');
        let left_score = halves.next().and_then(leading_u32);
        let right_score = halves.next().and_then(leading_u32);

        let left = header_team(main, 1, left_score)?;
        let right = header_team(main, 2, right_score)?;
        let winner_is_right = matches!((left_score, right_score), (Some(l), Some(r)) if r > l);

        let mut maps = maps(document)?;
        let (team1, team2) = if winner_is_right {
            maps = maps.into_iter().map(CompletedMatchMap::swapped).collect();
            (right, left)
        } else {
            (left, right)
        };

        let (past_matches_team1, past_matches_team2) = past_matches(document)?;

        let completed = CompletedMatch {
            id: self.match_id.clone(),
            event: event(main)?,
            date: dates.first().map(|d| text(*d)).unwrap_or_default(),
            time: dates.last().map(|d| text(*d)).unwrap_or_default(),
            utc_timestamp: dates
                .first()
                .and_then(|d| attr(*d, "data-utc-ts"))
                .unwrap_or_default(),
            patch: text_all(main, ".match-header-date > div > div")?,
            team1,
            team2,
            status: notes.first().map(|n| text(*n)).unwrap_or_default(),
            best_of: notes.last().map(|n| text(*n)).unwrap_or_default(),
            streams: streams(document)?,
            vods: vods(document)?,
            maps,
            head2head: head_to_head(document)?,
            past_matches_team1,
            past_matches_team2,
        };

        debug!(
            match_id = %completed.id,
            maps = completed.maps.len(),
            swapped = winner_is_right,
            "Extracted completed match"
        );
        Ok(Some(completed))
    }
}

// ============================================================================
// Header
// ============================================================================

fn prefixed(prefix: &str, value: Option<String>) -> String {
    value.map(|v| format!("{prefix}{v}")).unwrap_or_default()
}

fn event(main: ElementRef<'_>) -> Result<EventInfo, ExtractionError> {
    let (name, series) = match find(main, ".match-header-event-series")? {
        Some(series) => (
            series
                .prev_siblings()
                .find_map(ElementRef::wrap)
                .map(text)
                .unwrap_or_default(),
            text(series),
        ),
        None => (text_at(main, ".match-header-event > div > div")?, String::new()),
    };

    Ok(EventInfo {
        name,
        series,
        link: prefixed(BASE_URL, attr_at(main, ".match-header-event", "href")?),
        image_url: prefixed("https:", attr_at(main, ".match-header-event img", "src")?),
    })
}

fn header_team(
    main: ElementRef<'_>,
    side: u8,
    score: Option<u32>,
) -> Result<MatchTeam, ExtractionError> {
    let name_css = format!(".match-header-link-name.mod-{side}");
    let link_css = format!(".match-header-link.mod-{side}");

    let elo = text_at(main, &format!("{name_css} .match-header-link-name-elo"))?
        .replace(['[', ']'], "");

    Ok(MatchTeam {
        name: text_at(main, &format!("{name_css} .wf-title-med"))?,
        logo_url: prefixed("https:", attr_at(main, &format!("{link_css} img"), "src")?),
        link: prefixed(BASE_URL, attr_at(main, &link_css, "href")?),
        elo,
        score,
    })
}

fn streams(document: &Html) -> Result<Vec<MatchLink>, ExtractionError> {
    let mut streams = Vec::new();
    for el in select_all(document, ".match-streams .match-streams-container > *")? {
        let (name, link) = if el.value().name() == "a" {
            (text(el), attr(el, "href"))
        } else if let Some(embed) = find(el, ".match-streams-btn-embed")? {
            (text(embed), attr_at(el, ".match-streams-btn-external", "href")?)
        } else {
            continue;
        };
        if let Some(link) = link.filter(|l| !l.is_empty()) {
            if !name.is_empty() {
                streams.push(MatchLink { name, link });
            }
        }
    }
    Ok(streams)
}

fn vods(document: &Html) -> Result<Vec<MatchLink>, ExtractionError> {
    Ok(select_all(document, ".match-vods .wf-card a")?
        .into_iter()
        .filter_map(|a| {
            let link = attr(a, "href").filter(|l| !l.is_empty())?;
            let link = if link.starts_with("http") {
                link
            } else {
                format!("https://{link}")
            };
            Some(MatchLink {
                name: text(a),
                link,
            })
        })
        .collect())
}

// ============================================================================
// Maps
// ============================================================================

fn maps(document: &Html) -> Result<Vec<CompletedMatchMap>, ExtractionError> {
    let mut maps = Vec::new();

    for game in select_all(document, ".vm-stats-game[data-game-id]")? {
        if game.value().attr("data-game-id") == Some("all") {
            continue;
        }
        let Some(name) = find(game, ".map > div > span")?.and_then(first_text_node) else {
            continue;
        };
        if name.eq_ignore_ascii_case("tbd") {
            continue;
        }

        let sides1 = find_all(game, ".team:not(.mod-right) span[class^='mod-']")?;
        let sides2 = find_all(game, ".team.mod-right span[class^='mod-']")?;
        let side_score = |spans: &[ElementRef<'_>], last: bool| {
            let span = if last { spans.last() } else { spans.first() };
            span.and_then(|s| leading_u32(&text(*s)))
        };

        let tables = find_all(game, "table.wf-table-inset.mod-overview")?;
        let team1_stats = match tables.first() {
            Some(table) => player_lines(*table)?,
            None => Vec::new(),
        };
        let team2_stats = match tables.last() {
            Some(table) => player_lines(*table)?,
            None => Vec::new(),
        };

        maps.push(CompletedMatchMap {
            name,
            duration: text_at(game, ".map-duration")?,
            team1_score: leading_u32(&text_at(game, ".team:not(.mod-right) .score")?),
            team2_score: leading_u32(&text_at(game, ".team.mod-right .score")?),
            team1_side_stats: SideStats {
                defense: side_score(&sides1, false),
                attack: side_score(&sides1, true),
            },
            team2_side_stats: SideStats {
                attack: side_score(&sides2, false),
                defense: side_score(&sides2, true),
            },
            rounds: rounds(game)?,
            team1_stats,
            team2_stats,
        });
    }

    Ok(maps)
}

fn rounds(game: ElementRef<'_>) -> Result<Vec<Round>, ExtractionError> {
    let mut rounds = Vec::new();
    for col in find_all(game, ".vlr-rounds-row-col")? {
        let Some(round_num) = leading_u32(&text_at(col, ".rnd-num")?) else {
            continue;
        };
        let Some(winner) = find(col, ".rnd-sq.mod-win")? else {
            continue;
        };

        let icon = attr_at(winner, "img", "src")?.unwrap_or_default();
        let outcome = ROUND_ICON_RE
            .captures(&icon)
            .and_then(|c| c.get(1))
            .map_or(RoundOutcome::Unknown, |m| RoundOutcome::from_icon_name(m.as_str()));

        rounds.push(Round {
            round_num,
            winning_team_side: if has_class(winner, "mod-ct") {
                RoundSide::Ct
            } else {
                RoundSide::T
            },
            outcome,
            outcome_icon_url: if icon.is_empty() {
                String::new()
            } else {
                format!("{BASE_URL}{icon}")
            },
        });
    }
    Ok(rounds)
}

fn player_lines(table: ElementRef<'_>) -> Result<Vec<PlayerMapStats>, ExtractionError> {
    find_all(table, "tbody tr")?
        .into_iter()
        .map(player_line)
        .collect()
}

fn player_line(row: ElementRef<'_>) -> Result<PlayerMapStats, ExtractionError> {
    let stat_cells = find_all(row, ".mod-stat")?;
    let stat = |index: usize| -> Result<StatValue, ExtractionError> {
        let Some(cell) = stat_cells.get(index) else {
            return Ok(StatValue::default());
        };
        Ok(StatValue {
            all: text_at(*cell, ".side.mod-side.mod-both")?,
            attack: text_at(*cell, ".side.mod-side.mod-t")?,
            defense: text_at(*cell, ".side.mod-side.mod-ct")?,
        })
    };
    let split_stat = |class: &str| -> Result<StatValue, ExtractionError> {
        Ok(StatValue {
            all: text_at(row, &format!("{class} .side.mod-both"))?,
            attack: text_at(row, &format!("{class} .side.mod-t"))?,
            defense: text_at(row, &format!("{class} .side.mod-ct"))?,
        })
    };

    let agents = find_all(row, ".mod-agents img")?
        .into_iter()
        .map(|img| AgentIcon {
            icon_url: prefixed("https:", attr(img, "src")),
            name: attr(img, "title").unwrap_or_default(),
        })
        .collect();

    Ok(PlayerMapStats {
        name: text_at(row, ".mod-player .text-of")?,
        link: prefixed(BASE_URL, attr_at(row, ".mod-player a", "href")?),
        agents,
        rating: stat(0)?,
        acs: stat(1)?,
        k: split_stat(".mod-vlr-kills")?,
        d: split_stat(".mod-vlr-deaths")?,
        a: split_stat(".mod-vlr-assists")?,
        kd_diff: stat(4)?,
        kast: stat(5)?,
        adr: stat(6)?,
        hs_percent: stat(7)?,
        fk: split_stat(".mod-fb")?,
        fd: split_stat(".mod-fd")?,
        fk_diff: stat(10)?,
    })
}

// ============================================================================
// History
// ============================================================================

fn head_to_head(document: &Html) -> Result<Vec<HeadToHead>, ExtractionError> {
    let team1_logo = prefixed(
        "https:",
        select_first(document, ".match-h2h-header-team")?
            .map(|team| attr_at(team, "img", "src"))
            .transpose()?
            .flatten(),
    );

    select_all(document, ".match-h2h-matches a")?
        .into_iter()
        .map(|item| -> Result<HeadToHead, ExtractionError> {
            let first = find(item, ".match-h2h-matches-score .rf")?.and_then(|s| leading_u32(&text(s)));
            let last =
                find_last(item, ".match-h2h-matches-score .rf")?.and_then(|s| leading_u32(&text(s)));
            let result = match (first, last) {
                (Some(a), Some(b)) => format!("{a}-{b}"),
                _ => String::new(),
            };
            let winner_logo = attr_at(item, ".match-h2h-matches-team.mod-win", "src")?
                .filter(|src| !src.is_empty());

            Ok(HeadToHead {
                result,
                link: prefixed(BASE_URL, attr(item, "href")),
                date: text_at(item, ".match-h2h-matches-date")?,
                win: winner_logo.is_some_and(|src| team1_logo.contains(&src)),
            })
        })
        .collect()
}

fn past_matches(document: &Html) -> Result<(Vec<PastMatch>, Vec<PastMatch>), ExtractionError> {
    let histories = select_all(document, ".match-histories")?;
    let items_of = |block: Option<&ElementRef<'_>>| -> Result<Vec<PastMatch>, ExtractionError> {
        let Some(block) = block else {
            return Ok(Vec::new());
        };
        find_all(*block, "a.match-histories-item")?
            .into_iter()
            .map(past_match)
            .collect()
    };
    Ok((items_of(histories.first())?, items_of(histories.last())?))
}

fn past_match(item: ElementRef<'_>) -> Result<PastMatch, ExtractionError> {
    Ok(PastMatch {
        opponent_name: text_at(item, ".match-histories-item-opponent-name")?,
        opponent_logo_url: prefixed(
            "https:",
            attr_at(item, ".match-histories-item-opponent-logo", "src")?,
        ),
        result: format!("{}-{}", text_at(item, ".rf")?, text_at(item, ".ra")?),
        link: prefixed(BASE_URL, attr(item, "href")),
        date: text_at(item, ".match-histories-item-date")?,
        win: has_class(item, "mod-win"),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vlr_fetch::{Extracted, run_extractor};

    fn match_page(note: &str, score: &str) -> String {
        format!(
            r#"
<html><body>
<div class="col mod-3">
  <a class="match-header-event" href="/event/1999/masters-madrid">
    <img src="//owcdn.net/img/madrid.png">
    <div>
      <div>Champions Tour 2024: Masters Madrid</div>
      <div class="match-header-event-series">Playoffs: Grand Final</div>
    </div>
  </a>
  <div class="match-header-date">
    <div class="moment-tz-convert" data-utc-ts="2024-03-24 10:00:00">Sunday, March 24th</div>
    <div class="moment-tz-convert" data-utc-ts="2024-03-24 10:00:00">10:00 AM CET</div>
    <div style="margin-top: 4px;"><div style="font-style: italic;">Patch 8.05</div></div>
  </div>
  <a class="match-header-link mod-1" href="/team/2/sentinels"><img src="//owcdn.net/img/sen.png"></a>
  <div class="match-header-link-name mod-1">
    <div class="wf-title-med">Sentinels</div>
    <div class="match-header-link-name-elo">[1874]</div>
  </div>
  <div class="match-header-vs">
    <div class="match-header-vs-score"><span class="js-spoiler">{score}</span></div>
    <div class="match-header-vs-note">{note}</div>
    <div class="match-header-vs-note">Bo5</div>
  </div>
  <a class="match-header-link mod-2" href="/team/6961/gen-g"><img src="//owcdn.net/img/geng.png"></a>
  <div class="match-header-link-name mod-2">
    <div class="wf-title-med">Gen.G</div>
    <div class="match-header-link-name-elo">[1801]</div>
  </div>
</div>
<div class="match-streams"><div class="match-streams-container">
  <a href="https://twitch.tv/valorant">valorant</a>
  <div><span class="match-streams-btn-embed">Spanish</span><a class="match-streams-btn-external" href="https://twitch.tv/es"></a></div>
  <div>nothing</div>
</div></div>
<div class="match-vods"><div class="wf-card">
  <a href="https://youtu.be/abc">Full Match</a>
  <a href="youtu.be/def">Map 2</a>
</div></div>
<div class="vm-stats-game" data-game-id="all"></div>
<div class="vm-stats-game" data-game-id="101">
  <div class="vm-stats-game-header">
    <div class="team">
      <div class="score">13</div>
      <span class="mod-ct">8</span><span class="mod-t">5</span>
    </div>
    <div class="map"><div><span>
      Bind
      <span class="picked">PICK</span></span></div>
      <div class="map-duration">42:10</div>
    </div>
    <div class="team mod-right">
      <div class="score">9</div>
      <span class="mod-t">4</span><span class="mod-ct">5</span>
    </div>
  </div>
  <div class="vlr-rounds-row">
    <div class="vlr-rounds-row-col"><div class="team">SEN</div></div>
    <div class="vlr-rounds-row-col">
      <div class="rnd-num">1</div>
      <div class="rnd-sq mod-win mod-ct"><img src="/img/vlr/game/round/elim.webp"></div>
    </div>
    <div class="vlr-rounds-row-col">
      <div class="rnd-num">2</div>
      <div class="rnd-sq mod-win mod-t"><img src="/img/vlr/game/round/boom.webp"></div>
    </div>
    <div class="vlr-rounds-row-col">
      <div class="rnd-num">3</div>
      <div class="rnd-sq"></div>
    </div>
  </div>
  <table class="wf-table-inset mod-overview"><tbody>
    <tr>
      <td class="mod-player"><a href="/player/9/tenz"><div class="text-of">TenZ</div></a></td>
      <td class="mod-agents"><img src="//owcdn.net/img/jett.png" title="Jett"></td>
      <td class="mod-stat"><span class="side mod-side mod-both">1.31</span><span class="side mod-side mod-t">1.40</span><span class="side mod-side mod-ct">1.20</span></td>
      <td class="mod-stat"><span class="side mod-side mod-both">280</span></td>
      <td class="mod-stat mod-vlr-kills"><span class="side mod-both">22</span><span class="side mod-t">12</span><span class="side mod-ct">10</span></td>
      <td class="mod-vlr-deaths"><span class="side mod-both">14</span></td>
      <td class="mod-stat mod-vlr-assists"><span class="side mod-both">3</span></td>
      <td class="mod-stat"><span class="side mod-side mod-both">+8</span></td>
    </tr>
  </tbody></table>
  <table class="wf-table-inset mod-overview"><tbody>
    <tr><td class="mod-player"><a href="/player/1/t3xture"><div class="text-of">t3xture</div></a></td></tr>
  </tbody></table>
</div>
<div class="vm-stats-game" data-game-id="102">
  <div class="map"><div><span>TBD</span></div></div>
</div>
<div class="match-h2h">
  <div class="match-h2h-header"><div class="match-h2h-header-team"><img src="//owcdn.net/img/sen.png"></div></div>
  <div class="match-h2h-matches">
    <a href="/300000/sen-vs-geng">
      <img class="match-h2h-matches-team mod-win" src="//owcdn.net/img/sen.png">
      <div class="match-h2h-matches-score"><span class="rf">2</span><span class="rf">0</span></div>
      <div class="match-h2h-matches-date">2023/06/01</div>
    </a>
  </div>
</div>
<div class="match-histories">
  <a class="match-histories-item mod-win" href="/290000/sen-vs-fnc">
    <img class="match-histories-item-opponent-logo" src="//owcdn.net/img/fnc.png">
    <span class="match-histories-item-opponent-name">FNATIC</span>
    <span class="rf">2</span><span class="ra">1</span>
    <div class="match-histories-item-date">2024/03/20</div>
  </a>
</div>
<div class="match-histories">
  <a class="match-histories-item mod-loss" href="/290001/geng-vs-prx">
    <span class="match-histories-item-opponent-name">Paper Rex</span>
    <span class="rf">0</span><span class="ra">2</span>
  </a>
</div>
</body></html>
"#
        )
    }

    fn extract(html: &str) -> Option<CompletedMatch> {
        match run_extractor(&CompletedMatchExtractor::new("353177"), html).unwrap() {
            Extracted::Value(value) => value,
            Extracted::ShortCircuit(_) => panic!("unexpected short circuit"),
        }
    }

    #[test]
    fn test_not_final_short_circuits() {
        let result = run_extractor(
            &CompletedMatchExtractor::new("1"),
            &match_page("LIVE", "1:0"),
        )
        .unwrap();
        assert_eq!(result, Extracted::ShortCircuit(None));

        let no_note = run_extractor(&CompletedMatchExtractor::new("1"), "<p></p>").unwrap();
        assert_eq!(no_note, Extracted::ShortCircuit(None));
    }

    #[test]
    fn test_header_fields() {
        let m = extract(&match_page("final", "3:1")).unwrap();
        assert_eq!(m.id, "353177");
        assert_eq!(m.event.name, "Champions Tour 2024: Masters Madrid");
        assert_eq!(m.event.series, "Playoffs: Grand Final");
        assert_eq!(m.event.link, "https://www.vlr.gg/event/1999/masters-madrid");
        assert_eq!(m.event.image_url, "https://owcdn.net/img/madrid.png");
        assert_eq!(m.date, "Sunday, March 24th");
        assert_eq!(m.time, "10:00 AM CET");
        assert_eq!(m.utc_timestamp, "2024-03-24 10:00:00");
        assert_eq!(m.patch, "Patch 8.05");
        assert_eq!(m.status, "final");
        assert_eq!(m.best_of, "Bo5");

        assert_eq!(m.team1.name, "Sentinels");
        assert_eq!(m.team1.elo, "1874");
        assert_eq!(m.team1.score, Some(3));
        assert_eq!(m.team1.link, "https://www.vlr.gg/team/2/sentinels");
        assert_eq!(m.team2.logo_url, "https://owcdn.net/img/geng.png");
    }

    #[test]
    fn test_links() {
        let m = extract(&match_page("final", "3:1")).unwrap();
        assert_eq!(m.streams.len(), 2);
        assert_eq!(m.streams[1].name, "Spanish");
        assert_eq!(m.streams[1].link, "https://twitch.tv/es");
        assert_eq!(m.vods[1].link, "https://youtu.be/def");
    }

    #[test]
    fn test_maps_and_rounds() {
        let m = extract(&match_page("final", "3:1")).unwrap();
        assert_eq!(m.maps.len(), 1);

        let bind = &m.maps[0];
        assert_eq!(bind.name, "Bind");
        assert_eq!(bind.duration, "42:10");
        assert_eq!(bind.team1_score, Some(13));
        assert_eq!(bind.team1_side_stats.defense, Some(8));
        assert_eq!(bind.team1_side_stats.attack, Some(5));
        assert_eq!(bind.team2_side_stats.attack, Some(4));

        assert_eq!(bind.rounds.len(), 2);
        assert_eq!(bind.rounds[0].winning_team_side, RoundSide::Ct);
        assert_eq!(bind.rounds[0].outcome, RoundOutcome::Elim);
        assert_eq!(
            bind.rounds[1].outcome_icon_url,
            "https://www.vlr.gg/img/vlr/game/round/boom.webp"
        );

        let tenz = &bind.team1_stats[0];
        assert_eq!(tenz.name, "TenZ");
        assert_eq!(tenz.link, "https://www.vlr.gg/player/9/tenz");
        assert_eq!(tenz.agents[0].name, "Jett");
        assert_eq!(tenz.rating.all, "1.31");
        assert_eq!(tenz.rating.attack, "1.40");
        assert_eq!(tenz.k.defense, "10");
        assert_eq!(tenz.kd_diff.all, "+8");
        assert_eq!(tenz.fk_diff, StatValue::default());
        assert_eq!(bind.team2_stats[0].name, "t3xture");
    }

    #[test]
    fn test_winner_is_reported_first() {
        let m = extract(&match_page("Final", "1:3")).unwrap();
        assert_eq!(m.team1.name, "Gen.G");
        assert_eq!(m.team1.score, Some(3));
        assert_eq!(m.team2.name, "Sentinels");

        let bind = &m.maps[0];
        assert_eq!(bind.team1_score, Some(9));
        assert_eq!(bind.team2_score, Some(13));
        assert_eq!(bind.team1_stats[0].name, "t3xture");
    }

    #[test]
    fn test_history() {
        let m = extract(&match_page("final", "3:1")).unwrap();
        assert_eq!(m.head2head[0].result, "2-0");
        assert!(m.head2head[0].win);

        assert_eq!(m.past_matches_team1[0].opponent_name, "FNATIC");
        assert_eq!(m.past_matches_team1[0].result, "2-1");
        assert!(m.past_matches_team1[0].win);
        assert_eq!(m.past_matches_team2[0].opponent_name, "Paper Rex");
        assert!(!m.past_matches_team2[0].win);
        assert!(m.past_matches_team2[0].opponent_logo_url.is_empty());
    }
}
