//! Player profile extractor (`/player/{id}`).

use scraper::{ElementRef, Html};
use tracing::debug;
use vlr_core::{
    AgentStatTimespan, ExtractionError, Player, PlayerAgentStats, PlayerAgentStatsBlock,
    PlayerCountry, PlayerEventPlacement, PlayerNews, PlayerTeam, Social,
};
use vlr_fetch::Extractor;

use super::team::total_winnings;
use super::team_matches::match_cards;
use crate::html::{
    attr, attr_at, find, find_all, find_last, last_text_node, leading_float, leading_int,
    leading_u32, mod_class, parent, path_segment, select_all, select_first, text, text_at,
};
use crate::urls::normalize;

/// Extracts a [`Player`] from a player profile page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerExtractor;

impl Extractor for PlayerExtractor {
    type Output = Player;

    fn name(&self) -> &str {
        "player"
    }

    fn extract(&self, document: &Html) -> Result<Player, ExtractionError> {
        let header = select_first(document, ".player-header")?
            .ok_or_else(|| ExtractionError::missing(".player-header"))?;

        let href = select_first(document, "a.wf-nav-item.mod-active")?
            .and_then(|a| attr(a, "href"))
            .unwrap_or_default();

        let flag = find(header, ".ge-text-light i.flag")?;
        let country = PlayerCountry {
            name: flag.and_then(parent).map(text).unwrap_or_default(),
            code: flag.and_then(mod_class).unwrap_or_default(),
        };

        let player = Player {
            id: path_segment(&href, 2),
            url: normalize(&href),
            alias: text_at(header, "h1.wf-title")?,
            real_name: text_at(header, "h2.player-real-name")?,
            avatar_url: normalize(&attr_at(header, ".wf-avatar img", "src")?.unwrap_or_default()),
            country,
            socials: socials(header)?,
            total_winnings: total_winnings(document)?.unwrap_or_default(),
            agent_stats: agent_stats(document)?,
            recent_matches: match_cards(document)?,
            teams: teams(document)?,
            event_placements: event_placements(document)?,
            news: news(document)?,
        };

        debug!(
            id = %player.id,
            agents = player.agent_stats.stats.len(),
            matches = player.recent_matches.len(),
            "Extracted player"
        );
        Ok(player)
    }
}

fn socials(header: ElementRef<'_>) -> Result<Vec<Social>, ExtractionError> {
    Ok(find_all(header, "a[href*='x.com'], a[href*='twitch.tv']")?
        .into_iter()
        .filter_map(|a| attr(a, "href").filter(|href| !href.is_empty()))
        .map(|url| {
            let name = if url.contains("twitch.tv") {
                "twitch"
            } else {
                "twitter"
            };
            Social {
                name: name.to_string(),
                url,
            }
        })
        .collect())
}

// ============================================================================
// Agent stats
// ============================================================================

fn agent_stats(document: &Html) -> Result<PlayerAgentStatsBlock, ExtractionError> {
    let timespan = select_first(document, ".player-stats-filter-btn.mod-active")?
        .map(|btn| AgentStatTimespan::from_label(&text(btn)))
        .unwrap_or_default();

    let stats = select_all(document, ".wf-card.mod-table table.wf-table tbody tr")?
        .into_iter()
        .map(agent_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlayerAgentStatsBlock { timespan, stats })
}

fn agent_row(row: ElementRef<'_>) -> Result<PlayerAgentStats, ExtractionError> {
    let cells: Vec<String> = find_all(row, "td")?.into_iter().map(text).collect();
    let cell = |i: usize| cells.get(i).map_or("", String::as_str);
    let float = |i: usize| leading_float(&cell(i).replace('%', ""));
    let int = |i: usize| leading_u32(cell(i));
    let img = find(row, "img")?;

    Ok(PlayerAgentStats {
        name: img.and_then(|i| attr(i, "alt")).unwrap_or_default(),
        image_url: normalize(&img.and_then(|i| attr(i, "src")).unwrap_or_default()),
        usage: cell(1).to_string(),
        rounds: int(2),
        rating: float(3),
        acs: float(4),
        kd: float(5),
        adr: float(6),
        kast: float(7),
        kpr: float(8),
        apr: float(9),
        fkpr: float(10),
        fdpr: float(11),
        kills: int(12),
        deaths: int(13),
        assists: int(14),
        first_kills: int(15),
        first_deaths: int(16),
    })
}

// ============================================================================
// Side panels
// ============================================================================

/// The `.wf-card` right after the `h2.wf-label` titled `title`.
fn labelled_card<'a>(document: &'a Html, title: &str) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let card = select_all(document, "h2.wf-label")?
        .into_iter()
        .find(|el| text(*el).contains(title))
        .and_then(|label| label.next_siblings().find_map(ElementRef::wrap))
        .filter(|el| el.value().classes().any(|c| c == "wf-card"));
    Ok(card)
}

fn teams(document: &Html) -> Result<Vec<PlayerTeam>, ExtractionError> {
    let mut teams = Vec::new();
    for (title, is_past) in [("Current Teams", false), ("Past Teams", true)] {
        let Some(card) = labelled_card(document, title)? else {
            continue;
        };
        for item in find_all(card, "a.wf-module-item")? {
            let href = attr(item, "href").unwrap_or_default();
            teams.push(PlayerTeam {
                id: path_segment(&href, 2),
                url: normalize(&href),
                name: text_at(item, "div[style*='font-weight: 500']")?,
                logo_url: normalize(&attr_at(item, "img", "src")?.unwrap_or_default()),
                date_range: find_last(item, ".ge-text-light")?.map(text).unwrap_or_default(),
                is_past,
            });
        }
    }
    Ok(teams)
}

fn news(document: &Html) -> Result<Vec<PlayerNews>, ExtractionError> {
    let Some(card) = labelled_card(document, "Latest News")? else {
        return Ok(Vec::new());
    };
    find_all(card, "a.wf-module-item")?
        .into_iter()
        .map(|item| -> Result<PlayerNews, ExtractionError> {
            Ok(PlayerNews {
                title: text_at(item, "div[style*='font-weight: 500']")?,
                url: normalize(&attr(item, "href").unwrap_or_default()),
                date: text_at(item, ".ge-text-light")?,
            })
        })
        .collect()
}

fn event_placements(document: &Html) -> Result<Vec<PlayerEventPlacement>, ExtractionError> {
    let Some(card) = labelled_card(document, "Event Placements")? else {
        return Ok(Vec::new());
    };

    let mut placements = Vec::new();
    for item in find_all(card, "a.player-event-item")? {
        let info = find(item, "div[style*='margin-top: 5px']")?;
        let (placement, team, winnings) = match info {
            Some(info) => (
                text_at(info, "span.ge-text-light")?,
                last_text_node(info).unwrap_or_default(),
                Some(text_at(info, "span[style*='font-weight: 700']")?).filter(|w| !w.is_empty()),
            ),
            None => (String::new(), String::new(), None),
        };
        let year = find_last(item, "div")?
            .and_then(|div| leading_int(&text(div)))
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(0);

        placements.push(PlayerEventPlacement {
            event_name: text_at(item, "div[style*='font-weight: 500']")?,
            event_url: normalize(&attr(item, "href").unwrap_or_default()),
            placement,
            team,
            winnings,
            year,
        });
    }
    Ok(placements)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vlr_fetch::{Extracted, run_extractor};

    const PLAYER_PAGE: &str = r#"
<html><body>
<a class="wf-nav-item mod-active" href="/player/9/tenz">Overview</a>
<div class="player-header">
  <div class="wf-avatar"><img src="//owcdn.net/img/tenz.png"></div>
  <h1 class="wf-title">TenZ</h1>
  <h2 class="player-real-name">Tyson Ngo</h2>
  <a href="https://x.com/TenZOfficial">@TenZOfficial</a>
  <a href="https://www.twitch.tv/tenz">tenz</a>
  <div class="ge-text-light"><i class="flag mod-ca"></i>
    Canada</div>
</div>
<div class="player-stats-filter">
  <a class="player-stats-filter-btn">30d</a>
  <a class="player-stats-filter-btn mod-active">90d</a>
</div>
<div class="wf-card mod-table">
  <table class="wf-table">
    <thead><tr><th></th></tr></thead>
    <tbody>
      <tr>
        <td><img src="/img/vlr/game/agents/jett.png" alt="jett"></td>
        <td>(12) 48%</td><td>260</td><td>1.15</td><td>245.3</td><td>1.21</td><td>152.1</td>
        <td>74%</td><td>0.86</td><td>0.21</td><td>0.15</td><td>0.11</td>
        <td>224</td><td>185</td><td>55</td><td>39</td><td>29</td>
      </tr>
    </tbody>
  </table>
</div>
<a class="wf-card m-item" href="/353177/sen-vs-loud">
  <div class="m-item-result mod-loss"><span>0</span><span>2</span></div>
</a>
<h2 class="wf-label">Current Teams</h2>
<div class="wf-card">
  <a class="wf-module-item" href="/team/2/sentinels">
    <img src="//owcdn.net/img/sen.png">
    <div style="font-weight: 500;">Sentinels</div>
    <div class="ge-text-light">joined in January 2021</div>
  </a>
</div>
<h2 class="wf-label">Past Teams</h2>
<div class="wf-card">
  <a class="wf-module-item" href="/team/188/cloud9">
    <div style="font-weight: 500;">Cloud9</div>
    <div class="ge-text-light">Inactive</div>
    <div class="ge-text-light">April 2020 - January 2021</div>
  </a>
</div>
<h2 class="wf-label">Event Placements</h2>
<div class="wf-card">
  <a class="player-event-item" href="/event/1999/masters-madrid">
    <div style="font-weight: 500;">Masters Madrid</div>
    <div style="margin-top: 5px;">
      <span class="ge-text-light">Playoffs - 1st</span>
      <span style="font-weight: 700;">$350,000</span>
      Sentinels
    </div>
    <div>2024</div>
  </a>
</div>
<h2 class="wf-label">Latest News</h2>
<div class="wf-card">
  <a class="wf-module-item" href="/400000/tenz-retires">
    <div style="font-weight: 500;">TenZ retires</div>
    <div class="ge-text-light">January 1, 2025</div>
  </a>
</div>
<div class="wf-module-label">Total Winnings</div><span>$420,000</span>
</body></html>
"#;

    fn extract(html: &str) -> Player {
        match run_extractor(&PlayerExtractor, html).unwrap() {
            Extracted::Value(player) => player,
            Extracted::ShortCircuit(_) => panic!("player extractor never short-circuits"),
        }
    }

    #[test]
    fn test_player_header() {
        let player = extract(PLAYER_PAGE);
        assert_eq!(player.id, "9");
        assert_eq!(player.alias, "TenZ");
        assert_eq!(player.real_name, "Tyson Ngo");
        assert_eq!(player.avatar_url, "https://owcdn.net/img/tenz.png");
        assert_eq!(player.country.name, "Canada");
        assert_eq!(player.country.code, "ca");
        assert_eq!(player.total_winnings, "$420,000");

        let socials: Vec<_> = player.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(socials, ["twitter", "twitch"]);
    }

    #[test]
    fn test_player_agent_stats() {
        let block = extract(PLAYER_PAGE).agent_stats;
        assert_eq!(block.timespan, AgentStatTimespan::D90);

        let jett = &block.stats[0];
        assert_eq!(jett.name, "jett");
        assert_eq!(jett.image_url, "https://www.vlr.gg/img/vlr/game/agents/jett.png");
        assert_eq!(jett.usage, "(12) 48%");
        assert_eq!(jett.rounds, Some(260));
        assert_eq!(jett.rating, Some(1.15));
        assert_eq!(jett.kast, Some(74.0));
        assert_eq!(jett.kills, Some(224));
        assert_eq!(jett.first_deaths, Some(29));
    }

    #[test]
    fn test_player_panels() {
        let player = extract(PLAYER_PAGE);

        assert_eq!(player.recent_matches.len(), 1);
        assert_eq!(player.recent_matches[0].id, "353177");

        assert_eq!(player.teams.len(), 2);
        assert_eq!(player.teams[0].name, "Sentinels");
        assert!(!player.teams[0].is_past);
        assert_eq!(player.teams[1].id, "188");
        assert_eq!(player.teams[1].date_range, "April 2020 - January 2021");
        assert!(player.teams[1].is_past);

        let placement = &player.event_placements[0];
        assert_eq!(placement.event_name, "Masters Madrid");
        assert_eq!(placement.placement, "Playoffs - 1st");
        assert_eq!(placement.team, "Sentinels");
        assert_eq!(placement.winnings.as_deref(), Some("$350,000"));
        assert_eq!(placement.year, 2024);

        assert_eq!(player.news[0].title, "TenZ retires");
    }

    #[test]
    fn test_player_defaults() {
        let player = extract(r#"<div class="player-header"><h1 class="wf-title">nobody</h1></div>"#);
        assert_eq!(player.agent_stats.timespan, AgentStatTimespan::D60);
        assert!(player.agent_stats.stats.is_empty());
        assert!(player.total_winnings.is_empty());
        assert!(player.teams.is_empty());
    }
}
