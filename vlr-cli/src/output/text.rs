//! Text output formatting with colors.

use std::fmt::Write as _;
use std::path::Path;

use vlr_core::{
    CompletedMatch, IncomingMatch, IncomingStatus, MatchOutcome, MetricsReport, Player,
    SearchKind, SearchResult, Team, TeamMatch, TeamMatchStatus, TeamTransaction,
    TransactionAction,
};
use vlr_store::ClientConfig;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

const RULE_WIDTH: usize = 40;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ------------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------------

    /// Formats a team profile.
    pub fn format_team(&self, team: &Team) -> String {
        let mut out = self.header(&format!("{} ({})", team.name, team.tag));

        let _ = writeln!(out, "Country:  {} [{}]", team.country, team.country_code);
        if let Some(website) = &team.website {
            let _ = writeln!(out, "Website:  {}", self.cyan(website));
        }
        let ranking = &team.ranking;
        let _ = writeln!(
            out,
            "Ranking:  #{} {} (rating {}, {}W-{}L)",
            ranking.rank, ranking.region, ranking.rating, ranking.record.wins, ranking.record.losses
        );
        let _ = writeln!(out, "Winnings: {}", team.total_winnings);

        if !team.roster.players.is_empty() {
            let _ = writeln!(out, "\nPlayers:");
            for player in &team.roster.players {
                let captain = if player.is_captain { " (c)" } else { "" };
                let real = player.real_name.as_deref().unwrap_or("");
                let _ = writeln!(out, "  • {}{captain} {}", player.alias, self.dim(real));
            }
        }
        if !team.roster.staff.is_empty() {
            let _ = writeln!(out, "\nStaff:");
            for staff in &team.roster.staff {
                let _ = writeln!(out, "  • {} {}", staff.alias, self.dim(&staff.role));
            }
        }
        if !team.recent_results.is_empty() {
            let _ = writeln!(out, "\nRecent results:");
            for result in &team.recent_results {
                let _ = writeln!(
                    out,
                    "  {} vs {} {}",
                    self.result_label(&result.result),
                    result.opponent_name,
                    self.dim(&result.event_name)
                );
            }
        }

        out.trim_end().to_string()
    }

    /// Formats a player profile.
    pub fn format_player(&self, player: &Player) -> String {
        let mut out = self.header(&player.alias);

        if !player.real_name.is_empty() {
            let _ = writeln!(out, "Name:     {}", player.real_name);
        }
        let _ = writeln!(
            out,
            "Country:  {} [{}]",
            player.country.name, player.country.code
        );
        let _ = writeln!(out, "Winnings: {}", player.total_winnings);

        if let Some(team) = player.teams.iter().find(|t| !t.is_past) {
            let _ = writeln!(out, "Team:     {} {}", team.name, self.dim(&team.date_range));
        }

        let stats = &player.agent_stats;
        if !stats.stats.is_empty() {
            let _ = writeln!(out, "\nAgents ({}):", stats.timespan.as_str());
            for agent in &stats.stats {
                let rating = agent.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.2}"));
                let _ = writeln!(out, "  {:<10} {:>6}  rating {rating}", agent.name, agent.usage);
            }
        }

        if !player.recent_matches.is_empty() {
            let _ = writeln!(out, "\nRecent matches:");
            for game in &player.recent_matches {
                let _ = writeln!(out, "  {}", self.match_line(game));
            }
        }

        out.trim_end().to_string()
    }

    /// Formats a completed match, or a notice when it is not finished.
    pub fn format_completed_match(&self, id: &str, game: Option<&CompletedMatch>) -> String {
        let Some(game) = game else {
            return format!("Match {id} is not finished yet");
        };

        let score = |s: Option<u32>| s.map_or_else(|| "-".to_string(), |s| s.to_string());
        let mut out = self.header(&format!(
            "{} {}:{} {}",
            game.team1.name,
            score(game.team1.score),
            score(game.team2.score),
            game.team2.name
        ));

        let _ = writeln!(out, "Event:  {} {}", game.event.name, self.dim(&game.event.series));
        let _ = writeln!(out, "Date:   {} {}", game.date, game.time);
        if !game.patch.is_empty() {
            let _ = writeln!(out, "Patch:  {}", game.patch);
        }
        let _ = writeln!(out, "Format: {}", game.best_of);

        if !game.maps.is_empty() {
            let _ = writeln!(out, "\nMaps:");
            for map in &game.maps {
                let _ = writeln!(
                    out,
                    "  {:<10} {}:{} {}",
                    map.name,
                    score(map.team1_score),
                    score(map.team2_score),
                    self.dim(&map.duration)
                );
            }
        }

        out.trim_end().to_string()
    }

    /// Formats a team's transaction log.
    pub fn format_transactions(&self, team_id: &str, txns: &[TeamTransaction]) -> String {
        let mut out = self.header(&format!("Transactions of team {team_id}"));

        if txns.is_empty() {
            let _ = writeln!(out, "No transactions");
        }
        for txn in txns {
            let action = match txn.action {
                TransactionAction::Join => self.green("join    "),
                TransactionAction::Leave => self.red("leave   "),
                TransactionAction::Inactive => self.yellow("inactive"),
            };
            let _ = writeln!(
                out,
                "{:<10} {action} {} {}",
                txn.date,
                txn.player.alias,
                self.dim(&txn.position)
            );
        }

        out.trim_end().to_string()
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    /// Formats the incoming matches listing.
    pub fn format_incoming(&self, matches: &[IncomingMatch]) -> String {
        let mut out = self.header("Incoming matches");
        let mut current_date = None;

        for game in matches {
            if current_date != Some(game.date.as_str()) {
                let _ = writeln!(out, "\n{}", self.bold(&game.date));
                current_date = Some(game.date.as_str());
            }

            let status = match game.status {
                IncomingStatus::Live => self.red("LIVE"),
                IncomingStatus::Upcoming => game.eta.clone().unwrap_or_else(|| game.time.clone()),
            };
            let names: Vec<&str> = game.teams.iter().map(|t| t.name.as_str()).collect();
            let _ = writeln!(
                out,
                "  {:<8} {} {}",
                status,
                names.join(" vs "),
                self.dim(&game.event.name)
            );
        }

        if matches.is_empty() {
            let _ = writeln!(out, "No matches scheduled");
        }

        out.trim_end().to_string()
    }

    /// Formats a team's match history.
    pub fn format_team_matches(&self, team_id: &str, matches: &[TeamMatch], has_more: bool) -> String {
        let mut out = self.header(&format!("Matches of team {team_id}"));

        for game in matches {
            let _ = writeln!(out, "{}", self.match_line(game));
        }
        if matches.is_empty() {
            let _ = writeln!(out, "No matches");
        }
        if has_more {
            let _ = writeln!(out, "{}", self.dim("More pages available"));
        }

        out.trim_end().to_string()
    }

    /// Formats search results.
    pub fn format_search(&self, query: &str, results: &[SearchResult]) -> String {
        let mut out = self.header(&format!("Results for \"{query}\""));

        for result in results {
            let kind = match result.kind {
                SearchKind::Team => "team",
                SearchKind::Player => "player",
                SearchKind::Event => "event",
                SearchKind::Series => "series",
            };
            let _ = writeln!(
                out,
                "{:<7} {:<8} {} {}",
                kind,
                result.id,
                result.name,
                self.dim(result.description.as_deref().unwrap_or(""))
            );
        }
        if results.is_empty() {
            let _ = writeln!(out, "No results");
        }

        out.trim_end().to_string()
    }

    // ------------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------------

    /// Formats the client's call metrics.
    pub fn format_metrics(&self, report: &MetricsReport) -> String {
        format!(
            "{} {} calls, {:.1} ms total, {:.0}% success",
            self.dim("Stats:"),
            report.call_count,
            report.elapsed_ms,
            report.success_rate * 100.0
        )
    }

    /// Formats the effective configuration.
    pub fn format_config(&self, config: &ClientConfig, path: &Path) -> String {
        let mut out = self.header("vlr configuration");

        let _ = writeln!(out, "File: {}", path.display());
        let _ = writeln!(out, "\nCache:");
        let _ = writeln!(out, "  enabled:     {}", config.cache.enabled);
        let _ = writeln!(out, "  max size:    {}", config.cache.max_size);
        let _ = writeln!(out, "  default ttl: {}s", config.cache.default_ttl_secs);
        let _ = writeln!(out, "  entity ttl:  {}s", config.cache.entity_ttl_secs);
        let _ = writeln!(out, "\nFetch:");
        let _ = writeln!(out, "  retries:     {}", config.fetch.retries);
        let _ = writeln!(out, "  retry delay: {}ms", config.fetch.retry_delay_ms);
        let _ = writeln!(out, "  timeout:     {}ms", config.fetch.timeout_ms);
        let _ = writeln!(out, "  max pages:   {}", config.fetch.max_pages);
        let _ = writeln!(out, "  user agent:  {}", config.fetch.user_agent);
        let _ = writeln!(out, "\nLog level: {}", config.log_level);

        out.trim_end().to_string()
    }

    /// Formats an error for one requested item.
    pub fn format_error(&self, item: &str, error: &str) -> String {
        format!("{} {}: {}", self.red("✗"), self.bold(item), error)
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn header(&self, title: &str) -> String {
        format!("{}\n{}\n", self.bold(title), "─".repeat(RULE_WIDTH))
    }

    fn match_line(&self, game: &TeamMatch) -> String {
        let result = match game.status {
            TeamMatchStatus::Upcoming => self.dim("upcoming"),
            TeamMatchStatus::Completed => {
                let score = format!("{}:{}", game.result.own, game.result.opponent);
                match game.result.status {
                    MatchOutcome::Win => self.green(&score),
                    MatchOutcome::Loss => self.red(&score),
                    MatchOutcome::Draw => score,
                }
            }
        };
        format!(
            "{:<12} {} vs {} {}",
            game.date,
            result,
            game.opponent.name,
            self.dim(&game.event.name)
        )
    }

    fn result_label(&self, result: &str) -> String {
        let lowered = result.to_lowercase();
        if lowered.starts_with('w') {
            self.green(result)
        } else if lowered.starts_with('l') {
            self.red(result)
        } else {
            result.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors && !text.is_empty() {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}
