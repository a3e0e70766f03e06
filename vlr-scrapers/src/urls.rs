//! vlr.gg URL construction and normalization.

use url::form_urlencoded;
use vlr_core::SearchCategory;

/// Site origin.
pub const BASE_URL: &str = "https://www.vlr.gg";

/// Makes a page-relative URL absolute.
///
/// - `//host/x` -> `https://host/x`
/// - `/x` -> `https://www.vlr.gg/x`
/// - empty stays empty; anything else is returned unchanged
pub fn normalize(url: &str) -> String {
    if url.is_empty() {
        String::new()
    } else if url.starts_with("//") {
        format!("https:{url}")
    } else if url.starts_with('/') {
        format!("{BASE_URL}{url}")
    } else {
        url.to_string()
    }
}

/// [`normalize`] for an optional attribute, empty when absent.
pub fn normalize_opt(url: Option<&str>) -> String {
    url.map(normalize).unwrap_or_default()
}

/// Team profile page.
pub fn team(id: &str) -> String {
    format!("{BASE_URL}/team/{id}")
}

/// Player profile page.
pub fn player(id: &str) -> String {
    format!("{BASE_URL}/player/{id}")
}

/// Match page.
pub fn completed_match(id: &str) -> String {
    format!("{BASE_URL}/{id}")
}

/// Upcoming and live match listing.
pub fn incoming_matches() -> String {
    format!("{BASE_URL}/matches")
}

/// One page of a team's match history (pages start at 1).
pub fn team_matches(id: &str, page: u32) -> String {
    format!("{BASE_URL}/team/matches/{id}/?page={page}")
}

/// Search results for `query` restricted to `category`.
pub fn search(query: &str, category: SearchCategory) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{BASE_URL}/search/?q={encoded}&type={}", category.as_str())
}

/// Roster transactions of a team.
pub fn team_transactions(id: &str) -> String {
    format!("{BASE_URL}/team/transactions/{id}")
}
