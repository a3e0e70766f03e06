//! Integration tests for core model helpers.

use vlr_core::{
    CompletedMatchMap, ExtractionError, MatchOutcome, PlayerMapStats, ScoreLine, SideStats,
    StatValue, TeamMatchesPage,
};

fn stats(name: &str) -> PlayerMapStats {
    PlayerMapStats {
        name: name.to_string(),
        link: format!("https://www.vlr.gg/player/1/{name}"),
        agents: Vec::new(),
        rating: StatValue::default(),
        acs: StatValue::default(),
        k: StatValue::default(),
        d: StatValue::default(),
        a: StatValue::default(),
        kd_diff: StatValue::default(),
        kast: StatValue::default(),
        adr: StatValue::default(),
        hs_percent: StatValue::default(),
        fk: StatValue::default(),
        fd: StatValue::default(),
        fk_diff: StatValue::default(),
    }
}

#[test]
fn test_map_swap_exchanges_team_fields() {
    let map = CompletedMatchMap {
        name: "Ascent".into(),
        duration: "40:01".into(),
        team1_score: Some(9),
        team2_score: Some(13),
        team1_side_stats: SideStats {
            attack: Some(4),
            defense: Some(5),
        },
        team2_side_stats: SideStats {
            attack: Some(7),
            defense: Some(6),
        },
        rounds: Vec::new(),
        team1_stats: vec![stats("left")],
        team2_stats: vec![stats("right")],
    };

    let swapped = map.swapped();
    assert_eq!(swapped.name, "Ascent");
    assert_eq!(swapped.team1_score, Some(13));
    assert_eq!(swapped.team2_score, Some(9));
    assert_eq!(swapped.team1_side_stats.attack, Some(7));
    assert_eq!(swapped.team1_stats[0].name, "right");
    assert_eq!(swapped.team2_stats[0].name, "left");
}

#[test]
fn test_team_matches_page_json_shape() {
    let page = TeamMatchesPage::default();
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["hasNextPage"], serde_json::json!(false));
    assert!(value["matches"].as_array().unwrap().is_empty());
}

#[test]
fn test_score_line_serializes_status() {
    let line = ScoreLine {
        own: 2,
        opponent: 0,
        status: MatchOutcome::Win,
    };
    let value = serde_json::to_value(line).unwrap();
    assert_eq!(value["status"], serde_json::json!("win"));
}

#[test]
fn test_extraction_error_messages() {
    let err = ExtractionError::missing(".team-header");
    assert!(err.to_string().contains(".team-header"));
}
