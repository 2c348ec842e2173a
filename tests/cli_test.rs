//! CLI parsing tests

use clap::Parser;
use nba_export::{cli::Export, Season};
use std::path::PathBuf;

#[test]
fn test_no_args_uses_defaults() {
    let args = Export::try_parse_from(["nba-export"]).unwrap();

    assert_eq!(args.season, None);
    assert_eq!(args.output, PathBuf::from("all_player_stats.json"));
    assert!(!args.debug);
}

#[test]
fn test_season_flag() {
    let args = Export::try_parse_from(["nba-export", "--season", "2019-20"]).unwrap();
    assert_eq!(args.season, Some(Season::new("2019-20")));

    let args = Export::try_parse_from(["nba-export", "-s", "2019-20"]).unwrap();
    assert_eq!(args.season, Some(Season::new("2019-20")));
}

#[test]
fn test_output_and_debug_flags() {
    let args =
        Export::try_parse_from(["nba-export", "-o", "out/totals.json", "--debug"]).unwrap();

    assert_eq!(args.output, PathBuf::from("out/totals.json"));
    assert!(args.debug);
}

#[test]
fn test_season_token_is_not_validated_locally() {
    // Malformed tokens are passed through and surface as provider errors.
    let args = Export::try_parse_from(["nba-export", "--season", "not-a-season"]).unwrap();
    assert_eq!(args.season, Some(Season::new("not-a-season")));
}

#[test]
fn test_season_display_round_trip() {
    let season: Season = "2024-25".parse().unwrap();
    assert_eq!(season.to_string(), "2024-25");
    assert_eq!(season.as_str(), "2024-25");
}

#[test]
fn test_season_default() {
    assert_eq!(Season::default(), Season::new("2024-25"));
}
