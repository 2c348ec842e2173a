//! HTTP client for the stats.nba.com player statistics endpoint.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;

use crate::cli::types::Season;
use crate::error::Result;
use crate::nba::types::{ResultSet, StatsResponse};


/// Base URL for stats.nba.com endpoints.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Endpoint serving league-wide per-player aggregates.
pub const PLAYER_STATS_ENDPOINT: &str = "leaguedashplayerstats";

/// Name of the table we consume from the endpoint's response.
pub const PLAYER_STATS_RESULT_SET: &str = "LeagueDashPlayerStats";

/// Aggregation mode: whole-season sums, not per-game or per-36 averages.
const PER_MODE: &str = "Totals";

const SEASON_TYPE: &str = "Regular Season";

/// Headers stats.nba.com requires before it will answer at all.
///
/// The endpoint hangs or returns an error page for clients that do not look
/// like a browser tab on nba.com.
pub fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/124.0 Safari/537.36",
        ),
    );
    h.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Full query-parameter set for `leaguedashplayerstats`.
///
/// The endpoint 400s when any required field is missing, including the ones
/// it accepts empty, so every filter is sent at its neutral value.
fn player_stats_params(season: &Season) -> Vec<(&'static str, &str)> {
    vec![
        ("College", ""),
        ("Conference", ""),
        ("Country", ""),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("Division", ""),
        ("DraftPick", ""),
        ("DraftYear", ""),
        ("GameScope", ""),
        ("GameSegment", ""),
        ("Height", ""),
        ("LastNGames", "0"),
        ("LeagueID", "00"),
        ("Location", ""),
        ("MeasureType", "Base"),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Outcome", ""),
        ("PORound", "0"),
        ("PaceAdjust", "N"),
        ("PerMode", PER_MODE),
        ("Period", "0"),
        ("PlayerExperience", ""),
        ("PlayerPosition", ""),
        ("PlusMinus", "N"),
        ("Rank", "N"),
        ("Season", season.as_str()),
        ("SeasonSegment", ""),
        ("SeasonType", SEASON_TYPE),
        ("ShotClockRange", ""),
        ("StarterBench", ""),
        ("TeamID", "0"),
        ("VsConference", ""),
        ("VsDivision", ""),
        ("Weight", ""),
    ]
}

/// Fetch season-total statistics for every player in the given season.
///
/// Issues exactly one GET with no retry or timeout. Any transport error,
/// non-2xx status, or payload without the expected result set fails the
/// whole call; there is no partial-result mode. `base_url` is a parameter so
/// tests can stand in a mock server.
pub async fn get_league_player_stats(
    client: &Client,
    base_url: &str,
    season: &Season,
    debug: bool,
) -> Result<ResultSet> {
    let url = format!("{base_url}/{PLAYER_STATS_ENDPOINT}");
    let params = player_stats_params(season);

    let req = client
        .get(&url)
        .headers(stats_header_map())
        .query(&params)
        .build()?;

    if debug {
        eprintln!("GET {}", req.url());
    }

    let res = client
        .execute(req)
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    res.into_result_set(PLAYER_STATS_RESULT_SET)
}
