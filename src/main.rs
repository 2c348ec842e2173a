//! Entry point: parse CLI and run the export pipeline.

use clap::Parser;
use nba_export::{
    cli::Export,
    commands::export::{handle_export, ExportParams},
    nba::http::STATS_BASE_URL,
};

#[tokio::main]
async fn main() {
    let args = Export::parse();

    let result = handle_export(ExportParams {
        season: args.season,
        output: args.output,
        debug: args.debug,
        base_url: STATS_BASE_URL.to_string(),
    })
    .await;

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
