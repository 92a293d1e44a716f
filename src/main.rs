use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use oi_radar::config::clean_symbol;
use oi_radar::{Cli, JsonDirProvider, RadarEngine, RadarRecord, SnapshotProvider, SqliteScoreStore};

/// Display row for the ranked watchlist table.
#[derive(Tabled)]
struct RadarRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Break")]
    break_type: String,
    #[tabled(rename = "Stair")]
    staircase: &'static str,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Move %")]
    current_move: String,
    #[tabled(rename = "Max %")]
    max_move: String,
    #[tabled(rename = "Score")]
    latest_score: String,
    #[tabled(rename = "Peak")]
    peak_score: String,
    #[tabled(rename = "Rank")]
    smart_rank: String,
}

impl From<&RadarRecord> for RadarRow {
    fn from(rec: &RadarRecord) -> Self {
        let entry = rec
            .entry
            .as_ref()
            .map(|e| format!("{} @ {:.2}", e.time, e.price))
            .unwrap_or_else(|| "-".to_string());

        Self {
            symbol: clean_symbol(&rec.display_name).to_string(),
            state: rec.state.to_string(),
            break_type: rec.break_type.to_string(),
            staircase: if rec.is_staircase { "yes" } else { "-" },
            entry,
            current_move: format!("{:.2}", rec.current_move_pct),
            max_move: format!("{:.2}", rec.max_move_pct),
            latest_score: format!("{:.2}", rec.latest_score),
            peak_score: format!("{:.2}", rec.peak_score),
            smart_rank: format!("{:.2}", rec.smart_rank),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let day = args.date.unwrap_or_else(|| Local::now().date_naive());

    log::info!("OI staircase radar for {day} (top {})", args.top);

    // 2. Fetch the day's raw batches once, up front
    let provider = JsonDirProvider::new(args.data_dir.as_str());
    let batches = provider.fetch_batches(day).await?;
    if batches.is_empty() {
        log::warn!("No batches recorded for {day} under {}", args.data_dir);
        return Ok(());
    }

    // 3. Recompute every instrument and rank
    let store = Arc::new(SqliteScoreStore::new(&args.db).await?);
    let engine = RadarEngine::new(store);
    let ranked = engine.run_cycle(day, &batches, args.top).await?;

    if ranked.is_empty() {
        log::warn!("No instruments produced a record this cycle");
        return Ok(());
    }

    // 4. Render the watchlist
    let rows: Vec<RadarRow> = ranked.iter().map(RadarRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");

    Ok(())
}
