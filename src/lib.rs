#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
mod utils;

// Re-export commonly used types outside of crate
pub use data::{JsonDirProvider, MemoryScoreStore, ScoreStore, SnapshotProvider, SqliteScoreStore};
pub use domain::{BreakType, Snapshot, Timeline};
pub use engine::RadarEngine;
pub use models::{EntryPoint, RadarRecord, SignalState};

// CLI argument parsing
use clap::Parser;

use crate::config::constants::ranking::DEFAULT_TOP_N;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding per-day batch subdirectories (<dir>/<YYYY-MM-DD>/*.json)
    #[arg(long, default_value = "batches")]
    pub data_dir: String,

    /// Trading day to compute, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,

    /// How many instruments to keep in the ranked watchlist
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// SQLite file for the day's cumulative peak scores
    #[arg(long, default_value = "peak_scores.sqlite")]
    pub db: String,
}
