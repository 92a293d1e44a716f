//! Durable per-day peak-score bucket.
//!
//! The only state that survives between computation cycles. Writes are
//! monotonic max-merges keyed by (day, instrument), so re-running a cycle
//! or racing another caller can never regress a peak. Day rollover needs
//! no special handling: a new day simply reads an empty bucket.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{
    ConnectOptions, Pool, Row, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use tokio::sync::RwLock;

/// Abstract interface for peak-score persistence.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn initialize(&self) -> Result<()>;

    /// All persisted peaks for one day, read at the start of a cycle.
    async fn load_day(&self, day: NaiveDate) -> Result<HashMap<String, f64>>;

    /// Compare-and-set max-merge: the stored value only ever goes up.
    /// Safe to retry and safe under concurrent callers.
    async fn merge_peak(&self, day: NaiveDate, instrument_id: &str, score: f64) -> Result<()>;
}

// --- SQLITE IMPLEMENTATION ---

pub struct SqliteScoreStore {
    pool: Pool<Sqlite>,
}

impl SqliteScoreStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(60))
            .synchronous(SqliteSynchronous::Normal)
            .log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(10));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connection_options)
            .await
            .context("Failed to connect to peak-score DB")?;

        let store = Self { pool };
        store.initialize().await?;

        Ok(store)
    }
}

#[async_trait]
impl ScoreStore for SqliteScoreStore {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS peak_scores (
                day TEXT NOT NULL,
                instrument_id TEXT NOT NULL,
                peak_score REAL NOT NULL,
                PRIMARY KEY (day, instrument_id)
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_day(&self, day: NaiveDate) -> Result<HashMap<String, f64>> {
        let rows = sqlx::query(
            "SELECT instrument_id, peak_score FROM peak_scores WHERE day = ?",
        )
        .bind(day.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get::<String, _>("instrument_id"), row.get::<f64, _>("peak_score")))
            .collect())
    }

    async fn merge_peak(&self, day: NaiveDate, instrument_id: &str, score: f64) -> Result<()> {
        // The max lives in the upsert itself, so concurrent writers
        // resolve inside SQLite rather than via read-modify-write races.
        sqlx::query(
            r#"
            INSERT INTO peak_scores (day, instrument_id, peak_score)
            VALUES (?, ?, ?)
            ON CONFLICT (day, instrument_id)
            DO UPDATE SET peak_score = MAX(peak_score, excluded.peak_score);
            "#,
        )
        .bind(day.to_string())
        .bind(instrument_id)
        .bind(score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// --- IN-MEMORY IMPLEMENTATION ---

/// Volatile store for tests and dry runs. Same max-merge contract as the
/// SQLite one, no durability.
#[derive(Default)]
pub struct MemoryScoreStore {
    buckets: RwLock<HashMap<NaiveDate, HashMap<String, f64>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn load_day(&self, day: NaiveDate) -> Result<HashMap<String, f64>> {
        Ok(self
            .buckets
            .read()
            .await
            .get(&day)
            .cloned()
            .unwrap_or_default())
    }

    async fn merge_peak(&self, day: NaiveDate, instrument_id: &str, score: f64) -> Result<()> {
        let mut buckets = self.buckets.write().await;
        let entry = buckets
            .entry(day)
            .or_default()
            .entry(instrument_id.to_string())
            .or_insert(score);
        *entry = entry.max(score);
        Ok(())
    }
}
