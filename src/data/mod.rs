pub mod history;
pub mod normalizer;
pub mod provider;
pub mod score_store;

pub use provider::{JsonDirProvider, SnapshotProvider};
pub use score_store::{MemoryScoreStore, ScoreStore, SqliteScoreStore};
