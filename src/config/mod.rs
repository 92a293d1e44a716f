//! Configuration module for the radar engine.

mod ticker;

// Public
pub mod constants;

// Re-export commonly used items
pub use ticker::{TICKER_CORRECTIONS, clean_symbol};
