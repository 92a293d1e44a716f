// Signal analysis: classification, entry detection, scoring, ranking
pub mod entry_move;
pub mod ranker;
pub mod scoring;
pub mod staircase;
