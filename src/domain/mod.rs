mod snapshot;
mod timeline;

pub use snapshot::{BreakType, Snapshot};
pub use timeline::Timeline;
pub(crate) use timeline::confirmed_break_in;
