mod radar_record;

pub use radar_record::{EntryPoint, RadarRecord, SignalState};
