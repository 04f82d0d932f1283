mod analyze;

pub use analyze::{analyze_snapshot, load_advisor, replay, resolve_data_dir};
