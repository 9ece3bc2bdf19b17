//! Run configuration shared with the setup front end.

/// Date-named output folder labels.
pub mod date;
/// JSON run configuration record.
pub mod run_config;
