//! Folder-wide poster processing.

/// Cooperative cancellation flag checked between posters.
pub mod cancel;
/// Batch driver: enumerate, composite and save posters.
pub mod driver;
