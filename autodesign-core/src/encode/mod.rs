//! Output encoding.
//!
//! Every composited canvas is written as PNG regardless of the poster's input format.

/// PNG file output and output directory helpers.
pub mod png;
