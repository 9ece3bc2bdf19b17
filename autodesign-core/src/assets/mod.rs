//! Image loading and poster normalization.

/// Decoding of template and poster files into RGBA8.
pub mod decode;
/// Fixed-width, aspect-preserving poster resize.
pub mod normalize;
