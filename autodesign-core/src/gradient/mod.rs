//! Linear color gradients and the gradient border frame.

/// Concentric-ring gradient frame rendering.
pub mod border;
/// Per-channel linear color interpolation.
pub mod interpolate;
