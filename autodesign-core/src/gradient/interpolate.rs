use crate::foundation::core::Rgb8;
use crate::foundation::error::{AutodesignError, AutodesignResult};

/// Color at `step` of a `total_steps`-long linear gradient from `start` to `end`.
///
/// Each channel is `start + (step / total_steps) * (end - start)`, truncated toward zero and
/// clamped into `0..=255`. `step == 0` yields `start`; the gradient never reaches `end` exactly
/// unless `step == total_steps`.
pub fn interpolate(start: Rgb8, end: Rgb8, step: i64, total_steps: i64) -> AutodesignResult<Rgb8> {
    if total_steps <= 0 {
        return Err(AutodesignError::invalid_parameter(format!(
            "gradient step count must be >= 1 (got {total_steps})"
        )));
    }

    let ratio = step as f64 / total_steps as f64;
    let channel = |a: u8, b: u8| -> u8 {
        let a = f64::from(a);
        let v = (a + ratio * (f64::from(b) - a)).trunc();
        v.clamp(0.0, 255.0) as u8
    };

    Ok(Rgb8::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    ))
}

/// All `total_steps` colors of the gradient, outermost first.
pub fn gradient_steps(start: Rgb8, end: Rgb8, total_steps: u32) -> AutodesignResult<Vec<Rgb8>> {
    let n = i64::from(total_steps);
    (0..n).map(|i| interpolate(start, end, i, n)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/interpolate.rs"]
mod tests;
