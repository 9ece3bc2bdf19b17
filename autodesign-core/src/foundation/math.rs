/// `(src * m + dst * (255 - m)) / 255`, rounded. Exact at `m == 0` and `m == 255`.
pub(crate) fn mix_div255_u8(dst: u8, src: u8, m: u8) -> u8 {
    let m = u32::from(m);
    let v = u32::from(src) * m + u32::from(dst) * (255 - m);
    ((v + 127) / 255) as u8
}

/// Floor division by two that stays correct for negative values.
pub(crate) fn half_floor(v: i64) -> i64 {
    v.div_euclid(2)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
