use super::*;

#[test]
fn mix_is_exact_at_mask_extremes() {
    for dst in [0u8, 17, 128, 255] {
        for src in [0u8, 99, 254, 255] {
            assert_eq!(mix_div255_u8(dst, src, 0), dst);
            assert_eq!(mix_div255_u8(dst, src, 255), src);
        }
    }
}

#[test]
fn mix_halfway_rounds() {
    assert_eq!(mix_div255_u8(0, 255, 128), 128);
    assert_eq!(mix_div255_u8(255, 0, 128), 127);
}

#[test]
fn half_floor_matches_floor_division() {
    assert_eq!(half_floor(190), 95);
    assert_eq!(half_floor(191), 95);
    assert_eq!(half_floor(-1), -1);
    assert_eq!(half_floor(-10), -5);
    assert_eq!(half_floor(-11), -6);
}
