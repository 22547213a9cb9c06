//! Integration tests for the plain (domain-agnostic) invertibility
//! conditions, checked by brute force over small widths.

use bvprop::bv::Bv;
use bvprop::invert::plain::*;

fn brute_force_solvable(
    width: u32,
    t: u64,
    s: u64,
    op: impl Fn(&Bv, &Bv) -> Bv,
    pos_x: u32,
) -> bool {
    let sv = Bv::from_u64(s, width);
    let tv = Bv::from_u64(t, width);
    (0u64..(1 << width)).any(|xv| {
        let xb = Bv::from_u64(xv, width);
        let result = if pos_x == 0 { op(&xb, &sv) } else { op(&sv, &xb) };
        result.to_u64() == tv.to_u64()
    })
}

#[test]
fn test_is_inv_and_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let expected = brute_force_solvable(width, t, s, |a, b| a.and(b), 0);
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            assert_eq!(is_inv_and(&tv, &sv), expected, "s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_mul_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let expected = brute_force_solvable(width, t, s, |a, b| a.mul(b), 0);
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            assert_eq!(is_inv_mul(&tv, &sv), expected, "s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_ult_matches_brute_force_both_positions() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..2 {
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);

            let expected0 = (0u64..8).any(|xv| (xv < s) as u64 == t);
            assert_eq!(is_inv_ult(&tv, &sv, 0), expected0, "pos=0 s={} t={}", s, t);

            let expected1 = (0u64..8).any(|xv| (s < xv) as u64 == t);
            assert_eq!(is_inv_ult(&tv, &sv, 1), expected1, "pos=1 s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_udiv_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            let expected = (0u64..8).any(|xv| Bv::from_u64(xv, width).udiv(&sv).to_u64() == t);
            assert_eq!(is_inv_udiv(&tv, &sv, 0), expected, "s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_sll_pos_x_0_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let expected = brute_force_solvable(width, t, s, |a, b| a.sll(b), 0);
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            assert_eq!(is_inv_sll(&tv, &sv, 0), expected, "s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_sll_pos_x_1_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let expected = brute_force_solvable(width, t, s, |a, b| a.sll(b), 1);
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            assert_eq!(is_inv_sll(&tv, &sv, 1), expected, "s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_srl_matches_brute_force_both_positions() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);

            let expected0 = brute_force_solvable(width, t, s, |a, b| a.srl(b), 0);
            assert_eq!(is_inv_srl(&tv, &sv, 0), expected0, "pos=0 s={} t={}", s, t);

            let expected1 = brute_force_solvable(width, t, s, |a, b| a.srl(b), 1);
            assert_eq!(is_inv_srl(&tv, &sv, 1), expected1, "pos=1 s={} t={}", s, t);
        }
    }
}

#[test]
fn test_is_inv_udiv_pos_x_1_matches_brute_force() {
    let width = 3u32;
    for s in 0u64..8 {
        for t in 0u64..8 {
            let expected = brute_force_solvable(width, t, s, |a, b| a.udiv(b), 1);
            let sv = Bv::from_u64(s, width);
            let tv = Bv::from_u64(t, width);
            assert_eq!(is_inv_udiv(&tv, &sv, 1), expected, "s={} t={}", s, t);
        }
    }
}

fn concat_value(hi_val: u64, hi_width: u32, lo_val: u64, lo_width: u32) -> u64 {
    let _ = hi_width;
    (hi_val << lo_width) | lo_val
}

#[test]
fn test_is_inv_concat_matches_brute_force_both_positions() {
    let bw_s = 2u32;
    let bw_t = 5u32;
    let bw_x = bw_t - bw_s;

    // pos_x = 0: x o s = t, x is the upper bw_x bits.
    for s in 0u64..(1 << bw_s) {
        for t in 0u64..(1 << bw_t) {
            let sv = Bv::from_u64(s, bw_s);
            let tv = Bv::from_u64(t, bw_t);
            let expected =
                (0u64..(1 << bw_x)).any(|xv| concat_value(xv, bw_x, s, bw_s) == t);
            assert_eq!(is_inv_concat(&tv, &sv, 0), expected, "pos=0 s={} t={}", s, t);
        }
    }

    // pos_x = 1: s o x = t, x is the lower bw_x bits.
    for s in 0u64..(1 << bw_s) {
        for t in 0u64..(1 << bw_t) {
            let sv = Bv::from_u64(s, bw_s);
            let tv = Bv::from_u64(t, bw_t);
            let expected =
                (0u64..(1 << bw_x)).any(|xv| concat_value(s, bw_s, xv, bw_x) == t);
            assert_eq!(is_inv_concat(&tv, &sv, 1), expected, "pos=1 s={} t={}", s, t);
        }
    }
}
