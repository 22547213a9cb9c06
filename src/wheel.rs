//! `WheelFactorizer` — trial-division factorization using a mod-30 wheel.
//!
//! Skips multiples of `2`, `3`, `5` past the initial primes by stepping the
//! trial factor through the increment table `{1, 2, 2, 4, 2, 4, 2, 4, 6, 2,
//! 6}`, which (starting from `2`) visits exactly the integers coprime to
//! `30`. All arithmetic runs at the bit-width of the number being factored,
//! so wraparound is well-defined and doubles as the "no more factors"
//! termination signal. Grounded in `bzlabvdomain.c`'s `wfact_init` /
//! `wfact_next` / `bzla_bvdomain_get_factor`.

use std::cmp::Ordering;

use crate::bv::Bv;
use crate::domain::BvDomain;

const INCREMENTS: [u64; 11] = [1, 2, 2, 4, 2, 4, 2, 4, 6, 2, 6];

/// Yields the prime factors of a bit-vector value, smallest first, ending
/// with whatever composite remainder is left once the trial factor exceeds
/// `sqrt(num)`.
///
/// Implements `Iterator<Item = Bv>`; stops (`None`) once the residual is
/// fully factored, the per-call iteration `limit` is exceeded (`0` means
/// unbounded), or the trial factor overflows its width.
pub struct WheelFactorizer {
    width: u32,
    num: Bv,
    fact: Bv,
    pos: usize,
    limit: u64,
    done: bool,
}

impl WheelFactorizer {
    /// Begin factoring `n`, bounding each `next()` call to `limit`
    /// iterations (`0` for unbounded).
    pub fn new(n: Bv, limit: u64) -> Self {
        let width = n.width();
        WheelFactorizer {
            width,
            num: n,
            fact: Bv::from_u64(2, width),
            pos: 0,
            limit,
            done: false,
        }
    }

    /// `true` once factoring has terminated (residual found, limit hit, or
    /// the trial factor overflowed).
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for WheelFactorizer {
    type Item = Bv;

    fn next(&mut self) -> Option<Bv> {
        if self.done {
            return None;
        }

        let mut iterations: u64 = 0;
        loop {
            iterations += 1;
            if self.limit != 0 && iterations > self.limit {
                self.done = true;
                return None;
            }

            // sqrt(num) is the largest factor worth trying; beyond it the
            // residual itself is prime (or 1).
            let fact_squared = self.fact.mul(&self.fact);
            if fact_squared.compare(&self.num) == Ordering::Greater {
                self.done = true;
                return Some(self.num);
            }

            let (quot, rem) = self.num.udiv_urem(&self.fact);
            if rem.is_zero() {
                let factor = self.fact;
                self.num = quot;
                return Some(factor);
            }

            let inc = Bv::from_u64(INCREMENTS[self.pos], self.width);
            let next_fact = self.fact.add(&inc);
            let overflowed = next_fact.compare(&self.fact) != Ordering::Greater;
            self.fact = next_fact;
            self.pos = if self.pos == 10 { 3 } else { self.pos + 1 };
            if overflowed {
                self.done = true;
                return None;
            }
        }
    }
}

/// Find a factor of `num` satisfying `excl_min_val` (if given, the factor
/// must be strictly greater than it) and membership in `domain` (if given).
///
/// Used by the `mul`/`udiv` const-bit invertibility checks to find a
/// domain-compatible divisor witness.
pub fn get_factor(
    num: Bv,
    domain: Option<&BvDomain>,
    excl_min_val: Option<&Bv>,
    limit: u64,
) -> Option<Bv> {
    for factor in WheelFactorizer::new(num, limit) {
        let above_min = excl_min_val.map_or(true, |m| factor.compare(m) == Ordering::Greater);
        let in_domain = domain.map_or(true, |d| d.check_fixed_bits(&factor));
        if above_min && in_domain {
            return Some(factor);
        }
    }
    None
}
