//! `BvDomainGenerator` — ordered and random enumeration of `⟦D⟧ ∩ [min, max]`.
//!
//! Rather than rejection-sampling the whole width and discarding values
//! outside the domain, the generator packs the domain's *free* bits into a
//! dense counter of width `cnt = count_free_bits(D)` and walks that counter
//! from a computed `bits_min` to `bits_max`. Splicing the counter back into
//! the free positions (fixed positions pass `lo` through unchanged) then
//! yields exactly `⟦D⟧ ∩ [min, max]`, in ascending order, one counter
//! increment per value. Grounded in `bzlabvdomain.c`'s
//! `bzla_bvdomain_gen_init_range` / `gen_next_bits`.
//!
//! Ordered enumeration is exposed through the standard `Iterator` trait;
//! `random` is a separate method since it needs an external `Rng` each call
//! rather than owning one for the generator's lifetime.

use std::cmp::Ordering;

use rand::Rng;

use crate::bv::Bv;
use crate::domain::BvDomain;
use crate::utils::low_mask;

/// Enumerates the values of a `BvDomain`, optionally restricted to `[min,
/// max]`, in ascending order.
pub struct BvDomainGenerator {
    domain: BvDomain,
    min: Bv,
    max: Bv,
    cnt: u32,
    bits: Option<u64>,
    bits_min: u64,
    bits_max: u64,
    cur: Option<Bv>,
}

impl BvDomainGenerator {
    /// Enumerate all of `⟦D⟧`, unrestricted.
    pub fn new(domain: BvDomain) -> Self {
        Self::new_range(domain, None, None)
    }

    /// Enumerate `⟦D⟧ ∩ [min, max]`. `None` bounds default to `D`'s own
    /// `lo`/`hi`.
    pub fn new_range(domain: BvDomain, min: Option<Bv>, max: Option<Bv>) -> Self {
        let lo = *domain.lo();
        let hi = *domain.hi();
        let width = domain.get_width();

        let eff_min = match min {
            Some(m) if lo.compare(&m) == Ordering::Greater => lo,
            Some(m) => m,
            None => lo,
        };
        let eff_max = match max {
            Some(m) if hi.compare(&m) == Ordering::Less => hi,
            Some(m) => m,
            None => hi,
        };

        let cnt = domain.count_free_bits();
        let (bits_min, bits_max, bits) = if cnt > 0 {
            if eff_min.compare(&hi) != Ordering::Greater && eff_max.compare(&lo) != Ordering::Less
            {
                let bits_min = Self::compute_bits_min(&domain, &eff_min, width, cnt);
                let bits_max = Self::compute_bits_max(&domain, &eff_max, width, cnt);
                if bits_min <= bits_max {
                    (bits_min, bits_max, Some(bits_min))
                } else {
                    (bits_min, bits_max, None)
                }
            } else {
                (0, 0, None)
            }
        } else if eff_min.compare(&lo) != Ordering::Greater && eff_max.compare(&lo) != Ordering::Less
        {
            // A fully fixed domain inside range enumerates its single value
            // exactly once (see `DESIGN.md` OQ-3).
            (0, 0, Some(0))
        } else {
            (0, 0, None)
        };

        BvDomainGenerator {
            domain,
            min: eff_min,
            max: eff_max,
            cnt,
            bits,
            bits_min,
            bits_max,
            cur: None,
        }
    }

    /// Computes `bits_min`: the packed free-bit counter value (MSB-first
    /// over free positions) of the smallest member of `⟦D⟧` that is `>=
    /// min`.
    fn compute_bits_min(domain: &BvDomain, min: &Bv, width: u32, cnt: u32) -> u64 {
        let mut bits_min: u64 = 0;
        let mut j: u32 = 0;
        let mut j0: u32 = 0;
        for i in 0..width {
            let idx_i = width - 1 - i;
            let bit = min.get_bit(idx_i);
            if !domain.is_fixed_bit(idx_i) {
                let idx_j = cnt - 1 - j;
                if bit == 1 {
                    bits_min |= 1u64 << idx_j;
                }
                if bit == 0 {
                    j0 = j;
                }
                j += 1;
            } else if domain.is_fixed_bit_true(idx_i) && bit == 0 {
                break;
            } else if domain.is_fixed_bit_false(idx_i) && bit == 1 {
                bits_min |= 1u64 << (cnt - 1 - j0);
                for k in (j0 + 1)..cnt {
                    bits_min &= !(1u64 << (cnt - 1 - k));
                }
                break;
            }
        }
        bits_min
    }

    /// Computes `bits_max`: the packed free-bit counter value of the
    /// largest member of `⟦D⟧` that is `<= max`.
    fn compute_bits_max(domain: &BvDomain, max: &Bv, width: u32, cnt: u32) -> u64 {
        let mut bits_max: u64 = low_mask(cnt);
        let mut j: u32 = 0;
        let mut j0: u32 = 0;
        for i in 0..width {
            let idx_i = width - 1 - i;
            let bit = max.get_bit(idx_i);
            if !domain.is_fixed_bit(idx_i) {
                let idx_j = cnt - 1 - j;
                if bit == 0 {
                    bits_max &= !(1u64 << idx_j);
                }
                if bit == 1 {
                    j0 = j;
                }
                j += 1;
            } else if domain.is_fixed_bit_true(idx_i) && bit == 0 {
                bits_max &= !(1u64 << (cnt - 1 - j0));
                for k in (j0 + 1)..cnt {
                    bits_max |= 1u64 << (cnt - 1 - k);
                }
                break;
            } else if domain.is_fixed_bit_false(idx_i) && bit == 1 {
                break;
            }
        }
        bits_max
    }

    /// Splice the free-bit counter value into `D.lo`'s free positions.
    fn splice(&self, bits_val: u64) -> Bv {
        let mut res = *self.domain.lo();
        let mut j: u32 = 0;
        for i in 0..self.domain.get_width() {
            if !self.domain.is_fixed_bit(i) {
                res.set_bit(i, (bits_val >> j) & 1 == 1);
                j += 1;
            }
        }
        res
    }

    /// `true` iff another call to `next()` (the `Iterator` method) would
    /// yield a value.
    pub fn has_next(&self) -> bool {
        self.bits.map_or(false, |b| b <= self.bits_max)
    }

    /// The most recently produced value, if any.
    pub fn cur(&self) -> Option<Bv> {
        self.cur
    }

    /// Draw a value uniformly at random from `⟦D⟧ ∩ [min, max]`.
    ///
    /// Unlike `next()`, repeated calls have no ordering guarantee and never
    /// exhaust: this is a resampling process, not a cursor.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the generator's range is empty.
    pub fn random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Bv {
        debug_assert!(
            self.bits_min <= self.bits_max,
            "random() called on a generator with an empty range"
        );
        let bits_val = if self.bits_min == self.bits_max {
            self.bits_min
        } else {
            rng.gen_range(self.bits_min..=self.bits_max)
        };
        let res = self.splice(bits_val);
        debug_assert!(res.compare(&self.min) != Ordering::Less);
        debug_assert!(res.compare(&self.max) != Ordering::Greater);
        self.cur = Some(res);
        res
    }
}

impl Iterator for BvDomainGenerator {
    type Item = Bv;

    fn next(&mut self) -> Option<Bv> {
        let bits_val = self.bits?;
        if bits_val > self.bits_max {
            return None;
        }
        let res = self.splice(bits_val);
        debug_assert!(res.compare(&self.min) != Ordering::Less);
        debug_assert!(res.compare(&self.max) != Ordering::Greater);
        self.bits = if bits_val == self.bits_max {
            None
        } else {
            Some(bits_val + 1)
        };
        self.cur = Some(res);
        Some(res)
    }
}
