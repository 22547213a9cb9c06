//! bvprop - Three-valued bit-vector domains and invertibility conditions
//!
//! A small, self-contained kernel for local-search / propagation-based
//! bit-vector solving: a ternary abstract domain over fixed-width bit-vectors,
//! an enumerator that walks a domain's values (restricted to a range) without
//! rejection sampling, a mod-30 wheel factorizer, and the invertibility-
//! condition predicates from [1] that decide whether a given operator
//! equation has a solution for an unknown operand.
//!
//! # Architecture
//!
//! - **`Bv`**: fixed-width (`1..=64` bits) unsigned bit-vector values.
//! - **`BvDomain`**: a `(lo, hi)` pair denoting `{v : lo ⊑ v ⊑ hi}`.
//! - **`BvDomainGenerator`**: ordered (`Iterator`) and random enumeration of
//!   a domain intersected with `[min, max]`.
//! - **`WheelFactorizer`** / `get_factor`: trial-division factorization,
//!   used by the `mul` const-bit invertibility check to find divisors.
//! - **`invert::plain`** / **`invert::const_bits`**: invertibility-condition
//!   predicates, with and without respecting `x`'s fixed bits.
//!
//! # Example
//!
//! ```
//! use bvprop::{BvDomain, BvDomainGenerator};
//!
//! let d = BvDomain::new_from_char("1xx0").unwrap();
//! let values: Vec<u64> = BvDomainGenerator::new(d).map(|v| v.to_u64()).collect();
//! assert_eq!(values, vec![0b1000, 0b1010, 0b1100, 0b1110]);
//! ```
//!
//! # References
//!
//! [1] Aina Niemetz, Mathias Preiner, Andrew Reynolds, Clark Barrett, Cesare
//! Tinelli: Solving Quantified Bit-Vectors Using Invertibility Conditions.
//! CAV (2) 2018: 236-255.

pub mod bv;
pub mod domain;
pub mod error;
pub mod generator;
pub mod invert;
pub mod utils;
pub mod wheel;

pub use bv::Bv;
pub use domain::BvDomain;
pub use error::{BvError, Result};
pub use generator::BvDomainGenerator;
pub use wheel::{get_factor, WheelFactorizer};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "bvprop";
