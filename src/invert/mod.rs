//! Invertibility-condition oracles for the bit-vector operators this crate
//! supports: `add`, `and`, `concat`, `eq`, `mul`, `sll`, `srl`, `ult`,
//! `udiv`, `urem`, `slice`. Each operator has two predicates — `plain`
//! ignores the fixed bits of the unknown operand `x`, `const_bits` respects
//! them — mirroring the split between `bzla_is_inv_*` and
//! `bzla_is_inv_*_const` in `bzlainvutils.c`.
//!
//! The set of operators is closed and small, so this crate dispatches by
//! calling the named function for the operator in question rather than
//! through a trait object or tagged-enum `match` — there is no shared state
//! or behavior across operators worth abstracting over.

pub mod const_bits;
pub mod plain;
