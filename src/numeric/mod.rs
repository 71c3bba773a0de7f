// ============================================================================
// Numeric Module
// Exact decimal-scale arithmetic on a normalized significand/exponent pair
// ============================================================================
//
// This module provides:
// - Exponential: a value type storing significand × 10^exponent in canonical
//   form (no trailing decimal zeros, zero is (0, 0))
// - NumericError: error types for the fallible operations
//
// Design principles:
// - Canonical form is restored on construction and after every operation,
//   so structural equality is value equality
// - The operator hot path performs no overflow detection; the verification
//   layer's boundedness predicates are the opt-in safety net
// - Division is the only inexact operation and truncates to a fixed 18
//   significant decimal digits

mod errors;
mod exponential;

pub use errors::{NumericError, NumericResult};
pub use exponential::Exponential;
