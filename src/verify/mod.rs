// ============================================================================
// Verification Module
// Generic property-verification harness and per-type capability registry
// ============================================================================
//
// This module provides:
// - Verifiable: the capability contract a numeric type implements to become
//   pluggable into the harness (random generator + operation tables)
// - UnaryOp / BinaryOp: reference/native operation pairs, each binary
//   operation carrying a boundedness guard
// - Verifier: draws random operands and asserts the algebraic laws each
//   operation claims, skipping draws the guards reject
//
// Design principles:
// - Operation tables are static read-only data, never mutated after start
// - Guards live here, not in the arithmetic: the operators always produce a
//   canonical result, the guard says whether that result is trustworthy
// - Each Verifier owns its seeded generator, so passes are reproducible

mod exponential;
mod harness;
mod registry;

pub use harness::{Law, LawViolation, Verifier, VerifyReport, DEFAULT_DRAWS};
pub use registry::{BinaryOp, UnaryOp, Verifiable};
