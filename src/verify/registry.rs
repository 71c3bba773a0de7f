// ============================================================================
// Capability Registry
// Per-type tables of operations and guards consumed by the harness
// ============================================================================

use rand::Rng;
use std::fmt::Debug;

/// A unary operation registered for verification.
///
/// `reference` and `native` are two interchangeable routes to the same
/// result; the harness checks that they agree on every drawn operand.
#[derive(Debug, Clone, Copy)]
pub struct UnaryOp<T: 'static> {
    /// Operation name for reporting
    pub name: &'static str,
    /// Independently-formulated route to the result
    pub reference: fn(T) -> T,
    /// The type's native operator
    pub native: fn(T) -> T,
}

/// A binary operation registered for verification.
///
/// Besides the reference/native pair, each binary operation declares the
/// algebraic laws it claims and carries a boundedness predicate: a guard the
/// harness consults before asserting any law, deciding whether the drawn
/// operands are expected to stay safely representable. The predicate is
/// never consulted by the arithmetic itself.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOp<T: 'static> {
    /// Operation name for reporting and for `distributes_over` lookups
    pub name: &'static str,
    /// Independently-formulated route to the result
    pub reference: fn(T, T) -> T,
    /// The type's native operator
    pub native: fn(T, T) -> T,
    /// Guard deciding whether a result for these operands is trustworthy
    pub is_bounded: fn(T, T) -> bool,
    /// Whether the harness should assert commutativity
    pub commutative: bool,
    /// Whether the harness should assert associativity
    pub associative: bool,
    /// Name of the registered operation this one distributes over, if any
    pub distributes_over: Option<&'static str>,
}

/// Capability contract making a numeric type pluggable into the harness.
///
/// Implementations supply a random generator plus static, immutable
/// operation tables. The tables are process-wide constants: built once,
/// looked up by the harness, never mutated.
pub trait Verifiable: Copy + PartialEq + Debug + 'static {
    /// Produce a uniformly-random instance from a bounded random-bit source.
    fn arbitrary<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// The registered unary operations.
    fn unary_ops() -> &'static [UnaryOp<Self>];

    /// The registered binary operations.
    fn binary_ops() -> &'static [BinaryOp<Self>];
}
