//! Numeric cost abstraction for the weighted engines.

use num_traits::Zero;

/// Cost accumulated along a weighted path.
///
/// A cost type needs addition with a zero identity (the cost-so-far at the
/// start state) and a total order (for heap comparisons). The blanket
/// implementation covers every `Zero + Copy + Ord` type, which includes all
/// primitive integers; graphs that never name a cost type get `i64` through
/// [`UnitCost`](crate::UnitCost).
pub trait Cost: Zero + Copy + Ord {}

impl<T: Zero + Copy + Ord> Cost for T {}
