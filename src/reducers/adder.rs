//! src/reducers/adder.rs
use crate::mappers::Count;
use crate::reducers::Reducer;

/// Sums the counts for a key. Addition is associative and commutative,
/// so the same reducer runs as the per-split combiner and as the global
/// reducer without changing totals.
pub struct Adder;

impl Reducer for Adder {
    fn reduce<I>(&self, _key: &str, counts: I) -> Count
    where
        I: IntoIterator<Item = Count>,
    {
        counts.into_iter().sum()
    }
}
