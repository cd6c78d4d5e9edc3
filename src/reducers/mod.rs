//! src/reducers/mod.rs
use crate::mappers::Count;

/// Folds all counts observed for one key into a single total. The
/// grouping step guarantees every count for a key reaches the same
/// reducer invocation.
pub trait Reducer {
    fn reduce<I>(&self, key: &str, counts: I) -> Count
    where
        I: IntoIterator<Item = Count>;
}

mod adder;
pub use adder::Adder;
