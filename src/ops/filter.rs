//! Filtering combinators over sequences.

use crate::ops::iter::{each, Flow};
use crate::types::{Sequence, Value};

/// Keeps the elements satisfying the predicate, preserving their relative
/// order.
pub fn select<F>(seq: &[Value], mut predicate: F) -> Sequence
where
    F: FnMut(&Value) -> bool,
{
    let mut out = Vec::new();
    each(seq, |value| {
        if predicate(value) {
            out.push(value.clone());
        }
        Flow::Continue
    });
    out
}

/// Keeps the elements failing the predicate.
pub fn reject<F>(seq: &[Value], mut predicate: F) -> Sequence
where
    F: FnMut(&Value) -> bool,
{
    select(seq, |value| !predicate(value))
}

/// Drops null elements.
pub fn compact(seq: &[Value]) -> Sequence {
    select(seq, |value| !value.is_null())
}
