//! Projection combinators over sequences.

use crate::ops::iter::{each, each_with_index, Flow};
use crate::types::{Mapping, Pair, Sequence, Value};

/// Produces a new sequence where element `i` is the projection applied to
/// input element `i`. Order is preserved and the input is not mutated.
pub fn map<F>(seq: &[Value], mut project: F) -> Sequence
where
    F: FnMut(&Value) -> Value,
{
    let mut out = Vec::with_capacity(seq.len());
    each(seq, |value| {
        out.push(project(value));
        Flow::Continue
    });
    out
}

/// Like [`map`], but the projection also receives the element's index.
pub fn map_with_index<F>(seq: &[Value], mut project: F) -> Sequence
where
    F: FnMut(&Value, usize) -> Value,
{
    let mut out = Vec::with_capacity(seq.len());
    each_with_index(seq, |value, index| {
        out.push(project(value, index));
        Flow::Continue
    });
    out
}

/// Applies a pair-producing projection to each element and collects the
/// pairs into a mapping. Later duplicate keys overwrite earlier ones.
pub fn map_object<F>(seq: &[Value], mut project: F) -> Mapping
where
    F: FnMut(&Value) -> Pair,
{
    let mut out = Mapping::new();
    each(seq, |value| {
        let (key, new_value) = project(value);
        out.insert(key, new_value);
        Flow::Continue
    });
    out
}
