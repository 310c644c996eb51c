//! Order-preserving set operations over sequences.
//!
//! Membership is decided by structural equality, implemented by hashing the
//! canonical rendering of each element (see [`crate::inspect`]), which is
//! deterministic and insertion-order-independent for mappings. The `_by`
//! variants substitute a caller-derived key value for the element itself and
//! apply the key function exactly once per element.

use std::collections::HashSet;

use crate::inspect::inspect;
use crate::ops::iter::{each, Flow};
use crate::types::{Sequence, Value};

/// Removes subsequent duplicates, keeping the first occurrence of each
/// element. Order is otherwise preserved.
pub fn uniq(seq: &[Value]) -> Sequence {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    each(seq, |value| {
        if seen.insert(inspect(value)) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// Like [`uniq`], but elements are considered duplicates when their derived
/// key values match.
pub fn uniq_by<F>(seq: &[Value], mut key_fn: F) -> Sequence
where
    F: FnMut(&Value) -> Value,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    each(seq, |value| {
        if seen.insert(inspect(&key_fn(value))) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// The elements of `a` that also occur in `b`, in `a`'s order,
/// de-duplicated.
pub fn intersection(a: &[Value], b: &[Value]) -> Sequence {
    let pool: HashSet<String> = b.iter().map(inspect).collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    each(a, |value| {
        let key = inspect(value);
        if pool.contains(&key) && seen.insert(key) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// Like [`intersection`], but occurrence is decided by the derived key
/// values.
pub fn intersection_by<F>(a: &[Value], b: &[Value], mut key_fn: F) -> Sequence
where
    F: FnMut(&Value) -> Value,
{
    let pool: HashSet<String> = b.iter().map(|value| inspect(&key_fn(value))).collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    each(a, |value| {
        let key = inspect(&key_fn(value));
        if pool.contains(&key) && seen.insert(key) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// The elements of `a` not occurring in `b`, in `a`'s order.
pub fn exclusion(a: &[Value], b: &[Value]) -> Sequence {
    let pool: HashSet<String> = b.iter().map(inspect).collect();

    let mut out = Vec::new();
    each(a, |value| {
        if !pool.contains(&inspect(value)) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// Like [`exclusion`], but occurrence is decided by the derived key values.
pub fn exclusion_by<F>(a: &[Value], b: &[Value], mut key_fn: F) -> Sequence
where
    F: FnMut(&Value) -> Value,
{
    let pool: HashSet<String> = b.iter().map(|value| inspect(&key_fn(value))).collect();

    let mut out = Vec::new();
    each(a, |value| {
        if !pool.contains(&inspect(&key_fn(value))) {
            out.push(value.clone());
        }
        Flow::Continue
    });

    out
}

/// Splits two sequences around their common intersection: the pair of
/// `a`-exclusive and `b`-exclusive elements.
pub fn diff(a: &[Value], b: &[Value]) -> (Sequence, Sequence) {
    let common = intersection(a, b);
    (exclusion(a, &common), exclusion(b, &common))
}

/// The de-duplicated concatenation of two sequences, in first-seen order.
pub fn union(a: &[Value], b: &[Value]) -> Sequence {
    let mut joined = a.to_vec();
    joined.extend_from_slice(b);
    uniq(&joined)
}
