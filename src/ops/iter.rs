//! Single-pass traversal primitives with early-exit signaling. Every derived
//! combinator that needs to stop mid-pass routes through these rather than
//! carrying its own break logic.

use crate::types::Value;

/// The signal a visitor returns to continue or halt a traversal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Break,
}

/// Visits the elements of a sequence in forward order. Returning
/// [`Flow::Break`] halts the traversal immediately; remaining elements are
/// left unvisited.
pub fn each<'a, F>(seq: &'a [Value], mut visit: F)
where
    F: FnMut(&'a Value) -> Flow,
{
    for value in seq {
        if let Flow::Break = visit(value) {
            break;
        }
    }
}

/// Visits the elements of a sequence in descending index order.
pub fn reverse_each<'a, F>(seq: &'a [Value], mut visit: F)
where
    F: FnMut(&'a Value) -> Flow,
{
    for value in seq.iter().rev() {
        if let Flow::Break = visit(value) {
            break;
        }
    }
}

/// Like [`each`], but supplies the element's index alongside it.
pub fn each_with_index<'a, F>(seq: &'a [Value], mut visit: F)
where
    F: FnMut(&'a Value, usize) -> Flow,
{
    for (index, value) in seq.iter().enumerate() {
        if let Flow::Break = visit(value, index) {
            break;
        }
    }
}
