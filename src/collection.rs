//! Classification of a value into a processing strategy, and the
//! shape-polymorphic combinator vocabulary built on top of it.
//!
//! Classification happens exactly once, at the boundary, by converting a
//! [`Value`] into a [`Collection`]; from then on every operation dispatches
//! statically on the variant. Callers that already know their shape can skip
//! this layer entirely and use the sequence functions in [`crate::ops`] or
//! the methods on [`Mapping`] directly.

use std::convert::TryFrom;

use crate::error::Error;
use crate::ops::iter::{each, Flow};
use crate::ops::{filter, transform};
use crate::types::{Mapping, Pair, Sequence, Value};

/// The structural classification of a value, used to pick a processing
/// strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    Sequence,
    Mapping,
    Text,
}

impl Shape {
    /// The shape a value would classify as, without consuming it.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Sequence(..) => Some(Self::Sequence),
            Value::Mapping(..) => Some(Self::Mapping),
            Value::String(..) => Some(Self::Text),
            _ => None,
        }
    }
}

/// A single visited element: a sequence element, or a mapping entry with its
/// key.
#[derive(Debug, Copy, Clone)]
pub enum Item<'a> {
    Element(&'a Value),
    Entry(&'a str, &'a Value),
}

impl<'a> Item<'a> {
    /// The value component, disregarding any key.
    pub fn value(self) -> &'a Value {
        match self {
            Self::Element(value) => value,
            Self::Entry(_, value) => value,
        }
    }
}

/// A classified collection: one of the shapes the combinators know how to
/// traverse.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Sequence(Sequence),
    Mapping(Mapping),
}

impl TryFrom<Value> for Collection {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(seq) => Ok(Self::Sequence(seq)),
            Value::Mapping(mapping) => Ok(Self::Mapping(mapping)),

            // The text strategy: a string behaves as the sequence of its
            // whitespace-delimited tokens.
            Value::String(s) => Ok(Self::Sequence(
                s.split_whitespace()
                    .map(|token| Value::String(token.to_string()))
                    .collect(),
            )),

            _ => Err(Error::NotCollection(value.kind())),
        }
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::Sequence(seq) => Self::Sequence(seq),
            Collection::Mapping(mapping) => Self::Mapping(mapping),
        }
    }
}

impl Collection {
    /// Visits each item in forward order. Returning [`Flow::Break`] halts
    /// the traversal immediately.
    pub fn each<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(Item<'a>) -> Flow,
    {
        match self {
            Self::Sequence(seq) => each(seq, |value| visit(Item::Element(value))),
            Self::Mapping(mapping) => {
                mapping.each(|key, value| visit(Item::Entry(key, value)))
            },
        }
    }

    /// The number of items contained.
    pub fn count(&self) -> usize {
        match self {
            Self::Sequence(seq) => seq.len(),
            Self::Mapping(mapping) => mapping.len(),
        }
    }

    /// The first item's value, if there is one.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Self::Sequence(seq) => seq.first(),
            Self::Mapping(mapping) => mapping.values().next(),
        }
    }

    /// Applies a projection to each item, yielding the results as a
    /// sequence regardless of the input shape.
    pub fn map<F>(&self, mut project: F) -> Sequence
    where
        F: FnMut(Item<'_>) -> Value,
    {
        let mut out = Vec::with_capacity(self.count());
        self.each(|item| {
            out.push(project(item));
            Flow::Continue
        });
        out
    }

    /// Applies a pair-producing projection to each item, collecting the
    /// pairs into a mapping. Later duplicate keys overwrite earlier ones.
    pub fn map_object<F>(&self, mut project: F) -> Mapping
    where
        F: FnMut(Item<'_>) -> Pair,
    {
        let mut out = Mapping::new();
        self.each(|item| {
            let (key, value) = project(item);
            out.insert(key, value);
            Flow::Continue
        });
        out
    }

    /// Keeps the items satisfying the predicate. The input shape is
    /// preserved: a sequence filters to a sequence, a mapping to a mapping.
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Item<'_>) -> bool,
    {
        match self {
            Self::Sequence(seq) => Self::Sequence(filter::select(seq, |value| {
                predicate(Item::Element(value))
            })),
            Self::Mapping(mapping) => Self::Mapping(
                mapping.select(|key, value| predicate(Item::Entry(key, value))),
            ),
        }
    }

    /// Keeps the items failing the predicate, preserving shape.
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Item<'_>) -> bool,
    {
        self.select(|item| !predicate(item))
    }

    /// Drops items whose value is null, preserving shape.
    pub fn compact(&self) -> Self {
        self.select(|item| !item.value().is_null())
    }

    /// The value of the first item (forward order) satisfying the
    /// predicate, or `None` if no item does.
    pub fn find<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(Item<'_>) -> bool,
    {
        let mut found = None;
        self.each(|item| {
            if predicate(item) {
                found = Some(item.value());
                Flow::Break
            } else {
                Flow::Continue
            }
        });
        found
    }

    /// Folds the items left-to-right over their values. With no seed, the
    /// first item's value seeds the fold; an empty input with no seed fails
    /// with [`Error::EmptyInput`].
    pub fn reduce<F>(&self, seed: Option<Value>, mut combine: F) -> Result<Value, Error>
    where
        F: FnMut(Value, Item<'_>) -> Value,
    {
        let mut acc = seed;

        self.each(|item| {
            acc = Some(match acc.take() {
                None => item.value().clone(),
                Some(acc) => combine(acc, item),
            });
            Flow::Continue
        });

        acc.ok_or(Error::EmptyInput)
    }

    /// Applies a projection to each item, yielding a new collection of the
    /// same shape: sequence elements are replaced by the projected value,
    /// mapping entries keep their key and have their value replaced.
    pub fn transform_values<F>(&self, mut project: F) -> Self
    where
        F: FnMut(Item<'_>) -> Value,
    {
        match self {
            Self::Sequence(seq) => Self::Sequence(transform::map(seq, |value| {
                project(Item::Element(value))
            })),
            Self::Mapping(mapping) => Self::Mapping(mapping.map_object(|key, value| {
                (key.to_string(), project(Item::Entry(key, value)))
            })),
        }
    }
}
