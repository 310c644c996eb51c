//! The mapping collection shape: unique string keys bound to values, with
//! iteration in insertion order.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::iter::{Extend, FromIterator};

use indexmap::map::{
    IntoIter as InnerIntoIter,
    Iter as InnerIter,
    Keys as InnerKeys,
    Values as InnerValues,
};
use indexmap::IndexMap as InnerMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::ops::Flow;
use crate::types::{Pair, Sequence, Value};

/// Key order selection for [`Mapping::sorted`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOrder {
    /// Ascending lexical key order.
    Lexical,
    /// Ascending numeric key order. Keys that do not parse as integers sort
    /// after all numeric keys, in lexical order among themselves.
    Numeric,
}

/// An ordered collection of unique string keys, each bound to one value.
///
/// Iteration order is insertion order, but carries no meaning except where a
/// sorted mapping is explicitly constructed via [`Mapping::sorted`];
/// equality is structural and order-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mapping(InnerMap<String, Value>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.0.keys())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.0.values())
    }

    /// Visits each entry in iteration order. Returning [`Flow::Break`] from
    /// the visitor halts the traversal immediately; remaining entries are
    /// left unvisited.
    pub fn each<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a str, &'a Value) -> Flow,
    {
        for (key, value) in self.iter() {
            if let Flow::Break = visit(key, value) {
                break;
            }
        }
    }

    /// Applies a projection to each entry, yielding the results as a
    /// sequence.
    pub fn map<F>(&self, mut project: F) -> Sequence
    where
        F: FnMut(&str, &Value) -> Value,
    {
        let mut out = Vec::with_capacity(self.len());
        self.each(|key, value| {
            out.push(project(key, value));
            Flow::Continue
        });
        out
    }

    /// Applies a pair-producing projection to each entry, collecting the
    /// pairs into a new mapping. Later duplicate keys overwrite earlier
    /// ones.
    pub fn map_object<F>(&self, mut project: F) -> Self
    where
        F: FnMut(&str, &Value) -> Pair,
    {
        let mut out = Self::new();
        self.each(|key, value| {
            let (new_key, new_value) = project(key, value);
            out.insert(new_key, new_value);
            Flow::Continue
        });
        out
    }

    /// Keeps the entries satisfying the predicate, preserving their relative
    /// order.
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &Value) -> bool,
    {
        let mut out = Self::new();
        self.each(|key, value| {
            if predicate(key, value) {
                out.insert(key.to_string(), value.clone());
            }
            Flow::Continue
        });
        out
    }

    /// Keeps the entries failing the predicate.
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &Value) -> bool,
    {
        self.select(|key, value| !predicate(key, value))
    }

    /// Drops entries whose value is null.
    pub fn compact(&self) -> Self {
        self.select(|_, value| !value.is_null())
    }

    /// Returns the value of the first entry (iteration order) satisfying the
    /// predicate, or `None` if no entry does.
    pub fn find<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&str, &Value) -> bool,
    {
        let mut found = None;
        self.each(|key, value| {
            if predicate(key, value) {
                found = Some(value);
                Flow::Break
            } else {
                Flow::Continue
            }
        });
        found
    }

    /// Produces the union of two mappings. All keys of both are present;
    /// `other`'s values win on key collision. Neither input is mutated.
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }

    /// Returns a new mapping holding only the requested keys, in requested
    /// order. A key absent from this mapping takes `default` when one is
    /// supplied, and is omitted otherwise.
    pub fn slice<S: AsRef<str>>(&self, keys: &[S], default: Option<&Value>) -> Self {
        let mut out = Self::new();
        for key in keys {
            let key = key.as_ref();
            match (self.get(key), default) {
                (Some(value), _) => {
                    out.insert(key.to_string(), value.clone());
                },
                (None, Some(default)) => {
                    out.insert(key.to_string(), default.clone());
                },
                (None, None) => {},
            }
        }
        out
    }

    /// Like [`Mapping::slice`], but also removes the extracted keys from
    /// this mapping. This is the single destructive operation in the
    /// library; every other combinator leaves its input untouched. Use
    /// `slice` for the pure equivalent.
    pub fn extract<S: AsRef<str>>(&mut self, keys: &[S], default: Option<&Value>) -> Self {
        let extracted = self.slice(keys, default);
        for key in keys {
            self.remove(key.as_ref());
        }
        extracted
    }

    /// Returns a copy of this mapping whose iteration order is fixed to
    /// ascending key order, lexical or numeric per `order`.
    pub fn sorted(&self, order: KeyOrder) -> Self {
        let mut inner = self.0.clone();

        match order {
            KeyOrder::Lexical => inner.sort_keys(),
            KeyOrder::Numeric => inner.sort_by(|ka, _, kb, _| {
                match (ka.parse::<i64>(), kb.parse::<i64>()) {
                    (Ok(na), Ok(nb)) => na.cmp(&nb),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => ka.cmp(kb),
                }
            }),
        };

        Self(inner)
    }

    /// Converts this mapping into a sequence of `[key, value]` pair
    /// sequences, in iteration order.
    pub fn pairs(&self) -> Sequence {
        self.iter()
            .map(|(key, value)| {
                Value::Sequence(vec![Value::String(key.clone()), value.clone()])
            })
            .collect()
    }

    /// Builds a mapping from a sequence of `[key, value]` pair sequences.
    /// Later duplicate keys overwrite earlier ones. Elements that are not
    /// two-element sequences with a string key are rejected.
    pub fn from_pairs(seq: &[Value]) -> Result<Self, Error> {
        let mut out = Self::new();

        for element in seq {
            match element {
                Value::Sequence(pair) => match pair.as_slice() {
                    [Value::String(key), value] => {
                        out.insert(key.clone(), value.clone());
                    },
                    _ => return Err(Error::NotPair(element.kind())),
                },
                _ => return Err(Error::NotPair(element.kind())),
            }
        }

        Ok(out)
    }
}

impl From<InnerMap<String, Value>> for Mapping {
    fn from(inner: InnerMap<String, Value>) -> Self {
        Self(inner)
    }
}

impl Extend<(String, Value)> for Mapping {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

pub struct Iter<'a>(InnerIter<'a, String, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Iter<'a> {}

pub struct Keys<'a>(InnerKeys<'a, String, Value>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Keys<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Keys<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Keys<'a> {}

pub struct Values<'a>(InnerValues<'a, String, Value>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Values<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Values<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Values<'a> {}

pub struct IntoIter(InnerIntoIter<String, Value>);

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::indexmap;
    use str_macro::str;

    use crate::types::ValueKind;

    fn sample() -> Mapping {
        Mapping::from(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(2),
            str!("c") => Value::Integer(3),
        ])
    }

    #[test]
    fn merge_prefers_other_on_collision() {
        let base = sample();
        let other = Mapping::from(indexmap![
            str!("b") => Value::Integer(20),
            str!("d") => Value::Integer(4),
        ]);

        let expected = Mapping::from(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(20),
            str!("c") => Value::Integer(3),
            str!("d") => Value::Integer(4),
        ]);

        assert_eq!(expected, base.merge(&other));

        // The empty mapping is the identity element on either side.
        assert_eq!(base, base.merge(&Mapping::new()));
        assert_eq!(base, Mapping::new().merge(&base));
    }

    #[test]
    fn slice_picks_requested_keys() {
        let base = sample();

        let inputs_and_expected = vec![
            (
                (vec!["a", "c"], None),
                indexmap![
                    str!("a") => Value::Integer(1),
                    str!("c") => Value::Integer(3),
                ],
            ),
            ((vec!["x"], None), indexmap![]),
            (
                (vec!["a", "x"], Some(Value::Null)),
                indexmap![
                    str!("a") => Value::Integer(1),
                    str!("x") => Value::Null,
                ],
            ),
        ];

        for ((keys, default), expected) in inputs_and_expected {
            let produced = base.slice(&keys, default.as_ref());
            assert_eq!(Mapping::from(expected), produced);
        }
    }

    #[test]
    fn extract_removes_extracted_keys() {
        let mut base = Mapping::from(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(2),
        ]);

        let extracted = base.extract(&["a"], None);

        assert_eq!(
            Mapping::from(indexmap![str!("a") => Value::Integer(1)]),
            extracted,
        );
        assert_eq!(
            Mapping::from(indexmap![str!("b") => Value::Integer(2)]),
            base,
        );
    }

    #[test]
    fn sorted_fixes_key_order() {
        let scrambled = Mapping::from(indexmap![
            str!("b") => Value::Integer(2),
            str!("10") => Value::Integer(10),
            str!("a") => Value::Integer(1),
            str!("2") => Value::Integer(2),
        ]);

        let lexical: Vec<String> =
            scrambled.sorted(KeyOrder::Lexical).keys().cloned().collect();
        assert_eq!(vec!["10", "2", "a", "b"], lexical);

        let numeric: Vec<String> =
            scrambled.sorted(KeyOrder::Numeric).keys().cloned().collect();
        assert_eq!(vec!["2", "10", "a", "b"], numeric);
    }

    #[test]
    fn select_and_reject_preserve_order() {
        let base = sample();

        let selected = base.select(|_, value| Value::Integer(1) != *value);
        let keys: Vec<&String> = selected.keys().collect();
        assert_eq!(vec!["b", "c"], keys);

        let rejected = base.reject(|_, value| Value::Integer(1) != *value);
        let keys: Vec<&String> = rejected.keys().collect();
        assert_eq!(vec!["a"], keys);
    }

    #[test]
    fn compact_drops_null_values() {
        let base = Mapping::from(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Null,
            str!("c") => Value::Integer(3),
        ]);

        let expected = Mapping::from(indexmap![
            str!("a") => Value::Integer(1),
            str!("c") => Value::Integer(3),
        ]);

        assert_eq!(expected, base.compact());
    }

    #[test]
    fn map_object_last_write_wins() {
        let base = sample();

        // Every entry maps to the same key; the final entry's value remains.
        let produced = base.map_object(|_, value| (str!("k"), value.clone()));

        assert_eq!(
            Mapping::from(indexmap![str!("k") => Value::Integer(3)]),
            produced,
        );
    }

    #[test]
    fn map_changes_shape_to_sequence() {
        let base = sample();

        let produced = base.map(|key, value| {
            Value::String(format!("{}={}", key, crate::inspect::inspect(value)))
        });

        assert_eq!(
            vec![Value::from("a=1"), Value::from("b=2"), Value::from("c=3")],
            produced,
        );
    }

    #[test]
    fn entry_iteration_round_trip() {
        let base = sample();

        let entries: Vec<(String, Value)> = base.clone().into_iter().collect();
        let rebuilt: Mapping = entries.into_iter().collect();

        assert_eq!(base, rebuilt);
    }

    #[test]
    fn find_returns_first_match_in_order() {
        let base = sample();

        let produced = base.find(|_, value| Value::Integer(1) != *value);
        assert_eq!(Some(&Value::Integer(2)), produced);

        let produced = base.find(|key, _| key == "z");
        assert_eq!(None, produced);
    }

    #[test]
    fn pairs_round_trip() {
        let base = sample();

        let pairs = base.pairs();
        assert_eq!(
            Value::Sequence(vec![
                Value::String(str!("a")),
                Value::Integer(1),
            ]),
            pairs[0],
        );

        let rebuilt = Mapping::from_pairs(&pairs).unwrap();
        assert_eq!(base, rebuilt);

        let malformed = vec![Value::Integer(27)];
        assert_eq!(
            Err(Error::NotPair(ValueKind::Integer)),
            Mapping::from_pairs(&malformed),
        );
    }

    #[test]
    fn each_early_exit() {
        let base = sample();

        let mut visited = Vec::new();
        base.each(|key, _| {
            visited.push(key.to_string());
            if key == "b" { Flow::Break } else { Flow::Continue }
        });

        assert_eq!(vec![str!("a"), str!("b")], visited);
    }
}
