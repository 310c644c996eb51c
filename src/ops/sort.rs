//! Stable sorting by a derived key, and the min/max selections defined in
//! terms of that sort order.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::types::{Number, Sequence, Value};

#[derive(Clone, Copy)]
enum MinMax { Min, Max, }

/// A sortable key derived from an element: a number or a piece of text.
/// Numbers order before text; numbers compare by value across the
/// integer/decimal divide.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(Number),
    Text(String),
}

impl SortKey {
    pub fn val_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(l), Self::Number(r)) => l.val_cmp(r),
            (Self::Text(l), Self::Text(r)) => l.cmp(r),
            (Self::Number(..), Self::Text(..)) => Ordering::Less,
            (Self::Text(..), Self::Number(..)) => Ordering::Greater,
        }
    }
}

impl From<Number> for SortKey {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for SortKey {
    fn from(n: i64) -> Self {
        Self::Number(Number::Integer(n))
    }
}

impl From<Decimal> for SortKey {
    fn from(n: Decimal) -> Self {
        Self::Number(Number::Decimal(n))
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Sorts the sequence by a derived key. The sort is stable: elements with
/// equal keys retain their original relative order. The key function runs
/// exactly once per element.
pub fn sort_by<F>(seq: &[Value], mut key_fn: F) -> Sequence
where
    F: FnMut(&Value) -> SortKey,
{
    let mut decorated: Vec<(SortKey, Value)> =
        seq.iter().map(|value| (key_fn(value), value.clone())).collect();

    decorated.sort_by(|(ka, _), (kb, _)| ka.val_cmp(kb));

    decorated.into_iter().map(|(_, value)| value).collect()
}

fn min_by_max_by<F>(seq: &[Value], mut key_fn: F, flag: MinMax) -> Option<Value>
where
    F: FnMut(&Value) -> SortKey,
{
    let mut it = seq.iter();

    let first = it.next()?;
    let mut best = first;
    let mut best_key = key_fn(first);

    for value in it {
        let key = key_fn(value);

        // Matches the ends of the stable sort order: on equal keys, min
        // keeps the earliest element and max takes the latest.
        let replace = match flag {
            MinMax::Min => key.val_cmp(&best_key) == Ordering::Less,
            MinMax::Max => key.val_cmp(&best_key) != Ordering::Less,
        };

        if replace {
            best = value;
            best_key = key;
        }
    }

    Some(best.clone())
}

/// The first element of the [`sort_by`] order, computed in one pass.
pub fn min_by<F>(seq: &[Value], key_fn: F) -> Option<Value>
where
    F: FnMut(&Value) -> SortKey,
{
    min_by_max_by(seq, key_fn, MinMax::Min)
}

/// The last element of the [`sort_by`] order, computed in one pass.
pub fn max_by<F>(seq: &[Value], key_fn: F) -> Option<Value>
where
    F: FnMut(&Value) -> SortKey,
{
    min_by_max_by(seq, key_fn, MinMax::Max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::indexmap;
    use rand::seq::SliceRandom;
    use str_macro::str;

    use crate::types::Mapping;

    fn keyed(k: i64) -> Value {
        Value::Mapping(Mapping::from(indexmap![str!("k") => Value::Integer(k)]))
    }

    fn key_of(value: &Value) -> SortKey {
        match value {
            Value::Mapping(m) => match m.get("k") {
                Some(&Value::Integer(i)) => SortKey::from(i),
                _ => SortKey::from(0),
            },
            _ => SortKey::from(0),
        }
    }

    #[test]
    fn sort_by_orders_by_derived_key() {
        let seq = vec![keyed(3), keyed(1), keyed(2)];

        let expected = vec![keyed(1), keyed(2), keyed(3)];
        assert_eq!(expected, sort_by(&seq, key_of));

        // Sorting is resilient to any starting order.
        let mut scrambled = expected.clone();
        scrambled.shuffle(&mut rand::thread_rng());
        assert_eq!(expected, sort_by(&scrambled, key_of));
    }

    #[test]
    fn sort_by_is_stable() {
        let seq = vec![
            Value::from("bb"),
            Value::from("a"),
            Value::from("cc"),
            Value::from("d"),
        ];

        // Key by length; equal-length elements keep their original order.
        let produced = sort_by(&seq, |v| match v {
            Value::String(s) => SortKey::from(s.len() as i64),
            _ => SortKey::from(0),
        });

        let expected = vec![
            Value::from("a"),
            Value::from("d"),
            Value::from("bb"),
            Value::from("cc"),
        ];
        assert_eq!(expected, produced);
    }

    #[test]
    fn sort_by_applies_key_once_per_element() {
        let seq = vec![keyed(3), keyed(1), keyed(2)];

        let mut calls = 0;
        sort_by(&seq, |v| {
            calls += 1;
            key_of(v)
        });

        assert_eq!(seq.len(), calls);
    }

    #[test]
    fn mixed_keys_order_numbers_before_text() {
        let seq = vec![Value::from("b"), Value::Integer(2), Value::from("a")];

        let produced = sort_by(&seq, |v| match v {
            &Value::Integer(i) => SortKey::from(i),
            Value::String(s) => SortKey::from(s.clone()),
            _ => SortKey::from(0),
        });

        let expected = vec![Value::Integer(2), Value::from("a"), Value::from("b")];
        assert_eq!(expected, produced);
    }

    #[test]
    fn min_by_max_by_match_sort_order_ends() {
        let seq = vec![keyed(3), keyed(1), keyed(2)];

        assert_eq!(Some(keyed(1)), min_by(&seq, key_of));
        assert_eq!(Some(keyed(3)), max_by(&seq, key_of));

        assert_eq!(None, min_by(&[], key_of));
        assert_eq!(None, max_by(&[], key_of));

        // On ties, min keeps the earliest element and max the latest, the
        // same elements a stable sort puts at the ends.
        let tied = vec![
            Value::from("a"),
            Value::from("bb"),
            Value::from("c"),
            Value::from("dd"),
        ];
        let by_len = |v: &Value| match v {
            Value::String(s) => SortKey::from(s.len() as i64),
            _ => SortKey::from(0),
        };

        assert_eq!(Some(Value::from("a")), min_by(&tied, by_len));
        assert_eq!(Some(Value::from("dd")), max_by(&tied, by_len));
    }
}
