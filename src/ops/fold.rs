//! Folding combinators over sequences, plus the numeric folds built on
//! [`Number`].

use std::convert::TryFrom;

use crate::error::Error;
use crate::types::{Number, Value};

#[derive(Clone, Copy)]
enum SumProd { Sum, Prod, }

#[derive(Clone, Copy)]
enum MinMax { Min, Max, }

/// Folds the sequence left-to-right. With no seed, the first element seeds
/// the fold and combining starts from the second; an empty input with no
/// seed fails with [`Error::EmptyInput`].
pub fn reduce<F>(seq: &[Value], seed: Option<Value>, mut combine: F) -> Result<Value, Error>
where
    F: FnMut(Value, &Value) -> Value,
{
    let (mut acc, rest) = match seed {
        Some(seed) => (seed, seq),
        None => match seq.split_first() {
            Some((first, rest)) => (first.clone(), rest),
            None => return Err(Error::EmptyInput),
        },
    };

    for value in rest {
        acc = combine(acc, value);
    }

    Ok(acc)
}

/// Alias for [`reduce`].
pub fn fold<F>(seq: &[Value], seed: Option<Value>, combine: F) -> Result<Value, Error>
where
    F: FnMut(Value, &Value) -> Value,
{
    reduce(seq, seed, combine)
}

/// Folds the sequence right-to-left. With no seed, the last element seeds
/// the fold and combining starts from the second-to-last; the combiner
/// receives `(element, accumulator)`.
pub fn fold_right<F>(seq: &[Value], seed: Option<Value>, mut combine: F) -> Result<Value, Error>
where
    F: FnMut(&Value, Value) -> Value,
{
    let (mut acc, rest) = match seed {
        Some(seed) => (seed, seq),
        None => match seq.split_last() {
            Some((last, rest)) => (last.clone(), rest),
            None => return Err(Error::EmptyInput),
        },
    };

    for value in rest.iter().rev() {
        acc = combine(value, acc);
    }

    Ok(acc)
}

fn sum_prod(seq: &[Value], flag: SumProd) -> Result<Number, Error> {
    let mut total = match flag {
        SumProd::Sum => Number::Integer(0),
        SumProd::Prod => Number::Integer(1),
    };

    for value in seq {
        let n = Number::try_from(value).map_err(|_| Error::NotNumeric(value.kind()))?;

        total = match flag {
            SumProd::Sum => total + n,
            SumProd::Prod => total * n,
        };
    }

    Ok(total)
}

/// Sums the numeric elements of the sequence. An empty input sums to zero;
/// a non-numeric element fails with [`Error::NotNumeric`].
pub fn sum(seq: &[Value]) -> Result<Number, Error> {
    sum_prod(seq, SumProd::Sum)
}

/// Multiplies the numeric elements of the sequence. An empty input yields
/// one.
pub fn product(seq: &[Value]) -> Result<Number, Error> {
    sum_prod(seq, SumProd::Prod)
}

fn min_max(seq: &[Value], flag: MinMax) -> Result<Option<Number>, Error> {
    let mut it = seq.iter();

    let first = match it.next() {
        // No elements, so no min or max.
        None => return Ok(None),
        Some(value) => value,
    };

    let mut target =
        Number::try_from(first).map_err(|_| Error::NotNumeric(first.kind()))?;

    for value in it {
        let n = Number::try_from(value).map_err(|_| Error::NotNumeric(value.kind()))?;

        target = match flag {
            MinMax::Min => target.val_min(n),
            MinMax::Max => target.val_max(n),
        };
    }

    Ok(Some(target))
}

/// The numerically smallest element, or `None` for an empty input.
pub fn min(seq: &[Value]) -> Result<Option<Number>, Error> {
    min_max(seq, MinMax::Min)
}

/// The numerically largest element, or `None` for an empty input.
pub fn max(seq: &[Value]) -> Result<Option<Number>, Error> {
    min_max(seq, MinMax::Max)
}
