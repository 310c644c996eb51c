use thiserror::Error;

use crate::types::ValueKind;

/// Errors produced by the combinators. Absence of a result (`find`,
/// `index_where`, set lookups) is never an error; those operations report it
/// through `Option` instead.
#[derive(Debug, Error, Copy, Clone, PartialEq, Hash)]
pub enum Error {
    #[error("empty input with no seed value")]
    EmptyInput,
    #[error("value of kind {} is not a collection", .0.as_ref())]
    NotCollection(ValueKind),
    #[error("value of kind {} is not a number", .0.as_ref())]
    NotNumeric(ValueKind),
    #[error("value of kind {} is not a key-value pair", .0.as_ref())]
    NotPair(ValueKind),
}
