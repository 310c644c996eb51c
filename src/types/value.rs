//! The primitive value type every combinator in this crate operates on.

use std::convert::TryFrom;

pub use rust_decimal::Decimal;

use serde::Deserialize;
use serde::Serialize;
use strum::{AsRefStr, EnumDiscriminants};
use thiserror::Error;

use crate::types::{Mapping, Number};

#[derive(Debug, Error, Copy, Clone, PartialEq, Hash)]
pub enum Error {
    #[error("cannot convert value of kind {} into target type", .0.as_ref())]
    CannotConvert(ValueKind),
}

// Re-exporting to allow downstream users to ensure usage of the correct types.
pub type Integer = i64;
pub type Boolean = bool;
pub type Sequence = Vec<Value>;

/// A key paired with the value bound to it, the unit of conversion between
/// mappings and sequences.
pub type Pair = (String, Value);

/// The closed set of runtime shapes this library handles. A value is
/// classified once, at the boundary, by matching on its variant; nothing
/// downstream ever sniffs structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, EnumDiscriminants)]
#[serde(untagged)]
#[strum_discriminants(name(ValueKind), derive(Hash, AsRefStr))]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Decimal(Decimal),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl Value {
    /// The discriminant of this value, for reporting.
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

#[cfg(test)]
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for &'k str {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::String(ref s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<&Integer> for Value {
    fn from(value: &Integer) -> Self {
        Self::from(*value)
    }
}

impl TryFrom<Value> for Integer {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Integer {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::Integer(i) => Ok(i),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Boolean> for Value {
    fn from(value: Boolean) -> Self {
        Self::Boolean(value)
    }
}

impl TryFrom<Value> for Boolean {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Decimal(d) => Ok(d),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl TryFrom<Value> for Sequence {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl TryFrom<Value> for Mapping {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(m) => Ok(m),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Value {
        match value {
            Number::Integer(i) => Self::from(i),
            Number::Decimal(d) => Self::from(d),
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(Self::from(i)),
            Value::Decimal(d) => Ok(Self::from(d)),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Number {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::Integer(i) => Ok(Self::Integer(i)),
            &Value::Decimal(d) => Ok(Self::Decimal(d)),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}
