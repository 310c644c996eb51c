pub mod mapping;
mod number;
mod value;

pub use self::mapping::{KeyOrder, Mapping};
pub use self::number::Number;
pub use self::value::{
    Decimal, Error as ValueError, Pair, Sequence, Value, ValueKind,
};
