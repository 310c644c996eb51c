//! Ruby-flavored enumerable operations over sequence and mapping values.
//!
//! The library works on one value type, [`Value`], a closed sum over the
//! shapes it handles. A value is classified into a [`Collection`] once, at
//! the boundary; the combinators then dispatch statically. Callers that
//! already know their shape can use the sequence functions in [`ops`] or the
//! methods on [`Mapping`] directly and skip classification entirely.
//!
//! Every operation is a pure transformation of its input into a new
//! collection or scalar, with two deliberate exceptions: [`Mapping::extract`]
//! removes the extracted keys from its receiver, and [`repeat::repeat_every`]
//! schedules deferred callback invocations on a worker thread.

pub mod collection;
pub mod error;
pub mod inspect;
pub mod ops;
pub mod repeat;
pub mod types;

pub use crate::collection::{Collection, Item, Shape};
pub use crate::error::Error;
pub use crate::inspect::inspect;
pub use crate::ops::{Flow, SortKey};
pub use crate::types::{KeyOrder, Mapping, Number, Pair, Sequence, Value, ValueKind};
