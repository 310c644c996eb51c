//! The enumerable combinators over sequences. Mapping-shaped counterparts
//! live on [`crate::types::Mapping`]; the shape-polymorphic vocabulary lives
//! on [`crate::collection::Collection`].

pub mod filter;
pub mod find;
pub mod fold;
pub mod iter;
pub mod set;
pub mod sort;
pub mod transform;

pub use self::filter::{compact, reject, select};
pub use self::find::{contains, find, index_where, last, rfind};
pub use self::fold::{fold, fold_right, max, min, product, reduce, sum};
pub use self::iter::{each, each_with_index, reverse_each, Flow};
pub use self::set::{
    diff, exclusion, exclusion_by, intersection, intersection_by, union, uniq,
    uniq_by,
};
pub use self::sort::{max_by, min_by, sort_by, SortKey};
pub use self::transform::{map, map_object, map_with_index};
