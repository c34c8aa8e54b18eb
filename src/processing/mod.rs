//! Declarative query engine.
//!
//! Free-function forms of the [`crate::types::Sequence`] combinators, grouped by concern:
//!
//! - [`filter()`]: keep elements matching a predicate
//! - [`map()`], [`map_and_filter_absent()`], [`map_and_collect_faults()`]: projections
//! - [`sorted_by()`], [`sorted()`], [`distinct()`], [`limit()`]: ordering and shape
//! - [`any_match()`], [`all_match()`], [`none_match()`], [`find_first()`]: matching terminals
//! - [`count()`], [`to_set()`], [`join_to_string()`], [`reduce_max()`] and friends
//!
//! Every operation borrows its input, so a pipeline can be rerun on the same sequence.
//!
//! ## Example: filter → sort → project
//!
//! ```rust
//! use rust_query_drills::processing::{filter, join_to_string, sorted_by};
//! use rust_query_drills::types::{Dir, Sequence};
//!
//! let trades = Sequence::new(vec![
//!     ("Brian", 2011, 300),
//!     ("Raoul", 2012, 1000),
//!     ("Raoul", 2011, 400),
//! ]);
//!
//! let in_2011 = filter(&trades, |t| t.1 == 2011);
//! let by_value = sorted_by(&in_2011, |t| t.2, Dir::Desc);
//! assert_eq!(join_to_string(&by_value, ",", |t| t.0), "Raoul,Brian");
//! ```

pub mod filter;
pub mod map;
pub mod matching;
pub mod order;
pub mod reduce;

pub use filter::filter;
pub use map::{map, map_and_collect_faults, map_and_filter_absent};
pub use matching::{all_match, any_match, find_first, none_match};
pub use order::{distinct, limit, sorted, sorted_by};
pub use reduce::{
    count, join_to_string, join_with, max_value, min_value, reduce_max, reduce_min, to_set,
};
