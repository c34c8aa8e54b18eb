//! `rust-query-drills` is a small library of optional-chaining combinators and a generic
//! declarative query engine over in-memory record sets, with the classic stream/optional drills
//! (menus, trades, cars) built on top of it.
//!
//! ## Two pieces
//!
//! - [`optional::Optional`]: a value that may be absent. Steps are chained with `map`,
//!   `flat_map` or `flat_map_nullable` depending on what the step returns, and the chain stops at
//!   the first absent step.
//! - [`types::Sequence`]: an ordered in-memory sequence with `filter`, `map`, `distinct`,
//!   `sorted_by`, `limit`, `find_first`, matching terminals and reductions. Operations borrow
//!   their input and return new values, so a pipeline can be rerun.
//!
//! `find_first`, `reduce_max` and friends return into [`optional::Optional`].
//!
//! ## Example: filter → find_first → map
//!
//! ```rust
//! use rust_query_drills::records::{Dish, DishKind};
//! use rust_query_drills::types::Sequence;
//!
//! let menu = Sequence::new(vec![
//!     Dish::new("Seitan", true, 200, DishKind::Other),
//!     Dish::new("Pork", false, 800, DishKind::Meat),
//! ]);
//!
//! let name = menu
//!     .filter(Dish::is_vegetarian)
//!     .find_first()
//!     .map(|d| d.name);
//! assert_eq!(name.or_else(String::new()), "Seitan");
//! ```
//!
//! ## Example: partial projections
//!
//! [`types::Sequence::map_and_filter_absent`] accepts projections returning `Option` or
//! `Result`; elements that project to `None` or `Err` are dropped.
//!
//! ```rust
//! use rust_query_drills::types::Sequence;
//!
//! let raw = Sequence::new(vec!["12", "n/a", "7"]);
//! let parsed = raw.map_and_filter_absent(|s| s.parse::<u32>());
//! assert_eq!(parsed.into_vec(), vec![12, 7]);
//! ```
//!
//! ## Modules
//!
//! - [`optional`]: the optional-chain evaluator
//! - [`types`]: [`types::Sequence`] and query options
//! - [`processing`]: free-function forms of the query operations
//! - [`records`] / [`fixtures`]: sample record types and datasets
//! - [`drills`]: stream, optional and transaction drills
//! - [`sink`]: output sinks for printing drills
//! - [`error`]: the crate error type

pub mod drills;
pub mod error;
pub mod fixtures;
pub mod optional;
pub mod processing;
pub mod records;
pub mod sink;
pub mod types;

pub use error::{DrillError, DrillResult};
pub use optional::Optional;
pub use types::Sequence;
