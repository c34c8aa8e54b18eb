//! The classic drills, written against [`crate::processing`] and [`crate::optional`].
//!
//! - [`stream`]: menu and number-list collection drills
//! - [`optional`]: optional chaining over dishes, cars and insurance lookups
//! - [`transactions`]: questions about a trade book

pub mod optional;
pub mod stream;
pub mod transactions;

pub use optional::OptionalDrills;
pub use transactions::TransactionQuestions;
