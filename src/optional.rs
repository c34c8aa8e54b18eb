//! Optional-chain evaluator.
//!
//! [`Optional<T>`] represents "a value, or nothing" and lets a multi-step derivation stop at the
//! first missing step without branching at every step.
//!
//! Two shapes of possibly-missing value meet here:
//!
//! - a **nullable** value: a plain [`Option<T>`] coming from a legacy lookup that signals "no
//!   result" by returning `None`;
//! - an **optional** value: an [`Optional<T>`] that is already part of a chain.
//!
//! Nullable values are wrapped once at the boundary with [`Optional::wrap`]. After that the step's
//! return type picks the combinator:
//!
//! | step returns   | combinator                        |
//! |----------------|-----------------------------------|
//! | `U`            | [`Optional::map`]                 |
//! | `Option<U>`    | [`Optional::flat_map_nullable`]   |
//! | `Optional<U>`  | [`Optional::flat_map`]            |
//!
//! Using `map` with a step that returns `Optional<U>` compiles, but it yields
//! `Optional<Optional<U>>`; callers that end up there picked the wrong combinator.
//!
//! ```rust
//! use rust_query_drills::optional::Optional;
//!
//! struct Insurance { name: String }
//! struct Car { insurance: Option<Insurance> }
//!
//! impl Car {
//!     fn insurance(&self) -> Optional<&Insurance> {
//!         Optional::wrap(self.insurance.as_ref())
//!     }
//! }
//!
//! let uninsured = Car { insurance: None };
//! let name = Optional::of(&uninsured)
//!     .flat_map(Car::insurance)
//!     .map(|i| i.name.clone());
//! assert!(name.is_absent());
//! ```

use serde::{Deserialize, Serialize};

/// A value that is either present or absent.
///
/// An absent `Optional` never exposes a value, and none of the combinators invoke their closure
/// when the receiver is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct Optional<T>(Option<T>);

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Optional<T> {
    /// A present value.
    pub fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// The absent value.
    pub fn absent() -> Self {
        Self(None)
    }

    /// Wrap a nullable value at the boundary: present iff `value` is `Some`.
    pub fn wrap(value: Option<T>) -> Self {
        Self(value)
    }

    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the value, if present.
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Borrow the value without consuming the chain.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Apply a step that always produces a value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(f))
    }

    /// Apply a step that itself returns an [`Optional`]. The step's result is returned as-is.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => f(value),
            None => Optional(None),
        }
    }

    /// Apply a step that may return a nullable result; equivalent to `map` followed by
    /// [`Optional::wrap`].
    pub fn flat_map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional(self.0.and_then(f))
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Run `consumer` on the value when present.
    ///
    /// This is the terminal used for side effects (printing); it never derives a value.
    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.0 {
            consumer(value);
        }
    }

    /// The value, or `default` when absent.
    pub fn or_else(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// The value, or the result of `f` when absent. `f` runs only when absent.
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(f)
    }

    /// Convert back into a plain [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Optional<Optional<T>> {
    /// Collapse one level of nesting produced by mapping with an `Optional`-returning step.
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::wrap(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Free-function form of [`Optional::wrap`].
pub fn wrap<T>(value: Option<T>) -> Optional<T> {
    Optional::wrap(value)
}
