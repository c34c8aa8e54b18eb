//! Core types for the query engine.
//!
//! A [`Sequence`] is an ordered, finite, in-memory collection of caller-typed records. Every
//! operation borrows the sequence and returns a new value, so the same pipeline can be run
//! against the same sequence any number of times with the same result.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::optional::Optional;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        })
    }
}

/// Options for [`Sequence::join_with`].
///
/// The default joins with no separator and no surrounding text. Fields missing from a
/// deserialized value take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    /// Text placed between consecutive elements.
    pub separator: String,
    /// Text placed before the first element.
    pub prefix: String,
    /// Text placed after the last element.
    pub suffix: String,
}

impl JoinOptions {
    /// Join with `separator` and no prefix/suffix.
    pub fn separated(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }
}

/// Ordered, restartable, in-memory sequence of records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Sequence<T> {
    /// Create a sequence from owned items, preserving their order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Create a new sequence by applying `projection` to every element.
    ///
    /// Order and length are preserved.
    pub fn map<U, F>(&self, projection: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::new(self.items.iter().map(projection).collect())
    }

    /// Returns `true` if any element matches. Stops at the first match.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Returns `true` if every element matches; `true` on an empty sequence.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Returns `true` if no element matches; `true` on an empty sequence.
    pub fn none_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.items.iter().any(|item| predicate(item))
    }

    /// Number of elements; same as [`Self::len`].
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Run `consumer` on every element in order.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(consumer)
    }

    /// Concatenate a projection of every element, separated by `separator`.
    ///
    /// An empty sequence yields an empty string.
    pub fn join_to_string<S, F>(&self, separator: &str, projection: F) -> String
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        self.join_with(&JoinOptions::separated(separator), projection)
    }

    /// Like [`Self::join_to_string`], with a prefix and suffix around the whole result.
    pub fn join_with<S, F>(&self, options: &JoinOptions, mut projection: F) -> String
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        let mut out = options.prefix.clone();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(&options.separator);
            }
            out.push_str(projection(item).as_ref());
        }
        out.push_str(&options.suffix);
        out
    }

    /// Apply a projection that may be undefined or fail for some elements, dropping those
    /// elements from the result.
    ///
    /// The projection returns an [`Option`] (absent result) or a [`Result`] (fault). Both `None`
    /// and `Err` drop the element; faults are logged at `debug` level and otherwise discarded.
    /// Use [`Self::map_and_collect_faults`] to keep them.
    pub fn map_and_filter_absent<U, R, F>(&self, mut projection: F) -> Sequence<U>
    where
        R: PartialProjection<U>,
        F: FnMut(&T) -> R,
    {
        let mut out = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            match projection(item).settle() {
                Projected::Value(v) => out.push(v),
                Projected::Absent => {}
                Projected::Fault(message) => {
                    tracing::debug!(index, %message, "dropping element after projection fault");
                }
            }
        }
        tracing::trace!(
            input = self.items.len(),
            output = out.len(),
            "map_and_filter_absent"
        );
        Sequence::new(out)
    }

    /// Like [`Self::map_and_filter_absent`], but returns faults alongside the projected sequence.
    ///
    /// Absent results are still dropped silently; each fault becomes a
    /// [`DrillError::Projection`] carrying the element's index.
    pub fn map_and_collect_faults<U, R, F>(
        &self,
        mut projection: F,
    ) -> (Sequence<U>, Vec<DrillError>)
    where
        R: PartialProjection<U>,
        F: FnMut(&T) -> R,
    {
        let mut out = Vec::with_capacity(self.items.len());
        let mut faults = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            match projection(item).settle() {
                Projected::Value(v) => out.push(v),
                Projected::Absent => {}
                Projected::Fault(message) => faults.push(DrillError::Projection { index, message }),
            }
        }
        (Sequence::new(out), faults)
    }

    /// The element maximizing `key`; ties resolve to the first occurrence.
    pub fn reduce_max<K, F>(&self, key: F) -> Optional<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.reduce_extreme(key, Ordering::Greater)
    }

    /// The element minimizing `key`; ties resolve to the first occurrence.
    pub fn reduce_min<K, F>(&self, key: F) -> Optional<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.reduce_extreme(key, Ordering::Less)
    }

    /// The largest key value.
    pub fn max_value<K, F>(&self, key: F) -> Optional<K>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Optional::wrap(self.items.iter().map(key).max())
    }

    /// The smallest key value.
    pub fn min_value<K, F>(&self, key: F) -> Optional<K>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Optional::wrap(self.items.iter().map(key).min())
    }

    // Replaces the current best only on a strict improvement, so the first of equal keys wins.
    fn reduce_extreme<K, F>(&self, mut key: F, wanted: Ordering) -> Optional<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut best: Option<(K, &T)> = None;
        for item in &self.items {
            let k = key(item);
            let replace = match &best {
                Some((current, _)) => k.cmp(current) == wanted,
                None => true,
            };
            if replace {
                best = Some((k, item));
            }
        }
        Optional::wrap(best.map(|(_, item)| item))
    }
}

impl<T: AsRef<str>> Sequence<T> {
    /// Concatenate string elements with `separator` in between.
    pub fn join(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a new sequence containing only elements for which `predicate` returns `true`.
    ///
    /// Relative order is preserved.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let items: Vec<T> = self
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        tracing::trace!(input = self.items.len(), output = items.len(), "filter");
        Self::new(items)
    }

    /// The first `n` elements, or all of them if there are fewer than `n`.
    pub fn limit(&self, n: usize) -> Self {
        Self::new(self.items.iter().take(n).cloned().collect())
    }

    /// Stable sort by `key` in the given direction; equal keys keep their input order.
    pub fn sorted_by<K, F>(&self, mut key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut items = self.items.clone();
        items.sort_by(|a, b| dir.apply(key(a).cmp(&key(b))));
        Self::new(items)
    }

    /// The first element, if any.
    pub fn find_first(&self) -> Optional<T> {
        Optional::wrap(self.items.first().cloned())
    }
}

impl<T: Clone + Ord> Sequence<T> {
    /// Stable sort by the elements' natural order.
    pub fn sorted(&self, dir: Dir) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| dir.apply(a.cmp(b)));
        Self::new(items)
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Remove later duplicates, keeping the first occurrence of each element in place.
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.items.len());
        let items = self
            .items
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect();
        Self::new(items)
    }

    /// Collapse the sequence into a set.
    pub fn to_set(&self) -> HashSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Outcome of one application of a partial projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projected<U> {
    /// The projection produced a value.
    Value(U),
    /// The projection is undefined for this element.
    Absent,
    /// The projection failed; the message is the fault's display text.
    Fault(String),
}

/// Return types accepted by [`Sequence::map_and_filter_absent`].
pub trait PartialProjection<U> {
    /// Classify this projection result as a value, an absence, or a fault.
    fn settle(self) -> Projected<U>;
}

impl<U> PartialProjection<U> for Option<U> {
    fn settle(self) -> Projected<U> {
        match self {
            Some(v) => Projected::Value(v),
            None => Projected::Absent,
        }
    }
}

impl<U> PartialProjection<U> for Optional<U> {
    fn settle(self) -> Projected<U> {
        self.into_option().settle()
    }
}

impl<U, E: fmt::Display> PartialProjection<U> for Result<U, E> {
    fn settle(self) -> Projected<U> {
        match self {
            Ok(v) => Projected::Value(v),
            Err(e) => Projected::Fault(e.to_string()),
        }
    }
}
