//! Reductions for [`crate::types::Sequence`].
//!
//! - [`count()`]: number of elements
//! - [`to_set()`]: collapse into a set
//! - [`join_to_string()`]: concatenate a projection of every element
//! - [`reduce_max()`] / [`reduce_min()`]: the element with the extreme key, first one on ties
//! - [`max_value()`] / [`min_value()`]: the extreme key value itself
//!
//! Extremes return an absent [`Optional`] on an empty sequence.

use std::collections::HashSet;
use std::hash::Hash;

use crate::optional::Optional;
use crate::types::{JoinOptions, Sequence};

/// Number of elements.
pub fn count<T>(seq: &Sequence<T>) -> usize {
    seq.count()
}

/// Collapse into a set; duplicates are merged.
pub fn to_set<T>(seq: &Sequence<T>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    seq.to_set()
}

/// Concatenate `projection(element)` for each element with `separator` in between.
pub fn join_to_string<T, S, F>(seq: &Sequence<T>, separator: &str, projection: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&T) -> S,
{
    seq.join_to_string(separator, projection)
}

/// Like [`join_to_string`], with a prefix and suffix from `options`.
pub fn join_with<T, S, F>(seq: &Sequence<T>, options: &JoinOptions, projection: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&T) -> S,
{
    seq.join_with(options, projection)
}

/// The element with the largest key.
pub fn reduce_max<T, K, F>(seq: &Sequence<T>, key: F) -> Optional<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    seq.reduce_max(key)
}

/// The element with the smallest key.
pub fn reduce_min<T, K, F>(seq: &Sequence<T>, key: F) -> Optional<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    seq.reduce_min(key)
}

/// The largest key.
pub fn max_value<T, K, F>(seq: &Sequence<T>, key: F) -> Optional<K>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    seq.max_value(key)
}

/// The smallest key.
pub fn min_value<T, K, F>(seq: &Sequence<T>, key: F) -> Optional<K>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    seq.min_value(key)
}
