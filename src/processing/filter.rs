//! Element filtering for [`crate::types::Sequence`].

use crate::types::Sequence;

/// Returns a new [`Sequence`] containing only elements for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`Sequence::filter`].
pub fn filter<T, P>(seq: &Sequence<T>, predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.filter(predicate)
}
