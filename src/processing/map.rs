//! Element projection for [`crate::types::Sequence`].

use crate::DrillError;
use crate::types::{PartialProjection, Sequence};

/// Returns a new [`Sequence`] by applying `projection` to every element.
///
/// This is a convenience wrapper around [`Sequence::map`].
pub fn map<T, U, F>(seq: &Sequence<T>, projection: F) -> Sequence<U>
where
    F: FnMut(&T) -> U,
{
    seq.map(projection)
}

/// Applies a partial projection and drops elements it cannot project.
///
/// See [`Sequence::map_and_filter_absent`].
pub fn map_and_filter_absent<T, U, R, F>(seq: &Sequence<T>, projection: F) -> Sequence<U>
where
    R: PartialProjection<U>,
    F: FnMut(&T) -> R,
{
    seq.map_and_filter_absent(projection)
}

/// Applies a partial projection, returning projection faults instead of discarding them.
///
/// See [`Sequence::map_and_collect_faults`].
pub fn map_and_collect_faults<T, U, R, F>(
    seq: &Sequence<T>,
    projection: F,
) -> (Sequence<U>, Vec<DrillError>)
where
    R: PartialProjection<U>,
    F: FnMut(&T) -> R,
{
    seq.map_and_collect_faults(projection)
}
