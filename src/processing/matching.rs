//! Matching terminals for [`crate::types::Sequence`].
//!
//! `any_match`, `all_match` and `none_match` evaluate in order and stop at the first decisive
//! element. `find_first` is the main producer of [`Optional`] values.

use crate::optional::Optional;
use crate::types::Sequence;

/// `false` on an empty sequence.
pub fn any_match<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.any_match(predicate)
}

/// Vacuously `true` on an empty sequence.
pub fn all_match<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.all_match(predicate)
}

/// Vacuously `true` on an empty sequence.
pub fn none_match<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.none_match(predicate)
}

/// The first element, or absent if the sequence is empty.
pub fn find_first<T: Clone>(seq: &Sequence<T>) -> Optional<T> {
    seq.find_first()
}

#[cfg(test)]
mod tests {
    use super::{all_match, any_match, find_first, none_match};
    use crate::optional::Optional;
    use crate::types::Sequence;

    #[test]
    fn empty_sequence_semantics() {
        let empty = Sequence::<i32>::empty();
        assert!(!any_match(&empty, |_| true));
        assert!(all_match(&empty, |_| false));
        assert!(none_match(&empty, |_| true));
        assert_eq!(find_first(&empty), Optional::absent());
    }

    #[test]
    fn matching_over_values() {
        let seq = Sequence::new(vec![120, 300, 800]);
        assert!(any_match(&seq, |c| *c > 700));
        assert!(!all_match(&seq, |c| *c < 700));
        assert!(none_match(&seq, |c| *c > 1000));
    }

    #[test]
    fn any_match_stops_at_first_match() {
        let seq = Sequence::new(vec![1, 2, 3, 4]);
        let mut visited = 0;
        assert!(any_match(&seq, |v| {
            visited += 1;
            *v == 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn find_first_matches_front_of_filtered_sequence() {
        let seq = Sequence::new(vec![3, 8, 5, 10]);
        let evens = seq.filter(|v| v % 2 == 0);
        assert_eq!(find_first(&evens), Optional::of(8));
    }
}
