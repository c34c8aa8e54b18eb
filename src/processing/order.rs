//! Ordering, deduplication and truncation for [`crate::types::Sequence`].

use std::hash::Hash;

use crate::types::{Dir, Sequence};

/// Stable sort by `key`. Elements with equal keys keep their relative input order.
pub fn sorted_by<T, K, F>(seq: &Sequence<T>, key: F, dir: Dir) -> Sequence<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    seq.sorted_by(key, dir)
}

/// Stable sort by the elements' natural order.
pub fn sorted<T>(seq: &Sequence<T>, dir: Dir) -> Sequence<T>
where
    T: Clone + Ord,
{
    seq.sorted(dir)
}

/// Remove later duplicates; first occurrences keep their order.
pub fn distinct<T>(seq: &Sequence<T>) -> Sequence<T>
where
    T: Clone + Eq + Hash,
{
    seq.distinct()
}

/// The first `n` elements (all of them if there are fewer).
pub fn limit<T: Clone>(seq: &Sequence<T>, n: usize) -> Sequence<T> {
    seq.limit(n)
}

#[cfg(test)]
mod tests {
    use super::{distinct, limit, sorted, sorted_by};
    use crate::types::{Dir, Sequence};

    fn pairs() -> Sequence<(char, i32)> {
        Sequence::new(vec![('a', 3), ('b', 1), ('c', 3), ('d', 2), ('e', 1)])
    }

    #[test]
    fn sorted_by_is_stable_ascending() {
        let out = sorted_by(&pairs(), |p| p.1, Dir::Asc);
        let tags: String = out.iter().map(|p| p.0).collect();
        assert_eq!(tags, "bedac");
    }

    #[test]
    fn sorted_by_is_stable_descending() {
        let out = sorted_by(&pairs(), |p| p.1, Dir::Desc);
        let tags: String = out.iter().map(|p| p.0).collect();
        assert_eq!(tags, "acdbe");
    }

    #[test]
    fn sorted_by_is_idempotent() {
        let once = sorted_by(&pairs(), |p| p.1, Dir::Asc);
        assert_eq!(sorted_by(&once, |p| p.1, Dir::Asc), once);
    }

    #[test]
    fn sorted_natural_order() {
        let seq = Sequence::new(vec!["Raoul", "Alan", "Mario"]);
        let asc = sorted(&seq, Dir::Asc).into_vec();
        let desc = sorted(&seq, Dir::Desc).into_vec();
        assert_eq!(asc, vec!["Alan", "Mario", "Raoul"]);
        assert_eq!(desc, vec!["Raoul", "Mario", "Alan"]);
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let seq = Sequence::new(vec![4, 2, 4, 8, 2, 6]);
        assert_eq!(distinct(&seq).into_vec(), vec![4, 2, 8, 6]);
        assert!(distinct(&Sequence::<i32>::empty()).is_empty());
    }

    #[test]
    fn limit_truncates_or_returns_all() {
        let seq = pairs();
        assert_eq!(limit(&seq, 2).len(), 2);
        assert_eq!(limit(&seq, 0).len(), 0);
        assert_eq!(limit(&seq, 50), seq);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Dir::default(), Dir::Asc);
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn direction_serializes_as_lowercase() {
        assert_eq!(serde_json::to_string(&Dir::Desc).unwrap(), r#""desc""#);
        let dir: Dir = serde_json::from_str(r#""asc""#).unwrap();
        assert_eq!(dir, Dir::Asc);
        assert!(serde_json::from_str::<Dir>(r#""up""#).is_err());
    }
}
