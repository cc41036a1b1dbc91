//! Stable sorting by extracted key or comparator.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Return a sorted copy of `items`, ordered by the key `key` extracts.
///
/// Keys are compared with their `PartialOrd` implementation: strings
/// lexicographically, numbers numerically. A key that is not comparable with
/// itself (e.g. `NaN`) sorts after every comparable key in ascending order and
/// before them in descending order.
///
/// The sort is stable in both directions: elements with equal keys keep their
/// input order, so for inputs with ties a descending sort is *not* the reverse
/// of the ascending one.
///
/// # Examples
///
/// ```
/// use recordset::{SortOrder, User, sort_by_key};
///
/// let users = vec![
///     User::new(1, "Cara", 41, true, "Ops"),
///     User::new(2, "Alice", 30, true, "Eng"),
///     User::new(3, "Bob", 30, false, "Eng"),
/// ];
///
/// let by_age = sort_by_key(&users, |u| u.age, SortOrder::Desc);
/// assert_eq!(by_age.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let by_name = sort_by_key(&users, |u| u.name.clone(), SortOrder::Asc);
/// assert_eq!(by_name[0].name, "Alice");
/// ```
pub fn sort_by_key<T, K, F>(items: &[T], key: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    sort_by(items, |a, b| compare_keys(&key(a), &key(b)), order)
}

/// Total order over `PartialOrd` keys with incomparable keys last.
fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    let a_ordered = a.partial_cmp(a).is_some();
    let b_ordered = b.partial_cmp(b).is_some();
    match (a_ordered, b_ordered) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Return a sorted copy of `items` using an ascending comparator.
///
/// `order` flips the comparator; ties keep their input order either way.
pub fn sort_by<T, F>(items: &[T], compare: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| order.apply(compare(a, b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordset_types::{Product, User};

    fn ids<T, F: Fn(&T) -> u64>(items: &[T], id: F) -> Vec<u64> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_sort_numbers_both_directions() {
        let users = vec![
            User::new(1, "A", 33, true, "X"),
            User::new(2, "B", 18, true, "X"),
            User::new(3, "C", 52, true, "X"),
        ];

        let asc = sort_by_key(&users, |u| u.age, SortOrder::Asc);
        let desc = sort_by_key(&users, |u| u.age, SortOrder::Desc);

        assert_eq!(ids(&asc, |u| u.id), vec![2, 1, 3]);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
        // original untouched
        assert_eq!(ids(&users, |u| u.id), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_strings_lexicographic() {
        let users = vec![
            User::new(1, "bob", 1, true, "X"),
            User::new(2, "Bob", 1, true, "X"),
            User::new(3, "alice", 1, true, "X"),
        ];

        let sorted = sort_by_key(&users, |u| u.name.clone(), SortOrder::Asc);

        // uppercase sorts before lowercase in byte order
        assert_eq!(ids(&sorted, |u| u.id), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let users = vec![
            User::new(1, "A", 30, true, "X"),
            User::new(2, "B", 20, true, "X"),
            User::new(3, "C", 30, true, "X"),
            User::new(4, "D", 20, true, "X"),
        ];

        let asc = sort_by_key(&users, |u| u.age, SortOrder::Asc);
        let desc = sort_by_key(&users, |u| u.age, SortOrder::Desc);

        assert_eq!(ids(&asc, |u| u.id), vec![2, 4, 1, 3]);
        assert_eq!(ids(&desc, |u| u.id), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let products = vec![
            Product::new(1, "p1", 9.5, "a", 1),
            Product::new(2, "p2", 1.25, "a", 1),
            Product::new(3, "p3", 9.5, "b", 1),
        ];

        let once = sort_by_key(&products, |p| p.price, SortOrder::Asc);
        let twice = sort_by_key(&once, |p| p.price, SortOrder::Asc);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_nan_keys_sort_last() {
        let products = vec![
            Product::new(1, "p1", 3.0, "a", 1),
            Product::new(2, "p2", f64::NAN, "a", 1),
            Product::new(3, "p3", 1.0, "a", 1),
        ];

        let asc = sort_by_key(&products, |p| p.price, SortOrder::Asc);
        let desc = sort_by_key(&products, |p| p.price, SortOrder::Desc);

        assert_eq!(ids(&asc, |p| p.id), vec![3, 1, 2]);
        assert_eq!(ids(&desc, |p| p.id), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_comparator() {
        let users = vec![
            User::new(1, "A", 30, true, "Ops"),
            User::new(2, "B", 25, true, "Eng"),
            User::new(3, "C", 40, true, "Eng"),
        ];

        let sorted = sort_by(
            &users,
            |a, b| a.department.cmp(&b.department).then(a.age.cmp(&b.age)),
            SortOrder::Asc,
        );

        assert_eq!(ids(&sorted, |u| u.id), vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<User> = Vec::new();
        assert!(sort_by_key(&empty, |u| u.age, SortOrder::Desc).is_empty());
    }
}
