//! Filtering, lookup and merge operations over user collections.

use recordset_types::User;
use rustc_hash::FxHashMap;

/// Users with `is_active` set, in their original relative order.
///
/// # Examples
///
/// ```
/// use recordset::{User, filter_active_users};
///
/// let users = vec![
///     User::new(1, "Alice", 30, true, "Eng"),
///     User::new(2, "Bob", 25, false, "Eng"),
///     User::new(3, "Cara", 41, true, "Ops"),
/// ];
///
/// let active = filter_active_users(&users);
/// assert_eq!(active.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn filter_active_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.is_active).cloned().collect()
}

/// First user whose id equals `id`, scanning front to back.
pub fn find_user_by_id(users: &[User], id: u64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

/// Map of id to name. With duplicate ids the last occurrence wins.
pub fn create_user_map(users: &[User]) -> FxHashMap<u64, String> {
    let mut map = FxHashMap::default();
    map.reserve(users.len());
    for user in users {
        map.insert(user.id, user.name.clone());
    }
    map
}

/// Users whose tag list contains `tag` exactly.
///
/// Users without a tag list never match.
pub fn find_users_by_tag(users: &[User], tag: &str) -> Vec<User> {
    users.iter().filter(|u| u.has_tag(tag)).cloned().collect()
}

/// Case-insensitive substring search on user names.
///
/// An empty query matches every user.
pub fn search_users_by_name(users: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Union of two user lists keyed by id.
///
/// A record seen later replaces the earlier record with the same id as a
/// whole, keeping the position where that id was first seen. The output
/// therefore lists `first`'s ids in order, followed by ids only present in
/// `second`, and for an id present in both carries `second`'s record.
///
/// # Examples
///
/// ```
/// use recordset::{User, merge_and_deduplicate_users};
///
/// let first = vec![User::new(1, "Old", 30, true, "Eng"), User::new(2, "Bob", 25, true, "Eng")];
/// let second = vec![User::new(3, "Cara", 41, true, "Ops"), User::new(1, "New", 31, false, "Ops")];
///
/// let merged = merge_and_deduplicate_users(&first, &second);
/// assert_eq!(merged.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(merged[0].name, "New");
/// ```
pub fn merge_and_deduplicate_users(first: &[User], second: &[User]) -> Vec<User> {
    let mut merged: Vec<User> = Vec::with_capacity(first.len() + second.len());
    let mut positions: FxHashMap<u64, usize> = FxHashMap::default();
    let mut replaced = 0usize;

    for user in first.iter().chain(second) {
        match positions.get(&user.id) {
            Some(&idx) => {
                merged[idx] = user.clone();
                replaced += 1;
            }
            None => {
                positions.insert(user.id, merged.len());
                merged.push(user.clone());
            }
        }
    }

    if replaced > 0 {
        log::debug!(
            "Merged {} users into {} unique ids ({} replaced)",
            first.len() + second.len(),
            merged.len(),
            replaced
        );
    }

    merged
}
