use recordset::prelude::*;
use recordset::validation::{validate_products, validate_unique_user_ids};
use std::collections::BTreeSet;

/// Deterministic pseudo-random user list.
fn generated_users(n: u64, seed: u64) -> Vec<User> {
    let departments = ["Engineering", "Sales", "Design", "Operations", "Support"];
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let age = (state >> 33) as u32 % 70;
            let department = departments[(state >> 40) as usize % departments.len()];
            let mut user = User::new(i, format!("user{:05}", i), age, state % 3 != 0, department);
            if state % 4 == 0 {
                user = user.with_tags([format!("t{}", state % 5)]);
            }
            user
        })
        .collect()
}

/// Test 1: Large dataset pagination reconstructs the input
#[test]
fn test_large_dataset_pagination() {
    let users = generated_users(10_000, 7);

    for page_size in [1, 7, 100, 9_999, 10_000, 20_000] {
        let total_pages = paginate(&users, 1, page_size).unwrap().total_pages;
        assert_eq!(total_pages, users.len().div_ceil(page_size));

        let mut rebuilt = Vec::with_capacity(users.len());
        for page in 1..=total_pages as i64 {
            rebuilt.extend(paginate(&users, page, page_size).unwrap().items);
        }
        assert_eq!(rebuilt, users);
    }
}

/// Test 2: Descending is the reverse of ascending when keys are unique
#[test]
fn test_sort_direction_symmetry_unique_keys() {
    let users = generated_users(500, 11);

    let asc = sort_by_key(&users, |u| u.name.clone(), SortOrder::Asc);
    let mut desc = sort_by_key(&users, |u| u.name.clone(), SortOrder::Desc);
    desc.reverse();

    assert_eq!(asc, desc);
}

/// Test 3: Sorting with many ties is deterministic and idempotent
#[test]
fn test_sort_with_ties_is_stable() {
    let users = generated_users(2_000, 3);

    let by_age = sort_by_key(&users, |u| u.age, SortOrder::Asc);
    assert_eq!(sort_by_key(&by_age, |u| u.age, SortOrder::Asc), by_age);

    for pair in by_age.windows(2) {
        assert!(pair[0].age <= pair[1].age);
        if pair[0].age == pair[1].age {
            // generated ids increase with input position
            assert!(pair[0].id < pair[1].id);
        }
    }
}

/// Test 4: Merge produces the union of ids and prefers the second list
#[test]
fn test_merge_union_property() {
    let first = generated_users(300, 5);
    let second: Vec<User> = generated_users(300, 9)
        .into_iter()
        .map(|mut u| {
            u.id += 150;
            u.name = format!("updated{}", u.id);
            u
        })
        .collect();

    let merged = merge_and_deduplicate_users(&first, &second);

    let expected: BTreeSet<u64> = first.iter().chain(&second).map(|u| u.id).collect();
    let actual: BTreeSet<u64> = merged.iter().map(|u| u.id).collect();
    assert_eq!(actual, expected);
    assert_eq!(merged.len(), expected.len());

    for user in &second {
        assert_eq!(find_user_by_id(&merged, user.id), Some(user));
    }
    // ids only in the first list come first, in order
    assert!(merged[..150].iter().zip(&first).all(|(m, f)| m == f));
    assert_eq!(merged[150].id, 150);
    assert_eq!(merged[150].name, "updated150");
}

/// Test 5: Department summary agrees with a batch mean
#[test]
fn test_department_summary_matches_batch_mean() {
    let users = generated_users(5_000, 13);
    let summary = get_department_summary(&users);

    let counted: usize = summary.values().map(|s| s.user_count).sum();
    assert_eq!(counted, users.len());

    for (department, stats) in &summary {
        let ages: Vec<f64> = users
            .iter()
            .filter(|u| &u.department == department)
            .map(|u| f64::from(u.age))
            .collect();
        let batch_mean = ages.iter().sum::<f64>() / ages.len() as f64;
        assert_eq!(stats.user_count, ages.len());
        assert!((stats.average_age - batch_mean).abs() < 1e-9);
    }
}

/// Test 6: Active filter is an order-preserving subsequence
#[test]
fn test_active_filter_subsequence() {
    let users = generated_users(1_000, 17);
    let active = filter_active_users(&users);

    assert!(active.iter().all(|u| u.is_active));
    assert_eq!(active.len(), users.iter().filter(|u| u.is_active).count());
    let mut remaining = users.iter();
    for user in &active {
        assert!(remaining.any(|u| u == user));
    }
}

/// Test 7: Untagged users never match any tag
#[test]
fn test_untagged_users_never_match() {
    let users = generated_users(1_000, 19);

    for tag in ["t0", "t1", "t2", "t3", "t4", ""] {
        for user in find_users_by_tag(&users, tag) {
            assert!(user.tags.is_some());
            assert!(user.has_tag(tag));
        }
    }
}

/// Test 8: Pathological inputs are rejected explicitly
#[test]
fn test_pathological_inputs() {
    let users = generated_users(10, 23);
    assert!(matches!(
        paginate(&users, 1, 0),
        Err(RecordsetError::InvalidArgument(_))
    ));

    let mut duplicated = users.clone();
    duplicated.push(users[3].clone());
    assert!(validate_unique_user_ids(&users).is_ok());
    assert!(validate_unique_user_ids(&duplicated).is_err());

    let products = vec![
        Product::new(1, "fine", 1.0, "a", 1),
        Product::new(2, "inf", f64::INFINITY, "a", 1),
    ];
    assert!(validate_products(&products).is_err());
    assert!(validate_products(&products[..1]).is_ok());
}

/// Test 9: Very long and unusual strings
#[test]
fn test_unusual_strings() {
    let long_department = "d".repeat(10_000);
    let users = vec![
        User::new(1, "", 20, true, long_department.clone()).with_tags([""]),
        User::new(2, "🦀 crab", 30, true, "🦀"),
    ];

    assert_eq!(find_users_by_tag(&users, "").len(), 1);
    assert_eq!(get_department_summary(&users)[&long_department].user_count, 1);
    assert_eq!(create_user_map(&users)[&2_u64], "🦀 crab");
}
