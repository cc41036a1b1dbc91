//! Query, pagination and aggregation helpers for in-memory record collections,
//! plus a debounce primitive.
//!
//! ## Features
//! - **Queries**: filter, lookup, tag and name search over users
//! - **Sorting**: stable sorts by extracted key or comparator
//! - **Pagination**: 1-indexed pages with totals, no clamping of the page number
//! - **Aggregation**: per-category price totals, per-department head count and
//!   running mean age, cart and order totals
//! - **Merging**: id-keyed union where the later record wins
//! - **Debounce**: coalesce bursts of calls into one deferred call on the tokio timer
//!
//! Every query function borrows its input and returns new owned values.
//!
//! ```rust
//! use recordset::prelude::*;
//!
//! let users = vec![
//!     User::new(1, "Alice", 30, true, "Engineering").with_tags(["rust"]),
//!     User::new(2, "Bob", 19, false, "Sales"),
//!     User::new(3, "Cara", 41, true, "Engineering"),
//! ];
//!
//! let active = filter_active_users(&users);
//! let oldest_first = sort_by_key(&active, |u| u.age, SortOrder::Desc);
//! let page = paginate(&oldest_first, 1, 1)?;
//! assert_eq!(page.items[0].name, "Cara");
//! assert_eq!(page.total_pages, 2);
//!
//! let summary = get_department_summary(&users);
//! assert_eq!(summary["Engineering"].user_count, 2);
//! # Ok::<(), recordset::RecordsetError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod timing;

pub use config::{Config, DebounceConfig};
pub use error::{RecordsetError, Result};

pub use recordset_types::{
    AdultUser, CartItem, CategorySummary, CategoryTotal, DepartmentStats, DepartmentSummary,
    Order, OrderLine, PaginatedResult, Product, User,
};

pub use compute::aggregate::{
    ADULT_AGE, add_is_adult_property, cart_total, get_category_totals, get_department_summary,
    increase_quantity, order_total,
};
pub use compute::paginate::{paginate, paginate_with};
pub use compute::query::{
    create_user_map, filter_active_users, find_user_by_id, find_users_by_tag,
    merge_and_deduplicate_users, search_users_by_name,
};
pub use compute::sort::{SortOrder, sort_by, sort_by_key};
pub use compute::validation;

pub use timing::{DebounceEdge, Debounced, debounce};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, DebounceConfig, RecordsetError, Result};

    pub use crate::{
        AdultUser, CartItem, CategorySummary, DepartmentSummary, Order, PaginatedResult, Product,
        User,
    };

    pub use crate::{
        SortOrder, add_is_adult_property, create_user_map, filter_active_users, find_user_by_id,
        find_users_by_tag, get_category_totals, get_department_summary,
        merge_and_deduplicate_users, paginate, sort_by, sort_by_key,
    };

    pub use crate::{DebounceEdge, Debounced, debounce};

    pub use std::time::Duration;
}
