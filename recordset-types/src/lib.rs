//! # recordset-types
//!
//! Plain record types consumed by the `recordset` query library.
//!
//! This crate provides the value objects that callers build and own:
//!
//! - **Entities**: `User`, `Product`, `Order`, `CartItem`
//! - **Derived records**: `AdultUser`
//! - **Summaries**: `CategorySummary`, `DepartmentSummary`
//! - **Pages**: `PaginatedResult`
//!
//! All types are serializable with Serde and use camelCase field names on the
//! wire (`isActive`, `totalPrice`, `userCount`, ...).
//!
//! ## Examples
//!
//! ```rust
//! use recordset_types::user::User;
//!
//! let user = User::new(1, "Alice", 31, true, "Engineering").with_tags(["rust", "backend"]);
//! assert!(user.has_tag("rust"));
//! assert!(!user.has_tag("frontend"));
//! ```

pub mod order;
pub mod page;
pub mod product;
pub mod summary;
pub mod user;

pub use order::{Order, OrderLine};
pub use page::PaginatedResult;
pub use product::{CartItem, Product};
pub use summary::{CategorySummary, CategoryTotal, DepartmentStats, DepartmentSummary};
pub use user::{AdultUser, User};
