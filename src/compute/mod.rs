//! Compute layer for record collections.
//!
//! Every function here is synchronous and side-effect free: inputs are
//! borrowed, results are freshly allocated, nothing is retained between calls.
//!
//! - `query`: filtering, lookup, id maps, merging
//! - `sort`: stable key and comparator sorts
//! - `paginate`: 1-indexed page slicing
//! - `aggregate`: derived properties and grouped statistics
//! - `validation`: explicit checks for pathological inputs

pub mod aggregate;
pub mod paginate;
pub mod query;
pub mod sort;
pub mod validation;
