//! Validation for pathological inputs.
//!
//! The query functions themselves accept any well-typed input. These checks
//! let callers reject data that would produce misleading output (negative or
//! non-finite prices, colliding ids) before running aggregations.

use crate::error::{RecordsetError, Result};
use recordset_types::{Product, User};
use rustc_hash::FxHashMap;

/// Validates a pagination page size.
///
/// # Examples
///
/// ```
/// use recordset::validation::validate_page_size;
///
/// assert!(validate_page_size(20).is_ok());
/// assert!(validate_page_size(0).is_err());
/// ```
pub fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(RecordsetError::InvalidArgument(
            "Page size must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// Validates a single product price: finite and non-negative.
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(RecordsetError::InvalidArgument(format!(
            "Price must be finite, got: {}",
            price
        )));
    }

    if price < 0.0 {
        return Err(RecordsetError::InvalidArgument(format!(
            "Price must not be negative, got: {}",
            price
        )));
    }

    Ok(())
}

/// Validates every product price.
///
/// # Examples
///
/// ```
/// use recordset::Product;
/// use recordset::validation::validate_products;
///
/// let products = vec![
///     Product::new(1, "ok", 10.0, "a", 1),
///     Product::new(2, "broken", f64::NAN, "a", 1),
/// ];
///
/// let err = validate_products(&products).unwrap_err();
/// assert!(err.to_string().contains("index 1"));
/// ```
pub fn validate_products(products: &[Product]) -> Result<()> {
    for (idx, product) in products.iter().enumerate() {
        validate_price(product.price).map_err(|e| {
            RecordsetError::InvalidArgument(format!(
                "Product {} at index {}: {}",
                product.id, idx, e
            ))
        })?;
    }
    Ok(())
}

/// Validates that no two users share an id.
pub fn validate_unique_user_ids(users: &[User]) -> Result<()> {
    let mut seen: FxHashMap<u64, usize> = FxHashMap::default();
    for (idx, user) in users.iter().enumerate() {
        if let Some(first) = seen.insert(user.id, idx) {
            return Err(RecordsetError::InvalidArgument(format!(
                "Duplicate user id {} at indices {} and {}",
                user.id, first, idx
            )));
        }
    }
    Ok(())
}
