//! Derived properties and grouped statistics.

use recordset_types::{
    AdultUser, CartItem, CategorySummary, DepartmentSummary, Order, Product, User,
};
use rustc_hash::FxHashMap;

/// Minimum age, inclusive, at which a user counts as an adult.
pub const ADULT_AGE: u32 = 20;

/// Copy every user and attach `is_adult = age >= ADULT_AGE`.
pub fn add_is_adult_property(users: &[User]) -> Vec<AdultUser> {
    users
        .iter()
        .map(|user| AdultUser {
            user: user.clone(),
            is_adult: user.age >= ADULT_AGE,
        })
        .collect()
}

/// Sum of `price` per category.
///
/// Stock is ignored: this is a plain price sum, not a stock-weighted value.
/// Only categories that occur in `products` appear in the result.
///
/// # Examples
///
/// ```
/// use recordset::{Product, get_category_totals};
///
/// let products = vec![
///     Product::new(1, "Laptop", 1200.0, "Electronics", 3),
///     Product::new(2, "Mouse", 25.0, "Electronics", 40),
///     Product::new(3, "Desk", 300.0, "Furniture", 2),
/// ];
///
/// let totals = get_category_totals(&products);
/// assert_eq!(totals["Electronics"].total_price, 1225.0);
/// assert_eq!(totals["Furniture"].total_price, 300.0);
/// assert!(!totals.contains_key("Toys"));
/// ```
pub fn get_category_totals(products: &[Product]) -> CategorySummary {
    let mut summary = CategorySummary::new();
    for product in products {
        summary
            .entry(product.category.clone())
            .or_default()
            .total_price += product.price;
    }
    log::debug!(
        "Aggregated {} products into {} categories",
        products.len(),
        summary.len()
    );
    summary
}

/// Head count and mean age per department.
///
/// The mean is folded incrementally, one user at a time in input order, so
/// results can differ from a two-pass mean by floating point rounding.
///
/// # Examples
///
/// ```
/// use recordset::{User, get_department_summary};
///
/// let users = vec![
///     User::new(1, "A", 20, true, "Eng"),
///     User::new(2, "B", 30, true, "Eng"),
///     User::new(3, "C", 40, false, "Eng"),
///     User::new(4, "D", 51, true, "Ops"),
/// ];
///
/// let summary = get_department_summary(&users);
/// assert_eq!(summary["Eng"].user_count, 3);
/// assert!((summary["Eng"].average_age - 30.0).abs() < 1e-9);
/// assert_eq!(summary["Ops"].user_count, 1);
/// ```
pub fn get_department_summary(users: &[User]) -> DepartmentSummary {
    let mut summary = DepartmentSummary::new();
    for user in users {
        summary
            .entry(user.department.clone())
            .or_default()
            .observe(user.age);
    }
    log::debug!(
        "Aggregated {} users into {} departments",
        users.len(),
        summary.len()
    );
    summary
}

/// Sum of `price * quantity` over the cart.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Copy of the cart with one more unit of item `id`.
///
/// Every item with a matching id is incremented (saturating); the rest are
/// copied unchanged. The input cart is not modified.
pub fn increase_quantity(items: &[CartItem], id: u64) -> Vec<CartItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                CartItem {
                    quantity: item.quantity.saturating_add(1),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Value of an order priced against `products`.
///
/// Lines that reference an unknown product id contribute nothing. With
/// duplicate product ids the first product in `products` is used.
pub fn order_total(order: &Order, products: &[Product]) -> f64 {
    let mut prices: FxHashMap<u64, f64> = FxHashMap::default();
    for product in products {
        prices.entry(product.id).or_insert(product.price);
    }

    let mut total = 0.0;
    for line in &order.products {
        match prices.get(&line.product_id) {
            Some(price) => total += price * f64::from(line.quantity),
            None => log::warn!(
                "Order {} references unknown product {}. Skipping line.",
                order.id,
                line.product_id
            ),
        }
    }
    total
}
