use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated price of every product in one category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub total_price: f64,
}

/// Per-department head count and running mean age.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub user_count: usize,
    pub average_age: f64,
}

impl DepartmentStats {
    /// Fold one more age into the running mean.
    ///
    /// `new_avg = (old_avg * old_count + age) / (old_count + 1)`
    pub fn observe(&mut self, age: u32) {
        let previous_total = self.average_age * self.user_count as f64;
        self.user_count += 1;
        self.average_age = (previous_total + f64::from(age)) / self.user_count as f64;
    }
}

/// Category name to totals. Categories without products are absent.
pub type CategorySummary = BTreeMap<String, CategoryTotal>;

/// Department name to statistics.
pub type DepartmentSummary = BTreeMap<String, DepartmentStats>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_running_mean() {
        let mut stats = DepartmentStats::default();
        for age in [20, 30, 40] {
            stats.observe(age);
        }

        assert_eq!(stats.user_count, 3);
        assert!((stats.average_age - 30.0).abs() < 1e-9);
    }
}
