//! Budget evaluation
//!
//! Classifies each budget against current-period spend into a three-level
//! status. The display percentage is clamped to 100; the status itself uses
//! the unclamped ratio, computed in integer cents.

use std::collections::HashMap;

use crate::models::{Budget, BudgetId, CategoryId, Money};

/// Three-level budget status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Under 80% of the limit (including zero spend)
    Good,
    /// At or above 80% but under 100%
    Warning,
    /// At or above 100%
    Over,
}

impl BudgetStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "On Track",
            Self::Warning => "Near Limit",
            Self::Over => "Over Budget",
        }
    }
}

/// One evaluated budget
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedBudget {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub spent: Money,
    pub limit: Money,
    /// Percentage consumed, clamped to 100 for display
    pub percentage: f64,
    pub status: BudgetStatus,
}

/// Classify spend against a limit
///
/// A zero limit would divide by zero; it is treated as over when anything
/// was spent and good otherwise.
pub fn classify(spent: Money, limit: Money) -> BudgetStatus {
    if !limit.is_positive() {
        return if spent.is_positive() {
            BudgetStatus::Over
        } else {
            BudgetStatus::Good
        };
    }

    if spent.cents() >= limit.cents() {
        BudgetStatus::Over
    } else if spent.cents() * 10 >= limit.cents() * 8 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}

/// Percentage consumed, clamped to [0, 100]
fn clamped_percentage(spent: Money, limit: Money) -> f64 {
    if !limit.is_positive() {
        return if spent.is_positive() { 100.0 } else { 0.0 };
    }
    let ratio = spent.cents() as f64 / limit.cents() as f64;
    (ratio * 100.0).min(100.0).max(0.0)
}

/// Evaluate every budget against per-category spend for the current period
///
/// Categories with no recorded spend count as zero. Budgets referencing an
/// unknown category still evaluate; name resolution is the display layer's
/// concern.
pub fn evaluate_budgets(
    budgets: &[Budget],
    spend_by_category: &HashMap<CategoryId, Money>,
) -> Vec<EvaluatedBudget> {
    budgets
        .iter()
        .map(|budget| {
            let spent = spend_by_category
                .get(&budget.category_id)
                .copied()
                .unwrap_or_default();

            EvaluatedBudget {
                budget_id: budget.id.clone(),
                category_id: budget.category_id.clone(),
                spent,
                limit: budget.amount,
                percentage: clamped_percentage(spent, budget.amount),
                status: classify(spent, budget.amount),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, UserId};
    use chrono::NaiveDate;

    fn budget(category: &str, limit_cents: i64) -> Budget {
        Budget::new(
            UserId::from_raw("local"),
            CategoryId::from_raw(category),
            Money::from_cents(limit_cents),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_status_thresholds() {
        let limit = Money::from_cents(10000);

        assert_eq!(classify(Money::from_cents(7999), limit), BudgetStatus::Good);
        assert_eq!(
            classify(Money::from_cents(8000), limit),
            BudgetStatus::Warning
        );
        assert_eq!(
            classify(Money::from_cents(10000), limit),
            BudgetStatus::Over
        );
        assert_eq!(classify(Money::zero(), limit), BudgetStatus::Good);
    }

    #[test]
    fn test_zero_limit_guard() {
        assert_eq!(
            classify(Money::from_cents(1), Money::zero()),
            BudgetStatus::Over
        );
        assert_eq!(classify(Money::zero(), Money::zero()), BudgetStatus::Good);
    }

    #[test]
    fn test_percentage_clamped() {
        let mut spend = HashMap::new();
        spend.insert(CategoryId::from_raw("food"), Money::from_cents(15000));

        let evaluated = evaluate_budgets(&[budget("food", 10000)], &spend);
        assert_eq!(evaluated.len(), 1);
        assert_eq!(evaluated[0].percentage, 100.0);
        assert_eq!(evaluated[0].status, BudgetStatus::Over);
        assert_eq!(evaluated[0].spent.cents(), 15000);
    }

    #[test]
    fn test_unspent_category_counts_as_zero() {
        let evaluated = evaluate_budgets(&[budget("food", 10000)], &HashMap::new());
        assert_eq!(evaluated[0].spent, Money::zero());
        assert_eq!(evaluated[0].percentage, 0.0);
        assert_eq!(evaluated[0].status, BudgetStatus::Good);
    }

    #[test]
    fn test_percentage_midrange() {
        let mut spend = HashMap::new();
        spend.insert(CategoryId::from_raw("food"), Money::from_cents(2500));

        let evaluated = evaluate_budgets(&[budget("food", 10000)], &spend);
        assert!((evaluated[0].percentage - 25.0).abs() < f64::EPSILON);
        assert_eq!(evaluated[0].status, BudgetStatus::Good);
    }

    #[test]
    fn test_one_record_per_budget() {
        let budgets = vec![budget("food", 10000), budget("transport", 5000)];
        let evaluated = evaluate_budgets(&budgets, &HashMap::new());
        assert_eq!(evaluated.len(), 2);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BudgetStatus::Good.label(), "On Track");
        assert_eq!(BudgetStatus::Warning.label(), "Near Limit");
        assert_eq!(BudgetStatus::Over.label(), "Over Budget");
    }
}
