//! Sales aggregation fold.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{SalesRow, SalesTotal};

/// Reduces raw transaction rows into per-category totals.
///
/// Rows are grouped by category and their amounts summed; the result is
/// ordered by summed amount descending. Equal totals are ordered by
/// category label ascending — a deterministic tie-break chosen here, not
/// mandated by the upstream data.
///
/// Categories with no rows in the window are absent from the result, and
/// no category appears twice.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use shiftboard::models::SalesRow;
/// use shiftboard::rollup::summarize_sales;
///
/// let rows = vec![
///     SalesRow { category: "A".to_string(), amount: Decimal::new(10, 0) },
///     SalesRow { category: "A".to_string(), amount: Decimal::new(5, 0) },
///     SalesRow { category: "B".to_string(), amount: Decimal::new(7, 0) },
/// ];
///
/// let totals = summarize_sales(&rows);
/// assert_eq!(totals[0].category, "A");
/// assert_eq!(totals[0].total, Decimal::new(15, 0));
/// assert_eq!(totals[1].category, "B");
/// ```
pub fn summarize_sales(rows: &[SalesRow]) -> Vec<SalesTotal> {
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for row in rows {
        *by_category
            .entry(row.category.as_str())
            .or_insert(Decimal::ZERO) += row.amount;
    }

    let mut totals: Vec<SalesTotal> = by_category
        .into_iter()
        .map(|(category, total)| SalesTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, amount: i64) -> SalesRow {
        SalesRow {
            category: category.to_string(),
            amount: Decimal::new(amount, 0),
        }
    }

    // ==========================================================================
    // SA-001: amounts sum per category, ordered by total descending
    // ==========================================================================
    #[test]
    fn test_sa_001_sums_and_orders_descending() {
        let rows = vec![row("A", 10), row("A", 5), row("B", 7)];

        let totals = summarize_sales(&rows);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "A");
        assert_eq!(totals[0].total, Decimal::new(15, 0));
        assert_eq!(totals[1].category, "B");
        assert_eq!(totals[1].total, Decimal::new(7, 0));
    }

    // ==========================================================================
    // SA-002: equal totals tie-break by category ascending
    // ==========================================================================
    #[test]
    fn test_sa_002_equal_totals_order_by_category() {
        let rows = vec![row("zeta", 9), row("alpha", 9), row("mid", 9)];

        let totals = summarize_sales(&rows);

        let categories: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(summarize_sales(&[]).is_empty());
    }

    #[test]
    fn test_no_category_appears_twice() {
        let rows = vec![row("A", 1), row("B", 2), row("A", 3), row("B", 4)];

        let totals = summarize_sales(&rows);

        assert_eq!(totals.len(), 2);
        let mut categories: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        categories.dedup();
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_fractional_amounts_sum_exactly() {
        let rows = vec![
            SalesRow {
                category: "coffee".to_string(),
                amount: Decimal::new(1050, 2), // 10.50
            },
            SalesRow {
                category: "coffee".to_string(),
                amount: Decimal::new(425, 2), // 4.25
            },
        ];

        let totals = summarize_sales(&rows);
        assert_eq!(totals[0].total, Decimal::new(1475, 2)); // 14.75
    }

    #[test]
    fn test_single_row_passes_through() {
        let totals = summarize_sales(&[row("only", 3)]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "only");
        assert_eq!(totals[0].total, Decimal::new(3, 0));
    }
}
