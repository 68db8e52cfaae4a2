//! Sales ledger records and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sales transaction as returned by the sales store.
///
/// Rows are validated into this shape at the store boundary; the
/// aggregation fold never sees untyped rows. Amounts are non-negative
/// by store contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalesRow {
    /// Sales category the transaction was recorded under.
    pub category: String,
    /// Transaction amount.
    pub amount: Decimal,
}

/// Summed sales for one category within the current shift window.
///
/// A category with no matching transactions is simply absent from the
/// report, never present with a zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotal {
    /// Sales category.
    pub category: String,
    /// Sum of all transaction amounts for the category.
    pub total: Decimal,
}
