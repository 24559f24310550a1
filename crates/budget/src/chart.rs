//! Spend chart: how much of the total spending each category accounts for.
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  90|
//!  80|
//!  70|    o
//!  60|    o
//!  50|    o
//!  40|    o
//!  30|    o
//!  20|    o  o
//!  10|    o  o
//!   0| o  o  o
//!     ----------
//!      B  F  E
//!      u  o  n
//! ```
//!
//! (name rows truncated)
use crate::{BudgetError, Category, ResultBudget};

const TITLE: &str = "Percentage spent by category";
/// Left margin taken by the axis labels and the `|`.
const MARGIN: &str = "    ";

/// Spending share of each category, floored to a multiple of 10.
///
/// Only withdrawals count as spending. Amounts are integer cents, so the
/// shares are computed exactly, in `i128` to leave room for large budgets.
///
/// # Errors
///
/// - [`BudgetError::InvalidArgument`] when `categories` is empty.
/// - [`BudgetError::DivisionByZero`] when no category has any withdrawal.
pub fn spend_percentages(categories: &[Category]) -> ResultBudget<Vec<u8>> {
    if categories.is_empty() {
        return Err(BudgetError::InvalidArgument(
            "spend chart needs at least one category".to_string(),
        ));
    }

    // Widened so that neither the total nor the `* 10` below can overflow.
    let spent: Vec<i128> = categories
        .iter()
        .map(|category| i128::from(category.spent().cents()))
        .collect();
    let total: i128 = spent.iter().sum();
    if total == 0 {
        return Err(BudgetError::DivisionByZero(
            "no withdrawals in any category".to_string(),
        ));
    }

    // Both sides are <= 0 and |spent| <= |total|, so the bucket is in 0..=10
    // and truncating division is a floor.
    spent
        .iter()
        .map(|amount| {
            let bucket = amount * 10 / total;
            u8::try_from(bucket * 10).map_err(|_| {
                BudgetError::InvalidAmount(format!("spend share out of range: {bucket}"))
            })
        })
        .collect()
}

/// Renders the spend chart of `categories` in the given order.
///
/// # Errors
///
/// Same as [`spend_percentages`].
pub fn create_spend_chart(categories: &[Category]) -> ResultBudget<String> {
    let percentages = spend_percentages(categories)?;
    tracing::debug!(?percentages, "rendering spend chart");

    let mut lines = Vec::with_capacity(13);
    lines.push(TITLE.to_string());

    for row in (0..=100u8).rev().step_by(10) {
        let cells: String = percentages
            .iter()
            .map(|&percentage| if percentage >= row { " o " } else { "   " })
            .collect();
        lines.push(format!("{row:>3}|{cells} "));
    }

    lines.push(format!("{MARGIN}{}", "-".repeat(3 * categories.len() + 1)));

    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|category| category.normalized_name().chars().collect())
        .collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or(0);

    for index in 0..longest {
        let cells: String = names
            .iter()
            .map(|name| format!(" {} ", name.get(index).copied().unwrap_or(' ')))
            .collect();
        lines.push(format!("{MARGIN}{cells} "));
    }

    Ok(lines.join("\n"))
}
