//! The module contains the `LedgerEntry` type representing a line in a
//! category ledger.
//!
//! Both deposits and withdrawals are represented by `LedgerEntry`; the sign of
//! the amount tells them apart.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// Width of the description column in a rendered ledger line.
pub(crate) const DESCRIPTION_WIDTH: usize = 23;
/// Width of the amount column in a rendered ledger line.
pub(crate) const AMOUNT_WIDTH: usize = 7;

/// A single movement in a category ledger.
///
/// Entries are immutable once appended to a ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    amount: MoneyCents,
    description: String,
}

impl LedgerEntry {
    pub(crate) fn new(amount: MoneyCents, description: String) -> Self {
        Self {
            amount,
            description,
        }
    }

    /// Signed amount: positive for deposits, negative for withdrawals.
    #[must_use]
    pub fn amount(&self) -> MoneyCents {
        self.amount
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the entry takes money out of the category.
    #[must_use]
    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Renders the entry as a 30-column ledger line: the description cut or
/// padded to 23 characters, then the amount right-aligned in 7.
impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<desc$.desc$}{:>amount$}",
            self.description,
            self.amount,
            desc = DESCRIPTION_WIDTH,
            amount = AMOUNT_WIDTH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_description() {
        let entry = LedgerEntry::new(MoneyCents::new(-1015), "groceries".to_string());
        let line = entry.to_string();

        assert_eq!(line, format!("groceries{}-10.15", " ".repeat(15)));
        assert_eq!(line.chars().count(), 30);
        assert!(entry.is_withdrawal());
    }

    #[test]
    fn truncates_long_description() {
        let entry = LedgerEntry::new(
            MoneyCents::new(-1589),
            "restaurant and more food for dessert".to_string(),
        );

        assert_eq!(entry.to_string(), "restaurant and more foo -15.89");
    }

    #[test]
    fn empty_description_is_blank_column() {
        let entry = LedgerEntry::new(MoneyCents::new(5000), String::new());

        assert_eq!(entry.to_string(), format!("{}  50.00", " ".repeat(23)));
        assert!(!entry.is_withdrawal());
    }

    #[test]
    fn serializes_amount_as_cents() {
        let entry = LedgerEntry::new(MoneyCents::new(98985), "deposit".to_string());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "amount": 98985, "description": "deposit" })
        );
    }
}
