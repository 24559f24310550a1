//! The module contains `Category` struct and its implementation.
use core::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::{LedgerEntry, MoneyCents, entry::AMOUNT_WIDTH};

/// Width of a rendered category report.
const REPORT_WIDTH: usize = 30;

/// A budget category, an envelope of money with its own ledger.
///
/// The ledger is append-only: [`deposit`](Category::deposit),
/// [`withdraw`](Category::withdraw) and [`transfer`](Category::transfer) are
/// the only ways to change it. The balance is never stored, it is always
/// the sum of the ledger.
///
/// # Examples
///
/// ```rust
/// use budget::{Category, MoneyCents};
///
/// let mut food = Category::new("Food");
/// food.deposit(MoneyCents::new(1000_00), "initial deposit");
/// assert!(food.withdraw(MoneyCents::new(10_15), "groceries"));
/// assert_eq!(food.get_balance(), MoneyCents::new(989_85));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    name_norm: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Creates a category with an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name_norm: normalize_name(&name),
            name,
            ledger: Vec::new(),
        }
    }

    /// The name as given to [`Category::new`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name in Unicode NFC, used for widths and lookups.
    #[must_use]
    pub fn normalized_name(&self) -> &str {
        &self.name_norm
    }

    /// Ledger entries in insertion order.
    #[must_use]
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Appends a deposit. The amount is not validated.
    pub fn deposit(&mut self, amount: MoneyCents, description: impl Into<String>) {
        let entry = LedgerEntry::new(amount, description.into());
        tracing::trace!(category = %self.name, %amount, "deposit");
        self.ledger.push(entry);
    }

    #[must_use]
    pub fn get_balance(&self) -> MoneyCents {
        self.ledger.iter().map(LedgerEntry::amount).sum()
    }

    /// Returns `true` if the balance covers `amount`.
    #[must_use]
    pub fn check_funds(&self, amount: MoneyCents) -> bool {
        self.get_balance() >= amount
    }

    /// Appends a withdrawal of `amount`, stored negated.
    ///
    /// Returns `false` and leaves the ledger untouched when funds are
    /// insufficient.
    pub fn withdraw(&mut self, amount: MoneyCents, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            tracing::debug!(
                category = %self.name,
                %amount,
                balance = %self.get_balance(),
                "withdrawal refused: insufficient funds"
            );
            return false;
        }

        let entry = LedgerEntry::new(-amount, description.into());
        tracing::trace!(category = %self.name, %amount, "withdraw");
        self.ledger.push(entry);
        true
    }

    /// Moves `amount` into `destination`.
    ///
    /// Writes `Transfer to <destination>` on this ledger and
    /// `Transfer from <self>` on the destination. Returns `false` and touches
    /// neither ledger when funds are insufficient.
    pub fn transfer(&mut self, amount: MoneyCents, destination: &mut Category) -> bool {
        if !self.check_funds(amount) {
            tracing::debug!(
                from = %self.name,
                to = %destination.name,
                %amount,
                "transfer refused: insufficient funds"
            );
            return false;
        }

        // The destination only sees money the source actually gave up.
        if !self.withdraw(amount, format!("Transfer to {}", destination.name)) {
            return false;
        }
        destination.deposit(amount, format!("Transfer from {}", self.name));
        true
    }

    /// Sum of the withdrawals, zero or negative.
    #[must_use]
    pub fn spent(&self) -> MoneyCents {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(LedgerEntry::amount)
            .sum()
    }

    /// Title line with the name between asterisks.
    ///
    /// Each side gets `(30 - len) / 2` asterisks, so odd remainders give a
    /// 29-column title. The length is counted on the normalised name.
    fn title(&self) -> String {
        let padding = REPORT_WIDTH.saturating_sub(self.name_norm.chars().count()) / 2;
        let stars = "*".repeat(padding);
        format!("{stars}{}{stars}", self.name)
    }
}

/// Normalises a category name to Unicode NFC, so names typed with combining
/// accents compare and measure like their precomposed form.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.nfc().collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        for entry in &self.ledger {
            writeln!(f, "{entry}")?;
        }
        write!(f, "Total:{:>AMOUNT_WIDTH$}", self.get_balance())
    }
}
