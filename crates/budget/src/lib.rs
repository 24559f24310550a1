//! Envelope budgeting.
//!
//! A [`Category`] is an envelope of money with an append-only ledger of
//! deposits and withdrawals. Money moves between envelopes with
//! [`Category::transfer`], and [`create_spend_chart`] shows how the spending
//! is split across a set of categories.
//!
//! ```rust
//! use budget::{Category, MoneyCents, create_spend_chart};
//!
//! let mut food = Category::new("Food");
//! let mut clothing = Category::new("Clothing");
//! food.deposit(MoneyCents::new(100_00), "deposit");
//! assert!(food.transfer(MoneyCents::new(50_00), &mut clothing));
//! assert!(clothing.withdraw(MoneyCents::new(20_00), "shoes"));
//! assert!(food.withdraw(MoneyCents::new(20_00), "groceries"));
//!
//! let chart = create_spend_chart(&[food, clothing]).unwrap();
//! assert!(chart.starts_with("Percentage spent by category\n100|"));
//! ```
pub use category::{Category, normalize_name};
pub use chart::{create_spend_chart, spend_percentages};
pub use entry::LedgerEntry;
pub use error::BudgetError;
pub use money::MoneyCents;

mod category;
mod chart;
mod entry;
mod error;
mod money;

pub type ResultBudget<T> = Result<T, BudgetError>;
