//! The module contains the errors the budget can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when a decimal string is not a valid amount.
//! - [`DivisionByZero`] returned when a spend chart has nothing to divide by.
//! - [`InvalidArgument`] returned when an input breaks a precondition.
//!
//! Insufficient funds is not an error: withdrawals and transfers report it
//! with a `false` return value.
//!
//!  [`InvalidAmount`]: BudgetError::InvalidAmount
//!  [`DivisionByZero`]: BudgetError::DivisionByZero
//!  [`InvalidArgument`]: BudgetError::InvalidArgument
use thiserror::Error;

/// Budget custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
