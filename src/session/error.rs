//! Error types for order editing and review.

use thiserror::Error;

use super::drink::MAX_QUANTITY;

/// Top-level error returned by [`Session::apply`](super::Session::apply).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("drink update failed: {0}")]
    Drink(#[from] DrinkError),

    #[error("order lookup failed: {0}")]
    Orders(#[from] OrdersError),
}

/// Error while editing the live drink configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrinkError {
    #[error("invalid quantity {0}, expected 1 to {max}", max = MAX_QUANTITY)]
    InvalidQuantity(u32),
}

/// Error while reading submitted orders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersError {
    #[error("order index {index} out of range, {len} orders submitted")]
    IndexOutOfRange { index: usize, len: usize },
}
