use thiserror::Error;

/// Errors surfaced by the order board.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderBoardError {
    /// A cancellation named an order with no structurally equal live order.
    #[error("No matching order found")]
    NotFound,

    /// A binary float could not be represented as a `Decimal`.
    #[error("Invalid number: {value}")]
    InvalidNumber { value: f64 },
}

/// Returned when a textual side is neither buy nor sell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid order side: {0}")]
pub struct ParseSideError(pub String);

pub type Result<T> = std::result::Result<T, OrderBoardError>;
