//! A thread-safe live order board that aggregates open market interest by price level.
//!
//! ## Architecture
//!
//! The library is split into two components:
//!
//! 1. `OrderRegistry`: the concurrency-safe set of live orders
//! 2. `OrderBoard`: the service that registers and cancels orders and computes
//!    aggregated summaries from the registry
//!
//! Orders are identified structurally: registering an order identical to a live one
//! is a no-op, and cancelling requires an exact match of user, quantity, price and side.
//!
//! ## Example Usage
//!
//! ```rust
//! use live_order_board::{Order, OrderBoard, OrderRegistry, Side};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! // Create the registry and inject it into the board
//! let registry = Arc::new(OrderRegistry::new());
//! let board = OrderBoard::new(registry);
//!
//! // Register a few sell orders
//! board.register(Order::sell(1, Decimal::new(10, 1), Decimal::new(12, 1)));
//! board.register(Order::sell(2, Decimal::new(20, 1), Decimal::new(36, 1)));
//! board.register(Order::sell(3, Decimal::new(30, 1), Decimal::new(12, 1)));
//!
//! // Sell summaries list the lowest ask first
//! let summary = board.summary(Side::Sell);
//! assert_eq!(summary.best().map(|line| line.price), Some(Decimal::new(12, 1)));
//! assert_eq!(summary.get(Decimal::new(12, 1)), Some(Decimal::new(40, 1)));
//!
//! // Or render it for display
//! assert_eq!(
//!     board.summary_as_text(Side::Sell),
//!     vec!["4.0 kg for £1.2", "2.0 kg for £3.6"]
//! );
//! ```
//!
//! Summaries are never cached. Each one is computed from a single snapshot of the
//! registry, whose lock is held only while the snapshot is copied, so readers and
//! writers block each other for the duration of one set operation at most.

mod display;
mod error;
mod order_board;
mod order_registry;
mod types;

// Re-export public API
pub use display::DisplayFormat;
pub use error::{OrderBoardError, ParseSideError, Result};
pub use order_board::OrderBoard;
pub use order_registry::OrderRegistry;
pub use types::{AggregatedLine, Order, Price, Quantity, Side, Summary, SummaryBySide};

// Re-export commonly used external dependencies
pub use rust_decimal::Decimal;
