use crate::error::{OrderBoardError, Result};
use crate::types::Order;
use parking_lot::RwLock;
use std::collections::HashSet;

/// The registry of live orders.
///
/// This structure is responsible only for:
///
/// - Storing the set of live orders
/// - Inserting and removing orders by structural equality
/// - Handing out consistent snapshots of the live set
///
/// It does not aggregate anything, that is left to the `OrderBoard` service which
/// works on snapshots so that no lock is held during aggregation.
///
/// ### Thread Safety
///
/// The set is guarded by a `RwLock`. Each call holds the lock only for its own
/// duration: writers for a single insert or removal, readers for the clone of the set.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: RwLock<HashSet<Order>>,
}

impl OrderRegistry {
    /// Creates a new empty registry.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::OrderRegistry;
    ///
    /// let registry = OrderRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        OrderRegistry {
            orders: RwLock::new(HashSet::new()),
        }
    }

    /// Creates an empty registry with room for `capacity` orders.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderRegistry {
            orders: RwLock::new(HashSet::with_capacity(capacity)),
        }
    }

    /// Inserts an order into the live set.
    ///
    /// Adding an order equal to one already present leaves the set unchanged.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{Order, OrderRegistry};
    /// use rust_decimal::Decimal;
    ///
    /// let registry = OrderRegistry::new();
    /// let order = Order::buy(1, Decimal::ONE, Decimal::new(12, 1));
    ///
    /// registry.add(order);
    /// registry.add(order);
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn add(&self, order: Order) {
        self.orders.write().insert(order);
    }

    /// Returns a snapshot of the live orders.
    ///
    /// The snapshot is a copy taken under the read lock, so later mutations never
    /// show up in a traversal of it.
    pub fn find_all(&self) -> HashSet<Order> {
        self.orders.read().clone()
    }

    /// Removes the order structurally equal to `order`.
    ///
    /// ## Errors
    ///
    /// Returns `OrderBoardError::NotFound` when no live order matches exactly.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{Order, OrderBoardError, OrderRegistry};
    /// use rust_decimal::Decimal;
    ///
    /// let registry = OrderRegistry::new();
    /// let order = Order::sell(1, Decimal::ONE, Decimal::new(12, 1));
    ///
    /// registry.add(order);
    /// assert_eq!(registry.remove(&order), Ok(()));
    /// assert_eq!(registry.remove(&order), Err(OrderBoardError::NotFound));
    /// ```
    pub fn remove(&self, order: &Order) -> Result<()> {
        if self.orders.write().remove(order) {
            Ok(())
        } else {
            Err(OrderBoardError::NotFound)
        }
    }

    /// Returns whether an order structurally equal to `order` is live.
    pub fn contains(&self, order: &Order) -> bool {
        self.orders.read().contains(order)
    }

    /// Returns the number of live orders.
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}
