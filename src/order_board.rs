use crate::display::DisplayFormat;
use crate::error::Result;
use crate::order_registry::OrderRegistry;
use crate::types::{accumulate, Order, PriceLevelTotals, Side, Summary, SummaryBySide};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// The public-facing live order board.
///
/// Registration and cancellation are forwarded to the injected `OrderRegistry`.
/// Summaries are always computed fresh from a single registry snapshot: the
/// registry lock is held only while the snapshot is taken, and grouping, summing
/// and sorting then run on the local copy.
///
/// ## Thread Safety
///
/// `OrderBoard` holds no state of its own besides the shared registry, so it can
/// be shared across threads with `Arc<OrderBoard>`, or cloned cheaply with every
/// clone operating on the same live set.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    registry: Arc<OrderRegistry>,
}

impl OrderBoard {
    /// Creates a board on top of an existing registry.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{OrderBoard, OrderRegistry};
    /// use std::sync::Arc;
    ///
    /// let registry = Arc::new(OrderRegistry::new());
    /// let board = OrderBoard::new(Arc::clone(&registry));
    /// assert!(board.live_orders().is_empty());
    /// ```
    pub fn new(registry: Arc<OrderRegistry>) -> Self {
        OrderBoard { registry }
    }

    /// The registry this board reads from and writes to.
    pub fn registry(&self) -> &Arc<OrderRegistry> {
        &self.registry
    }

    /// Registers an order. Registering an already live order is a no-op.
    pub fn register(&self, order: Order) {
        log::debug!(
            "registering {} order from user {}: {} @ {}",
            order.side(),
            order.user_id(),
            order.quantity(),
            order.price()
        );
        self.registry.add(order);
    }

    /// Cancels a live order.
    ///
    /// ## Errors
    ///
    /// Returns `OrderBoardError::NotFound` if no live order is structurally equal
    /// to `order`. The live set is left unchanged in that case.
    pub fn cancel(&self, order: &Order) -> Result<()> {
        match self.registry.remove(order) {
            Ok(()) => {
                log::debug!(
                    "cancelled {} order from user {}: {} @ {}",
                    order.side(),
                    order.user_id(),
                    order.quantity(),
                    order.price()
                );
                Ok(())
            }
            Err(err) => {
                log::debug!("cancel rejected for {order:?}: {err}");
                Err(err)
            }
        }
    }

    /// Returns a snapshot of the live orders.
    pub fn live_orders(&self) -> HashSet<Order> {
        self.registry.find_all()
    }

    /// Computes the aggregated summary for one side.
    ///
    /// Orders are grouped by exact price and their quantities summed, saturating
    /// at the `Decimal` bounds. Buy
    /// summaries are ordered by descending price, sell summaries by ascending
    /// price, so the best price always comes first.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{Order, OrderBoard, Side};
    /// use rust_decimal::Decimal;
    ///
    /// let board = OrderBoard::default();
    /// board.register(Order::buy(1, Decimal::new(35, 1), Decimal::new(306, 0)));
    /// board.register(Order::buy(2, Decimal::new(12, 1), Decimal::new(310, 0)));
    /// board.register(Order::buy(3, Decimal::new(20, 1), Decimal::new(306, 0)));
    ///
    /// let summary = board.summary(Side::Buy);
    /// let levels: Vec<_> = summary.iter().collect();
    /// assert_eq!(
    ///     levels,
    ///     vec![
    ///         (Decimal::new(310, 0), Decimal::new(12, 1)),
    ///         (Decimal::new(306, 0), Decimal::new(55, 1)),
    ///     ]
    /// );
    /// ```
    pub fn summary(&self, side: Side) -> Summary {
        let snapshot = self.registry.find_all();
        let summary = Summary::from_totals(side, aggregate_side(&snapshot, side));

        log::trace!(
            "computed {} summary: {} price levels from {} live orders",
            side,
            summary.len(),
            snapshot.len()
        );

        summary
    }

    /// Computes the summaries for both sides from one snapshot.
    ///
    /// Both sides are always present in the result, and each summary carries the
    /// same best-price-first ordering as `summary`.
    pub fn summary_for_all_sides(&self) -> SummaryBySide {
        let snapshot = self.registry.find_all();

        let mut totals_by_side: BTreeMap<Side, PriceLevelTotals> =
            Side::ALL.iter().map(|side| (*side, BTreeMap::new())).collect();

        for order in &snapshot {
            accumulate(totals_by_side.entry(order.side()).or_default(), order);
        }

        log::trace!(
            "computed summaries for all sides from {} live orders",
            snapshot.len()
        );

        totals_by_side
            .into_iter()
            .map(|(side, totals)| (side, Summary::from_totals(side, totals)))
            .collect()
    }

    /// Renders the summary for one side as `"{quantity} kg for £{price}"` lines,
    /// best price first.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{Order, OrderBoard, Side};
    /// use rust_decimal::Decimal;
    ///
    /// let board = OrderBoard::default();
    /// board.register(Order::sell(1, Decimal::new(10, 1), Decimal::new(3000, 1)));
    ///
    /// assert_eq!(board.summary_as_text(Side::Sell), vec!["1.0 kg for £300.0"]);
    /// ```
    pub fn summary_as_text(&self, side: Side) -> Vec<String> {
        self.summary_as_text_with(side, &DisplayFormat::default())
    }

    /// Renders the summary for one side using a custom display format.
    pub fn summary_as_text_with(&self, side: Side, format: &DisplayFormat) -> Vec<String> {
        self.summary(side)
            .lines()
            .iter()
            .map(|line| format.render(line))
            .collect()
    }
}

/// Sums the quantity per exact price for the orders on one side.
fn aggregate_side(orders: &HashSet<Order>, side: Side) -> PriceLevelTotals {
    let mut totals = PriceLevelTotals::new();

    for order in orders.iter().filter(|order| order.side() == side) {
        accumulate(&mut totals, order);
    }

    totals
}
