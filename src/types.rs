use crate::display::DisplayFormat;
use crate::error::{OrderBoardError, ParseSideError, Result};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Unit price of the commodity (fixed-point).
pub type Price = Decimal;

/// Amount of the commodity (fixed-point).
pub type Quantity = Decimal;

/// Represents the side of an order on the board.
///
/// - `Buy` represents bids (demand side)
/// - `Sell` represents asks (supply side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Buy side: best price is the highest price
    Buy,
    /// Sell side: best price is the lowest price
    Sell,
}

impl Side {
    /// Both sides, buy first.
    pub const ALL: [Side; 2] = [Side::Buy, Side::Sell];

    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    /// Parses a side case-insensitively.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::Side;
    ///
    /// assert_eq!("buy".parse::<Side>(), Ok(Side::Buy));
    /// assert_eq!("SELL".parse::<Side>(), Ok(Side::Sell));
    /// assert!("hold".parse::<Side>().is_err());
    /// ```
    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "buy" | "bid" => Ok(Side::Buy),
            "sell" | "ask" => Ok(Side::Sell),
            _ => Err(ParseSideError(text.to_string())),
        }
    }
}

/// A single live order.
///
/// Orders are immutable values and their identity is structural: two orders with
/// the same user, quantity, price and side are the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order {
    user_id: u64,
    quantity: Quantity,
    price: Price,
    side: Side,
}

impl Order {
    /// Creates a new order.
    ///
    /// No validation is performed on the sign of quantity or price.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{Order, Side};
    /// use rust_decimal::Decimal;
    ///
    /// let order = Order::new(1, Decimal::new(35, 1), Decimal::new(306, 0), Side::Buy);
    /// assert_eq!(order.quantity(), Decimal::new(35, 1));
    /// ```
    pub fn new(user_id: u64, quantity: Quantity, price: Price, side: Side) -> Self {
        Self {
            user_id,
            quantity,
            price,
            side,
        }
    }

    /// Creates a buy order.
    pub fn buy(user_id: u64, quantity: Quantity, price: Price) -> Self {
        Self::new(user_id, quantity, price, Side::Buy)
    }

    /// Creates a sell order.
    pub fn sell(user_id: u64, quantity: Quantity, price: Price) -> Self {
        Self::new(user_id, quantity, price, Side::Sell)
    }

    /// Creates an order from binary floats, converting them to `Decimal`.
    ///
    /// Integral values are given a scale of one, so `300.0` renders as `300.0`
    /// rather than `300`.
    ///
    /// Fails with `InvalidNumber` when a value is NaN, infinite or out of range.
    pub fn from_f64(user_id: u64, quantity: f64, price: f64, side: Side) -> Result<Self> {
        let to_decimal = |value: f64| {
            let mut decimal =
                Decimal::try_from(value).map_err(|_| OrderBoardError::InvalidNumber { value })?;
            // Integral floats keep one fractional digit, so 300.0 renders as "300.0"
            if decimal.scale() == 0 {
                decimal.rescale(1);
            }
            Ok(decimal)
        };

        Ok(Self::new(user_id, to_decimal(quantity)?, to_decimal(price)?, side))
    }

    /// The submitting user.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// The amount of the commodity.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The unit price.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Whether this is a buy or a sell order.
    pub fn side(&self) -> Side {
        self.side
    }
}

/// One row of a summary: the total quantity resting at an exact price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedLine {
    pub price: Price,
    pub quantity: Quantity,
}

impl fmt::Display for AggregatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DisplayFormat::default().render(self))
    }
}

/// Totals per exact price, before the side's ordering is applied.
pub(crate) type PriceLevelTotals = BTreeMap<Price, AggregatedLine>;

/// Adds an order's quantity to the total at its price.
///
/// Prices equal in value but written at different scales share one level, which
/// is rendered with the largest scale seen. Totals saturate at the `Decimal`
/// bounds instead of overflowing.
pub(crate) fn accumulate(totals: &mut PriceLevelTotals, order: &Order) {
    let line = totals.entry(order.price()).or_insert(AggregatedLine {
        price: order.price(),
        quantity: Quantity::ZERO,
    });

    if order.price().scale() > line.price.scale() {
        line.price = order.price();
    }
    line.quantity = line.quantity.saturating_add(order.quantity());
}

/// Aggregated interest for one side, ordered best price first.
///
/// Buy summaries iterate from the highest price down, sell summaries from the
/// lowest price up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    side: Side,
    lines: Vec<AggregatedLine>,
}

impl Summary {
    pub(crate) fn from_totals(side: Side, totals: PriceLevelTotals) -> Self {
        let ascending = totals.into_values();

        let lines: Vec<AggregatedLine> = match side {
            Side::Buy => ascending.rev().collect(),
            Side::Sell => ascending.collect(),
        };

        Self { side, lines }
    }

    /// The side this summary aggregates.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Iterates over `(price, total quantity)` pairs, best price first.
    pub fn iter(&self) -> impl Iterator<Item = (Price, Quantity)> + '_ {
        self.lines.iter().map(|line| (line.price, line.quantity))
    }

    /// The aggregated lines, best price first.
    pub fn lines(&self) -> &[AggregatedLine] {
        &self.lines
    }

    /// Returns the number of distinct price levels.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when no order rests on this side.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the total quantity at an exact price, if any order rests there.
    pub fn get(&self, price: Price) -> Option<Quantity> {
        // Lines are sorted by price, descending for buys and ascending for sells
        let position = match self.side {
            Side::Buy => self.lines.binary_search_by(|line| price.cmp(&line.price)),
            Side::Sell => self.lines.binary_search_by(|line| line.price.cmp(&price)),
        };

        position.ok().map(|index| self.lines[index].quantity)
    }

    /// The best price level: highest bid or lowest ask.
    pub fn best(&self) -> Option<AggregatedLine> {
        self.lines.first().copied()
    }

    /// Total quantity across all price levels, saturating at the `Decimal` bounds.
    pub fn total_quantity(&self) -> Quantity {
        self.lines
            .iter()
            .fold(Quantity::ZERO, |total, line| total.saturating_add(line.quantity))
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a AggregatedLine;
    type IntoIter = std::slice::Iter<'a, AggregatedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl IntoIterator for Summary {
    type Item = AggregatedLine;
    type IntoIter = std::vec::IntoIter<AggregatedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Summaries for both sides, keyed by side.
pub type SummaryBySide = HashMap<Side, Summary>;
