use crate::types::AggregatedLine;

/// Controls how summary lines are rendered as text.
///
/// The default renders `"{quantity} kg for £{price}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Unit of the commodity quantity
    pub unit: String,
    /// Currency symbol placed before the price
    pub currency: String,
}

impl DisplayFormat {
    pub fn new(unit: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            currency: currency.into(),
        }
    }

    /// Renders one aggregated line.
    ///
    /// ## Examples
    ///
    /// ```
    /// use live_order_board::{AggregatedLine, DisplayFormat};
    /// use rust_decimal::Decimal;
    ///
    /// let line = AggregatedLine {
    ///     price: Decimal::new(3000, 1),
    ///     quantity: Decimal::new(10, 1),
    /// };
    /// assert_eq!(DisplayFormat::default().render(&line), "1.0 kg for £300.0");
    /// assert_eq!(DisplayFormat::new("oz", "$").render(&line), "1.0 oz for $300.0");
    /// ```
    pub fn render(&self, line: &AggregatedLine) -> String {
        format!(
            "{} {} for {}{}",
            line.quantity, self.unit, self.currency, line.price
        )
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new("kg", "£")
    }
}
