use rust_decimal::{Decimal, RoundingStrategy};

/// Supplies a common contract for retrieving exact monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Associates an entity with the category label it is reported under.
pub trait BelongsToCategory {
    fn category(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Rounds an amount to two decimal places, halves away from zero, for display.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
