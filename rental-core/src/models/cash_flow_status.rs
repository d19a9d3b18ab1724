use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-state banner classification for a cash flow figure.
///
/// Used for presentation only; no further computation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlowStatus {
    Positive,
    Negative,
    BreakEven,
}

impl CashFlowStatus {
    /// Classifies a cash flow amount: positive, negative, or exactly zero.
    pub fn classify(cash_flow: Decimal) -> Self {
        if cash_flow > Decimal::ZERO {
            Self::Positive
        } else if cash_flow < Decimal::ZERO {
            Self::Negative
        } else {
            Self::BreakEven
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::BreakEven => "BREAK_EVEN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "BREAK_EVEN" => Some(Self::BreakEven),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn classify_returns_positive_above_zero() {
        assert_eq!(CashFlowStatus::classify(dec!(0.01)), CashFlowStatus::Positive);
    }

    #[test]
    fn classify_returns_negative_below_zero() {
        assert_eq!(
            CashFlowStatus::classify(dec!(-0.01)),
            CashFlowStatus::Negative
        );
    }

    #[test]
    fn classify_returns_break_even_at_zero() {
        assert_eq!(
            CashFlowStatus::classify(dec!(0.00)),
            CashFlowStatus::BreakEven
        );
    }

    #[test]
    fn parse_round_trips_as_str() {
        for status in [
            CashFlowStatus::Positive,
            CashFlowStatus::Negative,
            CashFlowStatus::BreakEven,
        ] {
            assert_eq!(CashFlowStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_label() {
        assert_eq!(CashFlowStatus::parse("NEUTRAL"), None);
    }
}
