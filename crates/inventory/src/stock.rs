use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Stored stock level for one item.
///
/// Values written by the store are always `Quantity`. A file edited by hand can
/// carry anything JSON allows: whole numbers (`7`, `7.0`) load as `Quantity`,
/// other numbers as `Fractional`, and non-numbers as `Corrupt`. Corrupt values
/// are kept verbatim so a later save does not silently rewrite them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StockLevel {
    Quantity(i64),
    Fractional(f64),
    Corrupt(JsonValue),
}

impl StockLevel {
    /// Classify a decoded JSON value.
    pub fn from_json(raw: JsonValue) -> Self {
        let numeric = match &raw {
            JsonValue::Number(n) => n.as_i64().map(Ok).or_else(|| n.as_f64().map(Err)),
            _ => None,
        };
        match numeric {
            Some(Ok(q)) => StockLevel::Quantity(q),
            Some(Err(f)) => StockLevel::from_f64(f),
            None => StockLevel::Corrupt(raw),
        }
    }

    fn from_f64(value: f64) -> Self {
        // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            StockLevel::Quantity(value as i64)
        } else {
            StockLevel::Fractional(value)
        }
    }

    /// Integer view of the stored value; fractional parts are truncated.
    pub fn quantity(&self) -> Option<i64> {
        match self {
            StockLevel::Quantity(q) => Some(*q),
            StockLevel::Fractional(f) => Some(f.trunc() as i64),
            StockLevel::Corrupt(_) => None,
        }
    }

    /// Inclusive low-stock test; corrupt values never match.
    pub fn is_at_or_below(&self, threshold: i64) -> bool {
        match self {
            StockLevel::Quantity(q) => *q <= threshold,
            StockLevel::Fractional(f) => *f <= threshold as f64,
            StockLevel::Corrupt(_) => false,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StockLevel::Corrupt(_))
    }

    pub fn is_positive(&self) -> bool {
        match self {
            StockLevel::Quantity(q) => *q > 0,
            StockLevel::Fractional(f) => *f > 0.0,
            StockLevel::Corrupt(_) => true,
        }
    }

    /// `self + qty`, or `None` when the value is corrupt or the sum overflows.
    pub(crate) fn checked_add(&self, qty: i64) -> Option<StockLevel> {
        match self {
            StockLevel::Quantity(q) => q.checked_add(qty).map(StockLevel::Quantity),
            StockLevel::Fractional(f) => Some(StockLevel::from_f64(f + qty as f64)),
            StockLevel::Corrupt(_) => None,
        }
    }

    /// `self - qty`, or `None` when nothing would be left (or the value is corrupt).
    pub(crate) fn remaining_after(&self, qty: i64) -> Option<StockLevel> {
        match self {
            StockLevel::Quantity(q) if *q > qty => Some(StockLevel::Quantity(q - qty)),
            StockLevel::Fractional(f) if *f > qty as f64 => {
                Some(StockLevel::from_f64(f - qty as f64))
            }
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for StockLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(StockLevel::from_json)
    }
}

impl From<i64> for StockLevel {
    fn from(value: i64) -> Self {
        StockLevel::Quantity(value)
    }
}

impl core::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockLevel::Quantity(q) => write!(f, "{q}"),
            StockLevel::Fractional(v) => write!(f, "{v}"),
            StockLevel::Corrupt(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_decode_as_quantity() {
        let level: StockLevel = serde_json::from_str("12").unwrap();
        assert_eq!(level, StockLevel::Quantity(12));
        assert_eq!(level.quantity(), Some(12));
    }

    #[test]
    fn whole_floats_decode_as_quantity() {
        let level: StockLevel = serde_json::from_str("7.0").unwrap();
        assert_eq!(level, StockLevel::Quantity(7));
    }

    #[test]
    fn other_numbers_decode_as_fractional() {
        let level: StockLevel = serde_json::from_str("2.5").unwrap();
        assert_eq!(level, StockLevel::Fractional(2.5));
        assert_eq!(level.quantity(), Some(2));
        assert!(level.is_at_or_below(3));
        assert!(!level.is_at_or_below(2));

        // Beyond i64 but still a number.
        let huge: StockLevel = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(huge, StockLevel::Fractional(_)));
    }

    #[test]
    fn non_numbers_decode_as_corrupt() {
        for raw in ["\"ten\"", "true", "null", "[1]", "{\"n\": 1}"] {
            let level: StockLevel = serde_json::from_str(raw).unwrap();
            assert!(level.is_corrupt(), "{raw} should be corrupt");
            assert_eq!(level.quantity(), None);
        }
    }

    #[test]
    fn arithmetic_on_fractional_levels() {
        let level = StockLevel::Fractional(2.5);
        assert_eq!(level.checked_add(1), Some(StockLevel::Fractional(3.5)));
        assert_eq!(level.remaining_after(2), Some(StockLevel::Fractional(0.5)));
        assert_eq!(level.remaining_after(3), None);
        assert_eq!(
            StockLevel::Fractional(0.5).checked_add(1),
            Some(StockLevel::Fractional(1.5))
        );
        assert_eq!(StockLevel::Quantity(4).remaining_after(4), None);
    }

    #[test]
    fn corrupt_values_serialize_verbatim() {
        let level = StockLevel::Corrupt(JsonValue::String("ten".to_string()));
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"ten\"");
        assert_eq!(level.to_string(), "\"ten\"");
        assert_eq!(serde_json::to_string(&StockLevel::Fractional(2.5)).unwrap(), "2.5");
    }
}
