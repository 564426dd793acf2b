use rust_decimal::Decimal;
use serde::Deserialize;

// Wire form: [ timestamp_ms, open, high, low, close, volume, oi ]
type BarRow = (i64, Decimal, Decimal, Decimal, Decimal, u64, u64);

/// One OHLCV(+open-interest) aggregate, as returned by the history feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BarRow")]
pub struct Bar {
    pub ts_ms: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
    pub open_interest: u64,
}

impl From<BarRow> for Bar {
    fn from((ts_ms, open, high, low, close, volume, open_interest): BarRow) -> Self {
        Bar {
            ts_ms,
            open,
            high,
            low,
            close,
            volume,
            open_interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bar_from_wire_row() -> Result<()> {
        let bar: Bar = serde_json::from_str("[1717830900000, 100, 105, 99, 104.5, 1000, 500]")?;

        assert_eq!(bar.ts_ms, 1717830900000);
        assert_eq!(bar.open, dec!(100));
        assert_eq!(bar.high, dec!(105));
        assert_eq!(bar.low, dec!(99));
        assert_eq!(bar.close, dec!(104.5));
        assert_eq!(bar.volume, 1000);
        assert_eq!(bar.open_interest, 500);

        Ok(())
    }

    #[test]
    fn test_bar_rejects_short_row() {
        let err = serde_json::from_str::<Bar>("[1717830900000, 100, 105, 99, 104.5, 1000]");
        assert!(err.is_err());
    }
}
