use anyhow::Result;
use std::io::Write;
use truedata_hist_base::{utc_minute, Bar};

/// Only a sample of the returned range is printed.
pub const RENDER_LIMIT: usize = 5;

/// Writes the first `min(RENDER_LIMIT, len)` bars, one line each, in
/// input order: UTC minute, then O/H/L/C/Vol/OI.
pub fn render_bars(out: &mut impl Write, bars: &[Bar]) -> Result<()> {
    for bar in bars.iter().take(RENDER_LIMIT) {
        writeln!(
            out,
            "{} → O:{}, H:{}, L:{}, C:{}, Vol:{}, OI:{}",
            utc_minute(bar.ts_ms)?,
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
            bar.open_interest,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar(ts_ms: i64, open: i64, high: i64, low: i64, close: i64, volume: u64, oi: u64) -> Bar {
        Bar {
            ts_ms,
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume,
            open_interest: oi,
        }
    }

    fn fixture() -> Vec<Bar> {
        vec![
            bar(1717830900000, 100, 105, 99, 104, 1000, 500),
            bar(1717830960000, 104, 106, 103, 105, 1200, 510),
            bar(1717831020000, 105, 107, 104, 106, 900, 520),
        ]
    }

    #[test]
    fn test_render_three_bars() -> Result<()> {
        let mut out = Vec::new();
        render_bars(&mut out, &fixture())?;

        let rendered = String::from_utf8(out)?;
        assert_eq!(
            rendered,
            "2024-06-08 07:15 → O:100, H:105, L:99, C:104, Vol:1000, OI:500\n\
             2024-06-08 07:16 → O:104, H:106, L:103, C:105, Vol:1200, OI:510\n\
             2024-06-08 07:17 → O:105, H:107, L:104, C:106, Vol:900, OI:520\n"
        );

        Ok(())
    }

    #[test]
    fn test_render_caps_at_five_lines() -> Result<()> {
        let mut bars = Vec::new();
        for i in 0..8 {
            bars.push(bar(1717830900000 + i * 60_000, 100, 101, 99, 100, 10, 5));
        }

        let mut out = Vec::new();
        render_bars(&mut out, &bars)?;

        let rendered = String::from_utf8(out)?;
        assert_eq!(rendered.lines().count(), RENDER_LIMIT);

        Ok(())
    }

    #[test]
    fn test_render_empty_is_silent() -> Result<()> {
        let mut out = Vec::new();
        render_bars(&mut out, &[])?;

        assert!(out.is_empty());

        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<()> {
        let bars = vec![bar(1717830900000, 100, 105, 99, 104, 1000, 500)];

        let mut first = Vec::new();
        render_bars(&mut first, &bars)?;
        let mut second = Vec::new();
        render_bars(&mut second, &bars)?;

        assert_eq!(first, second);
        assert_eq!(bars[0].close, dec!(104));

        Ok(())
    }
}
