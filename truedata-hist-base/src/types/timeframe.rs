use std::fmt;

use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Bar aggregation intervals in TrueData's nomenclature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
pub enum Timeframe {
    #[strum(serialize = "1Min")]
    OneMinute,
    #[strum(serialize = "5Min")]
    FiveMinutes,
    #[strum(serialize = "15Min")]
    FifteenMinutes,
    #[strum(serialize = "30Min")]
    ThirtyMinutes,
    #[strum(serialize = "60Min")]
    SixtyMinutes,
    #[strum(serialize = "Day")]
    Day,
}

impl From<&Timeframe> for String {
    fn from(value: &Timeframe) -> Self {
        value.as_ref().to_string()
    }
}

impl From<Timeframe> for String {
    fn from(value: Timeframe) -> Self {
        value.as_ref().to_string()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe() {
        let timeframe = Timeframe::OneMinute;
        assert_eq!(timeframe.as_ref(), "1Min");

        let timeframe2 = "1Min".parse::<Timeframe>().unwrap();
        assert_eq!(timeframe2, Timeframe::OneMinute);

        let timeframe3 = "Day".parse::<Timeframe>().unwrap();
        assert_eq!(timeframe3, Timeframe::Day);

        let err = "2Min".parse::<Timeframe>().unwrap_err();
        assert_eq!(err.to_string(), "Matching variant not found");
    }
}
