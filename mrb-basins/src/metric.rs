use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property key holding the basin identifier / display name.
pub const BASIN_NAME_KEY: &str = "RIVERBASIN";

/// Which basin property drives the choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Population,
    Average,
    /// One of the twelve month properties, refined by a [`Month`].
    Monthly,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Population, Metric::Average, Metric::Monthly];

    /// The value used by selectors and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Population => "population",
            Metric::Average => "average",
            Metric::Monthly => "monthly",
        }
    }

    /// Human-readable label for the metric dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Population => "Population",
            Metric::Average => "Average Scarcity",
            Metric::Monthly => "Monthly Data",
        }
    }

    pub fn is_monthly(&self) -> bool {
        matches!(self, Metric::Monthly)
    }

    /// The feature property read for this metric. For `Monthly` the month decides.
    pub fn property_key(&self, month: Month) -> &'static str {
        match self {
            Metric::Monthly => month.key(),
            other => other.key(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown metric: {}", s))
    }
}

/// Month of the monthly scarcity series, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    #[default]
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Property key in the feature property bag, e.g. `"jan"`.
    pub fn key(&self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// Zero-based position, as used by the month slider.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }

    /// Uppercased key, shown next to the slider and as legend title.
    pub fn label(&self) -> String {
        self.key().to_uppercase()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Month {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown month: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_key() {
        assert_eq!(Metric::Population.property_key(Month::Mar), "population");
        assert_eq!(Metric::Average.property_key(Month::Mar), "average");
        assert_eq!(Metric::Monthly.property_key(Month::Mar), "mar");
        assert_eq!(Metric::Monthly.property_key(Month::Dec), "dec");
    }

    #[test]
    fn test_month_index_round_trip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), Some(*month));
        }
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_parse_metric_and_month() {
        assert_eq!("monthly".parse::<Metric>().unwrap(), Metric::Monthly);
        assert_eq!("aug".parse::<Month>().unwrap(), Month::Aug);
        assert!("rainfall".parse::<Metric>().is_err());
        assert_eq!(Month::Sep.label(), "SEP");
    }
}
