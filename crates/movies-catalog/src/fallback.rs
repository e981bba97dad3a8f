//! Baseline per-year movie counts used to fill out the chart
//!
//! Cached data only holds the provider's first page per year. The chart
//! blends in this dataset; bump `version` when the numbers change.

use crate::view::YearCount;
use std::str::FromStr;

/// A named, versioned series of per-year counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSeries {
    pub name: &'static str,
    pub version: u32,
    pub start_year: u16,
    pub counts: &'static [usize],
}

/// Yearly release counts for 2012 through 2022
pub const BASELINE_COUNTS_V1: FallbackSeries = FallbackSeries {
    name: "baseline-yearly-releases",
    version: 1,
    start_year: 2012,
    counts: &[669, 687, 701, 708, 737, 742, 873, 792, 334, 406, 449],
};

impl FallbackSeries {
    pub fn end_year(&self) -> u16 {
        self.start_year + (self.counts.len() as u16).saturating_sub(1)
    }

    /// Count for `year`, if the series covers it
    pub fn count_for(&self, year: u16) -> Option<usize> {
        let offset = year.checked_sub(self.start_year)?;
        self.counts.get(usize::from(offset)).copied()
    }
}

/// How cached counts and the fallback series combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Cached counts only
    Off,
    /// Use the fallback only for years with no cache entry
    #[default]
    FillMissing,
    /// Add the fallback to every cached count
    Sum,
}

impl FromStr for BlendMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "fill" | "fill-missing" | "fill_missing" => Ok(Self::FillMissing),
            "sum" => Ok(Self::Sum),
            _ => Err(format!("Unknown chart fallback mode: {value}")),
        }
    }
}

/// Combine `cached` with `series` according to `mode`
///
/// Years the series does not cover keep their cached count.
pub fn blend(cached: &[YearCount], series: &FallbackSeries, mode: BlendMode) -> Vec<YearCount> {
    cached
        .iter()
        .map(|c| {
            let fallback = series.count_for(c.year);
            let count = match (mode, fallback) {
                (BlendMode::Sum, Some(extra)) => c.count + extra,
                (BlendMode::FillMissing, Some(extra)) if !c.cached => extra,
                _ => c.count,
            };
            YearCount { count, ..*c }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zero counts are treated as years with nothing cached
    fn counts(pairs: &[(u16, usize)]) -> Vec<YearCount> {
        pairs
            .iter()
            .map(|&(year, count)| YearCount {
                year,
                count,
                cached: count > 0,
            })
            .collect()
    }

    #[test]
    fn test_baseline_covers_chart_years() {
        assert_eq!(BASELINE_COUNTS_V1.start_year, 2012);
        assert_eq!(BASELINE_COUNTS_V1.end_year(), 2022);
        assert_eq!(BASELINE_COUNTS_V1.count_for(2018), Some(873));
        assert_eq!(BASELINE_COUNTS_V1.count_for(2011), None);
        assert_eq!(BASELINE_COUNTS_V1.count_for(2023), None);
    }

    #[test]
    fn test_fill_missing_only_replaces_uncached_years() {
        let cached = counts(&[(2012, 0), (2013, 20), (2030, 0)]);
        let blended = blend(&cached, &BASELINE_COUNTS_V1, BlendMode::FillMissing);
        let got: Vec<(u16, usize)> = blended.iter().map(|c| (c.year, c.count)).collect();
        assert_eq!(got, vec![(2012, 669), (2013, 20), (2030, 0)]);
    }

    #[test]
    fn test_fill_missing_keeps_cached_empty_year() {
        let cached = [YearCount {
            year: 2014,
            count: 0,
            cached: true,
        }];
        let blended = blend(&cached, &BASELINE_COUNTS_V1, BlendMode::FillMissing);
        assert_eq!(blended[0].count, 0);
        assert!(blended[0].cached);
    }

    #[test]
    fn test_sum_adds_to_every_year() {
        let cached = counts(&[(2012, 0), (2013, 20)]);
        let blended = blend(&cached, &BASELINE_COUNTS_V1, BlendMode::Sum);
        let got: Vec<usize> = blended.iter().map(|c| c.count).collect();
        assert_eq!(got, vec![669, 707]);
    }

    #[test]
    fn test_off_keeps_cached_counts() {
        let cached = counts(&[(2012, 3)]);
        assert_eq!(blend(&cached, &BASELINE_COUNTS_V1, BlendMode::Off), cached);
    }

    #[test]
    fn test_parse_blend_mode() {
        assert_eq!("sum".parse::<BlendMode>(), Ok(BlendMode::Sum));
        assert_eq!("FILL".parse::<BlendMode>(), Ok(BlendMode::FillMissing));
        assert_eq!("off".parse::<BlendMode>(), Ok(BlendMode::Off));
        assert!("sometimes".parse::<BlendMode>().is_err());
    }
}
