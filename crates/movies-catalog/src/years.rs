//! Release-year ranges

use std::ops::RangeInclusive;

/// Inclusive range of release years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

/// Years the bulk loader and title search cover
pub const SUPPORTED_YEARS: YearRange = YearRange::new(2010, 2024);

/// Years plotted on the chart
pub const CHART_YEARS: YearRange = YearRange::new(2012, 2022);

impl YearRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Ascending years; empty when `start > end`
    pub fn years(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::from(self.end - self.start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, year: u16) -> bool {
        (self.start..=self.end).contains(&year)
    }
}
