use std::fmt;

/// Cache key for one release year, rendered as `movies_<year>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearKey(pub u16);

impl YearKey {
    pub const PREFIX: &'static str = "movies_";

    pub fn year(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl From<u16> for YearKey {
    fn from(year: u16) -> Self {
        Self(year)
    }
}
