use serde::{Deserialize, Serialize};

/// User-chosen forecast horizon, whole years.
///
/// Clamped to the slider bounds on construction so a horizon in days is
/// always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorizonYears(u8);

impl HorizonYears {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const fn new(years: u8) -> Self {
        let v = if years < Self::MIN {
            Self::MIN
        } else if years > Self::MAX {
            Self::MAX
        } else {
            years
        };
        Self(v)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Horizon in calendar days: years x 365.
    #[inline]
    pub const fn days(self) -> i64 {
        self.0 as i64 * 365
    }
}

impl Default for HorizonYears {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl std::fmt::Display for HorizonYears {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "1 year")
        } else {
            write!(f, "{} years", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_is_years_times_365() {
        for years in HorizonYears::MIN..=HorizonYears::MAX {
            assert_eq!(HorizonYears::new(years).days(), years as i64 * 365);
        }
    }

    #[test]
    fn out_of_range_years_clamp() {
        assert_eq!(HorizonYears::new(0).value(), 1);
        assert_eq!(HorizonYears::new(9).value(), 5);
        assert!(HorizonYears::new(0).days() > 0);
    }
}
