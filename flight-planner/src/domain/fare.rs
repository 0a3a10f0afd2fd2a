//! Fare amounts.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A ticket price.
///
/// Fares are plain numbers with no currency attached. Valid schedules only
/// carry finite, non-negative fares, but a `Fare` can hold any `f64` so that
/// unchecked graphs behave deterministically instead of panicking.
///
/// `Fare` is totally ordered (via [`f64::total_cmp`]) so it can key a
/// priority queue directly.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Fare;
///
/// let total: Fare = [Fare::new(50.0), Fare::new(30.0)].into_iter().sum();
/// assert_eq!(total, Fare::new(80.0));
/// assert!(Fare::ZERO < total);
/// ```
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fare(f64);

impl Fare {
    /// The fare of an empty itinerary.
    pub const ZERO: Fare = Fare(0.0);

    /// Create a fare from a raw amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is finite and not negative.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialEq for Fare {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fare {}

impl PartialOrd for Fare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0 + rhs.0)
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fare> for Fare {
    fn sum<I: Iterator<Item = &'a Fare>>(iter: I) -> Fare {
        iter.copied().sum()
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({})", self.0)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Fare::new(0.0).is_valid());
        assert!(Fare::new(99.5).is_valid());
        assert!(!Fare::new(-1.0).is_valid());
        assert!(!Fare::new(f64::NAN).is_valid());
        assert!(!Fare::new(f64::INFINITY).is_valid());
    }

    #[test]
    fn ordering() {
        assert!(Fare::new(10.0) < Fare::new(20.0));
        assert!(Fare::new(-5.0) < Fare::ZERO);
        assert_eq!(Fare::new(3.0).max(Fare::new(7.0)), Fare::new(7.0));
    }

    #[test]
    fn nan_is_totally_ordered() {
        let nan = Fare::new(f64::NAN);
        assert_eq!(nan, nan);
        assert!(Fare::new(f64::INFINITY) < nan);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let total: Fare = std::iter::empty::<Fare>().sum();
        assert_eq!(total, Fare::ZERO);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Fare::new(80.0).to_string(), "80.00");
        assert_eq!(Fare::new(12.5).to_string(), "12.50");
    }
}
