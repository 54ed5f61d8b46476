//! Bounded search interval.

use crate::types::SolverError;
use num_traits::Float;

/// Closed interval `[low, high]` the secant iterates are confined to.
///
/// Iterates that step outside are clamped onto the nearest bound rather than
/// rejected. This keeps the search inside a meaningful range but means a
/// search aimed at an unreachable target can sit on a bound until it
/// stagnates or runs out of iterations.
///
/// # Example
///
/// ```
/// use ivol_core::math::solvers::SearchDomain;
///
/// let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
/// assert!(domain.contains(0.5));
/// assert_eq!(domain.clamp(1.7), 1.0);
/// assert_eq!(domain.clamp(-3.0), 0.01);
///
/// assert!(SearchDomain::new(1.0_f64, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSearchDomain<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct SearchDomain<T: Float> {
    low: T,
    high: T,
}

/// Unchecked bounds as read from a serialised domain.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSearchDomain<T> {
    low: T,
    high: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawSearchDomain<T>> for SearchDomain<T> {
    type Error = SolverError;

    fn try_from(raw: RawSearchDomain<T>) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

impl<T: Float> SearchDomain<T> {
    /// Create a domain, requiring finite bounds with `low < high`.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidDomain` if the bounds are unordered, equal or
    /// not finite.
    pub fn new(low: T, high: T) -> Result<Self, SolverError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(SolverError::InvalidDomain {
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// True when `low <= x <= high`. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.low && x <= self.high
    }

    /// Project `x` onto the domain.
    ///
    /// Values below `low` become `low`, values above `high` become `high`,
    /// anything else (including NaN) is returned unchanged.
    #[inline]
    pub fn clamp(&self, x: T) -> T {
        if x < self.low {
            self.low
        } else if x > self.high {
            self.high
        } else {
            x
        }
    }

    /// Build the error reported for a guess outside this domain.
    pub(crate) fn out_of_domain(&self, x: T) -> SolverError {
        SolverError::OutOfDomain {
            x: x.to_f64().unwrap_or(f64::NAN),
            low: self.low.to_f64().unwrap_or(f64::NAN),
            high: self.high.to_f64().unwrap_or(f64::NAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
        assert_eq!(domain.low(), 0.01);
        assert_eq!(domain.high(), 1.0);
    }

    #[test]
    fn test_new_rejects_unordered() {
        assert_eq!(
            SearchDomain::new(1.0_f64, 0.01),
            Err(SolverError::InvalidDomain {
                low: 1.0,
                high: 0.01
            })
        );
        assert!(SearchDomain::new(0.5_f64, 0.5).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(SearchDomain::new(f64::NAN, 1.0).is_err());
        assert!(SearchDomain::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_contains_is_closed() {
        let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
        assert!(domain.contains(0.01));
        assert!(domain.contains(1.0));
        assert!(!domain.contains(1.5));
        assert!(!domain.contains(0.0));
        assert!(!domain.contains(f64::NAN));
    }

    #[test]
    fn test_clamp() {
        let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
        assert_eq!(domain.clamp(0.5), 0.5);
        assert_eq!(domain.clamp(1.0000001), 1.0);
        assert_eq!(domain.clamp(f64::INFINITY), 1.0);
        assert_eq!(domain.clamp(-0.2), 0.01);
        assert_eq!(domain.clamp(f64::NEG_INFINITY), 0.01);
        assert!(domain.clamp(f64::NAN).is_nan());
    }

    #[test]
    fn test_out_of_domain_error() {
        let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
        assert_eq!(
            domain.out_of_domain(1.5),
            SolverError::OutOfDomain {
                x: 1.5,
                low: 0.01,
                high: 1.0
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_validates_bounds() {
        let domain: SearchDomain<f64> =
            serde_json::from_str(r#"{"low": 0.01, "high": 1.0}"#).unwrap();
        assert_eq!(domain, SearchDomain::new(0.01, 1.0).unwrap());

        let unordered: Result<SearchDomain<f64>, _> =
            serde_json::from_str(r#"{"low": 1.0, "high": 0.01}"#);
        let err = unordered.unwrap_err().to_string();
        assert!(err.contains("Invalid search domain"), "{}", err);

        let empty: Result<SearchDomain<f64>, _> =
            serde_json::from_str(r#"{"low": 0.5, "high": 0.5}"#);
        assert!(empty.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialise_round_trip() {
        let domain = SearchDomain::new(0.05_f64, 2.0).unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        let back: SearchDomain<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, domain);
    }
}
