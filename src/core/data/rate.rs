use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RateError {
    NonPositive { value: f64 },
    NotFinite { value: f64 },
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { value } => {
                write!(f, "rate parameter must be positive: {}", value)
            }
            Self::NotFinite { value } => {
                write!(f, "rate parameter must be finite: {}", value)
            }
        }
    }
}

impl Error for RateError {}

/// Poisson rate parameter λ. Always positive and finite; the UI bounds its
/// sliders independently, but the engine relies only on this type.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    pub fn new(value: f64) -> Result<Self, RateError> {
        if !value.is_finite() {
            return Err(RateError::NotFinite { value });
        }

        if value <= 0.0 {
            return Err(RateError::NonPositive { value });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_new_accepts_positive_values() {
        let small = Rate::new(0.1).unwrap();
        let large = Rate::new(60.0).unwrap();

        assert_eq!(small.value(), 0.1);
        assert_eq!(large.value(), 60.0);
    }

    #[test]
    fn test_rate_new_rejects_zero_and_negative() {
        assert_eq!(Rate::new(0.0), Err(RateError::NonPositive { value: 0.0 }));
        assert_eq!(Rate::new(-4.0), Err(RateError::NonPositive { value: -4.0 }));
    }

    #[test]
    fn test_rate_new_rejects_nan_and_infinite() {
        assert!(matches!(
            Rate::new(f64::NAN),
            Err(RateError::NotFinite { .. })
        ));
        assert!(matches!(
            Rate::new(f64::INFINITY),
            Err(RateError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_rate_display_uses_two_decimals() {
        let rate = Rate::new(4.0).unwrap();

        assert_eq!(rate.to_string(), "4.00");
    }
}
