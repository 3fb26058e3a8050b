use crate::core::data::domain::{Domain, DomainError};
use crate::core::data::rate::{Rate, RateError};
use std::time::Duration;

/// Current values of the user-facing parameters, sampled freshly from the
/// Input collaborator on every controller invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    pub lambda: f64,
    pub x_min: u32,
    pub x_max: u32,
    /// Pacing interval between animation frames (the "speed" control).
    pub step_delay: Duration,
    /// k value to highlight in the static density view.
    pub highlight: Option<u32>,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            lambda: 4.0,
            x_min: 0,
            x_max: 20,
            step_delay: Duration::from_millis(100),
            highlight: None,
        }
    }
}

impl ParameterSnapshot {
    /// Validated domain for this snapshot; rejected before any computation
    /// when `x_min >= x_max`.
    pub fn domain(&self) -> Result<Domain, DomainError> {
        Domain::new(self.x_min, self.x_max)
    }

    /// Validated rate for this snapshot. The Input adapter's slider bounds
    /// keep λ positive, so a failure here is a caller bug, not user input.
    pub fn rate(&self) -> Result<Rate, RateError> {
        Rate::new(self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::domain::DomainError;

    #[test]
    fn test_default_matches_sidebar_defaults() {
        let snapshot = ParameterSnapshot::default();

        assert_eq!(snapshot.lambda, 4.0);
        assert_eq!(snapshot.x_min, 0);
        assert_eq!(snapshot.x_max, 20);
        assert_eq!(snapshot.step_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_domain_validation_happens_at_the_boundary() {
        let snapshot = ParameterSnapshot {
            x_min: 5,
            x_max: 3,
            ..ParameterSnapshot::default()
        };

        assert_eq!(
            snapshot.domain(),
            Err(DomainError::InvalidBounds { x_min: 5, x_max: 3 })
        );
    }

    #[test]
    fn test_rate_validation_happens_at_the_boundary() {
        let snapshot = ParameterSnapshot {
            lambda: 0.0,
            ..ParameterSnapshot::default()
        };

        assert!(snapshot.rate().is_err());
    }
}
