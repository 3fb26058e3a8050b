use crate::core::data::rate::{Rate, RateError};
use crate::core::util::linspace::linspace;

/// Number of frames in one animation run.
pub const ANIMATION_STEPS: usize = 40;

/// Rate the animation ramps up from.
pub const SCHEDULE_START_RATE: f64 = 1.0;

/// Precomputed ordered sequence of rate values for one animation run:
/// `steps` points interpolating linearly from [`SCHEDULE_START_RATE`] to the
/// target λ captured when the run was commanded. Targets below 1.0 simply
/// produce a descending ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSchedule {
    rates: Vec<Rate>,
}

impl RateSchedule {
    pub fn new(target: Rate, steps: usize) -> Result<Self, RateError> {
        let rates = linspace(SCHEDULE_START_RATE, target.value(), steps)
            .into_iter()
            .map(Rate::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rates })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    #[must_use]
    pub fn rate_at(&self, index: usize) -> Option<Rate> {
        self.rates.get(index).copied()
    }
}
