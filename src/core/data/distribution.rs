use crate::core::data::domain::Domain;
use crate::core::data::rate::Rate;

/// A computed probability mass function: one mass per integer point of the
/// domain, in domain order, for the rate it was evaluated at.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    domain: Domain,
    rate: Rate,
    masses: Vec<f64>,
}

impl Distribution {
    /// Invariant: `masses.len() == domain.point_count()`. Only the pmf
    /// evaluation constructs this, so the pairing cannot drift.
    pub(crate) fn new(domain: Domain, rate: Rate, masses: Vec<f64>) -> Self {
        debug_assert_eq!(masses.len(), domain.point_count());

        Self { domain, rate, masses }
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    #[must_use]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// `P(X = x)`, or `None` when `x` lies outside the domain.
    #[must_use]
    pub fn mass_at(&self, x: u32) -> Option<f64> {
        if !self.domain.contains(x) {
            return None;
        }

        Some(self.masses[(x - self.domain.x_min()) as usize])
    }

    /// Total probability mass over the domain. At most 1, and close to 1
    /// whenever the domain covers the distribution's effective support.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Largest single mass, used for auto-scaled chart axes.
    #[must_use]
    pub fn peak_mass(&self) -> f64 {
        self.masses.iter().copied().fold(0.0, f64::max)
    }

    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.domain.points().zip(self.masses.iter().copied())
    }
}
