use crate::core::data::distribution::Distribution;
use crate::core::data::normal_overlay::{NormalOverlay, OverlayPoint};
use crate::core::poisson::stats::stats;
use crate::core::util::linspace::linspace;

/// Rate at and above which the normal-approximation curve is shown. The
/// boundary is inclusive: λ = 30 gets the overlay.
pub const NORMAL_APPROXIMATION_THRESHOLD: f64 = 30.0;

/// Sample density of the overlay curve across the domain extent.
pub const DEFAULT_OVERLAY_SAMPLES: usize = 500;

/// Builds the normal-approximation overlay for a computed distribution, or
/// `None` while λ is below the threshold.
///
/// Each sample of `N(λ, √λ)` is multiplied by the distribution's total mass
/// over its domain, so the curve tracks what the bars actually display on a
/// truncated domain. This is a visual-comparability choice, not a statistical
/// normalization; the curve does not integrate to 1 on purpose.
#[must_use]
pub fn normal_overlay(distribution: &Distribution, sample_count: usize) -> Option<NormalOverlay> {
    let lambda = distribution.rate().value();
    if lambda < NORMAL_APPROXIMATION_THRESHOLD {
        return None;
    }

    let moments = stats(distribution.rate());
    let mean = moments.mean;
    let std_dev = moments.std_dev;

    let scale = distribution.total_mass();
    let (extent_min, extent_max) = distribution.domain().extent();

    let samples = linspace(extent_min, extent_max, sample_count)
        .into_iter()
        .map(|x| OverlayPoint {
            x,
            y: normal_density(x, mean, std_dev) * scale,
        })
        .collect();

    Some(NormalOverlay::new(mean, std_dev, samples))
}

fn normal_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;

    (-0.5 * z * z).exp() / (std_dev * (2.0 * std::f64::consts::PI).sqrt())
}
