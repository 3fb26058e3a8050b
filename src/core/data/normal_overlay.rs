/// One sample of the scaled normal-approximation curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayPoint {
    pub x: f64,
    pub y: f64,
}

/// Dense sampling of the normal density `N(λ, √λ)` across a domain's
/// continuous extent, with every sample scaled by the discrete
/// distribution's total mass over that domain.
///
/// The scaling makes the curve visually comparable to the bars it overlays
/// (both sum to roughly the same displayed mass). It is deliberately *not* a
/// unit-area normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalOverlay {
    mean: f64,
    std_dev: f64,
    samples: Vec<OverlayPoint>,
}

impl NormalOverlay {
    pub(crate) fn new(mean: f64, std_dev: f64, samples: Vec<OverlayPoint>) -> Self {
        Self { mean, std_dev, samples }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    #[must_use]
    pub fn samples(&self) -> &[OverlayPoint] {
        &self.samples
    }
}
