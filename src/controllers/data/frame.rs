use crate::core::data::distribution::Distribution;
use crate::core::data::normal_overlay::NormalOverlay;

/// One renderable snapshot handed to the Display collaborator: the current
/// distribution drawn as bars, earlier distributions of the same run as a
/// faint trail, an optional normal-approximation curve, and an optional
/// highlighted bar for the density view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFrame {
    pub distribution: Distribution,
    pub trail: Vec<Distribution>,
    pub overlay: Option<NormalOverlay>,
    pub highlight: Option<u32>,
    /// Upper bound of the probability axis. Fixed at 1.0 during animation so
    /// the bars grow against a stable scale; auto-fitted for static views.
    pub y_max: f64,
    pub label: String,
}

impl PlotFrame {
    /// A bare static frame: bars only, auto-scaled axis.
    #[must_use]
    pub fn from_distribution(distribution: Distribution) -> Self {
        let y_max = static_axis_limit(&distribution);
        let label = format!("λ = {}", distribution.rate());

        Self {
            distribution,
            trail: Vec::new(),
            overlay: None,
            highlight: None,
            y_max,
            label,
        }
    }
}

/// Auto-fitted axis limit for static views: headroom above the tallest bar.
#[must_use]
pub fn static_axis_limit(distribution: &Distribution) -> f64 {
    distribution.peak_mass() * 1.05
}
