use crate::controllers::data::frame::{PlotFrame, static_axis_limit};
use crate::controllers::data::parameter_snapshot::ParameterSnapshot;
use crate::controllers::errors::FrameError;
use crate::core::poisson::pmf::pmf;
use crate::core::poisson::stats::{PoissonStats, stats};

/// One row of the probability table: an integer point and its mass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub x: u32,
    pub mass: f64,
}

/// The static density view: a bars-only frame with an optional highlighted
/// k bar, the full probability table over the domain, and the summary
/// statistics for the current λ.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityView {
    pub frame: PlotFrame,
    pub stats: PoissonStats,
    pub table: Vec<ProbabilityRow>,
    /// `P(X = k)` for the highlighted k, when it lies inside the domain.
    pub highlight_mass: Option<f64>,
}

/// Builds the density view for the current parameters. The highlight is
/// only applied when k falls inside the domain; an out-of-range k degrades
/// to the plain view rather than erroring.
pub fn density_view(params: &ParameterSnapshot) -> Result<DensityView, FrameError> {
    let domain = params.domain()?;
    let rate = params.rate()?;

    let distribution = pmf(domain, rate);
    let moments = stats(rate);

    let highlight = params.highlight.filter(|&k| domain.contains(k));
    let highlight_mass = highlight.and_then(|k| distribution.mass_at(k));

    let table = distribution
        .points()
        .map(|(x, mass)| ProbabilityRow { x, mass })
        .collect();

    let y_max = static_axis_limit(&distribution);
    let label = format!("λ = {}", rate);

    Ok(DensityView {
        frame: PlotFrame {
            distribution,
            trail: Vec::new(),
            overlay: None,
            highlight,
            y_max,
            label,
        },
        stats: moments,
        table,
        highlight_mass,
    })
}
