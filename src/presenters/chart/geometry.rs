use crate::controllers::data::frame::PlotFrame;
use crate::core::data::colour::Colour;
use crate::core::data::distribution::Distribution;
use crate::presenters::chart::colours;

const PLOT_MARGIN: u32 = 10;
/// Bars occupy 0.8 of their unit slot, like matplotlib's default bar width.
const BAR_HALF_WIDTH: f64 = 0.4;
const GRID_DIVISIONS: u32 = 5;
/// Dash period (in pixels) of the overlay curve.
const DASH_PERIOD: u32 = 6;

struct BarSlice {
    top: u32,
    highlighted: bool,
}

/// Precomputed pixel-space description of one frame: per-column bar slices,
/// trail line rows and overlay rows, so the rasterizer can decide every
/// pixel's colour independently.
///
/// Layer order, topmost first: plot border, overlay curve, bars, trail,
/// gridlines, background — the trail is drawn under the bars exactly as the
/// original plots it.
pub struct ChartGeometry {
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
    x_lo: f64,
    x_span: f64,
    columns: usize,
    bars: Vec<Option<BarSlice>>,
    trail_rows: Vec<Vec<u32>>,
    overlay_rows: Vec<Option<u32>>,
    grid_rows: Vec<u32>,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(frame: &PlotFrame, width: u32, height: u32) -> Self {
        let margin_x = if width > 2 * PLOT_MARGIN + 2 { PLOT_MARGIN } else { 0 };
        let margin_y = if height > 2 * PLOT_MARGIN + 2 { PLOT_MARGIN } else { 0 };

        let left = margin_x;
        let right = width.saturating_sub(1) - margin_x;
        let top = margin_y;
        let bottom = height.saturating_sub(1) - margin_y;

        let domain = frame.distribution.domain();
        let x_lo = f64::from(domain.x_min()) - 0.5;
        let x_span = f64::from(domain.x_max() - domain.x_min() + 1);
        let columns = (right - left + 1) as usize;

        let y_max = if frame.y_max > 0.0 { frame.y_max } else { 1.0 };
        let row_of = |value: f64| -> u32 {
            let ratio = (value / y_max).clamp(0.0, 1.0);
            bottom - (ratio * f64::from(bottom - top)).round() as u32
        };
        let value_at = |column: usize| -> f64 {
            x_lo + (column as f64 + 0.5) / columns as f64 * x_span
        };

        let mut bars = Vec::with_capacity(columns);
        let mut trail_rows = Vec::with_capacity(columns);
        let mut overlay_rows = Vec::with_capacity(columns);

        for column in 0..columns {
            let v = value_at(column);

            bars.push(bar_slice(frame, v, &row_of));
            trail_rows.push(
                frame
                    .trail
                    .iter()
                    .filter_map(|dist| interpolate_mass(dist, v))
                    .map(&row_of)
                    .collect(),
            );
            overlay_rows.push(overlay_height(frame, v).map(&row_of));
        }

        let grid_rows = (1..GRID_DIVISIONS)
            .map(|i| row_of(y_max * f64::from(i) / f64::from(GRID_DIVISIONS)))
            .collect();

        Self {
            left,
            right,
            top,
            bottom,
            x_lo,
            x_span,
            columns,
            bars,
            trail_rows,
            overlay_rows,
            grid_rows,
        }
    }

    #[must_use]
    pub fn colour_at(&self, px: u32, py: u32) -> Colour {
        if px < self.left || px > self.right || py < self.top || py > self.bottom {
            return colours::BACKGROUND;
        }

        if px == self.left || px == self.right || py == self.top || py == self.bottom {
            return colours::AXIS;
        }

        let column = (px - self.left) as usize;

        if let Some(row) = self.overlay_rows[column] {
            if dash_on(px) && py.abs_diff(row) <= 1 {
                return colours::OVERLAY;
            }
        }

        if let Some(bar) = &self.bars[column] {
            if py >= bar.top {
                if py == bar.top {
                    return colours::BAR_EDGE;
                }

                return if bar.highlighted {
                    colours::HIGHLIGHT_FILL
                } else {
                    colours::BAR_FILL
                };
            }
        }

        if self.trail_rows[column].iter().any(|row| py.abs_diff(*row) <= 1) {
            return colours::TRAIL;
        }

        if self.grid_rows.contains(&py) {
            return colours::GRID;
        }

        colours::BACKGROUND
    }

    /// Pixel column of an integer domain point's bar centre, when visible.
    #[must_use]
    pub fn x_column(&self, x: u32) -> Option<u32> {
        let offset = (f64::from(x) - self.x_lo) / self.x_span * self.columns as f64 - 0.5;
        if offset < 0.0 {
            return None;
        }

        let column = offset.round() as u32;
        let px = self.left + column;
        if px > self.right { None } else { Some(px) }
    }

    #[must_use]
    pub fn plot_bottom(&self) -> u32 {
        self.bottom
    }

    #[must_use]
    pub fn plot_top(&self) -> u32 {
        self.top
    }
}

fn bar_slice(frame: &PlotFrame, v: f64, row_of: &impl Fn(f64) -> u32) -> Option<BarSlice> {
    let nearest = v.round();
    if nearest < 0.0 || (v - nearest).abs() > BAR_HALF_WIDTH {
        return None;
    }

    let x = nearest as u32;
    let mass = frame.distribution.mass_at(x)?;

    Some(BarSlice {
        top: row_of(mass),
        highlighted: frame.highlight == Some(x),
    })
}

/// Linear interpolation of a discrete pmf between its integer points, for
/// drawing the trail as a continuous trace the way `ax.plot` does.
fn interpolate_mass(distribution: &Distribution, v: f64) -> Option<f64> {
    let domain = distribution.domain();
    let (lo, hi) = domain.extent();
    if v < lo || v > hi {
        return None;
    }

    let base = v.floor();
    let x0 = base as u32;
    let frac = v - base;

    let m0 = distribution.mass_at(x0)?;
    let m1 = distribution.mass_at(x0 + 1).unwrap_or(m0);

    Some(m0 + (m1 - m0) * frac)
}

fn overlay_height(frame: &PlotFrame, v: f64) -> Option<f64> {
    let overlay = frame.overlay.as_ref()?;
    let samples = overlay.samples();
    if samples.len() < 2 {
        return None;
    }

    let lo = samples[0].x;
    let hi = samples[samples.len() - 1].x;
    if v < lo || v > hi {
        return None;
    }

    // Samples are evenly spaced, so the bracketing pair is an index away.
    let step = (hi - lo) / (samples.len() - 1) as f64;
    let position = (v - lo) / step;
    let index = (position.floor() as usize).min(samples.len() - 2);
    let frac = position - index as f64;

    let y0 = samples[index].y;
    let y1 = samples[index + 1].y;

    Some(y0 + (y1 - y0) * frac)
}

fn dash_on(px: u32) -> bool {
    (px / DASH_PERIOD) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::data::frame::PlotFrame;
    use crate::core::data::domain::Domain;
    use crate::core::data::rate::Rate;
    use crate::core::poisson::normal_approximation::{DEFAULT_OVERLAY_SAMPLES, normal_overlay};
    use crate::core::poisson::pmf::pmf;

    fn static_frame() -> PlotFrame {
        let dist = pmf(Domain::new(0, 20).unwrap(), Rate::new(4.0).unwrap());
        PlotFrame::from_distribution(dist)
    }

    #[test]
    fn test_outside_plot_area_is_background() {
        let geometry = ChartGeometry::new(&static_frame(), 200, 150);

        assert_eq!(geometry.colour_at(0, 0), colours::BACKGROUND);
        assert_eq!(geometry.colour_at(199, 149), colours::BACKGROUND);
    }

    #[test]
    fn test_plot_border_is_axis_coloured() {
        let geometry = ChartGeometry::new(&static_frame(), 200, 150);

        assert_eq!(geometry.colour_at(10, 75), colours::AXIS);
        assert_eq!(geometry.colour_at(100, 139), colours::AXIS);
    }

    #[test]
    fn test_bar_fill_above_baseline_at_the_mode() {
        let geometry = ChartGeometry::new(&static_frame(), 400, 300);

        let px = geometry.x_column(4).unwrap();
        let py = geometry.plot_bottom() - 1;

        assert_eq!(geometry.colour_at(px, py), colours::BAR_FILL);
    }

    #[test]
    fn test_no_bar_in_the_far_tail_near_the_top() {
        let geometry = ChartGeometry::new(&static_frame(), 400, 300);

        let px = geometry.x_column(20).unwrap();
        let py = geometry.plot_top() + 2;

        let colour = geometry.colour_at(px, py);
        assert_ne!(colour, colours::BAR_FILL);
        assert_ne!(colour, colours::BAR_EDGE);
    }

    #[test]
    fn test_highlighted_bar_uses_highlight_fill() {
        let mut frame = static_frame();
        frame.highlight = Some(2);
        let geometry = ChartGeometry::new(&frame, 400, 300);

        let highlighted = geometry.x_column(2).unwrap();
        let plain = geometry.x_column(4).unwrap();
        let py = geometry.plot_bottom() - 1;

        assert_eq!(geometry.colour_at(highlighted, py), colours::HIGHLIGHT_FILL);
        assert_eq!(geometry.colour_at(plain, py), colours::BAR_FILL);
    }

    #[test]
    fn test_overlay_rows_present_when_frame_has_overlay() {
        let dist = pmf(Domain::new(0, 80).unwrap(), Rate::new(35.0).unwrap());
        let overlay = normal_overlay(&dist, DEFAULT_OVERLAY_SAMPLES);
        assert!(overlay.is_some());

        let frame = PlotFrame {
            overlay,
            ..PlotFrame::from_distribution(dist)
        };
        let geometry = ChartGeometry::new(&frame, 400, 300);

        let overlay_pixels = (0..400)
            .flat_map(|px| (0..300).map(move |py| (px, py)))
            .filter(|&(px, py)| geometry.colour_at(px, py) == colours::OVERLAY)
            .count();

        assert!(overlay_pixels > 0);
    }

    #[test]
    fn test_trail_pixels_present_when_frame_has_trail() {
        let trail_dist = pmf(Domain::new(0, 20).unwrap(), Rate::new(1.0).unwrap());
        let frame = PlotFrame {
            trail: vec![trail_dist],
            y_max: 1.0,
            ..static_frame()
        };
        let geometry = ChartGeometry::new(&frame, 400, 300);

        let trail_pixels = (0..400)
            .flat_map(|px| (0..300).map(move |py| (px, py)))
            .filter(|&(px, py)| geometry.colour_at(px, py) == colours::TRAIL)
            .count();

        assert!(trail_pixels > 0);
    }

    #[test]
    fn test_x_column_is_within_plot_bounds() {
        let geometry = ChartGeometry::new(&static_frame(), 400, 300);

        for x in 0..=20 {
            let px = geometry.x_column(x).unwrap();
            assert!(px > 10 && px < 389, "x {} mapped to px {}", x, px);
        }
    }

    #[test]
    fn test_tiny_canvas_degrades_without_panicking() {
        let geometry = ChartGeometry::new(&static_frame(), 8, 8);

        for px in 0..8 {
            for py in 0..8 {
                let _ = geometry.colour_at(px, py);
            }
        }
    }
}
