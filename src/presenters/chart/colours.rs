use crate::core::data::colour::Colour;

/// Chart palette, matching the matplotlib colours of the original views:
/// sky-blue bars with black edges, gray trail traces, a dashed red
/// approximation curve and an orange highlighted bar.
pub const BACKGROUND: Colour = Colour::new(255, 255, 255);
pub const AXIS: Colour = Colour::new(64, 64, 64);
pub const GRID: Colour = Colour::new(210, 210, 210);
pub const BAR_FILL: Colour = Colour::new(135, 206, 235);
pub const BAR_EDGE: Colour = Colour::new(0, 0, 0);
pub const HIGHLIGHT_FILL: Colour = Colour::new(255, 165, 0);
pub const TRAIL: Colour = Colour::new(170, 170, 170);
pub const OVERLAY: Colour = Colour::new(220, 20, 60);
