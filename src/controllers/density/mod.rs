pub mod controller;

pub use controller::{DensityView, ProbabilityRow, density_view};
