pub mod normal_approximation;
pub mod pmf;
pub mod stats;

pub use normal_approximation::{
    DEFAULT_OVERLAY_SAMPLES, NORMAL_APPROXIMATION_THRESHOLD, normal_overlay,
};
pub use pmf::pmf;
pub use stats::{PoissonStats, stats};
