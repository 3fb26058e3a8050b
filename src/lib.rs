mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::animation::{
    ANIMATION_AXIS_LIMIT, ANIMATION_STEPS, AnimationCommand, AnimationController, AnimationPhase,
    TickReport,
};
pub use controllers::chart_export::ChartExportController;
pub use controllers::data::frame::PlotFrame;
pub use controllers::data::parameter_snapshot::ParameterSnapshot;
pub use controllers::density::{DensityView, ProbabilityRow, density_view};
pub use controllers::errors::FrameError;
pub use controllers::ports::{DisplayPort, FilePresenterPort};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::distribution::Distribution;
pub use crate::core::data::domain::Domain;
pub use crate::core::data::pixel_canvas::PixelCanvas;
pub use crate::core::data::rate::Rate;
pub use crate::core::poisson::{
    NORMAL_APPROXIMATION_THRESHOLD, PoissonStats, normal_overlay, pmf, stats,
};
pub use presenters::chart::rasterizer::rasterize;
pub use presenters::file::PpmFilePresenter;
pub use presenters::latest_frame::LatestFramePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run::RunGuiCommand;
