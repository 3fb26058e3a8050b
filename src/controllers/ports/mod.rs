pub mod display;
pub mod file_presenter;

pub use display::DisplayPort;
pub use file_presenter::FilePresenterPort;
