pub mod chart;
pub mod file;
pub mod latest_frame;
