pub mod animation;
pub mod chart_export;
pub mod data;
pub mod density;
pub mod errors;
pub mod ports;
