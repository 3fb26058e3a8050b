pub mod frame;
pub mod parameter_snapshot;
