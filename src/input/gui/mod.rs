//! GUI input adapter for interactive distribution exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for UI controls.

mod app;
pub mod run;
mod ui_state;

pub use run::RunGuiCommand;
