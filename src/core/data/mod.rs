pub mod colour;
pub mod distribution;
pub mod domain;
pub mod normal_overlay;
pub mod pixel_canvas;
pub mod rate;
