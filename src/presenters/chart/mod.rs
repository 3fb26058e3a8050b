pub mod colours;
pub mod geometry;
pub mod rasterizer;
