use std::path::Path;

use crate::core::data::pixel_canvas::PixelCanvas;

pub trait FilePresenterPort {
    fn present(&self, canvas: &PixelCanvas, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
