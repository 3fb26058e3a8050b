use rayon::prelude::*;

use crate::controllers::data::frame::PlotFrame;
use crate::core::data::pixel_canvas::PixelCanvas;
use crate::presenters::chart::geometry::ChartGeometry;

/// Renders a frame into an RGB canvas, one row per rayon task.
#[must_use]
pub fn rasterize(frame: &PlotFrame, width: u32, height: u32) -> PixelCanvas {
    let geometry = ChartGeometry::new(frame, width, height);
    let row_bytes = width as usize * PixelCanvas::BYTES_PER_PIXEL;
    let mut buffer = vec![0u8; row_bytes * height as usize];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, pixel) in row.chunks_exact_mut(PixelCanvas::BYTES_PER_PIXEL).enumerate() {
                let colour = geometry.colour_at(px as u32, py as u32);
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        });

    PixelCanvas::from_data(width, height, buffer)
        .unwrap_or_else(|_| unreachable!("buffer sized from width and height"))
}
