use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelCanvasError {
    ZeroSize { width: u32, height: u32 },
    PixelOutsideBounds { x: u32, y: u32, width: u32, height: u32 },
    BoundsMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelCanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "canvas size must be non-zero: {}x{}", width, height)
            }
            Self::PixelOutsideBounds { x, y, width, height } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of canvas bounds {}x{}",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "canvas size expects {} buffer bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelCanvasError {}

/// Owned RGB raster target for chart rendering. Row 0 is the top of the
/// image; each row holds `width * 3` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelCanvas {
    pub const BYTES_PER_PIXEL: usize = BYTES_PER_PIXEL;

    pub fn new(width: u32, height: u32, background: Colour) -> Result<Self, PixelCanvasError> {
        if width == 0 || height == 0 {
            return Err(PixelCanvasError::ZeroSize { width, height });
        }

        let pixel = [background.r, background.g, background.b];
        let buffer = pixel
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * BYTES_PER_PIXEL)
            .collect();

        Ok(Self { width, height, buffer })
    }

    /// Wraps an already-filled RGB buffer; the length must match the size.
    pub fn from_data(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PixelCanvasError> {
        if width == 0 || height == 0 {
            return Err(PixelCanvasError::ZeroSize { width, height });
        }

        let expected = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        if buffer.len() != expected {
            return Err(PixelCanvasError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { width, height, buffer })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Mutable view of the raster split into rows, for parallel fills.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let row = self.width as usize * BYTES_PER_PIXEL;
        self.buffer.chunks_exact_mut(row)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelCanvasError> {
        if x >= self.width || y >= self.height {
            return Err(PixelCanvasError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_with_background() {
        let canvas = PixelCanvas::new(2, 2, Colour::new(10, 20, 30)).unwrap();

        assert_eq!(canvas.buffer().len(), 12);
        assert_eq!(canvas.pixel_at(0, 0), Some(Colour::new(10, 20, 30)));
        assert_eq!(canvas.pixel_at(1, 1), Some(Colour::new(10, 20, 30)));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let result = PixelCanvas::new(0, 5, Colour::new(0, 0, 0));

        assert_eq!(
            result,
            Err(PixelCanvasError::ZeroSize { width: 0, height: 5 })
        );
    }

    #[test]
    fn test_set_pixel_round_trips() {
        let mut canvas = PixelCanvas::new(3, 3, Colour::new(0, 0, 0)).unwrap();

        canvas.set_pixel(2, 1, Colour::new(255, 0, 128)).unwrap();

        assert_eq!(canvas.pixel_at(2, 1), Some(Colour::new(255, 0, 128)));
        assert_eq!(canvas.pixel_at(1, 2), Some(Colour::new(0, 0, 0)));
    }

    #[test]
    fn test_set_pixel_rejects_out_of_bounds() {
        let mut canvas = PixelCanvas::new(3, 3, Colour::new(0, 0, 0)).unwrap();

        let result = canvas.set_pixel(3, 0, Colour::new(1, 2, 3));

        assert_eq!(
            result,
            Err(PixelCanvasError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3,
            })
        );
    }

    #[test]
    fn test_from_data_validates_length() {
        let ok = PixelCanvas::from_data(2, 1, vec![0; 6]);
        let short = PixelCanvas::from_data(2, 1, vec![0; 5]);

        assert!(ok.is_ok());
        assert_eq!(
            short,
            Err(PixelCanvasError::BoundsMismatch { expected: 6, actual: 5 })
        );
    }

    #[test]
    fn test_rows_mut_yields_height_rows() {
        let mut canvas = PixelCanvas::new(4, 3, Colour::new(0, 0, 0)).unwrap();

        let rows: Vec<_> = canvas.rows_mut().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 12));
    }
}
