use std::fmt;
use std::sync::Arc;

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, RgbImage};
use num_traits::{AsPrimitive, Zero};

use super::color::{Color, Palette};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T> {
    width: usize,
    height: usize,
    pixels: Vec<T>,
}

impl<T: Copy + Zero> Raster<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            width,
            height,
            pixels: vec![T::zero(); width * height],
        }
    }
}

impl<T: Copy> Raster<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.pixels[self.offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.offset(x, y);
        self.pixels[i] = value;
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} raster",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    Indexed,
    Gray16,
    TrueColor,
}

impl fmt::Display for PixelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PixelKind::Indexed => "8-bit indexed",
            PixelKind::Gray16 => "16-bit grayscale",
            PixelKind::TrueColor => "32-bit true color",
        })
    }
}

/// A pixel grid in one of the supported storage modes.
///
/// Values go in and out as `u32`; `set` truncates to the storage width, so an
/// indexed buffer keeps the low byte and a true-color buffer holds packed
/// `0xAARRGGBB`.
#[derive(Debug, Clone)]
pub enum PixelBuffer {
    Indexed {
        raster: Raster<u8>,
        palette: Option<Arc<Palette>>,
    },
    Gray16(Raster<u16>),
    TrueColor(Raster<u32>),
}

impl PixelBuffer {
    pub fn indexed(width: usize, height: usize) -> Self {
        PixelBuffer::Indexed {
            raster: Raster::new(width, height),
            palette: None,
        }
    }

    pub fn indexed_with_palette(width: usize, height: usize, palette: Arc<Palette>) -> Self {
        PixelBuffer::Indexed {
            raster: Raster::new(width, height),
            palette: Some(palette),
        }
    }

    pub fn gray16(width: usize, height: usize) -> Self {
        PixelBuffer::Gray16(Raster::new(width, height))
    }

    pub fn true_color(width: usize, height: usize) -> Self {
        PixelBuffer::TrueColor(Raster::new(width, height))
    }

    pub fn kind(&self) -> PixelKind {
        match self {
            PixelBuffer::Indexed { .. } => PixelKind::Indexed,
            PixelBuffer::Gray16(_) => PixelKind::Gray16,
            PixelBuffer::TrueColor(_) => PixelKind::TrueColor,
        }
    }

    pub fn palette(&self) -> Option<&Arc<Palette>> {
        match self {
            PixelBuffer::Indexed { palette, .. } => palette.as_ref(),
            _ => None,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            PixelBuffer::Indexed { raster, .. } => raster.width(),
            PixelBuffer::Gray16(raster) => raster.width(),
            PixelBuffer::TrueColor(raster) => raster.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            PixelBuffer::Indexed { raster, .. } => raster.height(),
            PixelBuffer::Gray16(raster) => raster.height(),
            PixelBuffer::TrueColor(raster) => raster.height(),
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        match self {
            PixelBuffer::Indexed { raster, .. } => raster.get(x, y).as_(),
            PixelBuffer::Gray16(raster) => raster.get(x, y).as_(),
            PixelBuffer::TrueColor(raster) => raster.get(x, y),
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        match self {
            PixelBuffer::Indexed { raster, .. } => raster.set(x, y, value.as_()),
            PixelBuffer::Gray16(raster) => raster.set(x, y, value.as_()),
            PixelBuffer::TrueColor(raster) => raster.set(x, y, value),
        }
    }

    pub fn to_gray8(&self) -> Option<GrayImage> {
        match self {
            PixelBuffer::Indexed { raster, palette: None } => Some(
                ImageBuffer::from_raw(raster.width() as u32, raster.height() as u32, raster.pixels().to_vec())
                    .expect("incorrect image buffer size"),
            ),
            _ => None,
        }
    }

    pub fn to_rgb8(&self) -> RgbImage {
        let raw = (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .flat_map(|(x, y)| <[u8; 3]>::from(self.color_at(x, y)))
            .collect();
        ImageBuffer::from_raw(self.width() as u32, self.height() as u32, raw)
            .expect("incorrect image buffer size")
    }

    pub fn to_dynamic(&self) -> DynamicImage {
        match self {
            PixelBuffer::Gray16(raster) => {
                let img: ImageBuffer<Luma<u16>, Vec<u16>> =
                    ImageBuffer::from_raw(raster.width() as u32, raster.height() as u32, raster.pixels().to_vec())
                        .expect("incorrect image buffer size");
                DynamicImage::ImageLuma16(img)
            }
            _ => match self.to_gray8() {
                Some(gray) => DynamicImage::ImageLuma8(gray),
                None => DynamicImage::ImageRgb8(self.to_rgb8()),
            },
        }
    }

    /// The displayed color of a pixel: indices resolve through the embedded
    /// palette (grayscale when there is none), 16-bit values keep their high
    /// byte.
    pub fn color_at(&self, x: usize, y: usize) -> Color {
        match self {
            PixelBuffer::Indexed { raster, palette } => {
                let i = raster.get(x, y);
                palette
                    .as_ref()
                    .and_then(|p| p.get(i as usize))
                    .unwrap_or(Color::gray(i))
            }
            PixelBuffer::Gray16(raster) => Color::gray((raster.get(x, y) >> 8) as u8),
            PixelBuffer::TrueColor(raster) => Color::from_argb(raster.get(x, y)),
        }
    }
}
