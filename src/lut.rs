use std::sync::Arc;

use log::{debug, trace};

use super::{
    buffer::*,
    color::*,
    error::*,
};


/// A color lookup table captured from a palette source.
///
/// The channel arrays are copied out of the source at construction; the
/// source itself is only kept so callers can get the same object back.
#[derive(Debug, Clone)]
pub struct ColorLut<P: ?Sized = Palette> {
    source: Arc<P>,
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
}

impl<P: PaletteSource + ?Sized> ColorLut<P> {
    pub fn from_palette(source: Arc<P>) -> Result<Self, LutError> {
        let map_size = source.map_size();
        let (reds, greens, blues) = match (source.reds(), source.greens(), source.blues()) {
            (Some(r), Some(g), Some(b)) => (r, g, b),
            _ => return Err(PaletteError::Missing.into()),
        };

        if reds.len() != map_size || greens.len() != map_size || blues.len() != map_size {
            return Err(PaletteError::ChannelMismatch {
                map_size,
                reds: reds.len(),
                greens: greens.len(),
                blues: blues.len(),
            }
            .into());
        }
        check_map_size(map_size)?;

        debug!("captured color lookup table with {} entries", map_size);

        Ok(ColorLut {
            reds: reds.to_vec(),
            greens: greens.to_vec(),
            blues: blues.to_vec(),
            source,
        })
    }
}

impl ColorLut<Palette> {
    /// Builds a table from the palette embedded in an indexed buffer.
    pub fn from_buffer(buffer: &PixelBuffer) -> Result<Self, LutError> {
        match buffer.palette() {
            Some(palette) => ColorLut::from_palette(Arc::clone(palette)),
            None => Err(LutError::UnsupportedFormat(buffer.kind())),
        }
    }
}

impl<P: ?Sized> ColorLut<P> {
    pub fn map_size(&self) -> usize {
        self.reds.len()
    }

    pub fn reds(&self) -> Vec<u8> {
        self.reds.clone()
    }

    pub fn greens(&self) -> Vec<u8> {
        self.greens.clone()
    }

    pub fn blues(&self) -> Vec<u8> {
        self.blues.clone()
    }

    /// The object this table was built from.
    pub fn palette(&self) -> &Arc<P> {
        &self.source
    }

    pub fn color(&self, i: usize) -> Option<Color> {
        Some(Color::rgb(*self.reds.get(i)?, self.greens[i], self.blues[i]))
    }

    fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.map_size()).map(|i| Color::rgb(self.reds[i], self.greens[i], self.blues[i]))
    }

    pub fn is_grayscale(&self) -> bool {
        self.colors().all(Color::is_gray)
    }

    /// Index of the entry closest to `color`; the lowest index wins ties.
    pub fn best_index(&self, color: Color) -> usize {
        nearest_index(self.colors(), color)
    }

    /// Copies the channels into a standalone palette.
    pub fn to_palette(&self) -> Result<Palette, PaletteError> {
        Palette::new(self.reds(), self.greens(), self.blues())
    }

    /// Fills `width` x `height` pixels at (`x`, `y`) with the palette stretched
    /// or compressed to `width` columns.
    ///
    /// Indexed buffers receive palette indices, true-color buffers receive the
    /// packed opaque colors of those indices.
    pub fn draw_unscaled_color_bar(
        &self,
        buffer: &mut PixelBuffer,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<(), LutError> {
        check_rect(buffer, x, y, width, height)?;

        let target = match buffer {
            PixelBuffer::Indexed { raster, .. } => BarTarget::Indexed(raster),
            PixelBuffer::TrueColor(raster) => BarTarget::TrueColor(raster),
            other => return Err(LutError::UnsupportedFormat(other.kind())),
        };

        debug!(
            "drawing {}-entry color bar {}x{} at ({}, {})",
            self.map_size(), width, height, x, y
        );

        let map_size = self.map_size();
        match target {
            BarTarget::Indexed(raster) => {
                for c in 0..width {
                    let index = bar_index(c, map_size, width) as u8;
                    for row in y..y + height {
                        raster.set(x + c, row, index);
                    }
                }
            }
            BarTarget::TrueColor(raster) => {
                for c in 0..width {
                    let i = bar_index(c, map_size, width);
                    let argb = Color::rgb(self.reds[i], self.greens[i], self.blues[i]).to_argb();
                    for row in y..y + height {
                        raster.set(x + c, row, argb);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draws the color bar and outlines it in black, `rect(x - 1, y, width + 2, height)`.
    ///
    /// Outline pixels falling outside the buffer are skipped.
    pub fn draw_framed_color_bar(
        &self,
        buffer: &mut PixelBuffer,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<(), LutError> {
        self.draw_unscaled_color_bar(buffer, x, y, width, height)?;

        let black = match buffer {
            PixelBuffer::TrueColor(_) => Color::BLACK.to_argb(),
            PixelBuffer::Indexed { palette: Some(p), .. } => {
                nearest_index(p.colors(), Color::BLACK) as u32
            }
            _ => 0,
        };
        trace!("outline value {:#x}", black);

        let left = x.checked_sub(1);
        let right = x + width;
        let bottom = y + height - 1;

        let mut plot = |px: Option<usize>, py: usize| {
            if let Some(px) = px {
                if buffer.contains(px, py) {
                    buffer.set(px, py, black);
                }
            }
        };

        for row in y..=bottom {
            plot(left, row);
            plot(Some(right), row);
        }
        for col in left.unwrap_or(x)..=right {
            plot(Some(col), y);
            plot(Some(col), bottom);
        }

        Ok(())
    }
}

enum BarTarget<'a> {
    Indexed(&'a mut Raster<u8>),
    TrueColor(&'a mut Raster<u32>),
}

fn check_rect(buffer: &PixelBuffer, x: usize, y: usize, width: usize, height: usize) -> Result<(), LutError> {
    if width == 0 || height == 0 {
        return Err(LutError::ContractViolation(format!(
            "color bar must have a positive size, got {}x{}",
            width, height
        )));
    }

    let fits = x.checked_add(width).is_some_and(|r| r <= buffer.width())
        && y.checked_add(height).is_some_and(|b| b <= buffer.height());
    if !fits {
        return Err(LutError::ContractViolation(format!(
            "color bar {}x{} at ({}, {}) does not fit in {}x{} buffer",
            width,
            height,
            x,
            y,
            buffer.width(),
            buffer.height()
        )));
    }

    Ok(())
}

/// Palette index shown in column `column` of a bar `width` columns wide:
/// `floor(column * map_size / width)`, clamped to the last entry.
///
/// Callers guarantee `width > 0` and `map_size > 0`.
pub(crate) fn bar_index(column: usize, map_size: usize, width: usize) -> usize {
    (column * map_size / width).min(map_size - 1)
}

/// A 256-entry gray ramp, black to white, or white to black when `inverted`.
pub fn create_grayscale_palette(inverted: bool) -> Palette {
    Palette::gray_ramp(inverted)
}
