use std::sync::Arc;

use super::buffer::*;
use super::error::*;
use super::lut::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    #[default]
    TrueColor,
    Indexed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarConfig {
    pub width: usize,
    pub height: usize,
    pub framed: bool,
    pub mode: BarMode,
}

impl Default for BarConfig {
    fn default() -> BarConfig {
        BarConfig {
            width: 256,
            height: 32,
            framed: false,
            mode: BarMode::TrueColor,
        }
    }
}

impl<P: ?Sized> ColorLut<P> {
    /// Renders the color bar onto a fresh canvas.
    ///
    /// A framed bar gets one extra column on each side for the outline.
    /// Indexed canvases carry a copy of this table's palette.
    pub fn render_bar(&self, cfg: BarConfig) -> Result<PixelBuffer, LutError> {
        let (canvas_width, x) = if cfg.framed { (cfg.width + 2, 1) } else { (cfg.width, 0) };

        let mut canvas = match cfg.mode {
            BarMode::TrueColor => PixelBuffer::true_color(canvas_width, cfg.height),
            BarMode::Indexed => {
                PixelBuffer::indexed_with_palette(canvas_width, cfg.height, Arc::new(self.to_palette()?))
            }
        };

        if cfg.framed {
            self.draw_framed_color_bar(&mut canvas, x, 0, cfg.width, cfg.height)?;
        } else {
            self.draw_unscaled_color_bar(&mut canvas, x, 0, cfg.width, cfg.height)?;
        }

        Ok(canvas)
    }
}
