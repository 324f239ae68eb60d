use super::error::PaletteError;

pub const MIN_MAP_SIZE: usize = 2;
pub const MAX_MAP_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const WHITE: Color = Color::gray(255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub const fn gray(value: u8) -> Self {
        Color { red: value, green: value, blue: value }
    }

    /// Packs the color as an opaque `0xAARRGGBB` value.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Unpacks an `0xAARRGGBB` value, discarding alpha.
    pub fn from_argb(argb: u32) -> Self {
        Color {
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    pub fn is_gray(self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    pub fn distance_sq(self, other: Self) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.red, other.red) + d(self.green, other.green) + d(self.blue, other.blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color { red, green, blue }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}

/// Anything that can hand out the channel arrays of an indexed color map.
///
/// A channel accessor returning `None` means the source carries no palette
/// data at all.
pub trait PaletteSource {
    fn map_size(&self) -> usize;
    fn reds(&self) -> Option<&[u8]>;
    fn greens(&self) -> Option<&[u8]>;
    fn blues(&self) -> Option<&[u8]>;
}

/// An indexed color map of 2 to 256 entries stored as parallel channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
}

impl Palette {
    pub fn new(reds: Vec<u8>, greens: Vec<u8>, blues: Vec<u8>) -> Result<Palette, PaletteError> {
        let map_size = reds.len();
        if greens.len() != map_size || blues.len() != map_size {
            return Err(PaletteError::ChannelMismatch {
                map_size,
                reds: reds.len(),
                greens: greens.len(),
                blues: blues.len(),
            });
        }
        check_map_size(map_size)?;

        Ok(Palette { reds, greens, blues })
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Result<Palette, PaletteError> {
        let colors = colors.into_iter();
        let (lower, _) = colors.size_hint();
        let mut reds = Vec::with_capacity(lower);
        let mut greens = Vec::with_capacity(lower);
        let mut blues = Vec::with_capacity(lower);
        for c in colors {
            reds.push(c.red);
            greens.push(c.green);
            blues.push(c.blue);
        }
        Palette::new(reds, greens, blues)
    }

    pub fn gray_ramp(inverted: bool) -> Palette {
        let ramp: Vec<u8> = if inverted {
            (0..=255u8).rev().collect()
        } else {
            (0..=255u8).collect()
        };
        Palette {
            reds: ramp.clone(),
            greens: ramp.clone(),
            blues: ramp,
        }
    }

    pub fn len(&self) -> usize {
        self.reds.len()
    }

    pub fn reds(&self) -> &[u8] {
        &self.reds
    }

    pub fn greens(&self) -> &[u8] {
        &self.greens
    }

    pub fn blues(&self) -> &[u8] {
        &self.blues
    }

    pub fn get(&self, i: usize) -> Option<Color> {
        Some(Color::rgb(*self.reds.get(i)?, self.greens[i], self.blues[i]))
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.reds
            .iter()
            .zip(&self.greens)
            .zip(&self.blues)
            .map(|((&r, &g), &b)| Color::rgb(r, g, b))
    }
}

impl PaletteSource for Palette {
    fn map_size(&self) -> usize {
        self.len()
    }

    fn reds(&self) -> Option<&[u8]> {
        Some(&self.reds)
    }

    fn greens(&self) -> Option<&[u8]> {
        Some(&self.greens)
    }

    fn blues(&self) -> Option<&[u8]> {
        Some(&self.blues)
    }
}

/// Position of the color nearest to `target` by squared RGB distance, the
/// first one on ties.
pub fn nearest_index(colors: impl Iterator<Item = Color>, target: Color) -> usize {
    colors
        .enumerate()
        .min_by_key(|&(i, c)| (c.distance_sq(target), i))
        .map_or(0, |(i, _)| i)
}

pub(crate) fn check_map_size(map_size: usize) -> Result<(), PaletteError> {
    if (MIN_MAP_SIZE..=MAX_MAP_SIZE).contains(&map_size) {
        Ok(())
    } else {
        Err(PaletteError::Size(map_size))
    }
}
