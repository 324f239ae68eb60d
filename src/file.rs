use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    buffer::*,
    color::*,
    error::*,
};

#[cfg(test)]
mod test;

const RAW_LUT_LEN: usize = 3 * MAX_MAP_SIZE;
const ICOL_HEADER_LEN: usize = 32;

/// On-disk palette layout, either as parallel channels or as a list of
/// `[r, g, b]` triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteDocument {
    Channels {
        reds: Vec<u8>,
        greens: Vec<u8>,
        blues: Vec<u8>,
    },
    Colors {
        colors: Vec<[u8; 3]>,
    },
}

impl PaletteDocument {
    pub fn to_palette(self) -> Result<Palette, PaletteError> {
        match self {
            PaletteDocument::Channels { reds, greens, blues } => Palette::new(reds, greens, blues),
            PaletteDocument::Colors { colors } => Palette::from_colors(colors.into_iter().map(Color::from)),
        }
    }
}

impl From<&Palette> for PaletteDocument {
    fn from(p: &Palette) -> PaletteDocument {
        PaletteDocument::Colors {
            colors: p.colors().map(<[u8; 3]>::from).collect(),
        }
    }
}

impl Palette {
    pub fn from_json(src: &str) -> Result<Palette, PaletteFileError> {
        let source: PaletteDocument = serde_json::from_str(src)?;
        Ok(source.to_palette()?)
    }

    pub fn from_ron(src: &str) -> Result<Palette, PaletteFileError> {
        let source: PaletteDocument = ron::from_str(src)?;
        Ok(source.to_palette()?)
    }

    pub fn from_yaml(src: &str) -> Result<Palette, PaletteFileError> {
        let source: PaletteDocument = serde_yaml::from_str(src)?;
        Ok(source.to_palette()?)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&PaletteDocument::from(self))
    }

    /// Reads a binary LUT: 256 reds, 256 greens, then 256 blues, optionally
    /// behind a 32-byte `ICOL` header.
    pub fn from_raw_lut(bytes: &[u8]) -> Result<Palette, PaletteFileError> {
        let body = match bytes.len() {
            RAW_LUT_LEN => bytes,
            n if n == RAW_LUT_LEN + ICOL_HEADER_LEN && bytes.starts_with(b"ICOL") => &bytes[ICOL_HEADER_LEN..],
            n => return Err(PaletteFileError::RawLutLength(n)),
        };

        let (reds, rest) = body.split_at(MAX_MAP_SIZE);
        let (greens, blues) = rest.split_at(MAX_MAP_SIZE);
        Ok(Palette::new(reds.to_vec(), greens.to_vec(), blues.to_vec())?)
    }

    /// Writes the binary LUT layout; palettes shorter than 256 entries are
    /// padded with black.
    pub fn to_raw_lut(&self) -> Vec<u8> {
        let mut raw = vec![0; RAW_LUT_LEN];
        for (plane, channel) in raw.chunks_mut(MAX_MAP_SIZE).zip([self.reds(), self.greens(), self.blues()]) {
            plane[..channel.len()].copy_from_slice(channel);
        }
        raw
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Palette, PaletteFileError> {
        let path = path.as_ref();
        let extension = path.extension().ok_or(PaletteFileError::ExtensionError)?;
        debug!("loading palette from '{}'", path.display());

        Ok(match extension.to_str() {
            Some("json") => Palette::from_json(&std::fs::read_to_string(path)?)?,
            Some("ron") => Palette::from_ron(&std::fs::read_to_string(path)?)?,
            Some("yaml" | "yml") => Palette::from_yaml(&std::fs::read_to_string(path)?)?,
            Some("lut") => Palette::from_raw_lut(&std::fs::read(path)?)?,
            _ => return Err(PaletteFileError::ExtensionError),
        })
    }
}

pub fn save_buffer(buffer: &PixelBuffer, path: impl AsRef<Path>) -> image::ImageResult<()> {
    buffer.to_dynamic().save(path)
}
