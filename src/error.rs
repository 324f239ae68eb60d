use thiserror::Error;

use super::buffer::PixelKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must have between 2 and 256 entries, found {0}")]
    Size(usize),
    #[error("channel lengths disagree (map size {map_size}, reds {reds}, greens {greens}, blues {blues})")]
    ChannelMismatch {
        map_size: usize,
        reds: usize,
        greens: usize,
        blues: usize,
    },
    #[error("palette source exposes no channel data")]
    Missing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LutError {
    #[error("invalid palette, {0}")]
    InvalidPalette(#[from] PaletteError),
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(PixelKind),
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

#[derive(Error, Debug)]
pub enum PaletteFileError {
    #[error("could not parse JSON palette file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse RON palette file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse YAML palette file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read input file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("input file does not have valid extension (must be .json, .ron, .yaml or .lut)")]
    ExtensionError,
    #[error("raw LUT data must be 768 bytes (or 800 with an ICOL header), found {0}")]
    RawLutLength(usize),
    #[error("failed to save image\n{0}")]
    ImageSaveError(#[from] image::ImageError),
    #[error("invalid color palette, {0}")]
    PaletteError(#[from] PaletteError),
    #[error("could not draw color bar, {0}")]
    LutError(#[from] LutError),
}
