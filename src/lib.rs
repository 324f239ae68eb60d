pub mod color;
pub use color::*;

pub mod buffer;
pub use buffer::*;

pub mod error;
pub use error::*;

pub mod lut;
pub use lut::*;

pub mod render;
pub use render::*;

pub mod file;
pub use file::*;
