pub mod img_err;
pub mod img;
pub mod filter;
pub mod processing;
pub mod recipes;
pub mod utils;

pub use img::{Raster, PixelPos, PixelsArea};
pub use img_err::ImgError;
pub use processing::{DoubleBuffer, PassesLine};
