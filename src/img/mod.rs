pub mod codec;
mod gray;
mod iterators;
mod raster;

pub use codec::{ColorKind, DecodedImage};
pub use gray::reduce_to_gray;
pub use iterators::*;
pub use raster::Raster;

pub const MAX_PIXEL_VALUE: i32 = 255;
