pub mod filter_option;
pub mod filter_trait;
mod convolution;
mod point;
mod window;

use self::filter_trait::{Filter, WindowFilter, WINDOW_LEN, WINDOW_SIZE};
use crate::{
    img::{PixelPos, PixelsArea, Raster},
    img_err::ImgError,
    processing::ProgressProvider,
};

pub use convolution::Convolution;
pub use point::{apply_combine, apply_point, CombineOp, PointOp};
pub use window::{apply_window, WindowOp};

pub type FilterBase = Box<dyn Filter>;


/// Writes `filter`'s output for every pixel of `src` into `dest`.
/// `dest` must be a different raster of the same size.
fn process_with_window<T: WindowFilter>(
    src: &Raster,
    dest: &mut Raster,
    filter: &T,
    prog_prov: &mut ProgressProvider,
) {
    assert!(src.same_size_as(dest),
        "window source {}x{} and destination {}x{} differ", src.w(), src.h(), dest.w(), dest.h());

    let half_size = PixelPos::new(WINDOW_SIZE / 2, WINDOW_SIZE / 2);
    let inner_area = src.get_area().apply_margin(WINDOW_SIZE / 2);
    let window_area = PixelsArea::with_size(WINDOW_SIZE, WINDOW_SIZE);

    let mut window_buf = [0_u8; WINDOW_LEN];

    for row in 0..src.h() {
        for col in 0..src.w() {
            let pos = PixelPos::new(row, col);

            let is_inner = inner_area.map_or(false, |area| area.contains(pos));
            dest[pos] = if is_inner {
                for (buf_ind, pos_w) in window_area.get_pixels_iter().enumerate() {
                    window_buf[buf_ind] = src[pos - half_size + pos_w];
                }
                filter.process_window(&window_buf)
            } else {
                filter.border_value(src[pos])
            };
        }

        prog_prov.complete_action();
    }
}

/// Builds a pass from its save name and parameters string.
pub fn try_parce_filter(save_name: &str, content: &str) -> Result<FilterBase, ImgError> {
    if let Some(op) = PointOp::try_parce(save_name, content)? {
        return Ok(Box::new(op) as FilterBase);
    }
    if let Some(op) = CombineOp::try_parce(save_name, content)? {
        return Ok(Box::new(op) as FilterBase);
    }
    if let Some(op) = WindowOp::try_parce(save_name, content)? {
        return Ok(Box::new(op) as FilterBase);
    }
    if let Some(conv) = Convolution::try_parce(save_name, content)? {
        return Ok(Box::new(conv) as FilterBase);
    }

    Err(ImgError::parse(format!("unknown pass '{}'", save_name)))
}
