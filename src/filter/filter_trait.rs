use crate::img::Raster;
use crate::processing::{DoubleBuffer, ProgressProvider};

use super::FilterBase;

pub const WINDOW_SIZE: usize = 3;
pub const WINDOW_LEN: usize = WINDOW_SIZE * WINDOW_SIZE;
pub const WINDOW_CENTER: usize = WINDOW_LEN / 2;

/// One pass of a processing line.
pub trait Filter : Send {
    fn process(&self, buffers: &mut DoubleBuffer, prog_prov: &mut ProgressProvider);

    /// Progress actions `process` completes: one per raster row.
    fn get_steps_num(&self, raster: &Raster) -> usize {
        raster.h()
    }

    fn get_description(&self) -> String;
    fn get_save_name(&self) -> String;
    fn params_to_string(&self) -> Option<String>;
    fn get_copy(&self) -> FilterBase;
}

/// Computes a pixel from its 3x3 window, row-major from the top left.
pub trait WindowFilter {
    fn process_window(&self, window: &[u8; WINDOW_LEN]) -> u8;

    /// Output for pixels whose window leaves the raster.
    fn border_value(&self, value: u8) -> u8 {
        value
    }
}
