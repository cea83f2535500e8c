use std::ops::{Index, IndexMut};

use super::{PixelPos, PixelsArea, PixelsIter, MAX_PIXEL_VALUE};


/// Single-channel grid of byte samples.
///
/// Samples hold either intensities (`0..=255`) or bits (`0`/`1`) produced by
/// the thresholding passes; the raster itself does not track which.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn empty_with_size(width: usize, height: usize) -> Self {
        Self::filled_with(width, height, 0)
    }

    pub fn filled_with(width: usize, height: usize, value: u8) -> Self {
        assert!(width > 0 && height > 0, "raster dimensions must be positive, got {}x{}", width, height);
        Raster { width, height, pixels: vec![value; width * height] }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        assert!(width > 0 && height > 0, "raster dimensions must be positive, got {}x{}", width, height);
        assert_eq!(pixels.len(), width * height, "pixels count doesn't match {}x{}", width, height);
        Raster { width, height, pixels }
    }

    pub fn empty_size_of(other: &Raster) -> Self {
        Self::empty_with_size(other.w(), other.h())
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }

    pub fn max_col(&self) -> usize { self.width - 1 }
    pub fn max_row(&self) -> usize { self.height - 1 }

    pub fn fits(&self, pos: PixelPos) -> bool {
        pos.col <= self.max_col() && pos.row <= self.max_row()
    }

    pub fn same_size_as(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn get_area(&self) -> PixelsArea {
        PixelsArea::with_size(self.h(), self.w())
    }

    pub fn get_pixels_iter(&self) -> PixelsIter {
        self.get_area().get_pixels_iter()
    }

    /// Stores `value` clamped into `0..=255`. This is the only place where
    /// an out-of-range operator result gets normalized.
    pub fn set_clamped(&mut self, pos: PixelPos, value: i32) {
        self[pos] = value.max(0).min(MAX_PIXEL_VALUE) as u8;
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get_description(&self) -> String {
        format!("raster {} (rows) x {} (cols)", self.h(), self.w())
    }

    fn check_fits(&self, pos: PixelPos) {
        if !self.fits(pos) {
            panic!("pos is {:?} which doesn't fit into {}, {}", pos, self.max_col(), self.max_row());
        }
    }
}

impl Index<PixelPos> for Raster {
    type Output = u8;

    fn index(&self, index: PixelPos) -> &Self::Output {
        self.check_fits(index);
        &self.pixels[index.row * self.width + index.col]
    }
}

impl IndexMut<PixelPos> for Raster {
    fn index_mut(&mut self, index: PixelPos) -> &mut Self::Output {
        self.check_fits(index);
        &mut self.pixels[index.row * self.width + index.col]
    }
}
