use super::{PixelPos, PixelsIter};


/// Rectangle of pixels, both corners included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelsArea {
    top_left: PixelPos,
    bottom_right: PixelPos
}

impl PixelsArea {
    pub fn new(top_left: PixelPos, bottom_right: PixelPos) -> Self {
        assert!(top_left.row <= bottom_right.row);
        assert!(top_left.col <= bottom_right.col);
        PixelsArea { top_left, bottom_right }
    }

    pub fn with_size(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "area must not be empty");
        PixelsArea::new(
            PixelPos::new(0, 0),
            PixelPos::new(height - 1, width - 1))
    }

    /// Shrinks every side by `margin` pixels, or `None` when nothing is left.
    pub fn apply_margin(self, margin: usize) -> Option<Self> {
        if self.h() <= margin * 2 || self.w() <= margin * 2 {
            return None;
        }

        let offset = PixelPos::new(margin, margin);
        Some(PixelsArea::new(self.top_left + offset, self.bottom_right - offset))
    }

    pub fn contains(&self, pos: PixelPos) -> bool {
        self.top_left.row <= pos.row && pos.row <= self.bottom_right.row
        && self.top_left.col <= pos.col && pos.col <= self.bottom_right.col
    }

    pub fn top_left(&self) -> PixelPos {
        self.top_left
    }
    pub fn bottom_right(&self) -> PixelPos {
        self.bottom_right
    }

    pub fn w(&self) -> usize { self.bottom_right.col - self.top_left.col + 1 }
    pub fn h(&self) -> usize { self.bottom_right.row - self.top_left.row + 1 }

    pub fn get_pixels_iter(&self) -> PixelsIter {
        PixelsIter::for_area(*self)
    }
}
