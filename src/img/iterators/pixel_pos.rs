use std::ops::{Add, Sub};

/// Raster coordinate; `row` grows downwards, `col` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPos { pub row: usize, pub col: usize }

impl PixelPos {
    pub fn new(row: usize, col: usize) -> Self {
        PixelPos { row, col }
    }

    /// Offset of a 3x3 window center from its top left corner.
    pub fn one() -> Self {
        PixelPos::new(1, 1)
    }
}

impl Add for PixelPos {
    type Output = PixelPos;

    fn add(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Panics in debug builds when either coordinate would go below 0.
impl Sub for PixelPos {
    type Output = PixelPos;

    fn sub(self, rhs: Self) -> Self::Output {
        PixelPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::PixelPos;

    #[test]
    fn window_offsets() {
        let center = PixelPos::new(4, 7);
        let top_left = center - PixelPos::one();

        assert_eq!(top_left, PixelPos::new(3, 6));
        assert_eq!(top_left + PixelPos::new(2, 2), PixelPos::new(5, 8));
        assert_eq!(top_left + PixelPos::one(), center);
        assert_eq!(PixelPos::default(), PixelPos::new(0, 0));
    }
}
