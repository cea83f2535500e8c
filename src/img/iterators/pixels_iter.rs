use super::{PixelPos, PixelsArea};

/// Row-major walk over every position of an area.
pub struct PixelsIter {
    area: PixelsArea,
    cur_pos: PixelPos,
}

impl PixelsIter {
    pub fn for_area(area: PixelsArea) -> Self {
        PixelsIter {
            area,
            cur_pos: area.top_left(),
        }
    }
}

impl Iterator for PixelsIter {
    type Item = PixelPos;

    fn next(&mut self) -> Option<PixelPos> {
        let curr = self.cur_pos;

        self.cur_pos.col += 1;

        if self.cur_pos.col > self.area.bottom_right().col {
            self.cur_pos.col = self.area.top_left().col;
            self.cur_pos.row += 1;
        }

        if self.area.contains(curr) {
            Some(curr)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PixelsIter;
    use crate::img::{PixelPos, PixelsArea};

    #[test]
    fn for_area() {
        let area = PixelsArea::new(PixelPos::new(1, 2), PixelPos::new(3, 5));

        let iter = PixelsIter::for_area(area);
        assert_eq!(iter.area, area);
        assert_eq!(iter.cur_pos, area.top_left());
    }

    #[test]
    fn walks_rows_left_to_right() {
        let area = PixelsArea::new(PixelPos::new(1, 2), PixelPos::new(2, 4));

        let mut iter = area.get_pixels_iter();

        assert_eq!(iter.next(), Some(PixelPos::new(1, 2)));
        assert_eq!(iter.next(), Some(PixelPos::new(1, 3)));
        assert_eq!(iter.next(), Some(PixelPos::new(1, 4)));

        assert_eq!(iter.next(), Some(PixelPos::new(2, 2)));
        assert_eq!(iter.next(), Some(PixelPos::new(2, 3)));
        assert_eq!(iter.next(), Some(PixelPos::new(2, 4)));

        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
