use crate::img::Raster;
use crate::img_err::ImgError;
use crate::processing::{DoubleBuffer, ProgressProvider};

use super::filter_option::ParamsList;
use super::filter_trait::*;
use super::{process_with_window, FilterBase};


/// Fixed-rule 3x3 operators over bit rasters. Each compares the sum of the
/// eight neighbours (center excluded) against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOp {
    /// Clears pixels whose neighbourhood is not fully set.
    Shrink,
    /// Sets pixels with at least one set neighbour.
    Expand,
    /// Clears fully surrounded pixels; the border becomes 0.
    Edge,
    /// Sets fully surrounded pixels.
    Salt,
    /// Clears fully surrounded pixels. Same rule as `Edge` inside the
    /// raster, meant for a different input; keep both.
    Pepper,
    Noise,
    /// Looser `Noise`: below 2 set neighbours clears, above 6 sets.
    Noize,
}

fn neighbours_sum(window: &[u8; WINDOW_LEN]) -> u32 {
    window
        .iter()
        .enumerate()
        .filter(|(ind, _)| *ind != WINDOW_CENTER)
        .map(|(_, v)| *v as u32)
        .sum()
}

impl WindowFilter for WindowOp {
    fn process_window(&self, window: &[u8; WINDOW_LEN]) -> u8 {
        let center = window[WINDOW_CENTER];
        let sigma = neighbours_sum(window);

        match self {
            WindowOp::Shrink => if sigma < 8 { 0 } else { center },
            WindowOp::Expand => if sigma > 0 { 1 } else { center },
            WindowOp::Edge | WindowOp::Pepper => if sigma == 8 { 0 } else { center },
            WindowOp::Salt => if sigma == 8 { 1 } else { center },
            WindowOp::Noise => match sigma {
                0 => 0,
                8 => 1,
                _ => center,
            },
            WindowOp::Noize => {
                if sigma < 2 {
                    0
                } else if sigma > 6 {
                    1
                } else {
                    center
                }
            }
        }
    }

    fn border_value(&self, value: u8) -> u8 {
        match self {
            WindowOp::Edge => 0,
            _ => value,
        }
    }
}

impl WindowOp {
    pub const ALL: [WindowOp; 7] = [
        WindowOp::Shrink,
        WindowOp::Expand,
        WindowOp::Edge,
        WindowOp::Salt,
        WindowOp::Pepper,
        WindowOp::Noise,
        WindowOp::Noize,
    ];

    pub fn try_parce(save_name: &str, content: &str) -> Result<Option<Self>, ImgError> {
        let op = match WindowOp::ALL.iter().find(|op| op.get_save_name() == save_name) {
            Some(op) => *op,
            None => return Ok(None),
        };
        ParamsList::try_from_string(save_name, content, 0)?;

        Ok(Some(op))
    }
}

impl Filter for WindowOp {
    fn process(&self, buffers: &mut DoubleBuffer, prog_prov: &mut ProgressProvider) {
        {
            let (active, scratch) = buffers.split_mut();
            process_with_window(active, scratch, self, prog_prov);
        }
        buffers.swap();
    }

    fn get_description(&self) -> String {
        self.get_save_name()
    }

    fn get_save_name(&self) -> String {
        format!("{:?}", self)
    }

    fn params_to_string(&self) -> Option<String> {
        None
    }

    fn get_copy(&self) -> FilterBase {
        Box::new(*self) as FilterBase
    }
}

/// Runs `op` over `src` and returns the result as a new raster.
pub fn apply_window(src: &Raster, op: &WindowOp) -> Raster {
    let mut dest = Raster::empty_size_of(src);
    let mut prog_prov = ProgressProvider::new(src.h());
    process_with_window(src, &mut dest, op, &mut prog_prov);
    dest
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::img::PixelPos;

    fn bits(width: usize, height: usize, rows: &[u8]) -> Raster {
        Raster::from_pixels(width, height, rows.to_vec())
    }

    fn window_with(center: u8, set_neighbours: usize) -> [u8; WINDOW_LEN] {
        let mut window = [0_u8; WINDOW_LEN];
        let mut left = set_neighbours;
        for (ind, v) in window.iter_mut().enumerate() {
            if ind == WINDOW_CENTER {
                *v = center;
            } else if left > 0 {
                *v = 1;
                left -= 1;
            }
        }
        window
    }

    #[test]
    fn rules_by_neighbours_count() {
        for sigma in 0..=8 {
            for center in 0..=1_u8 {
                let window = window_with(center, sigma);
                assert_eq!(neighbours_sum(&window), sigma as u32);

                let shrink = if sigma < 8 { 0 } else { center };
                let expand = if sigma > 0 { 1 } else { center };
                let full_clear = if sigma == 8 { 0 } else { center };
                let salt = if sigma == 8 { 1 } else { center };
                let noise = match sigma { 0 => 0, 8 => 1, _ => center };
                let noize = if sigma < 2 { 0 } else if sigma > 6 { 1 } else { center };

                assert_eq!(WindowOp::Shrink.process_window(&window), shrink);
                assert_eq!(WindowOp::Expand.process_window(&window), expand);
                assert_eq!(WindowOp::Edge.process_window(&window), full_clear);
                assert_eq!(WindowOp::Pepper.process_window(&window), full_clear);
                assert_eq!(WindowOp::Salt.process_window(&window), salt);
                assert_eq!(WindowOp::Noise.process_window(&window), noise);
                assert_eq!(WindowOp::Noize.process_window(&window), noize);
            }
        }
    }

    #[test]
    fn shrink_keeps_center_of_3x3_ones() {
        let ones = Raster::filled_with(3, 3, 1);
        let res = apply_window(&ones, &WindowOp::Shrink);
        assert_eq!(res, ones);

        let mut holed = ones.clone();
        holed[PixelPos::new(2, 1)] = 0;
        let res = apply_window(&holed, &WindowOp::Shrink);
        assert_eq!(res[PixelPos::new(1, 1)], 0);
        assert_eq!(res[PixelPos::new(2, 1)], 0);
        assert_eq!(res.pixels().iter().filter(|v| **v == 0).count(), 2);
    }

    #[test]
    fn shrink_5x5() {
        let ones = Raster::filled_with(5, 5, 1);
        assert_eq!(apply_window(&ones, &WindowOp::Shrink), ones);

        // a corner hole is seen by (1, 1) alone
        let mut holed = ones.clone();
        holed[PixelPos::new(0, 0)] = 0;
        let res = apply_window(&holed, &WindowOp::Shrink);

        let mut expected = holed.clone();
        expected[PixelPos::new(1, 1)] = 0;
        assert_eq!(res, expected);
    }

    #[test]
    fn shrink_hole_inside() {
        let mut src = Raster::filled_with(5, 5, 1);
        src[PixelPos::new(1, 1)] = 0;
        let res = apply_window(&src, &WindowOp::Shrink);

        assert_eq!(res, bits(5, 5, &[
            1, 1, 1, 1, 1,
            1, 0, 0, 1, 1,
            1, 0, 0, 1, 1,
            1, 1, 1, 1, 1,
            1, 1, 1, 1, 1,
        ]));
    }

    #[test]
    fn one_hole_among_full_neighbours() {
        let mut src = Raster::filled_with(5, 5, 1);
        src[PixelPos::new(0, 2)] = 0;
        let res = apply_window(&src, &WindowOp::Shrink);

        // the hole sits on the border: it stays, and only (1, 1)..(1, 3) see it
        let mut expected = src.clone();
        expected[PixelPos::new(1, 1)] = 0;
        expected[PixelPos::new(1, 2)] = 0;
        expected[PixelPos::new(1, 3)] = 0;
        assert_eq!(res, expected);
    }

    #[test]
    fn border_policy() {
        let src = bits(4, 4, &[
            1, 0, 1, 1,
            0, 1, 1, 0,
            1, 1, 0, 1,
            1, 0, 1, 1,
        ]);
        let inner = src.get_area().apply_margin(1).unwrap();

        for op in WindowOp::ALL.iter() {
            let res = apply_window(&src, op);
            for pos in src.get_pixels_iter().filter(|pos| !inner.contains(*pos)) {
                let expected = if *op == WindowOp::Edge { 0 } else { src[pos] };
                assert_eq!(res[pos], expected, "{:?} at {:?}", op, pos);
            }
        }
    }

    #[test]
    fn edge_and_pepper_agree_inside() {
        let src = bits(6, 5, &[
            1, 1, 1, 1, 0, 0,
            1, 1, 1, 1, 0, 1,
            1, 1, 1, 1, 1, 1,
            0, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1,
        ]);
        let edge = apply_window(&src, &WindowOp::Edge);
        let pepper = apply_window(&src, &WindowOp::Pepper);
        let inner = src.get_area().apply_margin(1).unwrap();

        for pos in inner.get_pixels_iter() {
            assert_eq!(edge[pos], pepper[pos]);
        }
        // fully surrounded cells are cleared by both
        assert_eq!(edge[PixelPos::new(1, 1)], 0);
        assert_eq!(pepper[PixelPos::new(3, 3)], 0);
    }

    #[test]
    fn edge_and_pepper_identical_on_interior_only_input() {
        // all border pixels zero: Edge's border rule changes nothing
        let src = bits(5, 5, &[
            0, 0, 0, 0, 0,
            0, 1, 1, 1, 0,
            0, 1, 1, 1, 0,
            0, 1, 1, 1, 0,
            0, 0, 0, 0, 0,
        ]);
        assert_eq!(apply_window(&src, &WindowOp::Edge), apply_window(&src, &WindowOp::Pepper));
    }

    fn block(size: usize, from: usize, to: usize) -> Raster {
        let mut raster = Raster::empty_with_size(size, size);
        for row in from..=to {
            for col in from..=to {
                raster[PixelPos::new(row, col)] = 1;
            }
        }
        raster
    }

    #[test]
    fn shrink_then_expand_near_solid_block() {
        let src = block(7, 2, 4);

        let opened = apply_window(&apply_window(&src, &WindowOp::Shrink), &WindowOp::Expand);
        let closed = apply_window(&apply_window(&src, &WindowOp::Expand), &WindowOp::Shrink);
        assert_eq!(opened[PixelPos::new(3, 3)], 1);
        assert_eq!(closed[PixelPos::new(3, 3)], 1);
        assert_eq!(opened, src);
        assert_eq!(closed, src);
    }

    #[test]
    fn shrink_then_expand_is_not_idempotent_at_border() {
        // the block touches the raster border, which shrink passes through,
        // so expand regrows from the border past the block's edge
        let src = block(5, 0, 2);

        let opened = apply_window(&apply_window(&src, &WindowOp::Shrink), &WindowOp::Expand);
        assert_eq!(opened[PixelPos::new(1, 1)], 1);
        assert_eq!(src[PixelPos::new(1, 3)], 0);
        assert_eq!(opened[PixelPos::new(1, 3)], 1);
        assert_eq!(opened[PixelPos::new(3, 1)], 1);
        assert_ne!(opened, src);
    }

    #[test]
    fn parce() {
        assert_eq!(WindowOp::try_parce("Noize", "").unwrap(), Some(WindowOp::Noize));
        assert_eq!(WindowOp::try_parce("Threshold", "1").unwrap(), None);
        assert!(WindowOp::try_parce("Edge", "1").is_err());
    }
}
