use crate::img::{PixelPos, Raster};
use crate::img_err::ImgError;
use crate::processing::{DoubleBuffer, ProgressProvider};

use super::filter_option::ParamsList;
use super::filter_trait::Filter;
use super::FilterBase;


/// Per-pixel operator on one sample, parameters bound at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointOp {
    Set { alpha: i32 },
    Brighten { beta: i32 },
    Stretch { gamma: f32, beta: i32 },
    Invert,
    Threshold { threshold: i32 },
    InvertThreshold { threshold: i32 },
    BitDisplay,
    BitInvertDisplay,
    BitNot,
    BitInvert,
}

impl PointOp {
    /// Raw result; clamping happens when it is stored. Sums saturate at the
    /// `i32` bounds instead of overflowing.
    pub fn apply(&self, value: i32) -> i32 {
        match *self {
            PointOp::Set { alpha } => alpha,
            PointOp::Brighten { beta } => value.saturating_add(beta),
            PointOp::Stretch { gamma, beta } =>
                ((value as f32 * gamma).floor() as i32).saturating_add(beta),
            PointOp::Invert => 255 - value,
            PointOp::Threshold { threshold } => if value < threshold { 0 } else { 1 },
            PointOp::InvertThreshold { threshold } => if value < threshold { 1 } else { 0 },
            PointOp::BitDisplay => if value > 0 { 255 } else { 0 },
            PointOp::BitInvertDisplay => if value <= 0 { 255 } else { 0 },
            PointOp::BitNot => if value == 0 { 1 } else { 0 },
            PointOp::BitInvert => 1 - value,
        }
    }

    /// `Ok(None)` when `save_name` is not a point operator.
    pub fn try_parce(save_name: &str, content: &str) -> Result<Option<Self>, ImgError> {
        let expected_len = match save_name {
            "Set" | "Brighten" | "Threshold" | "InvertThreshold" => 1,
            "Stretch" => 2,
            "Invert" | "BitDisplay" | "BitInvertDisplay" | "BitNot" | "BitInvert" => 0,
            _ => return Ok(None),
        };
        let params = ParamsList::try_from_string(save_name, content, expected_len)?;

        let op = match save_name {
            "Set" => PointOp::Set { alpha: params.int(0)? },
            "Brighten" => PointOp::Brighten { beta: params.int(0)? },
            "Stretch" => PointOp::Stretch { gamma: params.float(0)?, beta: params.int(1)? },
            "Invert" => PointOp::Invert,
            "Threshold" => PointOp::Threshold { threshold: params.int(0)? },
            "InvertThreshold" => PointOp::InvertThreshold { threshold: params.int(0)? },
            "BitDisplay" => PointOp::BitDisplay,
            "BitInvertDisplay" => PointOp::BitInvertDisplay,
            "BitNot" => PointOp::BitNot,
            _ => PointOp::BitInvert,
        };

        Ok(Some(op))
    }
}

impl Filter for PointOp {
    fn process(&self, buffers: &mut DoubleBuffer, prog_prov: &mut ProgressProvider) {
        process_point(buffers.active_mut(), self, prog_prov);
    }

    fn get_description(&self) -> String {
        match self.params_to_string() {
            Some(params) => format!("{} ({})", self.get_save_name(), params),
            None => self.get_save_name(),
        }
    }

    fn get_save_name(&self) -> String {
        match self {
            PointOp::Set { .. } => "Set",
            PointOp::Brighten { .. } => "Brighten",
            PointOp::Stretch { .. } => "Stretch",
            PointOp::Invert => "Invert",
            PointOp::Threshold { .. } => "Threshold",
            PointOp::InvertThreshold { .. } => "InvertThreshold",
            PointOp::BitDisplay => "BitDisplay",
            PointOp::BitInvertDisplay => "BitInvertDisplay",
            PointOp::BitNot => "BitNot",
            PointOp::BitInvert => "BitInvert",
        }.to_string()
    }

    fn params_to_string(&self) -> Option<String> {
        match self {
            PointOp::Set { alpha } => Some(alpha.to_string()),
            PointOp::Brighten { beta } => Some(beta.to_string()),
            PointOp::Stretch { gamma, beta } => Some(format!("{}, {}", gamma, beta)),
            PointOp::Threshold { threshold } | PointOp::InvertThreshold { threshold } =>
                Some(threshold.to_string()),
            _ => None,
        }
    }

    fn get_copy(&self) -> FilterBase {
        Box::new(*self) as FilterBase
    }
}


/// Per-pixel operator on two samples; the result lands in the left raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    Copy,
    Add,
    Average,
    LearnedAverage,
    BitAnd,
}

impl CombineOp {
    pub fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        match self {
            CombineOp::Copy => rhs,
            CombineOp::Add => lhs + rhs,
            CombineOp::Average => (lhs + rhs).div_euclid(2),
            // running average, the accumulator weighs 16:1
            CombineOp::LearnedAverage => (lhs * 16 + rhs + 8).div_euclid(16),
            CombineOp::BitAnd => if lhs != 0 && rhs != 0 { 1 } else { 0 },
        }
    }

    pub fn try_parce(save_name: &str, content: &str) -> Result<Option<Self>, ImgError> {
        let op = match save_name {
            "Copy" => CombineOp::Copy,
            "Add" => CombineOp::Add,
            "Average" => CombineOp::Average,
            "LearnedAverage" => CombineOp::LearnedAverage,
            "BitAnd" => CombineOp::BitAnd,
            _ => return Ok(None),
        };
        ParamsList::try_from_string(save_name, content, 0)?;

        Ok(Some(op))
    }
}

/// Combines scratch (left) with active (right) into scratch, then swaps,
/// so the result becomes active.
impl Filter for CombineOp {
    fn process(&self, buffers: &mut DoubleBuffer, prog_prov: &mut ProgressProvider) {
        {
            let (active, scratch) = buffers.split_mut();
            process_combine(scratch, active, self, prog_prov);
        }
        buffers.swap();
    }

    fn get_description(&self) -> String {
        format!("{} (scratch, active)", self.get_save_name())
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


fn process_point(raster: &mut Raster, op: &PointOp, prog_prov: &mut ProgressProvider) {
    for row in 0..raster.h() {
        for col in 0..raster.w() {
            let pos = PixelPos::new(row, col);
            let value = op.apply(raster[pos] as i32);
            raster.set_clamped(pos, value);
        }

        prog_prov.complete_action();
    }
}

fn process_combine(lhs: &mut Raster, rhs: &Raster, op: &CombineOp, prog_prov: &mut ProgressProvider) {
    assert!(lhs.same_size_as(rhs),
        "operands differ in size: {}x{} and {}x{}", lhs.w(), lhs.h(), rhs.w(), rhs.h());

    for row in 0..lhs.h() {
        for col in 0..lhs.w() {
            let pos = PixelPos::new(row, col);
            let value = op.apply(lhs[pos] as i32, rhs[pos] as i32);
            lhs.set_clamped(pos, value);
        }

        prog_prov.complete_action();
    }
}

/// Applies `op` to every pixel of `raster` in place.
pub fn apply_point(raster: &mut Raster, op: &PointOp) {
    let mut prog_prov = ProgressProvider::new(raster.h());
    process_point(raster, op, &mut prog_prov);
}

/// Stores `op(lhs, rhs)` into `lhs` for every pixel. Both rasters must have
/// the same size.
pub fn apply_combine(lhs: &mut Raster, rhs: &Raster, op: &CombineOp) {
    let mut prog_prov = ProgressProvider::new(lhs.h());
    process_combine(lhs, rhs, op, &mut prog_prov);
}
