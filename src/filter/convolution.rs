use crate::img::MAX_PIXEL_VALUE;
use crate::img_err::ImgError;
use crate::processing::{DoubleBuffer, ProgressProvider};

use super::filter_option::{NormalizeOption, ParamsList};
use super::filter_trait::*;
use super::{process_with_window, FilterBase};


/// Linear 3x3 filter: the floored weighted sum of the window.
///
/// Results are clamped into `0..=255` before they are stored, so a kernel
/// with large or negative weights saturates instead of wrapping. The
/// fixed-rule `WindowOp`s store their result as is. Border pixels are copied
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Convolution {
    coeffs: [f32; WINDOW_LEN],
}

impl Convolution {
    /// `coeffs` are row-major, top row first. Anything but 9 of them is a
    /// programming error.
    pub fn with_coeffs(mut coeffs: Vec<f32>, normalized: NormalizeOption) -> Self {
        assert_eq!(coeffs.len(), WINDOW_LEN, "3x3 kernel needs {} coefficients", WINDOW_LEN);

        normalized.normalize(&mut coeffs[..]);

        let mut kernel = [0_f32; WINDOW_LEN];
        kernel.copy_from_slice(&coeffs);
        Convolution { coeffs: kernel }
    }

    pub fn mean() -> Self {
        Convolution { coeffs: [1.0 / 9.0; WINDOW_LEN] }
    }

    pub fn coeffs(&self) -> &[f32; WINDOW_LEN] {
        &self.coeffs
    }

    pub fn try_parce(save_name: &str, content: &str) -> Result<Option<Self>, ImgError> {
        let normalized = match save_name {
            "Convolve" => NormalizeOption::NotNormalized,
            "ConvolveNormalized" => NormalizeOption::Normalized,
            _ => return Ok(None),
        };
        let params = ParamsList::try_from_string(save_name, content, WINDOW_LEN)?;

        let mut coeffs = Vec::<f32>::with_capacity(WINDOW_LEN);
        for ind in 0..params.len() {
            coeffs.push(params.float(ind)?);
        }

        Ok(Some(Convolution::with_coeffs(coeffs, normalized)))
    }
}

impl WindowFilter for Convolution {
    fn process_window(&self, window: &[u8; WINDOW_LEN]) -> u8 {
        let mut sum = 0_f32;

        for (value, coeff) in window.iter().zip(self.coeffs.iter()) {
            sum += *value as f32 * coeff;
        }

        (sum.floor() as i32).max(0).min(MAX_PIXEL_VALUE) as u8
    }
}

impl Filter for Convolution {
    fn process(&self, buffers: &mut DoubleBuffer, prog_prov: &mut ProgressProvider) {
        {
            let (active, scratch) = buffers.split_mut();
            process_with_window(active, scratch, self, prog_prov);
        }
        buffers.swap();
    }

    fn get_description(&self) -> String {
        format!("{} {}x{}", self.get_save_name(), WINDOW_SIZE, WINDOW_SIZE)
    }

    fn get_save_name(&self) -> String {
        "Convolve".to_string()
    }

    fn params_to_string(&self) -> Option<String> {
        let coeffs: Vec<String> = self.coeffs.iter().map(|c| c.to_string()).collect();
        Some(coeffs.join(", "))
    }

    fn get_copy(&self) -> FilterBase {
        Box::new(self.clone()) as FilterBase
    }
}
