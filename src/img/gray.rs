use super::Raster;
use super::codec::DecodedImage;


/// Averages every `stride` interleaved channel values into one byte,
/// truncating the mean.
pub fn reduce_to_gray(data: &[u8], width: usize, height: usize, stride: usize) -> Raster {
    assert!(stride > 0, "stride must be positive");
    assert_eq!(data.len(), width * height * stride, "data doesn't hold {}x{}x{} samples", width, height, stride);

    let pixels: Vec<u8> = data
        .chunks_exact(stride)
        .map(|channels| {
            let sum: usize = channels.iter().map(|v| *v as usize).sum();
            (sum / stride) as u8
        })
        .collect();

    Raster::from_pixels(width, height, pixels)
}

impl DecodedImage {
    pub fn to_gray(&self) -> Raster {
        reduce_to_gray(&self.data, self.width, self.height, self.stride)
    }
}
