//! PNG decoding/encoding plus grayscale JPEG export.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::img_err::ImgError;
use super::Raster;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const JPEG_QUALITY: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
    Indexed,
}

impl ColorKind {
    fn from_png(color_type: png::ColorType) -> Self {
        match color_type {
            png::ColorType::Grayscale => ColorKind::Gray,
            png::ColorType::GrayscaleAlpha => ColorKind::GrayAlpha,
            png::ColorType::Rgb => ColorKind::Rgb,
            png::ColorType::Rgba => ColorKind::Rgba,
            png::ColorType::Indexed => ColorKind::Indexed,
        }
    }

    /// Bytes per delivered pixel; a palette pixel is its index byte.
    pub fn stride(&self) -> usize {
        match self {
            ColorKind::Gray | ColorKind::Indexed => 1,
            ColorKind::GrayAlpha => 2,
            ColorKind::Rgb => 3,
            ColorKind::Rgba => 4,
        }
    }
}

fn bit_depth_to_u8(depth: png::BitDepth) -> u8 {
    match depth {
        png::BitDepth::One => 1,
        png::BitDepth::Two => 2,
        png::BitDepth::Four => 4,
        png::BitDepth::Eight => 8,
        png::BitDepth::Sixteen => 16,
    }
}

/// Interleaved 8-bit samples as delivered by the decoder.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    /// Color kind stored in the file.
    pub source_color: ColorKind,
    /// Color kind of `data`; `Indexed` data holds palette indices.
    pub color: ColorKind,
    pub source_bit_depth: u8,
    pub bit_depth: u8,
    pub stride: usize,
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn get_description(&self) -> String {
        format!(
            "{}x{} {:?} ({:?} {}-bit in file), stride {}",
            self.width, self.height, self.color, self.source_color, self.source_bit_depth, self.stride)
    }
}

/// Decodes a PNG from `reader`; `source_name` only labels errors.
///
/// Gray and color images are expanded to 8-bit samples. Palette images keep
/// one index byte per pixel.
pub fn decode_png<R: Read>(mut reader: R, source_name: &str) -> Result<DecodedImage, ImgError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(png::DecodingError::from)?;

    if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(ImgError::NotPng { source_name: source_name.to_string() });
    }

    let (source_color, source_bit_depth) = {
        let header_reader = png::Decoder::new(&bytes[..]).read_info()?;
        let info = header_reader.info();
        (ColorKind::from_png(info.color_type), info.bit_depth)
    };

    let transformations = match source_color {
        ColorKind::Indexed => png::Transformations::IDENTITY,
        _ => png::Transformations::EXPAND | png::Transformations::STRIP_16,
    };

    let mut decoder = png::Decoder::new(&bytes[..]);
    decoder.set_transformations(transformations);
    let mut png_reader = decoder.read_info()?;

    let mut raw = vec![0_u8; png_reader.output_buffer_size()];
    let frame = png_reader.next_frame(&mut raw)?;
    raw.truncate(frame.buffer_size());

    let width = frame.width as usize;
    let (data, bit_depth) = match frame.bit_depth {
        png::BitDepth::One | png::BitDepth::Two | png::BitDepth::Four => {
            let bits = bit_depth_to_u8(frame.bit_depth) as usize;
            (unpack_samples(&raw, width, frame.line_size, bits), 8)
        }
        depth => (raw, bit_depth_to_u8(depth)),
    };

    let color = ColorKind::from_png(frame.color_type);

    Ok(DecodedImage {
        width,
        height: frame.height as usize,
        source_color,
        color,
        source_bit_depth: bit_depth_to_u8(source_bit_depth),
        bit_depth,
        stride: color.stride(),
        data,
    })
}

/// Spreads packed sub-byte samples, most significant bits first, into one
/// byte each.
fn unpack_samples(raw: &[u8], width: usize, line_size: usize, bits: usize) -> Vec<u8> {
    let mask = (1_u8 << bits) - 1;
    let mut data = Vec::with_capacity(width * (raw.len() / line_size));

    for line in raw.chunks(line_size) {
        for col in 0..width {
            let bit_offset = col * bits;
            let shift = 8 - bits - bit_offset % 8;
            data.push((line[bit_offset / 8] >> shift) & mask);
        }
    }

    data
}

pub fn load_png(path: &Path) -> Result<DecodedImage, ImgError> {
    let file = File::open(path).map_err(|source| ImgError::FileOpen {
        path: path.display().to_string(),
        source,
    })?;

    let image = decode_png(BufReader::new(file), &path.display().to_string())?;
    info!("loaded {}: {}", path.display(), image.get_description());

    Ok(image)
}

/// Writes `raster` as an 8-bit grayscale PNG.
pub fn encode_png<W: Write>(raster: &Raster, writer: W) -> Result<(), ImgError> {
    let mut encoder = png::Encoder::new(writer, raster.w() as u32, raster.h() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(raster.pixels())?;
    png_writer.finish()?;

    Ok(())
}

fn encode_jpeg(raster: &Raster, path: &Path) -> Result<(), ImgError> {
    use jpeg_encoder::{ColorType, Encoder};

    if raster.w() > u16::MAX as usize || raster.h() > u16::MAX as usize {
        return Err(ImgError::Encode(format!("{} is too large for JPEG", raster.get_description())));
    }

    let encoder = Encoder::new_file(path, JPEG_QUALITY)
        .map_err(|err| ImgError::Encode(err.to_string()))?;
    encoder.encode(raster.pixels(), raster.w() as u16, raster.h() as u16, ColorType::Luma)
        .map_err(|err| ImgError::Encode(err.to_string()))?;

    Ok(())
}

impl Raster {
    /// Saves as grayscale JPEG for `.jpg`/`.jpeg` paths, PNG otherwise.
    pub fn try_save(&self, path: &Path) -> Result<(), ImgError> {
        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
            .unwrap_or(false);

        if is_jpeg {
            encode_jpeg(self, path)?;
        } else {
            let file = File::create(path).map_err(|source| ImgError::FileOpen {
                path: path.display().to_string(),
                source,
            })?;
            encode_png(self, BufWriter::new(file))?;
        }

        info!("saved {} to {}", self.get_description(), path.display());
        Ok(())
    }
}
