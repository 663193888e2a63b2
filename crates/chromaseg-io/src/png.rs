//! PNG support
//!
//! The decoder expands palettes and low-bit gray and strips 16-bit samples
//! to 8 bits, so every input ends up as 8 bpp gray or 32 bpp color.

use crate::{IoError, IoResult};
use chromaseg_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

fn decode_error(e: png::DecodingError) -> IoError {
    IoError::DecodeError(format!("PNG: {}", e))
}

fn encode_error(e: png::EncodingError) -> IoError {
    IoError::EncodeError(format!("PNG: {}", e))
}

fn pack_gray(p: &[u8]) -> u32 {
    p[0] as u32
}

fn pack_gray_alpha(p: &[u8]) -> u32 {
    color::compose_rgba(p[0], p[0], p[0], p[1])
}

fn pack_rgb(p: &[u8]) -> u32 {
    color::compose_rgb(p[0], p[1], p[2])
}

fn pack_rgba(p: &[u8]) -> u32 {
    color::compose_rgba(p[0], p[1], p[2], p[3])
}

/// Decode a PNG stream.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_error)?;

    let (width, height) = (reader.info().width, reader.info().height);
    let (color_type, _) = reader.output_color_type();
    let (depth, spp, pack): (PixelDepth, u32, fn(&[u8]) -> u32) = match color_type {
        ColorType::Grayscale => (PixelDepth::Bit8, 1, pack_gray),
        ColorType::GrayscaleAlpha => (PixelDepth::Bit32, 4, pack_gray_alpha),
        ColorType::Rgb => (PixelDepth::Bit32, 3, pack_rgb),
        ColorType::Rgba => (PixelDepth::Bit32, 4, pack_rgba),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG color type {:?} after expansion",
                other
            )));
        }
    };

    let size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG: frame too large".to_string()))?;
    let mut buf = vec![0u8; size];
    let frame = reader.next_frame(&mut buf).map_err(decode_error)?;

    let mut pm = Pix::new(width, height, depth)?.to_mut();
    pm.set_spp(spp);
    let samples = color_type.samples();
    let lines = buf[..frame.buffer_size()].chunks_exact(frame.line_size);
    for (y, line) in (0..height).zip(lines) {
        for (dst, px) in pm.row_data_mut(y).iter_mut().zip(line.chunks_exact(samples)) {
            *dst = pack(px);
        }
    }
    Ok(pm.into())
}

/// Encode a `Pix` as 8-bit PNG.
///
/// Gray images become gray PNGs. Color images become RGB, or RGBA when
/// they carry an alpha channel (`spp == 4`).
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let color_type = match pix.depth() {
        PixelDepth::Bit8 => ColorType::Grayscale,
        PixelDepth::Bit32 if pix.spp() == 4 => ColorType::Rgba,
        PixelDepth::Bit32 => ColorType::Rgb,
    };

    let mut raster = Vec::with_capacity(pix.data().len() * color_type.samples());
    for &pixel in pix.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        match color_type {
            ColorType::Grayscale => raster.push(pixel as u8),
            ColorType::Rgb => raster.extend_from_slice(&[r, g, b]),
            _ => raster.extend_from_slice(&[r, g, b, a]),
        }
    }

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(encode_error)?;
    writer.write_image_data(&raster).map_err(encode_error)?;
    writer.finish().map_err(encode_error)?;
    Ok(())
}
