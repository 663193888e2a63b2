//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with a maxval of
//! at most 255. ASCII variants and 16-bit samples are not supported.

use crate::{IoError, IoResult};
use chromaseg_core::{Pix, PixelDepth, color};
use std::io::{BufRead, Read, Write};

/// Read a PNM image (P5/P6) from a reader.
///
/// Returns an 8 bpp `Pix` for P5 and a 32 bpp `Pix` for P6.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    let depth = match &magic {
        b"P5" => PixelDepth::Bit8,
        b"P6" => PixelDepth::Bit32,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {}",
                String::from_utf8_lossy(&magic)
            )));
        }
    };

    let width = read_header_value(&mut reader)?;
    let height = read_header_value(&mut reader)?;
    let maxval = read_header_value(&mut reader)?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    if width == 0 || height == 0 {
        return Err(chromaseg_core::Error::InvalidDimension { width, height }.into());
    }
    let samples: usize = if depth == PixelDepth::Bit8 { 1 } else { 3 };
    let row_len = (width as usize)
        .checked_mul(samples)
        .filter(|n| n.checked_mul(height as usize).is_some())
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM raster {}x{} is too large", width, height))
        })?;

    // Buffers only grow as bytes arrive, so a short stream fails early
    let mut words: Vec<u32> = Vec::new();
    let mut line = Vec::new();
    for y in 0..height {
        line.clear();
        let got = reader.by_ref().take(row_len as u64).read_to_end(&mut line)?;
        if got != row_len {
            return Err(IoError::InvalidData(format!(
                "truncated PNM raster ({}x{}) at row {}: {} of {} bytes",
                width, height, y, got, row_len
            )));
        }
        if samples == 1 {
            words.extend(line.iter().map(|&g| g as u32));
        } else {
            words.extend(
                line.chunks_exact(3)
                    .map(|px| color::compose_rgb(px[0], px[1], px[2])),
            );
        }
    }
    Ok(Pix::from_data(width, height, depth, words)?)
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P5 (8 bpp) or P6 (32 bpp, alpha dropped) based on the depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let magic = match pix.depth() {
        PixelDepth::Bit8 => "P5",
        PixelDepth::Bit32 => "P6",
    };
    write!(writer, "{}\n{} {}\n255\n", magic, pix.width(), pix.height())?;

    let mut raster = Vec::with_capacity(pix.data().len() * 3);
    for &pixel in pix.data() {
        match pix.depth() {
            PixelDepth::Bit8 => raster.push(pixel as u8),
            PixelDepth::Bit32 => {
                let (r, g, b) = color::extract_rgb(pixel);
                raster.extend_from_slice(&[r, g, b]);
            }
        }
    }
    writer.write_all(&raster)?;
    Ok(())
}

/// Read one decimal header field, skipping whitespace and `#` comments.
///
/// Consumes exactly one whitespace byte after the digits, which for the
/// maxval field is the separator before the raster.
fn read_header_value<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    let mut byte = [0u8; 1];

    // Skip whitespace and comments
    loop {
        reader.read_exact(&mut byte)?;
        match byte[0] {
            b'#' => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {}
            _ => break,
        }
    }

    let mut value: u32 = 0;
    loop {
        if !byte[0].is_ascii_digit() {
            return Err(IoError::InvalidData(format!(
                "unexpected byte 0x{:02x} in PNM header",
                byte[0]
            )));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte[0] - b'0') as u32))
            .ok_or_else(|| IoError::InvalidData("PNM header value overflow".to_string()))?;

        reader.read_exact(&mut byte)?;
        if byte[0].is_ascii_whitespace() {
            return Ok(value);
        }
    }
}
