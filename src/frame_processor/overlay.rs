// SPDX-License-Identifier: GPL-3.0-only

//! Diagnostic markers painted into the BGRA output frame

use super::offsets::{OffsetTable, offset_index};
use crate::config::ProcessorConfig;
use crate::constants::{BYTES_PER_PIXEL, channel};

/// Fixed marker colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Green,
    Blue,
}

impl MarkerColor {
    /// Look up a marker by its numeric code (1 = red, 2 = green, 3 = blue)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            _ => None,
        }
    }

    /// Blue, green and red channel values in buffer order
    pub fn bgr(&self) -> [u8; 3] {
        match self {
            Self::Red => [0, 0, 255],
            Self::Green => [0, 255, 0],
            Self::Blue => [255, 0, 0],
        }
    }
}

#[inline]
fn paint(output: &mut [u8], byte: usize, color: MarkerColor) {
    let [b, g, r] = color.bgr();
    output[byte + channel::BLUE] = b;
    output[byte + channel::GREEN] = g;
    output[byte + channel::RED] = r;
}

/// Mark every intersection of the sampling grid in blue
///
/// A zero sample gap marks every pixel.
pub fn overlay_sample_grid(output: &mut [u8], config: &ProcessorConfig) {
    let gap = config.sample_gap.max(1);
    for y in (0..config.frame_height).step_by(gap) {
        for x in (0..config.frame_width).step_by(gap) {
            let byte = (y * config.frame_width + x) * BYTES_PER_PIXEL;
            if byte + BYTES_PER_PIXEL <= output.len() {
                paint(output, byte, MarkerColor::Blue);
            }
        }
    }
}

/// Paint a marker around the focal byte offset
///
/// `byte_offsets` must be byte-scaled. Pixels that would land outside the
/// buffer are skipped.
pub fn overlay_focal_point(
    output: &mut [u8],
    center_byte: usize,
    byte_offsets: &OffsetTable,
    color: MarkerColor,
) {
    for &offset in byte_offsets {
        if let Some(byte) = offset_index(center_byte, offset, output.len())
            .filter(|&byte| byte + BYTES_PER_PIXEL <= output.len())
        {
            paint(output, byte, color);
        }
    }
}
