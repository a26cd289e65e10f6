// SPDX-License-Identifier: GPL-3.0-only

//! Focus region tiling
//!
//! The focus region is a large square around a focal point. It is split into
//! equal square focus parts so each part can be analyzed on its own.

use super::offsets::{OffsetTable, OffsetUnit, offset_index};
use crate::constants::BYTES_PER_PIXEL;
use crate::errors::ConfigurationError;

/// One tile of the focus region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusPart {
    /// Row-major tile number within the region
    pub index: usize,
    /// Frame-wide pixel offsets of this tile's pixels, relative to the
    /// region center
    offsets: Vec<isize>,
    /// BGRA copy of the tile, filled by [`FocusPart::capture`]
    pixels: Vec<u8>,
}

impl FocusPart {
    fn new(index: usize, area: usize) -> Self {
        Self {
            index,
            offsets: vec![0; area],
            pixels: vec![0; area * BYTES_PER_PIXEL],
        }
    }

    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy this tile's pixels out of a BGRA frame
    ///
    /// `center_byte` is the byte index of the region center. Pixels that fall
    /// outside the frame are stored as zero.
    pub fn capture(&mut self, color: &[u8], center_byte: usize) {
        for (slot, &offset) in self.offsets.iter().enumerate() {
            let dst = &mut self.pixels[slot * BYTES_PER_PIXEL..(slot + 1) * BYTES_PER_PIXEL];
            let src = offset_index(center_byte, offset * BYTES_PER_PIXEL as isize, color.len())
                .filter(|&start| start + BYTES_PER_PIXEL <= color.len());
            match src {
                Some(start) => dst.copy_from_slice(&color[start..start + BYTES_PER_PIXEL]),
                None => dst.fill(0),
            }
        }
    }
}

/// Split the square focus region into `part_width`-sided parts
///
/// Every region offset lands in exactly one part: tile `(col, row)` of its
/// region coordinate, at slot `i mod part_area` of its region index `i`.
/// `stride` is the frame width in pixels. Both widths must be odd.
pub fn build_focus_parts(
    region_width: usize,
    part_width: usize,
    stride: usize,
) -> Result<Vec<FocusPart>, ConfigurationError> {
    if let Some(&width) = [part_width, region_width].iter().find(|&&w| w % 2 == 0) {
        return Err(ConfigurationError::EvenFocusWidth(width));
    }
    if region_width % part_width != 0 {
        return Err(ConfigurationError::IndivisibleRegion {
            region_width,
            part_width,
        });
    }

    let region = OffsetTable::square(region_width * region_width, stride, OffsetUnit::Pixel)?;
    let part_area = part_width * part_width;
    let parts_per_row = region_width / part_width;

    let mut parts: Vec<FocusPart> = (0..parts_per_row * parts_per_row)
        .map(|index| FocusPart::new(index, part_area))
        .collect();

    for (i, &offset) in region.iter().enumerate() {
        let (x, y) = (i % region_width, i / region_width);
        let (col, row) = (x / part_width, y / part_width);
        let part = col + row * parts_per_row;
        parts[part].offsets[i % part_area] = offset;
    }

    Ok(parts)
}
