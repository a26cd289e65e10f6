// SPDX-License-Identifier: GPL-3.0-only

//! Precomputed square sampling patterns
//!
//! An [`OffsetTable`] lists the linear displacements of every pixel in a
//! square around a center, so per-frame code can visit a neighborhood by
//! adding offsets to one index instead of recomputing 2D coordinates.

use super::types::centered_box;
use crate::constants::BYTES_PER_PIXEL;
use crate::errors::ConfigurationError;

/// Unit the offsets are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    /// Index into a one-sample-per-pixel buffer (depth)
    Pixel,
    /// Index into a packed BGRA buffer (pixel offset x 4)
    Byte,
}

/// Read-only list of linear offsets describing a square pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    offsets: Vec<isize>,
    unit: OffsetUnit,
}

impl OffsetTable {
    /// Offsets of the square of `size` pixels around a center, row-major
    ///
    /// `stride` is the frame width in pixels. The table length is that of
    /// [`centered_box`], i.e. `(2 * floor(sqrt(size) / 2) + 1)^2`, which is
    /// `size` itself for perfect odd squares.
    pub fn square(
        size: usize,
        stride: usize,
        unit: OffsetUnit,
    ) -> Result<Self, ConfigurationError> {
        if size % 2 == 0 {
            return Err(ConfigurationError::EvenSquareSize(size));
        }

        let area_box = centered_box(size);
        let side = (area_box.extent.x - area_box.origin.x + 1) as usize;
        let scale = match unit {
            OffsetUnit::Pixel => 1,
            OffsetUnit::Byte => BYTES_PER_PIXEL as isize,
        };

        let mut offsets = Vec::with_capacity(side * side);
        for y in area_box.origin.y..=area_box.extent.y {
            for x in area_box.origin.x..=area_box.extent.x {
                offsets.push((x as isize + y as isize * stride as isize) * scale);
            }
        }

        Ok(Self { offsets, unit })
    }

    /// Same pattern addressing a packed BGRA buffer
    pub fn to_byte_offsets(&self) -> Self {
        match self.unit {
            OffsetUnit::Byte => self.clone(),
            OffsetUnit::Pixel => Self {
                offsets: self
                    .offsets
                    .iter()
                    .map(|offset| offset * BYTES_PER_PIXEL as isize)
                    .collect(),
                unit: OffsetUnit::Byte,
            },
        }
    }

    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.offsets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, isize> {
        self.offsets.iter()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<'a> IntoIterator for &'a OffsetTable {
    type Item = &'a isize;
    type IntoIter = std::slice::Iter<'a, isize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Apply a signed offset to a base index, keeping the result below `len`
#[inline]
pub fn offset_index(base: usize, offset: isize, len: usize) -> Option<usize> {
    base.checked_add_signed(offset).filter(|&index| index < len)
}
