// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{
    BYTES_PER_PIXEL, FOCUS_PART_WIDTH, FOCUS_REGION_WIDTH, FRAME_HEIGHT, FRAME_WIDTH, SAMPLE_GAP,
};
use crate::errors::ConfigurationError;
use crate::frame_processor::types::{Point, Rectangle};
use serde::{Deserialize, Serialize};

/// Fixed frame and sampling configuration of one processor
///
/// Validated once when a processor is constructed; never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Frame width in pixels
    pub frame_width: usize,
    /// Frame height in pixels
    pub frame_height: usize,
    /// Row/column stride of every frame scan
    pub sample_gap: usize,
    /// Side of one focus part, also the focal marker size
    pub focus_part_width: usize,
    /// Side of the focus region
    pub focus_region_width: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            sample_gap: SAMPLE_GAP,
            focus_part_width: FOCUS_PART_WIDTH,
            focus_region_width: FOCUS_REGION_WIDTH,
        }
    }
}

impl ProcessorConfig {
    /// Check every geometric constraint the processing code relies on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let (width, height) = (self.frame_width, self.frame_height);
        if width == 0
            || height == 0
            || width % 2 != 0
            || height % 2 != 0
            || i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
        {
            return Err(ConfigurationError::FrameDimensions { width, height });
        }

        if self.sample_gap == 0 {
            return Err(ConfigurationError::ZeroSampleGap);
        }

        for focus_width in [self.focus_part_width, self.focus_region_width] {
            if focus_width % 2 == 0 {
                return Err(ConfigurationError::EvenFocusWidth(focus_width));
            }
        }

        let region_width = self.focus_region_width;
        let part_width = self.focus_part_width;
        if region_width % part_width != 0 {
            return Err(ConfigurationError::IndivisibleRegion {
                region_width,
                part_width,
            });
        }

        // Slot `i mod part_area` is a bijection per part only when the part
        // count per row shares no factor with the part width.
        if gcd(region_width / part_width, part_width) != 1 {
            return Err(ConfigurationError::SlotCollision {
                region_width,
                part_width,
            });
        }

        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.frame_width * self.frame_height
    }

    pub fn byte_count(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    /// Length of the 2x2 downsampled color buffer
    pub fn compressed_len(&self) -> usize {
        self.pixel_count() / 4
    }

    /// Geometric center of the frame
    pub fn frame_center(&self) -> Point {
        Point::new((self.frame_width / 2) as i32, (self.frame_height / 2) as i32)
    }

    /// Window covering the whole frame when centered on [`Self::frame_center`]
    pub fn full_frame_window(&self) -> Rectangle {
        let center = self.frame_center();
        Rectangle::new(Point::new(-center.x, -center.y), center)
    }

    pub fn focus_part_area(&self) -> usize {
        self.focus_part_width * self.focus_part_width
    }

    pub fn focus_region_area(&self) -> usize {
        self.focus_region_width * self.focus_region_width
    }

    /// Number of focus parts along one side of the focus region
    pub fn focus_parts_per_row(&self) -> usize {
        self.focus_region_width / self.focus_part_width
    }

    pub fn focus_part_count(&self) -> usize {
        self.focus_parts_per_row() * self.focus_parts_per_row()
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}
