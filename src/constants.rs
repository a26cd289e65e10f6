// SPDX-License-Identifier: GPL-3.0-only

//! Frame geometry and sampling constants
//!
//! Defaults for [`ProcessorConfig`](crate::config::ProcessorConfig). The
//! values match the 640x480 depth mode of Kinect-class sensors.

/// Frame width in pixels
pub const FRAME_WIDTH: usize = 640;
/// Frame height in pixels
pub const FRAME_HEIGHT: usize = 480;

/// Bytes per packed BGRA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Row/column stride used when scanning a frame
pub const SAMPLE_GAP: usize = 10;

/// Side of one focus part (and of the focal marker / brightness neighborhood)
pub const FOCUS_PART_WIDTH: usize = 11;
/// Side of the whole focus region
pub const FOCUS_REGION_WIDTH: usize = 99;

/// Channel positions inside a packed BGRA pixel
pub mod channel {
    pub const BLUE: usize = 0;
    pub const GREEN: usize = 1;
    pub const RED: usize = 2;
    pub const ALPHA: usize = 3;
}
