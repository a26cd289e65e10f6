// SPDX-License-Identifier: GPL-3.0-only

//! Frame processor module for focal point analysis
//!
//! Shared machinery lives in the submodules: offset tables, focus region
//! tiling, downsampling, the windowed focal point search and marker overlays.
//! Concrete processors in [`tasks`] compose them through a
//! [`ProcessorContext`] and expose the [`FrameProcessor`] capability.

pub mod context;
pub mod downsample;
pub mod offsets;
pub mod overlay;
pub mod partition;
pub mod search;
pub mod tasks;
pub mod types;

pub use context::ProcessorContext;
pub use offsets::{OffsetTable, OffsetUnit};
pub use overlay::MarkerColor;
pub use partition::FocusPart;
pub use search::{DistanceMetric, FocalSearch};
pub use tasks::DepthFocusProcessor;
pub use types::{Point, Rectangle};

use crate::errors::FocusResult;

/// A processor turning one (depth, color) frame pair into an output frame
///
/// Each call consumes exactly one frame. The returned buffer is owned by the
/// processor and overwritten by the next call.
pub trait FrameProcessor {
    /// Process a frame pair and return the BGRA output frame
    fn process_frame(&mut self, depth: &[u16], color: &[u8]) -> FocusResult<&[u8]>;

    /// Focal point found in the last processed frame, (0, 0) if none
    fn focal_point(&self) -> Point;
}
