// SPDX-License-Identifier: GPL-3.0-only

//! Depth Focus - focal point detection for depth camera frames
//!
//! This library analyzes per-frame depth and BGRA color buffers from a
//! Kinect-class depth camera, locates a focal point (the nearest object or
//! the brightest region) and renders a visualization frame.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`frame_processor`]: Offset tables, focus region tiling, downsampling,
//!   focal point search, overlays and the concrete processors
//! - [`depth`]: Depth sample constants and greyscale rendering
//! - [`config`]: Processor configuration and its validation
//! - [`constants`]: Default frame geometry
//! - [`errors`]: Error types
//!
//! # Example
//!
//! ```
//! use depth_focus::{DepthFocusProcessor, FrameProcessor, Point};
//!
//! let mut processor = DepthFocusProcessor::new().unwrap();
//! let mut depth = vec![0u16; 640 * 480];
//! depth[240 * 640 + 320] = 500;
//! let color = vec![0u8; 640 * 480 * 4];
//!
//! let output = processor.process_frame(&depth, &color).unwrap();
//! assert_eq!(output.len(), color.len());
//! assert_eq!(processor.focal_point(), Point::new(320, 240));
//! ```

pub mod config;
pub mod constants;
pub mod depth;
pub mod errors;
pub mod frame_processor;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use errors::{ConfigurationError, FocusError, FocusResult};
pub use frame_processor::{
    DepthFocusProcessor, DistanceMetric, FocalSearch, FrameProcessor, MarkerColor, OffsetTable,
    OffsetUnit, Point, ProcessorContext, Rectangle,
};
