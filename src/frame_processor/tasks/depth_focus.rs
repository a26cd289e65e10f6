// SPDX-License-Identifier: GPL-3.0-only

//! Closest object focus task
//!
//! Finds the nearest object to the middle of the depth frame, renders the
//! depth frame as grey and marks the object with a green square.

use crate::config::ProcessorConfig;
use crate::depth::DEPTH_SEARCH_CEILING;
use crate::errors::FocusResult;
use crate::frame_processor::context::ProcessorContext;
use crate::frame_processor::overlay::MarkerColor;
use crate::frame_processor::search::{DistanceMetric, FocalSearch, depth_measurement};
use crate::frame_processor::types::Point;
use crate::frame_processor::FrameProcessor;
use std::time::Instant;
use tracing::{debug, trace};

/// Depth-based focus processor
///
/// Scans the whole depth frame on the sample grid for the closest valid
/// sample, preferring samples near the frame center.
#[derive(Debug, Clone)]
pub struct DepthFocusProcessor {
    context: ProcessorContext,
}

impl DepthFocusProcessor {
    /// Create a processor for the default 640x480 configuration
    pub fn new() -> FocusResult<Self> {
        Self::with_config(ProcessorConfig::default())
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: ProcessorConfig) -> FocusResult<Self> {
        let context = ProcessorContext::new(config)?;
        debug!("Depth focus processor ready");
        Ok(Self { context })
    }

    pub fn context(&self) -> &ProcessorContext {
        &self.context
    }

    /// Process one frame pair: detect, render, mark
    pub fn process(&mut self, depth: &[u16], color: &[u8]) -> FocusResult<&[u8]> {
        let start = Instant::now();

        self.context.load_frame(depth, color)?;
        let focal_point = self.detect_closest_object();
        self.build_output();
        self.overlay_sampling_info();

        trace!(
            focal_x = focal_point.map(|p| p.x),
            focal_y = focal_point.map(|p| p.y),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Depth focus frame processed"
        );

        Ok(self.context.output())
    }

    /// Copy a frame pair in without processing it
    pub fn load_frame(&mut self, depth: &[u16], color: &[u8]) -> FocusResult<()> {
        self.context.load_frame(depth, color)
    }

    /// Locate the closest object across the whole frame
    ///
    /// Uses Manhattan distance to the frame center; the result is stored as
    /// the context's focal point.
    pub fn detect_closest_object(&mut self) -> Option<Point> {
        let config = *self.context.config();
        let search = FocalSearch::new(
            config.full_frame_window(),
            config.frame_center(),
            DistanceMetric::Manhattan,
        );

        let focal_point = self.context.measured_focal_point(
            &search,
            DEPTH_SEARCH_CEILING as u32,
            depth_measurement(self.context.depth()),
            |new, current| new <= current,
        );

        self.context.set_focal_point(focal_point);
        focal_point
    }

    /// Render the depth frame as grey into the output buffer
    pub fn build_output(&mut self) {
        self.context.render_depth_greyscale();
    }

    /// Mark the detected object in green
    pub fn overlay_sampling_info(&mut self) {
        self.context.overlay_focal_point(MarkerColor::Green);
    }

    /// Byte index of the detected object in the output buffer
    pub fn focal_byte_offset(&self) -> Option<usize> {
        self.context.focal_byte_offset()
    }

    pub fn output(&self) -> &[u8] {
        self.context.output()
    }
}

impl FrameProcessor for DepthFocusProcessor {
    fn process_frame(&mut self, depth: &[u16], color: &[u8]) -> FocusResult<&[u8]> {
        self.process(depth, color)
    }

    fn focal_point(&self) -> Point {
        self.context.focal_point()
    }
}
