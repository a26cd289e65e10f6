// SPDX-License-Identifier: GPL-3.0-only

//! Per-processor frame state
//!
//! A [`ProcessorContext`] bundles the validated configuration, the offset
//! tables and focus parts built from it, and every frame buffer a processor
//! works on. All of it is allocated once in [`ProcessorContext::new`]; frame
//! calls only overwrite buffer contents.

use super::downsample::compress_color;
use super::offsets::{OffsetTable, OffsetUnit};
use super::overlay::{self, MarkerColor};
use super::partition::{FocusPart, build_focus_parts};
use super::search::{self, DistanceMetric, FocalSearch};
use super::types::{Point, Rectangle};
use crate::config::ProcessorConfig;
use crate::depth::write_depth_greyscale;
use crate::errors::{FocusError, FocusResult};
use tracing::{debug, warn};

/// Configuration, lookup tables and buffers owned by one processor
#[derive(Debug, Clone)]
pub struct ProcessorContext {
    config: ProcessorConfig,
    /// Byte-scaled focus-part-sized square, used for markers and brightness
    sample_offsets: OffsetTable,
    focus_parts: Vec<FocusPart>,
    depth: Vec<u16>,
    color: Vec<u8>,
    compressed: Vec<u32>,
    output: Vec<u8>,
    focal_point: Option<Point>,
}

impl ProcessorContext {
    /// Validate `config` and allocate every table and buffer
    pub fn new(config: ProcessorConfig) -> FocusResult<Self> {
        config.validate()?;

        let sample_offsets = OffsetTable::square(
            config.focus_part_area(),
            config.frame_width,
            OffsetUnit::Byte,
        )?;
        let focus_parts = build_focus_parts(
            config.focus_region_width,
            config.focus_part_width,
            config.frame_width,
        )?;

        debug!(
            width = config.frame_width,
            height = config.frame_height,
            sample_gap = config.sample_gap,
            sample_offsets = sample_offsets.len(),
            focus_parts = focus_parts.len(),
            "Processor context prepared"
        );

        Ok(Self {
            sample_offsets,
            focus_parts,
            depth: vec![0; config.pixel_count()],
            color: vec![0; config.byte_count()],
            compressed: vec![0; config.compressed_len()],
            output: vec![0; config.byte_count()],
            focal_point: None,
            config,
        })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Copy a new frame pair into the owned buffers
    ///
    /// Both buffers are checked before either is written, and the focal
    /// point of the previous frame is discarded.
    pub fn load_frame(&mut self, depth: &[u16], color: &[u8]) -> FocusResult<()> {
        check_len("depth", self.depth.len(), depth.len())?;
        check_len("color", self.color.len(), color.len())?;

        self.depth.copy_from_slice(depth);
        self.color.copy_from_slice(color);
        self.focal_point = None;
        Ok(())
    }

    pub fn depth(&self) -> &[u16] {
        &self.depth
    }

    pub fn color(&self) -> &[u8] {
        &self.color
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Last result of [`Self::compress_color`]
    pub fn compressed(&self) -> &[u32] {
        &self.compressed
    }

    pub fn sample_offsets(&self) -> &OffsetTable {
        &self.sample_offsets
    }

    pub fn focus_parts(&self) -> &[FocusPart] {
        &self.focus_parts
    }

    /// Focal point of the current frame, `None` until one is detected
    pub fn detected_focal_point(&self) -> Option<Point> {
        self.focal_point
    }

    /// Focal point of the current frame, (0, 0) if none was detected
    pub fn focal_point(&self) -> Point {
        self.focal_point.unwrap_or_default()
    }

    pub fn set_focal_point(&mut self, focal_point: Option<Point>) {
        self.focal_point = focal_point;
    }

    /// Byte index of the focal point in the color and output buffers
    pub fn focal_byte_offset(&self) -> Option<usize> {
        self.focal_point?
            .byte_index(self.config.frame_width, self.config.frame_height)
    }

    /// Downsample the color frame into the half-resolution buffer
    pub fn compress_color(&mut self) -> &[u32] {
        compress_color(
            &self.color,
            self.config.frame_width,
            self.config.frame_height,
            &mut self.compressed,
        );
        &self.compressed
    }

    /// Run an arbitrary measurement over a window of the current frame
    pub fn measured_focal_point<M, C>(
        &self,
        search: &FocalSearch,
        initial_score: u32,
        measurement: M,
        compare: C,
    ) -> Option<Point>
    where
        M: FnMut(usize) -> Option<u32>,
        C: Fn(u32, u32) -> bool,
    {
        search.run(&self.config, initial_score, measurement, compare)
    }

    /// Closest valid depth sample near `target`
    pub fn nearest_focal_point(&self, window: Rectangle, target: Point) -> Point {
        let search = FocalSearch::new(window, target, DistanceMetric::Euclidean);
        search::nearest_focal_point(&self.depth, &self.config, &search)
    }

    /// Brightest focus-part-sized neighborhood near `target`
    pub fn brightest_focal_point(&self, window: Rectangle, target: Point) -> Point {
        let search = FocalSearch::new(window, target, DistanceMetric::Euclidean);
        search::brightest_focal_point(&self.color, &self.sample_offsets, &self.config, &search)
    }

    /// Copy every focus part's pixels around `center` out of the color frame
    ///
    /// Does nothing when `center` lies outside the frame.
    pub fn capture_focus_parts(&mut self, center: Point) {
        let Some(center_byte) = center.byte_index(self.config.frame_width, self.config.frame_height)
        else {
            return;
        };
        for part in self.focus_parts.iter_mut() {
            part.capture(&self.color, center_byte);
        }
    }

    /// Use the color frame unchanged as the output base
    pub fn copy_color_to_output(&mut self) {
        self.output.copy_from_slice(&self.color);
    }

    /// Render the depth frame as grey into the output
    pub fn render_depth_greyscale(&mut self) {
        write_depth_greyscale(&self.depth, &mut self.output);
    }

    pub fn overlay_sample_grid(&mut self) {
        overlay::overlay_sample_grid(&mut self.output, &self.config);
    }

    /// Mark the focal point, if one was detected
    pub fn overlay_focal_point(&mut self, color: MarkerColor) {
        if let Some(center_byte) = self.focal_byte_offset() {
            overlay::overlay_focal_point(&mut self.output, center_byte, &self.sample_offsets, color);
        }
    }
}

fn check_len(buffer: &'static str, expected: usize, actual: usize) -> FocusResult<()> {
    if expected == actual {
        Ok(())
    } else {
        warn!(buffer, expected, actual, "Rejected frame");
        Err(FocusError::FrameSize {
            buffer,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ProcessorContext {
        ProcessorContext::new(ProcessorConfig::default()).unwrap()
    }

    #[test]
    fn test_buffers_sized_from_config() {
        let ctx = context();
        assert_eq!(ctx.depth().len(), 640 * 480);
        assert_eq!(ctx.color().len(), 640 * 480 * 4);
        assert_eq!(ctx.output().len(), 640 * 480 * 4);
        assert_eq!(ctx.compressed().len(), 320 * 240);
        assert_eq!(ctx.sample_offsets().len(), 121);
        assert_eq!(ctx.sample_offsets().unit(), OffsetUnit::Byte);
        assert_eq!(ctx.focus_parts().len(), 81);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ProcessorConfig {
            focus_region_width: 98,
            ..Default::default()
        };
        assert!(matches!(
            ProcessorContext::new(config),
            Err(FocusError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_frame_checks_sizes() {
        let mut ctx = context();
        let depth = vec![1u16; 10];
        let color = vec![0u8; 640 * 480 * 4];
        assert_eq!(
            ctx.load_frame(&depth, &color),
            Err(FocusError::FrameSize {
                buffer: "depth",
                expected: 640 * 480,
                actual: 10
            })
        );
        // Nothing was copied
        assert!(ctx.depth().iter().all(|&d| d == 0));
    }

    #[test]
    fn test_load_frame_rejects_short_color() {
        let mut ctx = context();
        let depth = vec![7u16; 640 * 480];
        let color = vec![0u8; 640 * 480 * 3];
        assert_eq!(
            ctx.load_frame(&depth, &color),
            Err(FocusError::FrameSize {
                buffer: "color",
                expected: 640 * 480 * 4,
                actual: 640 * 480 * 3
            })
        );
        // The valid depth buffer is not copied either
        assert!(ctx.depth().iter().all(|&d| d == 0));
    }

    #[test]
    fn test_load_frame_resets_focal_point() {
        let mut ctx = context();
        ctx.set_focal_point(Some(Point::new(5, 5)));
        let depth = vec![0u16; 640 * 480];
        let color = vec![0u8; 640 * 480 * 4];
        ctx.load_frame(&depth, &color).unwrap();
        assert_eq!(ctx.detected_focal_point(), None);
        assert_eq!(ctx.focal_point(), Point::default());
        assert_eq!(ctx.focal_byte_offset(), None);
    }

    #[test]
    fn test_brightest_patch() {
        let mut ctx = context();
        let depth = vec![0u16; 640 * 480];
        let mut color = vec![0u8; 640 * 480 * 4];
        let center = Point::new(200, 150);
        for y in center.y - 5..=center.y + 5 {
            for x in center.x - 5..=center.x + 5 {
                let byte = Point::new(x, y).byte_index(640, 480).unwrap();
                color[byte..byte + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
        ctx.load_frame(&depth, &color).unwrap();
        assert_eq!(ctx.brightest_focal_point(Rectangle::square(50), center), center);
    }

    #[test]
    fn test_capture_focus_parts_around_center() {
        let mut ctx = context();
        let depth = vec![0u16; 640 * 480];
        let mut color = vec![0u8; 640 * 480 * 4];
        let center = Point::new(320, 240);
        let byte = center.byte_index(640, 480).unwrap();
        color[byte..byte + 4].copy_from_slice(&[1, 2, 3, 4]);
        ctx.load_frame(&depth, &color).unwrap();
        ctx.capture_focus_parts(center);

        let captured: Vec<&FocusPart> = ctx
            .focus_parts()
            .iter()
            .filter(|part| part.pixels().chunks_exact(4).any(|px| px == [1, 2, 3, 4]))
            .collect();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].index, 40);
    }

    #[test]
    fn test_copy_color_to_output() {
        let mut ctx = context();
        let depth = vec![0u16; 640 * 480];
        let color: Vec<u8> = (0..640 * 480 * 4).map(|i| (i % 256) as u8).collect();
        ctx.load_frame(&depth, &color).unwrap();
        ctx.copy_color_to_output();
        assert_eq!(ctx.output(), color.as_slice());
    }

    #[test]
    fn test_sample_grid_overlay() {
        let mut ctx = context();
        ctx.overlay_sample_grid();

        let blue = ctx
            .output()
            .chunks_exact(4)
            .filter(|px| *px == [255, 0, 0, 0])
            .count();
        assert_eq!(blue, 64 * 48);
        assert_eq!(&ctx.output()[0..4], &[255, 0, 0, 0]);
        // (10, 10) is on the grid, (5, 5) is not
        let on_grid = Point::new(10, 10).byte_index(640, 480).unwrap();
        let off_grid = Point::new(5, 5).byte_index(640, 480).unwrap();
        assert_eq!(&ctx.output()[on_grid..on_grid + 4], &[255, 0, 0, 0]);
        assert_eq!(&ctx.output()[off_grid..off_grid + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_no_marker_without_focal_point() {
        let mut ctx = context();
        ctx.overlay_focal_point(MarkerColor::Green);
        assert!(ctx.output().iter().all(|&b| b == 0));
    }
}
