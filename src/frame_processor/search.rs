// SPDX-License-Identifier: GPL-3.0-only

//! Windowed focal point search
//!
//! One scan routine serves every focal point detector. A detector supplies a
//! measurement (pixel index to score, `None` to skip the pixel) and a
//! comparison deciding whether a new score beats the current best; the
//! searcher walks the window on the sample grid.
//!
//! Acceptance is raster-ordered: a sample is taken only if its score passes
//! the comparison *and* it is no farther from the target than the last
//! accepted sample. A better score found farther away than an earlier
//! accepted sample is skipped, so the result is the closest qualifying
//! sample, not the global extremum.

use super::offsets::{OffsetTable, offset_index};
use super::types::{Point, Rectangle};
use crate::config::ProcessorConfig;
use crate::constants::BYTES_PER_PIXEL;
use crate::depth::{DEPTH_INVALID, DEPTH_SEARCH_CEILING};

/// How the distance between a sample and the target is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// True straight-line distance
    #[default]
    Euclidean,
    /// `|dx| + |dy|`, cheaper and coarser
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        let dx = (a.x as i64 - b.x as i64).abs();
        let dy = (a.y as i64 - b.y as i64).abs();
        match self {
            DistanceMetric::Euclidean => ((dx * dx + dy * dy) as f64).sqrt(),
            DistanceMetric::Manhattan => (dx + dy) as f64,
        }
    }
}

/// A windowed scan around a target point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocalSearch {
    /// Scan bounds relative to `target`
    pub window: Rectangle,
    pub target: Point,
    pub metric: DistanceMetric,
}

impl FocalSearch {
    pub fn new(window: Rectangle, target: Point, metric: DistanceMetric) -> Self {
        Self {
            window,
            target,
            metric,
        }
    }

    /// Scan the window and return the accepted sample, if any
    ///
    /// Rows and columns run from `target + window.origin` up to but excluding
    /// `target + window.extent`, stepping by the configured sample gap.
    /// Samples outside the frame are skipped. The distance bound starts at the
    /// distance from the frame origin to the frame center. A zero sample gap
    /// scans every pixel.
    pub fn run<M, C>(
        &self,
        config: &ProcessorConfig,
        initial_score: u32,
        mut measurement: M,
        compare: C,
    ) -> Option<Point>
    where
        M: FnMut(usize) -> Option<u32>,
        C: Fn(u32, u32) -> bool,
    {
        let gap = config.sample_gap.max(1);
        let target = self.target;

        let x_range = target.x.saturating_add(self.window.origin.x)
            ..target.x.saturating_add(self.window.extent.x);
        let y_range = target.y.saturating_add(self.window.origin.y)
            ..target.y.saturating_add(self.window.extent.y);

        let mut best_score = initial_score;
        let mut best_distance = self
            .metric
            .distance(Point::default(), config.frame_center());
        let mut focal_point = None;

        for y in y_range.step_by(gap) {
            for x in x_range.clone().step_by(gap) {
                let point = Point::new(x, y);
                let Some(pixel) = point.pixel_index(config.frame_width, config.frame_height)
                else {
                    continue;
                };
                let Some(score) = measurement(pixel) else {
                    continue;
                };
                if !compare(score, best_score) {
                    continue;
                }

                let distance = self.metric.distance(point, target);
                if distance <= best_distance {
                    best_distance = distance;
                    best_score = score;
                    focal_point = Some(point);
                }
            }
        }

        focal_point
    }
}

/// Scores a pixel by its raw depth, skipping invalid samples
pub fn depth_measurement(depth: &[u16]) -> impl Fn(usize) -> Option<u32> + '_ {
    move |pixel| match depth.get(pixel) {
        Some(&sample) if sample != DEPTH_INVALID => Some(sample as u32),
        _ => None,
    }
}

/// Scores a pixel by the summed blue, green and red of its neighborhood
///
/// `sample_offsets` must be byte-scaled. Neighbors outside the buffer are
/// left out of the sum.
pub fn brightness_measurement<'a>(
    color: &'a [u8],
    sample_offsets: &'a OffsetTable,
) -> impl Fn(usize) -> Option<u32> + 'a {
    move |pixel| {
        let center = pixel * BYTES_PER_PIXEL;
        let total: u32 = sample_offsets
            .iter()
            .filter_map(|&offset| offset_index(center, offset, color.len()))
            .map(|byte| color[byte..byte + 3].iter().map(|&v| v as u32).sum::<u32>())
            .sum();
        Some(total)
    }
}

/// Closest valid depth sample near `target`, or the default point
pub fn nearest_focal_point(
    depth: &[u16],
    config: &ProcessorConfig,
    search: &FocalSearch,
) -> Point {
    search
        .run(
            config,
            DEPTH_SEARCH_CEILING as u32,
            depth_measurement(depth),
            |new, current| new <= current,
        )
        .unwrap_or_default()
}

/// Brightest neighborhood near `target`, or the default point
pub fn brightest_focal_point(
    color: &[u8],
    sample_offsets: &OffsetTable,
    config: &ProcessorConfig,
    search: &FocalSearch,
) -> Point {
    search
        .run(
            config,
            0,
            brightness_measurement(color, sample_offsets),
            |new, current| new >= current,
        )
        .unwrap_or_default()
}
