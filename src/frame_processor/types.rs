// SPDX-License-Identifier: GPL-3.0-only

//! Core geometry types for frame processing
//!
//! Coordinates are integer pixel positions. A [`Rectangle`] never stands on
//! its own: its corners are displacements applied to a center point.

use crate::constants::BYTES_PER_PIXEL;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row-major pixel index, or `None` if the point lies outside the frame
    pub fn pixel_index(&self, frame_width: usize, frame_height: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < frame_width && y < frame_height).then_some(y * frame_width + x)
    }

    /// Index of the first BGRA byte of this pixel
    pub fn byte_index(&self, frame_width: usize, frame_height: usize) -> Option<usize> {
        self.pixel_index(frame_width, frame_height)
            .map(|pixel| pixel * BYTES_PER_PIXEL)
    }
}

/// Scan window relative to a center point
///
/// `origin` is inclusive, `extent` is exclusive when scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub origin: Point,
    pub extent: Point,
}

impl Rectangle {
    pub const fn new(origin: Point, extent: Point) -> Self {
        Self { origin, extent }
    }

    /// Square window reaching `half_width` pixels in each direction
    pub const fn square(half_width: i32) -> Self {
        Self::new(
            Point::new(-half_width, -half_width),
            Point::new(half_width, half_width),
        )
    }
}

/// Square box centered on the origin whose side covers `size` pixels
///
/// The half-width is `floor(sqrt(size) / 2)`, so a perfect odd square such
/// as 121 gives a box from (-5, -5) to (5, 5).
pub fn centered_box(size: usize) -> Rectangle {
    let area_max = (size.isqrt() / 2) as i32;
    Rectangle::square(area_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box() {
        assert_eq!(centered_box(121), Rectangle::square(5));
        assert_eq!(centered_box(9801), Rectangle::square(49));
        assert_eq!(centered_box(1), Rectangle::square(0));
        // Non-square sizes truncate to the largest fitting box
        assert_eq!(centered_box(15), Rectangle::square(1));
        assert_eq!(centered_box(7), Rectangle::square(1));
    }

    #[test]
    fn test_pixel_index_bounds() {
        assert_eq!(Point::new(0, 0).pixel_index(640, 480), Some(0));
        assert_eq!(Point::new(320, 240).pixel_index(640, 480), Some(153_920));
        assert_eq!(Point::new(320, 240).byte_index(640, 480), Some(615_680));
        assert_eq!(Point::new(640, 0).pixel_index(640, 480), None);
        assert_eq!(Point::new(0, 480).pixel_index(640, 480), None);
        assert_eq!(Point::new(-1, 5).pixel_index(640, 480), None);
    }
}
