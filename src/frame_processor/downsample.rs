// SPDX-License-Identifier: GPL-3.0-only

//! Half-resolution luma-like downsampling of BGRA frames

use crate::constants::BYTES_PER_PIXEL;

/// Compress a BGRA frame into one brightness sample per 2x2 block
///
/// Each output sample is the mean of the blue, green and red channels of the
/// four block pixels (12 values, alpha ignored), stored at `(x / 2, y / 2)`.
/// `out` must hold `width * height / 4` samples.
pub fn compress_color(color: &[u8], width: usize, height: usize, out: &mut [u32]) {
    debug_assert_eq!(color.len(), width * height * BYTES_PER_PIXEL);
    debug_assert_eq!(out.len(), width * height / 4);

    let half_width = width / 2;
    let bgr_sum = |pixel: usize| -> u32 {
        color[pixel..pixel + 3].iter().map(|&v| v as u32).sum()
    };

    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let top = (y * width + x) * BYTES_PER_PIXEL;
            let bottom = top + width * BYTES_PER_PIXEL;

            let sum = bgr_sum(top)
                + bgr_sum(top + BYTES_PER_PIXEL)
                + bgr_sum(bottom)
                + bgr_sum(bottom + BYTES_PER_PIXEL);

            out[(y / 2) * half_width + x / 2] = sum / 12;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_average_ignores_alpha() {
        // 2x2 frame, alpha saturated
        let color = vec![
            10, 20, 30, 255, //
            40, 50, 60, 255, //
            70, 80, 90, 255, //
            100, 110, 120, 255,
        ];
        let mut out = vec![0u32; 1];
        compress_color(&color, 2, 2, &mut out);
        assert_eq!(out, vec![(10 + 20 + 30 + 40 + 50 + 60 + 70 + 80 + 90 + 100 + 110 + 120) / 12]);
    }

    #[test]
    fn test_half_resolution_addressing() {
        // 4x2 frame: left block dark, right block white
        let mut color = vec![0u8; 4 * 2 * 4];
        for pixel in [2usize, 3, 6, 7] {
            color[pixel * 4..pixel * 4 + 3].fill(255);
        }
        let mut out = vec![7u32; 2];
        compress_color(&color, 4, 2, &mut out);
        assert_eq!(out, vec![0, 255]);
    }

    #[test]
    fn test_deterministic_full_frame() {
        let (width, height) = (640, 480);
        let color: Vec<u8> = (0..width * height * 4).map(|i| (i * 31 % 251) as u8).collect();
        let mut first = vec![0u32; width * height / 4];
        let mut second = vec![1u32; width * height / 4];
        compress_color(&color, width, height, &mut first);
        compress_color(&color, width, height, &mut second);
        assert_eq!(first.len(), 76_800);
        assert_eq!(first, second);
    }
}
