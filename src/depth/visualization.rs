// SPDX-License-Identifier: GPL-3.0-only

//! Depth visualization helpers
//!
//! Renders depth as banded grey: the raw value wraps modulo 255, so each
//! 255-unit depth slab sweeps from black to white. Invalid samples are black.

use super::constants::{DEPTH_GREY_MODULUS, DEPTH_INVALID};
use crate::constants::{BYTES_PER_PIXEL, channel};

/// Grey level for one depth sample
#[inline]
pub fn depth_to_grey(depth: u16) -> u8 {
    if depth == DEPTH_INVALID {
        0
    } else {
        (depth % DEPTH_GREY_MODULUS) as u8
    }
}

/// Write the grey rendering of `depth` into a BGRA buffer
///
/// Blue, green and red receive the grey level; alpha is left untouched.
/// Pixels beyond the shorter of the two buffers are not written.
pub fn write_depth_greyscale(depth: &[u16], output: &mut [u8]) {
    for (&sample, pixel) in depth.iter().zip(output.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let grey = depth_to_grey(sample);
        pixel[channel::BLUE] = grey;
        pixel[channel::GREEN] = grey;
        pixel[channel::RED] = grey;
    }
}
