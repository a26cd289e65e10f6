// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use depth_focus::constants::{
    BYTES_PER_PIXEL, FOCUS_PART_WIDTH, FOCUS_REGION_WIDTH, FRAME_HEIGHT, FRAME_WIDTH, channel,
};
use depth_focus::depth::{DEPTH_INVALID, DEPTH_SEARCH_CEILING};

#[test]
fn test_focus_geometry() {
    assert_eq!(FOCUS_PART_WIDTH * FOCUS_PART_WIDTH, 121);
    assert_eq!(FOCUS_REGION_WIDTH * FOCUS_REGION_WIDTH, 9801);
    assert_eq!(FOCUS_REGION_WIDTH / FOCUS_PART_WIDTH, 9);
}

#[test]
fn test_bgra_layout() {
    assert_eq!(BYTES_PER_PIXEL, 4);
    assert_eq!(
        [channel::BLUE, channel::GREEN, channel::RED, channel::ALPHA],
        [0, 1, 2, 3]
    );
    assert_eq!(FRAME_WIDTH * FRAME_HEIGHT * BYTES_PER_PIXEL, 1_228_800);
}

#[test]
fn test_depth_markers() {
    assert_eq!(DEPTH_INVALID, 0);
    assert!(DEPTH_SEARCH_CEILING > DEPTH_INVALID);
}
