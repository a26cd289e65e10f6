// SPDX-License-Identifier: GPL-3.0-only

//! Depth sensor constants
//!
//! Depth samples are raw sensor readings; only zero has a fixed meaning.

/// Invalid depth marker (occlusion, out of range, no return)
pub const DEPTH_INVALID: u16 = 0;

/// Upper bound for nearest-object searches; deeper samples never qualify
pub const DEPTH_SEARCH_CEILING: u16 = 10_000;

/// Depth values wrap into visible grey levels modulo this
pub const DEPTH_GREY_MODULUS: u16 = 255;
