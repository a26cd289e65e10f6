// SPDX-License-Identifier: GPL-3.0-only

//! Depth sample handling
//!
//! Constants describing raw depth samples and the greyscale rendering of a
//! depth frame into a BGRA output buffer.

mod constants;
mod visualization;

pub use constants::*;
pub use visualization::{depth_to_grey, write_depth_greyscale};
