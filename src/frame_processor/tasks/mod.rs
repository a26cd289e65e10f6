// SPDX-License-Identifier: GPL-3.0-only

//! Frame processing tasks
//!
//! Concrete [`FrameProcessor`](super::FrameProcessor) implementations.

pub mod depth_focus;

pub use depth_focus::DepthFocusProcessor;
