// SPDX-License-Identifier: GPL-3.0-only

//! Error types for focal point processing

use std::fmt;

/// Result type alias using FocusError
pub type FocusResult<T> = Result<T, FocusError>;

/// Main error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// Processor configuration is unusable
    Configuration(ConfigurationError),
    /// A frame buffer does not match the configured frame size
    FrameSize {
        /// Which buffer was rejected ("depth" or "color")
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Configuration errors, raised once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Square sampling patterns need a center pixel
    EvenSquareSize(usize),
    /// Focus region cannot be tiled by whole focus parts
    IndivisibleRegion {
        region_width: usize,
        part_width: usize,
    },
    /// Focus region or focus part width is even
    EvenFocusWidth(usize),
    /// Two region pixels would land in the same part slot
    SlotCollision {
        region_width: usize,
        part_width: usize,
    },
    /// Sample gap must be at least one pixel
    ZeroSampleGap,
    /// Frame must be non-empty with even sides
    FrameDimensions { width: usize, height: usize },
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::Configuration(e) => write!(f, "Configuration error: {}", e),
            FocusError::FrameSize {
                buffer,
                expected,
                actual,
            } => write!(
                f,
                "Invalid {} buffer: expected {} samples, got {}",
                buffer, expected, actual
            ),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EvenSquareSize(size) => {
                write!(f, "Square size {} is even, odd sizes only", size)
            }
            ConfigurationError::IndivisibleRegion {
                region_width,
                part_width,
            } => write!(
                f,
                "Focus region width {} must be divisible by focus part width {}",
                region_width, part_width
            ),
            ConfigurationError::EvenFocusWidth(width) => {
                write!(f, "Focus width {} is even, odd widths only", width)
            }
            ConfigurationError::SlotCollision {
                region_width,
                part_width,
            } => write!(
                f,
                "Focus region width {} does not tile into distinct slots of part width {}",
                region_width, part_width
            ),
            ConfigurationError::ZeroSampleGap => write!(f, "Sample gap must be non-zero"),
            ConfigurationError::FrameDimensions { width, height } => {
                write!(f, "Invalid frame dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for FocusError {}
impl std::error::Error for ConfigurationError {}

impl From<ConfigurationError> for FocusError {
    fn from(err: ConfigurationError) -> Self {
        FocusError::Configuration(err)
    }
}
