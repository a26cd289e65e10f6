// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use depth_focus::{ConfigurationError, DepthFocusProcessor, FocusError, ProcessorConfig};

#[test]
fn test_config_default() {
    let config = ProcessorConfig::default();

    assert_eq!(config.frame_width, 640);
    assert_eq!(config.frame_height, 480);
    assert_eq!(config.sample_gap, 10);
    assert_eq!(config.focus_part_width, 11);
    assert_eq!(config.focus_region_width, 99);
    assert!(config.validate().is_ok(), "Default config should be valid");
}

#[test]
fn test_config_partial_json_uses_defaults() {
    // Missing fields fall back to the defaults
    let config: ProcessorConfig = serde_json::from_str(r#"{ "sample_gap": 5 }"#).unwrap();
    assert_eq!(config.sample_gap, 5);
    assert_eq!(config.frame_width, 640);
    assert_eq!(config.focus_region_width, 99);
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config = ProcessorConfig {
        focus_part_width: 9,
        ..Default::default()
    };
    // 99 / 9 = 11 parts per row: divisible, but 11 and 9 are coprime
    assert!(DepthFocusProcessor::with_config(config).is_ok());

    let config = ProcessorConfig {
        focus_part_width: 7,
        ..Default::default()
    };
    match DepthFocusProcessor::with_config(config) {
        Err(FocusError::Configuration(ConfigurationError::IndivisibleRegion {
            region_width,
            part_width,
        })) => {
            assert_eq!(region_width, 99);
            assert_eq!(part_width, 7);
        }
        other => panic!("Expected indivisible region error, got {:?}", other),
    }
}
