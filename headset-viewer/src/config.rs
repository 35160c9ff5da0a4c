//! Viewer configuration.
//!
//! Every field has a default taken from the constants modules, so a partial
//! JSON document only overrides what it names.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::animation::{
    FLOAT_AMPLITUDE, FLOAT_LEG_SECS, RESIZE_DEBOUNCE_MS, SPIN_PERIOD_SECS,
};
use crate::constants::path::{HOST_ELEMENT_ID, MODEL_PATH};
use crate::constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_FRAMED_DISTANCE, CAMERA_INITIAL_DISTANCE, CAMERA_NEAR,
    MODEL_SCALE, NATIVE_WINDOW_HEIGHT, NATIVE_WINDOW_WIDTH,
};
use crate::error::{ViewerError, ViewerResult};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub host_element_id: String,
    pub model_path: String,
    pub model_scale: f32,
    pub camera: CameraSettings,
    pub animation: AnimationSettings,
    pub resize: ResizePolicy,
    pub native_window: NativeWindowSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host_element_id: HOST_ELEMENT_ID.to_string(),
            model_path: MODEL_PATH.to_string(),
            model_scale: MODEL_SCALE,
            camera: CameraSettings::default(),
            animation: AnimationSettings::default(),
            resize: ResizePolicy::default(),
            native_window: NativeWindowSettings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> ViewerResult<Self> {
        serde_json::from_str(json).map_err(|e| ViewerError::InvalidConfig(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub initial_distance: f32,
    pub framed_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            initial_distance: CAMERA_INITIAL_DISTANCE,
            framed_distance: CAMERA_FRAMED_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub spin_period_secs: f32,
    pub float_amplitude: f32,
    pub float_leg_secs: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            spin_period_secs: SPIN_PERIOD_SECS,
            float_amplitude: FLOAT_AMPLITUDE,
            float_leg_secs: FLOAT_LEG_SECS,
        }
    }
}

/// How container resize events are applied to the camera and surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Apply every event as it arrives.
    Immediate,
    /// Apply only the last event once no new one arrived for `millis`.
    Debounced { millis: u64 },
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy::Debounced {
            millis: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl ResizePolicy {
    pub fn quiet_period(&self) -> Duration {
        match self {
            ResizePolicy::Immediate => Duration::ZERO,
            ResizePolicy::Debounced { millis } => Duration::from_millis(*millis),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeWindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for NativeWindowSettings {
    fn default() -> Self {
        Self {
            width: NATIVE_WINDOW_WIDTH,
            height: NATIVE_WINDOW_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(
            r#"{ "model_scale": 4.0, "resize": "immediate", "camera": { "fov_degrees": 50.0 } }"#,
        )
        .expect("valid config");

        assert_eq!(config.model_scale, 4.0);
        assert_eq!(config.resize, ResizePolicy::Immediate);
        assert_eq!(config.camera.fov_degrees, 50.0);
        assert_eq!(config.camera.near, CAMERA_NEAR);
        assert_eq!(config.host_element_id, HOST_ELEMENT_ID);
        assert_eq!(config.model_path, MODEL_PATH);
    }

    #[test]
    fn debounced_policy_parses_with_interval() {
        let config =
            ViewerConfig::from_json(r#"{ "resize": { "debounced": { "millis": 50 } } }"#)
                .expect("valid config");
        assert_eq!(config.resize, ResizePolicy::Debounced { millis: 50 });
        assert_eq!(config.resize.quiet_period(), Duration::from_millis(50));
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let result = ViewerConfig::from_json("{ not json");
        assert!(matches!(result, Err(ViewerError::InvalidConfig(_))));
    }

    #[test]
    fn default_resize_is_debounced() {
        assert_eq!(
            ViewerConfig::default().resize.quiet_period(),
            Duration::from_millis(RESIZE_DEBOUNCE_MS)
        );
    }
}
