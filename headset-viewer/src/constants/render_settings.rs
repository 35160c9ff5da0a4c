use bevy::pbr::light_consts;
use bevy::prelude::*;

pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera distance on +Z before the model is in place.
pub const CAMERA_INITIAL_DISTANCE: f32 = 5.0;
/// Camera distance on +Z once the model is centred at the origin.
pub const CAMERA_FRAMED_DISTANCE: f32 = 6.0;

/// Uniform scale applied to the model root.
pub const MODEL_SCALE: f32 = 8.0;

/// Surface size used when running as a native window.
pub const NATIVE_WINDOW_WIDTH: u32 = 1280;
pub const NATIVE_WINDOW_HEIGHT: u32 = 720;

// Light intensities are relative (1.0 = full strength) and scaled below.
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_INTENSITY: f32 = 0.6;
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, -5.0, -5.0);

/// Ambient brightness (cd/m²) for a relative intensity of 1.0.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1000.0;
/// Directional illuminance (lux) for a relative intensity of 1.0.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = light_consts::lux::AMBIENT_DAYLIGHT;
