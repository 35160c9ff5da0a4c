/// Host page identifiers and asset locations
pub mod path;

/// Camera, lighting and model placement defaults
pub mod render_settings;

/// Tween timings and resize handling
pub mod animation;
