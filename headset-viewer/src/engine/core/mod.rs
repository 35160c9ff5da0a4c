//! Core application setup and state management.
//!
//! Handles the viewer lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Host check and app construction with all viewer plugins.
pub mod app_setup;

/// Viewer state machine from scene setup through model loading to animation.
pub mod app_state;

/// Scene, resize and animation systems bound to one host element.
pub mod viewer_plugin;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the render surface to the canvas inside the host element on the web.
pub mod window_config;
