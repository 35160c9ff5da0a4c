//! Viewer camera.
//!
//! A fixed perspective camera on the +Z axis looking at the origin. Its
//! aspect ratio follows the host container.

/// Camera spawning, framing and projection updates.
pub mod viewer_camera;
