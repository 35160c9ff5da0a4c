//! Render surface sizing.
//!
//! Container resizes arrive as `ContainerResized` events, pass through the
//! debouncer, and are applied to the camera projection and the window.

/// Trailing-edge debounce for bursts of resize events.
pub mod debounce;

/// Systems applying container resizes to the surface and camera.
pub mod resize;

use bevy::prelude::*;

use crate::engine::host::aspect_ratio;

/// The host container reported a new size, in logical pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerResized {
    pub width: u32,
    pub height: u32,
}

impl From<UVec2> for ContainerResized {
    fn from(size: UVec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
        }
    }
}

impl ContainerResized {
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }
}

/// Current render surface size.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSurface {
    pub size: UVec2,
}

impl ViewportSurface {
    pub fn new(size: UVec2) -> Self {
        Self { size }
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.size)
    }
}
