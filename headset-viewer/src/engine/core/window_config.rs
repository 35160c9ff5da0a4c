use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use crate::engine::host::HostElement;

pub fn create_window_config(host: &HostElement) -> Window {
    let resolution = WindowResolution::new(host.width.max(1) as f32, host.height.max(1) as f32);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::constants::path::CANVAS_ELEMENT_ID;

        Window {
            canvas: Some(format!("#{CANVAS_ELEMENT_ID}")),
            // Sizing follows the host container through the resize listener.
            fit_canvas_to_parent: false,
            prevent_default_event_handling: false,
            transparent: true,
            resolution,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Headset Viewer".into(),
            resolution,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
