//! Host page integration.
//!
//! Locates the container element the viewer renders into, reads optional
//! configuration, and feeds container resizes into the app. Natively the
//! "container" is the OS window.

/// Deferred startup through the browser idle callback.
#[cfg(target_arch = "wasm32")]
pub mod idle;

/// Window-level resize listener and the queue it fills.
pub mod resize_listener;

use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::error::{ViewerError, ViewerResult};

/// The element the render surface lives in, with its size at startup.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct HostElement {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl HostElement {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.size())
    }
}

/// Width over height, with both clamped to one pixel so a collapsed
/// container never yields an infinite or NaN ratio.
pub fn aspect_ratio(size: UVec2) -> f32 {
    size.x.max(1) as f32 / size.y.max(1) as f32
}

/// Feeds host container resizes into the viewer.
pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, resize_listener::install_resize_listener);

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            resize_listener::forward_window_resizes.before(resize_listener::drain_resize_queue),
        );
    }
}

/// Look up the host container and attach the render canvas to it.
#[cfg(target_arch = "wasm32")]
pub fn find_host_element(config: &ViewerConfig) -> Option<HostElement> {
    use crate::constants::path::CANVAS_ELEMENT_ID;

    let document = web_sys::window()?.document()?;
    let container = document.get_element_by_id(&config.host_element_id)?;

    if document.get_element_by_id(CANVAS_ELEMENT_ID).is_none() {
        let attached = document.create_element("canvas").and_then(|canvas| {
            canvas.set_id(CANVAS_ELEMENT_ID);
            canvas.set_attribute("style", "display: block; width: 100%; height: 100%;")?;
            container.append_child(&canvas)
        });
        if let Err(err) = attached {
            web_sys::console::error_2(
                &wasm_bindgen::JsValue::from_str("Could not attach the render canvas:"),
                &err,
            );
            return None;
        }
    }

    Some(HostElement::new(
        config.host_element_id.clone(),
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    ))
}

/// Natively the host is the window the viewer opens.
#[cfg(not(target_arch = "wasm32"))]
pub fn find_host_element(config: &ViewerConfig) -> Option<HostElement> {
    Some(HostElement::new(
        config.host_element_id.clone(),
        config.native_window.width,
        config.native_window.height,
    ))
}

/// Configuration from the page's JSON script element, defaults when absent.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ViewerResult<ViewerConfig> {
    use crate::constants::path::CONFIG_ELEMENT_ID;

    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json {
        Some(json) if !json.trim().is_empty() => ViewerConfig::from_json(&json),
        _ => Ok(ViewerConfig::default()),
    }
}

/// Configuration from the JSON file named by the first argument, defaults
/// when no argument is given.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ViewerResult<ViewerConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(ViewerConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .map_err(|e| ViewerError::InvalidConfig(format!("{path}: {e}")))?;
    ViewerConfig::from_json(&json)
}

/// Report an error raised before the app and its log plugin exist.
pub fn report_startup_error(error: &ViewerError) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&error.to_string()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{error}");
    }
}
