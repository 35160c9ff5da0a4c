//! Headless viewer apps for system tests.

use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use crate::config::{ResizePolicy, ViewerConfig};
use crate::engine::core::app_state::ViewerState;
use crate::engine::core::viewer_plugin::ViewerPlugin;
use crate::engine::host::HostElement;
use crate::engine::loading::model_loader::ModelLoadingPlugin;

/// Viewer with a `width`x`height` host, immediate resizes, no window, no
/// asset server. Startup has already run.
pub fn viewer_test_app(width: u32, height: u32) -> App {
    let config = ViewerConfig {
        resize: ResizePolicy::Immediate,
        ..default()
    };
    let host = HostElement::new(config.host_element_id.clone(), width, height);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(ViewerPlugin::new(host, config));
    app.update();
    app
}

/// Viewer backed by a real asset server reading from the crate's `assets/`
/// folder, loading `model_path`. No glTF loader is registered, so only the
/// failure path can complete. Startup has not run yet.
pub fn model_loading_test_app(model_path: &str) -> App {
    let config = ViewerConfig {
        model_path: model_path.to_string(),
        resize: ResizePolicy::Immediate,
        ..default()
    };
    let host = HostElement::new(config.host_element_id.clone(), 800, 400);

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ))
    .init_asset::<Gltf>()
    .add_plugins((ViewerPlugin::new(host, config), ModelLoadingPlugin));
    app
}

/// Request `state` and run the frame that applies it.
pub fn enter_state(app: &mut App, state: ViewerState) {
    app.world_mut()
        .resource_mut::<NextState<ViewerState>>()
        .set(state);
    app.update();
}
