use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::engine::core::viewer_plugin::ViewerPlugin;
use crate::engine::core::window_config::create_window_config;
use crate::engine::host::{HostElement, HostPlugin};
use crate::engine::loading::model_loader::ModelLoadingPlugin;
use crate::error::{ViewerError, ViewerResult};

/// Build the viewer for `host`. Without a host nothing is constructed.
pub fn initialize(host: Option<HostElement>, config: ViewerConfig) -> ViewerResult<App> {
    let Some(host) = host else {
        return Err(ViewerError::MissingHostElement(config.host_element_id));
    };
    Ok(create_app(host, config))
}

pub fn create_app(host: HostElement, config: ViewerConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&host))
        .add_plugins(ViewerPlugin::new(host, config))
        .add_plugins(HostPlugin)
        .add_plugins(ModelLoadingPlugin);

    app
}

fn create_default_plugins(host: &HostElement) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(host)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
