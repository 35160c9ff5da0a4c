use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::engine::core::app_state::ViewerState;
use crate::engine::model::placement::{
    center_ready_models, mark_model_instances_ready, spawn_model,
};
use crate::error::{ViewerError, ViewerResult};

/// Pending model request. Cleared once an outcome is published.
#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Gltf>>,
}

/// Outcome of the model load: the scene to spawn, or why there is none.
#[derive(Event, Debug, Clone)]
pub struct ModelLoadFinished(pub ViewerResult<Handle<Scene>>);

/// Asset-server side of model loading: request, polling, scene readiness.
pub struct ModelLoadingPlugin;

impl Plugin for ModelLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelLoader>()
            .add_systems(Startup, start_model_load)
            .add_systems(
                Update,
                poll_model_load
                    .before(handle_model_load_finished)
                    .run_if(in_state(ViewerState::AssetPending)),
            )
            .add_systems(
                Update,
                mark_model_instances_ready
                    .before(center_ready_models)
                    .run_if(in_state(ViewerState::AssetLoaded)),
            );
    }
}

pub fn start_model_load(
    mut loader: ResMut<ModelLoader>,
    mut next_state: ResMut<NextState<ViewerState>>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    info!("Loading model from: {}", config.model_path);
    loader.handle = Some(asset_server.load(config.model_path.clone()));
    next_state.set(ViewerState::AssetPending);
}

/// Check the request once per frame and publish the outcome when known.
pub fn poll_model_load(
    mut loader: ResMut<ModelLoader>,
    mut finished: EventWriter<ModelLoadFinished>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let outcome = match asset_server.get_load_state(handle) {
        Some(LoadState::Failed(err)) => Some(Err(ViewerError::AssetLoadFailure(err.to_string()))),
        Some(LoadState::Loaded) => match asset_server.get_recursive_dependency_load_state(handle) {
            Some(RecursiveDependencyLoadState::Loaded) => gltfs.get(handle).map(scene_of),
            Some(RecursiveDependencyLoadState::Failed(err)) => {
                Some(Err(ViewerError::AssetLoadFailure(err.to_string())))
            }
            _ => None,
        },
        _ => None,
    };

    if let Some(outcome) = outcome {
        loader.handle = None;
        finished.write(ModelLoadFinished(outcome));
    }
}

/// The scene the model lives in: the file's default scene, else its first.
fn scene_of(gltf: &Gltf) -> ViewerResult<Handle<Scene>> {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
        .ok_or_else(|| ViewerError::AssetLoadFailure("asset contains no scene".to_string()))
}

/// Spawn the model on success. On failure log and stay empty; the frame
/// loop and resize handling carry on.
pub fn handle_model_load_finished(
    mut events: EventReader<ModelLoadFinished>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<ViewerState>>,
    config: Res<ViewerConfig>,
) {
    let Some(ModelLoadFinished(outcome)) = events.read().last() else {
        return;
    };

    match outcome {
        Ok(scene) => {
            spawn_model(&mut commands, scene.clone(), config.model_scale);
            info!("✓ Model loaded");
            next_state.set(ViewerState::AssetLoaded);
        }
        Err(err) => {
            error!("An error occurred loading the 3D model: {}", err);
            next_state.set(ViewerState::LoadFailed);
        }
    }
}
