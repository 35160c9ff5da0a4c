use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;

/// Viewer lifecycle. The app only exists once a host element was found, so
/// the uninitialised phase has no state of its own.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewerState {
    /// Camera, lights and surface exist; the model has not been requested.
    #[default]
    SceneReady,
    /// Model requested from the asset server.
    AssetPending,
    /// Model spawned, waiting for its meshes before centring.
    AssetLoaded,
    /// Model centred and tweens running.
    Animating,
    /// Model failed to load. Rendering continues without it.
    LoadFailed,
}

pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<ViewerState>>) {
    for transition in transitions.read() {
        if let Some(entered) = transition.entered {
            info!("→ Viewer state {:?}", entered);
        }
    }
}
