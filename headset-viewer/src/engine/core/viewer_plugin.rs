use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::engine::animation::control::{StopAnimations, stop_animations};
use crate::engine::animation::tween::drive_tweens;
use crate::engine::camera::viewer_camera::spawn_viewer_camera;
use crate::engine::core::app_state::{ViewerState, log_state_transitions};
use crate::engine::host::HostElement;
use crate::engine::host::resize_listener::{ResizeQueue, drain_resize_queue};
use crate::engine::loading::model_loader::{ModelLoadFinished, handle_model_load_finished};
use crate::engine::model::placement::center_ready_models;
use crate::engine::scene::lighting::spawn_light_rig;
use crate::engine::viewport::debounce::ResizeDebouncer;
use crate::engine::viewport::resize::{apply_container_resize, collect_container_resizes};
use crate::engine::viewport::{ContainerResized, ViewportSurface};

/// Scene, camera, resize handling and model animation for one host element.
/// Platform and asset-server systems live in `HostPlugin` and
/// `ModelLoadingPlugin`.
pub struct ViewerPlugin {
    host: HostElement,
    config: ViewerConfig,
}

impl ViewerPlugin {
    pub fn new(host: HostElement, config: ViewerConfig) -> Self {
        Self { host, config }
    }
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.host.clone())
            .insert_resource(self.config.clone())
            .insert_resource(ViewportSurface::new(self.host.size()))
            .insert_resource(ResizeDebouncer::new(self.config.resize.quiet_period()))
            .init_resource::<ResizeQueue>()
            .init_state::<ViewerState>()
            .add_event::<ContainerResized>()
            .add_event::<ModelLoadFinished>()
            .add_event::<StopAnimations>();

        app.add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    drain_resize_queue,
                    collect_container_resizes,
                    apply_container_resize,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                handle_model_load_finished.run_if(in_state(ViewerState::AssetPending)),
            )
            .add_systems(
                Update,
                (
                    center_ready_models.run_if(in_state(ViewerState::AssetLoaded)),
                    drive_tweens,
                    stop_animations,
                )
                    .chain(),
            )
            .add_systems(Update, log_state_transitions);
    }
}

fn setup_scene(mut commands: Commands, config: Res<ViewerConfig>, host: Res<HostElement>) {
    info!(
        "=== HEADSET VIEWER ({} {}x{}) ===",
        host.id, host.width, host.height
    );
    spawn_viewer_camera(&mut commands, &config, &host);
    spawn_light_rig(&mut commands);
}
