use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use crate::config::{CameraSettings, ViewerConfig};
use crate::engine::host::HostElement;

#[derive(Component)]
pub struct ViewerCamera;

pub fn perspective_projection(settings: &CameraSettings, aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        aspect_ratio,
        near: settings.near,
        far: settings.far,
    }
}

pub fn set_aspect_ratio(projection: &mut Projection, aspect_ratio: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = aspect_ratio;
    }
}

/// Camera transform at `distance` along +Z, looking at the origin.
pub fn framing_transform(distance: f32) -> Transform {
    Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y)
}

pub fn spawn_viewer_camera(commands: &mut Commands, config: &ViewerConfig, host: &HostElement) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            // Transparent so the page shows through around the model.
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(perspective_projection(&config.camera, host.aspect_ratio())),
        Msaa::Sample4,
        framing_transform(config.camera.initial_distance),
        ViewerCamera,
    ));
}
