use bevy::prelude::*;

use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_INTENSITY, DIRECTIONAL_LUX_PER_UNIT,
    FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION,
};

/// Directional lights of the viewer's light rig.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightRig {
    Key,
    Fill,
}

pub fn ambient_light() -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    }
}

/// A light shining from `position` (normalised to a direction) toward the origin.
fn directional_light(intensity: f32, position: Vec3) -> (DirectionalLight, Transform) {
    (
        DirectionalLight {
            color: Color::WHITE,
            illuminance: intensity * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(position.normalize()).looking_at(Vec3::ZERO, Vec3::Y),
    )
}

pub fn spawn_light_rig(commands: &mut Commands) {
    commands.insert_resource(ambient_light());
    commands.spawn((
        directional_light(KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION),
        LightRig::Key,
    ));
    commands.spawn((
        directional_light(FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION),
        LightRig::Fill,
    ));
}
