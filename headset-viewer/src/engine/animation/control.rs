use bevy::prelude::*;

use crate::engine::animation::tween::TweenSet;

/// Request to stop every running tween.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopAnimations;

pub fn stop_animations(
    mut events: EventReader<StopAnimations>,
    mut commands: Commands,
    animated: Query<Entity, With<TweenSet>>,
) {
    if events.read().last().is_none() {
        return;
    }
    for entity in &animated {
        commands.entity(entity).remove::<TweenSet>();
    }
    info!("Stopped {} animated entities", animated.iter().count());
}
