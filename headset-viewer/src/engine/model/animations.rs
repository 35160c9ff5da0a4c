use std::f32::consts::TAU;

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use crate::config::AnimationSettings;
use crate::engine::animation::tween::{Repeat, Tween, TweenProperty, TweenValue, TweenSet};

/// Spin about Y plus a vertical bob above `transform`'s current position.
pub fn model_tweens(transform: &Transform, settings: &AnimationSettings, now: f64) -> TweenSet {
    let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
    let rest_height = transform.translation.y;

    let spin = Tween::new(
        TweenProperty::RotationY,
        yaw,
        TweenValue::By(TAU),
        settings.spin_period_secs,
    )
    .repeat(Repeat::Infinite)
    .starting_at(now);

    let float = Tween::new(
        TweenProperty::TranslationY,
        rest_height,
        TweenValue::To(rest_height + settings.float_amplitude),
        settings.float_leg_secs,
    )
    .with_ease(EaseFunction::QuadraticInOut)
    .repeat(Repeat::Infinite)
    .yoyo(true)
    .starting_at(now);

    TweenSet::new(vec![spin, float])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweens_start_from_rest_pose() {
        let transform = Transform::from_xyz(0.0, -0.4, 0.0);
        let set = model_tweens(&transform, &AnimationSettings::default(), 12.5);
        assert_eq!(set.tweens.len(), 2);

        let spin = &set.tweens[0];
        assert_eq!(spin.property, TweenProperty::RotationY);
        assert_eq!(spin.started_at, 12.5);
        assert!((spin.sample(20.0) - TAU).abs() < 1e-5);

        let float = &set.tweens[1];
        assert_eq!(float.property, TweenProperty::TranslationY);
        assert!((float.sample(0.0) + 0.4).abs() < 1e-6);
        assert!((float.sample(3.0) + 0.3).abs() < 1e-5);
        assert!((float.sample(6.0) + 0.4).abs() < 1e-5);
    }
}
