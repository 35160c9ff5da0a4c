use std::f32::consts::TAU;

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

/// Transform field a tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProperty {
    /// Rotation about the vertical axis, radians.
    RotationY,
    /// Translation along the vertical axis.
    TranslationY,
}

/// End value of one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// Absolute target. Repeats restart from the start value.
    To(f32),
    /// Offset from the start value. Repeats continue from where the last leg
    /// ended, so a looping `By(TAU)` keeps turning.
    By(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Infinite,
}

/// A property animation sampled against elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub property: TweenProperty,
    pub from: f32,
    pub value: TweenValue,
    /// Length of one leg in seconds.
    pub duration: f32,
    pub ease: EaseFunction,
    pub repeat: Repeat,
    /// Play every other leg backwards.
    pub yoyo: bool,
    /// Elapsed app time at which the tween started.
    pub started_at: f64,
}

impl Tween {
    pub fn new(property: TweenProperty, from: f32, value: TweenValue, duration: f32) -> Self {
        Self {
            property,
            from,
            value,
            duration,
            ease: EaseFunction::Linear,
            repeat: Repeat::Times(0),
            yoyo: false,
            started_at: 0.0,
        }
    }

    pub fn with_ease(mut self, ease: EaseFunction) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn starting_at(mut self, started_at: f64) -> Self {
        self.started_at = started_at;
        self
    }

    fn delta(&self) -> f32 {
        match self.value {
            TweenValue::To(target) => target - self.from,
            TweenValue::By(offset) => offset,
        }
    }

    /// Time for one full cycle: one leg, or there and back when yoyo is set.
    pub fn period(&self) -> f32 {
        if self.yoyo {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    /// Total legs played, `None` when it never ends.
    fn leg_count(&self) -> Option<u64> {
        match self.repeat {
            Repeat::Times(n) => Some(u64::from(n) + 1),
            Repeat::Infinite => None,
        }
    }

    /// Property value `t` seconds after the tween started.
    pub fn sample(&self, t: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.from + self.delta();
        }
        let t = t.max(0.0);
        let legs = t / f64::from(self.duration);
        let mut leg = legs.floor() as u64;
        let mut fraction = (legs - leg as f64) as f32;

        if let Some(count) = self.leg_count() {
            if leg >= count {
                leg = count - 1;
                fraction = 1.0;
            }
        }

        let backwards = self.yoyo && leg % 2 == 1;
        let progress = if backwards {
            self.ease.sample_clamped(1.0 - fraction)
        } else {
            self.ease.sample_clamped(fraction)
        };

        // A leg boundary lands exactly on the previous leg's end value.
        let completed = match self.value {
            TweenValue::By(offset) if !self.yoyo => leg as f32 * offset,
            _ => 0.0,
        };

        self.from + completed + self.delta() * progress
    }

    pub fn is_finished(&self, t: f64) -> bool {
        match self.leg_count() {
            Some(count) => t >= f64::from(self.duration) * count as f64,
            None => false,
        }
    }

    /// Write the sampled value into `transform`.
    pub fn apply(&self, transform: &mut Transform, t: f64) {
        let value = self.sample(t);
        match self.property {
            TweenProperty::RotationY => {
                let (_, x, z) = transform.rotation.to_euler(EulerRot::YXZ);
                transform.rotation = Quat::from_euler(EulerRot::YXZ, value.rem_euclid(TAU), x, z);
            }
            TweenProperty::TranslationY => transform.translation.y = value,
        }
    }
}

/// Tweens attached to one entity. Removing the component stops them.
#[derive(Component, Debug, Clone, Default)]
pub struct TweenSet {
    pub tweens: Vec<Tween>,
}

impl TweenSet {
    pub fn new(tweens: Vec<Tween>) -> Self {
        Self { tweens }
    }
}

/// Advance every tween to the current elapsed time and drop finished ones.
pub fn drive_tweens(time: Res<Time>, mut query: Query<(&mut Transform, &mut TweenSet)>) {
    let now = time.elapsed_secs_f64();
    for (mut transform, mut set) in &mut query {
        for tween in &set.tweens {
            tween.apply(&mut transform, now - tween.started_at);
        }
        set.tweens
            .retain(|tween| !tween.is_finished(now - tween.started_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn spin() -> Tween {
        Tween::new(TweenProperty::RotationY, 0.0, TweenValue::By(TAU), 20.0)
            .repeat(Repeat::Infinite)
    }

    fn bob(start: f32) -> Tween {
        Tween::new(TweenProperty::TranslationY, start, TweenValue::To(start + 0.1), 3.0)
            .with_ease(EaseFunction::QuadraticInOut)
            .repeat(Repeat::Infinite)
            .yoyo(true)
    }

    #[test]
    fn spin_turns_once_per_duration_and_keeps_going() {
        let tween = spin();
        assert!((tween.sample(0.0) - 0.0).abs() < EPS);
        assert!((tween.sample(10.0) - TAU / 2.0).abs() < EPS);
        assert!((tween.sample(20.0) - TAU).abs() < EPS);
        assert!((tween.sample(40.0) - 2.0 * TAU).abs() < 1e-4);
        assert!(!tween.is_finished(1.0e6));
    }

    #[test]
    fn bob_rises_then_returns() {
        let start = -0.25;
        let tween = bob(start);
        let period = f64::from(tween.period());
        assert_eq!(tween.period(), 6.0);

        assert!((tween.sample(0.0) - start).abs() < EPS);
        assert!((tween.sample(period / 2.0) - (start + 0.1)).abs() < EPS);
        assert!((tween.sample(period) - start).abs() < EPS);
        assert!((tween.sample(period * 3.5) - (start + 0.1)).abs() < 1e-4);
    }

    #[test]
    fn bob_eases_in_and_out() {
        let tween = bob(0.0);
        // Quadratic in-out is slow at the ends and halfway at the midpoint.
        assert!(tween.sample(0.3) < 0.1 * 0.1);
        assert!((tween.sample(1.5) - 0.05).abs() < EPS);
        // Mirrored on the way down.
        assert!((tween.sample(1.0) - tween.sample(5.0)).abs() < EPS);
    }

    #[test]
    fn finite_tween_holds_its_end_value() {
        let tween = Tween::new(TweenProperty::TranslationY, 1.0, TweenValue::To(3.0), 2.0);
        assert!((tween.sample(1.0) - 2.0).abs() < EPS);
        assert!((tween.sample(5.0) - 3.0).abs() < EPS);
        assert!(tween.is_finished(2.0));
        assert!(!tween.is_finished(1.9));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween::new(TweenProperty::TranslationY, 1.0, TweenValue::By(2.0), 0.0);
        assert_eq!(tween.sample(0.0), 3.0);
    }

    #[test]
    fn rotation_apply_keeps_other_axes_and_wraps() {
        let mut transform = Transform::from_rotation(Quat::from_rotation_x(0.2));
        let tween = spin();
        tween.apply(&mut transform, 25.0);

        let (y, x, _) = transform.rotation.to_euler(EulerRot::YXZ);
        assert!((x - 0.2).abs() < 1e-4);
        // 25 s is a quarter turn past one full revolution.
        assert!((y - TAU / 4.0).abs() < 1e-4);
    }

    #[test]
    fn translation_apply_only_touches_y() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        bob(2.0).apply(&mut transform, 3.0);
        assert!(transform.translation.abs_diff_eq(Vec3::new(1.0, 2.1, 3.0), EPS));
    }
}
