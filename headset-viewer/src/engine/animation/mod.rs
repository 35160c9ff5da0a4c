//! Property tweens for the headset model.
//!
//! Tweens live in a `TweenSet` component on the animated entity and are
//! sampled against app time every frame.

/// Tween definition, sampling, and the system that drives them.
pub mod tween;

/// Cancellation of running tweens.
pub mod control;
