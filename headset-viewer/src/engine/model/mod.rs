//! The headset model entity: spawning, centring and its animations.

/// Model spawning, readiness tracking and centring on the origin.
pub mod placement;

/// The spin and float tweens started once the model is in place.
pub mod animations;
