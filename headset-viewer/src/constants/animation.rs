/// One full turn about Y takes this long.
pub const SPIN_PERIOD_SECS: f32 = 20.0;

/// Height of the floating bob above the centred position.
pub const FLOAT_AMPLITUDE: f32 = 0.1;

/// Duration of one leg of the bob (up or down).
pub const FLOAT_LEG_SECS: f32 = 3.0;

/// Quiet period before a burst of resize events is applied.
pub const RESIZE_DEBOUNCE_MS: u64 = 200;

/// Startup delay used when the browser has no idle callback.
pub const IDLE_FALLBACK_DELAY_MS: i32 = 100;
