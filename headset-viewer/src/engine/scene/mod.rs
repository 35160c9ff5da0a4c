//! Static scene content: the light rig.

/// Ambient light plus key and fill directional lights.
pub mod lighting;
