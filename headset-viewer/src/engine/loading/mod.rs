//! Asynchronous model loading.
//!
//! The glTF file is requested once, polled every frame until the asset
//! server reports success or failure, and the outcome is published as a
//! `ModelLoadFinished` event.

/// Load request, load-state polling and outcome handling.
pub mod model_loader;
