use crate::config::ViewerConfig;
use crate::engine::core::app_setup::initialize;
use crate::engine::host::{find_host_element, load_config, report_startup_error};
use bevy::prelude::*;

mod config;
mod constants;
mod engine;
mod error;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        engine::host::idle::run_when_idle(start_viewer);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        start_viewer();
    }
}

/// Resolve configuration and the host element, then run the viewer.
/// A missing host is reported and nothing else happens.
fn start_viewer() {
    let config = load_config().unwrap_or_else(|err| {
        report_startup_error(&err);
        ViewerConfig::default()
    });
    let host = find_host_element(&config);

    match initialize(host, config) {
        Ok(app) => run(app),
        Err(err) => report_startup_error(&err),
    }
}

fn run(mut app: App) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
