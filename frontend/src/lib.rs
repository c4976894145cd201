use log::info;

pub mod app;
mod components;
pub mod config;
mod pages;
mod state;

#[cfg(test)]
mod test_support;

/// Wasm entry point: installs the panic hook and the console logger, then
/// mounts the session gate.
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();

    let config = config::init();
    if let Err(err) = console_log::init_with_level(config.level()) {
        // The first logger stays active; later log output still reaches the console.
        web_sys::console::warn_1(&format!("Console logger not installed: {err}").into());
    }
    info!("Starting {} frontend", config.app_name);

    app::mount_app();
}
