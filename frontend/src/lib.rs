mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting content admin");

    // Requests await the resolved config, so mounting need not wait.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    router::mount_app();
}
