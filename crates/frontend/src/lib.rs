pub mod layout;
pub mod shared;

use shared::dom::BrowserDom;
use shared::page_config::{load_page_config, log_level};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(dom) = BrowserDom::current() else {
        log::warn!("No document available, sidebar toggles disabled");
        return;
    };

    let config = load_page_config(&dom);
    log::set_max_level(log_level(&config).to_level_filter());

    layout::sidebar_toggle::mount(dom, &config);
}
