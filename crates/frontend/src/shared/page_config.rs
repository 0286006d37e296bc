use crate::shared::dom::BrowserDom;
use contracts::shared::sidebar::SidebarConfig;
use std::str::FromStr;

/// `<script type="application/json" id="sidebar-toggle-config">`
pub const CONFIG_ELEMENT_ID: &str = "sidebar-toggle-config";
/// `<body data-sidebar-variant="lab">`
pub const VARIANT_ATTRIBUTE: &str = "data-sidebar-variant";

/// Reads the toggle configuration the page carries, falling back to the
/// embedded default when it is missing or broken.
pub fn load_page_config(dom: &BrowserDom) -> SidebarConfig {
    let document = dom.document();
    let raw_json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let variant_attr = document
        .body()
        .and_then(|body| body.get_attribute(VARIANT_ATTRIBUTE));

    match SidebarConfig::resolve(raw_json.as_deref(), variant_attr.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid sidebar toggle config, using defaults: {:#}", err);
            SidebarConfig::default()
        }
    }
}

pub fn log_level(config: &SidebarConfig) -> log::Level {
    log::Level::from_str(&config.log_level).unwrap_or(log::Level::Info)
}
