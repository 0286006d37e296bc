//! Collapse/expand of the left navigation and the right page TOC.

pub mod controller;
pub mod store;

pub use controller::SidebarToggleController;
pub use store::SidebarStore;

use crate::shared::dom::BrowserDom;
use contracts::shared::sidebar::SidebarConfig;
use std::rc::Rc;

/// Wires the toggles of the current page. Called once from the start hook.
pub fn mount(dom: BrowserDom, config: &SidebarConfig) {
    let controller = SidebarToggleController::initialize(Rc::new(dom), config.resolved_bindings());
    log::info!(
        "Sidebar toggles ready (variant '{}', wired: {:?})",
        config.variant,
        controller.wired()
    );
}
