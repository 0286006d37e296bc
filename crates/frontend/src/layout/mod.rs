pub mod sidebar_toggle;

pub use sidebar_toggle::SidebarToggleController;
