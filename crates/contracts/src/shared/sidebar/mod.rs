//! Модель переключателей сайдбаров.
//!
//! Переключатель описывается записью [`binding::ToggleBinding`], его текущее
//! значение хранится в [`view_state::SidebarViewState`], а страница выбирает
//! привязки через [`config::SidebarConfig`].

pub mod binding;
pub mod config;
pub mod view_state;

pub use binding::{ButtonSpec, CreationPolicy, ElementLookup, ToggleBinding};
pub use config::SidebarConfig;
pub use view_state::{SidebarMsg, SidebarViewState};
