use crate::enums::toggle_id::ToggleId;
use crate::shared::sidebar::binding::ToggleBinding;

/// Флаги свёрнутости обоих сайдбаров. Классы `<body>` выводятся из них.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarViewState {
    pub nav_collapsed: bool,
    pub toc_collapsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMsg {
    /// Значение класса на `<body>` прямо сейчас
    Synced(ToggleId, bool),
    ToggleRequested(ToggleId),
}

impl SidebarViewState {
    /// Начальное состояние по классам, уже стоящим на `<body>`
    pub fn from_body(bindings: &[ToggleBinding], body_has_class: impl Fn(&str) -> bool) -> Self {
        let mut state = Self::default();
        for binding in bindings {
            state.set(binding.toggle, body_has_class(&binding.target_class));
        }
        state
    }

    pub fn is_collapsed(&self, toggle: ToggleId) -> bool {
        match toggle {
            ToggleId::Nav => self.nav_collapsed,
            ToggleId::Toc => self.toc_collapsed,
        }
    }

    pub fn set(&mut self, toggle: ToggleId, collapsed: bool) {
        match toggle {
            ToggleId::Nav => self.nav_collapsed = collapsed,
            ToggleId::Toc => self.toc_collapsed = collapsed,
        }
    }

    pub fn apply(&mut self, msg: SidebarMsg) {
        match msg {
            SidebarMsg::Synced(toggle, collapsed) => self.set(toggle, collapsed),
            SidebarMsg::ToggleRequested(toggle) => self.set(toggle, !self.is_collapsed(toggle)),
        }
    }
}
