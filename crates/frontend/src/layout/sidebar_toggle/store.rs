use contracts::shared::sidebar::{SidebarMsg, SidebarViewState};
use leptos::prelude::*;

/// Owner of the sidebar view state. Both click handlers share one copy.
#[derive(Clone, Copy)]
pub struct SidebarStore {
    pub state: RwSignal<SidebarViewState>,
}

impl SidebarStore {
    pub fn new(initial: SidebarViewState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Applies the message and returns the resulting state.
    pub fn dispatch(&self, msg: SidebarMsg) -> SidebarViewState {
        self.state.update(|state| state.apply(msg));
        self.snapshot()
    }

    pub fn snapshot(&self) -> SidebarViewState {
        self.state.get_untracked()
    }
}
