use super::store::SidebarStore;
use crate::shared::dom::{ClickHandler, DomHost};
use contracts::enums::toggle_id::ToggleId;
use contracts::shared::sidebar::{CreationPolicy, SidebarMsg, SidebarViewState, ToggleBinding};
use std::rc::Rc;

pub struct SidebarToggleController<H: DomHost> {
    host: Rc<H>,
    store: SidebarStore,
    /// Elements that already carry a click listener.
    bound: Vec<H::Element>,
    wired: Vec<ToggleId>,
}

impl<H: DomHost + 'static> SidebarToggleController<H> {
    /// Looks up the triggers of every binding and subscribes their click
    /// handlers. Missing elements leave that toggle unwired.
    pub fn initialize(host: Rc<H>, bindings: Vec<ToggleBinding>) -> Self {
        let initial = SidebarViewState::from_body(&bindings, |class| host.body_has_class(class));

        let mut controller = Self {
            host,
            store: SidebarStore::new(initial),
            bound: Vec::new(),
            wired: Vec::new(),
        };

        for binding in &bindings {
            match controller.bind_toggle(binding) {
                Ok(true) => controller.wired.push(binding.toggle),
                Ok(false) => {
                    log::debug!("Toggle '{}': {} not on page", binding.toggle, binding.trigger)
                }
                Err(err) => log::warn!("Toggle '{}' not wired: {}", binding.toggle, err),
            }
        }

        controller
    }

    /// Resolves the trigger for `binding` and subscribes its click handler.
    /// Returns `false` when the page has nothing to bind to. An element gets
    /// at most one listener.
    pub fn bind_toggle(&mut self, binding: &ToggleBinding) -> Result<bool, String> {
        let Some(trigger) = self.resolve_trigger(binding)? else {
            return Ok(false);
        };
        if self.bound.contains(&trigger) {
            return Err(format!("{} already toggles another sidebar", binding.trigger));
        }
        self.host.on_click(&trigger, self.handler(binding))?;
        self.bound.push(trigger);
        Ok(true)
    }

    fn resolve_trigger(&self, binding: &ToggleBinding) -> Result<Option<H::Element>, String> {
        match &binding.creation {
            CreationPolicy::Existing => Ok(self.host.find(&binding.trigger)),
            CreationPolicy::CreateWhenPresent { container, button } => {
                if self.host.find(container).is_none() {
                    return Ok(None);
                }
                if let Some(existing) = self.host.find(&binding.trigger) {
                    return Ok(Some(existing));
                }
                let created = self.host.append_button(button)?;
                log::debug!("Toggle '{}': created #{}", binding.toggle, button.id);
                Ok(Some(created))
            }
        }
    }

    fn handler(&self, binding: &ToggleBinding) -> ClickHandler {
        let host = Rc::clone(&self.host);
        let store = self.store;
        let toggle = binding.toggle;
        let class = binding.target_class.clone();

        Box::new(move || {
            // Other scripts may have touched the class since the last click.
            store.dispatch(SidebarMsg::Synced(toggle, host.body_has_class(&class)));
            let state = store.dispatch(SidebarMsg::ToggleRequested(toggle));
            if let Err(err) = host.set_body_class(&class, state.is_collapsed(toggle)) {
                log::warn!("Failed to update body class '{}': {}", class, err);
            }
        })
    }

    pub fn wired(&self) -> &[ToggleId] {
        &self.wired
    }

    pub fn state(&self) -> SidebarViewState {
        self.store.snapshot()
    }
}
