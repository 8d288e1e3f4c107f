//! Element lifecycle hooks driven by server-pushed updates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders HTML and patches it over the realtime socket; each hook
//! binds to one element and reacts to mount/update/destroy events by
//! re-reading its `data-props` attribute and updating local visual state.
//! Callbacks for a given element run in strict sequence on the browser event
//! loop and never overlap.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod progress;
pub mod timer;

use std::collections::HashMap;

use crate::util::attribute::AttributeError;

/// Hook name recognized on `data-hook` for the progress indicator.
pub const PROGRESS_HOOK: &str = "progress";
/// Hook name recognized on `data-hook` for the countdown timer.
pub const TIMER_HOOK: &str = "timer";

/// Error raised while setting up or updating a hook.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    /// A configured target element could not be resolved in the DOM.
    #[error("missing target element \"{selector}\" for hook on {element}")]
    MissingTarget { element: String, selector: String },
    /// A prop is present but cannot be read with the expected type.
    #[error("invalid prop \"{name}\" on element {element}")]
    InvalidProp { name: String, element: String },
}

/// Lifecycle callbacks bound to one DOM element.
///
/// Mount and update errors halt that hook's setup; they are reported by the
/// registry, not recovered. Destroy releases timers and never fails.
pub trait Hook {
    fn on_mount(&mut self) -> Result<(), HookError>;
    fn on_update(&mut self) -> Result<(), HookError>;
    fn on_destroy(&mut self);
}

/// Per-element hook instances keyed by element id.
///
/// Each instance owns its own timer handles exclusively; the registry only
/// routes lifecycle events.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Box<dyn Hook>>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Register a hook under an element id and run its mount callback.
    ///
    /// A previous instance under the same id is destroyed first. A hook that
    /// fails to mount is not retained.
    pub fn mount(&mut self, element_id: &str, mut hook: Box<dyn Hook>) -> Result<(), HookError> {
        if let Some(mut replaced) = self.hooks.remove(element_id) {
            replaced.on_destroy();
        }
        hook.on_mount()?;
        self.hooks.insert(element_id.to_owned(), hook);
        Ok(())
    }

    /// Re-dispatch the update callback for the element's hook.
    ///
    /// Returns `Ok(false)` when no hook is registered under the id.
    pub fn update(&mut self, element_id: &str) -> Result<bool, HookError> {
        match self.hooks.get_mut(element_id) {
            Some(hook) => {
                hook.on_update()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Tear down and drop the element's hook. Returns `false` for unknown ids.
    pub fn destroy(&mut self, element_id: &str) -> bool {
        match self.hooks.remove(element_id) {
            Some(mut hook) => {
                hook.on_destroy();
                true
            }
            None => false,
        }
    }

    /// Tear down every registered hook.
    pub fn destroy_all(&mut self) {
        for (_, mut hook) in self.hooks.drain() {
            hook.on_destroy();
        }
    }
}

/// Construct the hook instance registered under a `data-hook` name.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn hook_for_element(name: &str, el: &web_sys::Element) -> Option<Box<dyn Hook>> {
    match name {
        PROGRESS_HOOK => Some(Box::new(progress::ProgressHook::new(el.clone()))),
        TIMER_HOOK => Some(Box::new(timer::TimerHook::new(el.clone()))),
        _ => None,
    }
}
