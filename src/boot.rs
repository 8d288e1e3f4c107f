//! Application entry wiring for the browser.
//!
//! Boot order: panic hook and console logging first, then the navigation
//! loading bar, then hook discovery over the server-rendered document, and
//! finally the realtime socket with the populated registry attached.

/// Attribute naming the hook bound to an element.
pub const HOOK_ATTR: &str = "data-hook";

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::hooks::{self, HookRegistry};
#[cfg(feature = "hydrate")]
use crate::nav::loading_bar;
#[cfg(feature = "hydrate")]
use crate::net::live_socket;

/// WASM entry point: attach all client behavior to the rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    loading_bar::install();

    let registry = Rc::new(RefCell::new(HookRegistry::new()));
    mount_document_hooks(&registry);

    match live_socket::read_csrf_token() {
        Some(token) => live_socket::connect(&token, registry),
        None => log::error!("csrf token meta tag not found; live socket not started"),
    }
}

/// Scan the document for `[data-hook]` elements and mount each one.
#[cfg(feature = "hydrate")]
fn mount_document_hooks(registry: &Rc<RefCell<HookRegistry>>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(&format!("[{HOOK_ATTR}]")) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        mount_hook_element(registry, &el);
    }
}

#[cfg(feature = "hydrate")]
fn mount_hook_element(registry: &Rc<RefCell<HookRegistry>>, el: &web_sys::Element) {
    let Some(name) = el.get_attribute(HOOK_ATTR) else {
        return;
    };
    let id = el.id();
    if id.is_empty() {
        log::error!("hook \"{name}\" element has no id; skipped");
        return;
    }
    let Some(hook) = hooks::hook_for_element(&name, el) else {
        log::warn!("unknown hook \"{name}\" on #{id}");
        return;
    };
    if let Err(e) = registry.borrow_mut().mount(&id, hook) {
        log::error!("hook \"{name}\" failed to mount on #{id}: {e}");
    }
}
