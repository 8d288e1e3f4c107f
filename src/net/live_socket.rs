//! Realtime socket bootstrap and server event dispatch.
//!
//! One-time initialization: read the page security token, open the
//! persistent websocket with the hook registry attached, and keep the handle
//! reachable for diagnostics. When the transport closes the socket the
//! receive loop ends and logs; reconnection is owned by the transport.

#[cfg(test)]
#[path = "live_socket_test.rs"]
mod live_socket_test;

use serde::Deserialize;

/// Fixed endpoint for the realtime connection.
pub const SOCKET_PATH: &str = "/live/websocket";

/// Meta tag name carrying the page security token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Events the server pushes over the socket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerEvent {
    /// The server patched an element and its props; re-run its hook update.
    HookUpdate { id: String },
    /// A page transition began.
    LoadingStart,
    /// A page transition finished.
    LoadingStop,
}

#[derive(Deserialize)]
struct RawEvent {
    event: String,
    #[serde(default)]
    id: Option<String>,
}

/// Parse one incoming socket frame. Unknown or malformed frames yield `None`.
#[must_use]
pub fn parse_server_event(raw: &str) -> Option<ServerEvent> {
    let raw = serde_json::from_str::<RawEvent>(raw).ok()?;
    match raw.event.as_str() {
        "hook:update" => raw.id.map(|id| ServerEvent::HookUpdate { id }),
        "page:loading-start" => Some(ServerEvent::LoadingStart),
        "page:loading-stop" => Some(ServerEvent::LoadingStop),
        _ => None,
    }
}

/// Build the websocket URL for a page; the scheme follows the page scheme.
#[must_use]
pub fn socket_url(page_href: &str, host: &str, csrf_token: &str) -> String {
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}{SOCKET_PATH}?_csrf_token={csrf_token}")
}

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::hooks::HookRegistry;

/// Handle to the live connection, retained for diagnostic access.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct LiveSocket {
    registry: Rc<RefCell<HookRegistry>>,
    url: String,
}

#[cfg(feature = "hydrate")]
impl LiveSocket {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static LIVE_SOCKET: RefCell<Option<LiveSocket>> = const { RefCell::new(None) };
}

/// Read the page security token from its meta tag.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn read_csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name='{CSRF_META_NAME}']"))
        .ok()??;
    meta.get_attribute("content")
}

/// Open the realtime connection with the given hook registry attached.
#[cfg(feature = "hydrate")]
pub fn connect(csrf_token: &str, registry: Rc<RefCell<HookRegistry>>) {
    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:4000".to_owned());
    let url = socket_url(&href, &host, csrf_token);

    let socket = LiveSocket { registry: Rc::clone(&registry), url: url.clone() };
    LIVE_SOCKET.with(|slot| *slot.borrow_mut() = Some(socket));

    wasm_bindgen_futures::spawn_local(socket_loop(url, registry));
}

/// The retained connection handle, if the socket has been bootstrapped.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn live_socket() -> Option<LiveSocket> {
    LIVE_SOCKET.with(|slot| slot.borrow().clone())
}

#[cfg(feature = "hydrate")]
async fn socket_loop(url: String, registry: Rc<RefCell<HookRegistry>>) {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            log::warn!("live socket open failed: {e}");
            return;
        }
    };
    log::info!("live socket connected: {url}");

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => match parse_server_event(&text) {
                Some(event) => dispatch_event(&event, &registry),
                None => log::warn!("unhandled socket frame: {text}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                log::warn!("live socket recv error: {e}");
                break;
            }
        }
    }
    log::info!("live socket closed");
}

#[cfg(feature = "hydrate")]
fn dispatch_event(event: &ServerEvent, registry: &Rc<RefCell<HookRegistry>>) {
    match event {
        ServerEvent::HookUpdate { id } => {
            let result = registry.borrow_mut().update(id);
            match result {
                Ok(true) => {}
                Ok(false) => log::warn!("hook:update for unknown element #{id}"),
                Err(e) => log::error!("hook update failed on #{id}: {e}"),
            }
        }
        ServerEvent::LoadingStart => emit_window_event(crate::nav::loading_bar::LOADING_START_EVENT),
        ServerEvent::LoadingStop => emit_window_event(crate::nav::loading_bar::LOADING_STOP_EVENT),
    }
}

#[cfg(feature = "hydrate")]
fn emit_window_event(name: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(event) = web_sys::CustomEvent::new(name)
    {
        let _ = window.dispatch_event(&event);
    }
}
