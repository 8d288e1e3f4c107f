//! Top-of-page loading bar shown during slow navigations.
//!
//! A navigation start signal arms a short grace delay; the bar becomes
//! visible only when the delay elapses with the navigation still pending.
//! Fast navigations stop the pending state before the delay fires and the
//! bar never flashes.

#[cfg(test)]
#[path = "loading_bar_test.rs"]
mod loading_bar_test;

/// Delay between a navigation start signal and the bar becoming visible.
pub const GRACE_DELAY_MS: u32 = 300;

/// Window event marking the start of a page transition.
pub const LOADING_START_EVENT: &str = "page-loading-start";
/// Window event marking the end of a page transition.
pub const LOADING_STOP_EVENT: &str = "page-loading-stop";

/// Bar fill color.
pub const BAR_COLOR: &str = "#29d";
/// Drop shadow under the bar.
pub const BAR_SHADOW: &str = "rgba(0, 0, 0, .3)";

/// Grace-delay state machine for the loading bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingBar {
    armed: bool,
    visible: bool,
}

impl LoadingBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation started: arm the grace delay. The caller schedules a grace
    /// timer, replacing (and thereby cancelling) any previous one.
    pub fn on_start(&mut self) {
        self.armed = true;
    }

    /// The grace delay elapsed. The bar shows only if still armed.
    pub fn on_grace_elapsed(&mut self) -> bool {
        if self.armed {
            self.visible = true;
        }
        self.visible
    }

    /// Navigation finished: disarm and hide immediately.
    pub fn on_stop(&mut self) {
        self.armed = false;
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
const BAR_ID: &str = "nav-loading-bar";

#[cfg(feature = "hydrate")]
struct Indicator {
    state: LoadingBar,
    bar: web_sys::HtmlElement,
    grace: Option<Timeout>,
}

/// Create the bar element and attach the navigation event listeners.
///
/// Called once at boot; the listeners (and the indicator they share) live
/// for the page lifetime.
#[cfg(feature = "hydrate")]
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let Ok(bar) = document.create_element("div") else {
        return;
    };
    let _ = bar.set_attribute("id", BAR_ID);
    let _ = bar.set_attribute(
        "style",
        &format!(
            "position:fixed;top:0;left:0;height:3px;width:100%;\
             background:{BAR_COLOR};box-shadow:0 1px 3px {BAR_SHADOW};\
             display:none;z-index:9999;"
        ),
    );
    let _ = body.append_child(&bar);
    let Ok(bar) = bar.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let indicator = Rc::new(RefCell::new(Indicator { state: LoadingBar::new(), bar, grace: None }));

    let start_indicator = Rc::clone(&indicator);
    let on_start = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handle_start(&start_indicator);
    });
    let _ = window.add_event_listener_with_callback(LOADING_START_EVENT, on_start.as_ref().unchecked_ref());
    on_start.forget();

    let stop_indicator = Rc::clone(&indicator);
    let on_stop = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handle_stop(&stop_indicator);
    });
    let _ = window.add_event_listener_with_callback(LOADING_STOP_EVENT, on_stop.as_ref().unchecked_ref());
    on_stop.forget();
}

#[cfg(feature = "hydrate")]
fn handle_start(indicator: &Rc<RefCell<Indicator>>) {
    let grace_indicator = Rc::clone(indicator);
    let mut indicator = indicator.borrow_mut();
    indicator.state.on_start();
    indicator.grace = Some(Timeout::new(GRACE_DELAY_MS, move || {
        let mut indicator = grace_indicator.borrow_mut();
        if indicator.state.on_grace_elapsed() {
            let _ = indicator.bar.style().set_property("display", "block");
        }
    }));
}

#[cfg(feature = "hydrate")]
fn handle_stop(indicator: &Rc<RefCell<Indicator>>) {
    let mut indicator = indicator.borrow_mut();
    indicator.state.on_stop();
    indicator.grace = None;
    let _ = indicator.bar.style().set_property("display", "none");
}
