//! Countdown timer hook.
//!
//! The bound element carries a starting duration and the selector of the
//! child element that renders the remaining time:
//!
//!  * `start` - the value in milliseconds to count from
//!  * `target` - selector of the rendering child, scoped to the element
//!
//! The countdown ticks every 100ms. Near expiry the hook element is flagged
//! with a warning attribute carrying the remaining seconds; at zero the
//! ticking stops.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use serde_json::{Map, Value};

use crate::hooks::HookError;

/// Fixed tick interval.
pub const TICK_INTERVAL_MS: u32 = 100;
/// Remaining seconds at or below which the warning flag is set.
pub const WARNING_SECONDS: f64 = 10.0;
/// Attribute flagged on the hook element near expiry.
pub const WARNING_ATTR: &str = "data-warning";

/// Pure countdown state advanced by fixed ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining_ms: i64,
    done: bool,
}

/// Outcome of one tick: what to render and whether ticking stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Remaining duration rendered as seconds with one decimal place.
    pub label: String,
    /// Remaining seconds once at or below the warning threshold.
    pub warning: Option<f64>,
    /// Terminal: the countdown reached zero and stops ticking.
    pub done: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(start_ms: i64) -> Self {
        Self { remaining_ms: start_ms, done: false }
    }

    #[must_use]
    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one tick interval. Once done, no further mutation occurs.
    pub fn tick(&mut self) -> Tick {
        if !self.done {
            self.remaining_ms -= i64::from(TICK_INTERVAL_MS);
        }
        let seconds = self.remaining_ms as f64 / 1000.0;
        if seconds <= 0.0 {
            self.done = true;
        }
        Tick {
            label: format!("{seconds:.1}s"),
            warning: (seconds <= WARNING_SECONDS).then_some(seconds),
            done: self.done,
        }
    }
}

/// Warning attribute value: the remaining seconds in shortest form.
#[must_use]
pub fn warning_attr_value(seconds: f64) -> String {
    format!("{seconds}")
}

/// Typed timer configuration for one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerProps {
    pub start_ms: i64,
    pub target: String,
}

impl TimerProps {
    /// Extract typed fields from a normalized prop map.
    ///
    /// Neither prop sits in a formal required list, but both are extracted
    /// fail-fast so a misconfigured element surfaces at mount instead of
    /// ticking garbage.
    pub fn from_props(props: &Map<String, Value>, element: &str) -> Result<Self, HookError> {
        let start_ms = props
            .get("start")
            .and_then(Value::as_f64)
            .ok_or_else(|| HookError::InvalidProp {
                name: "start".to_owned(),
                element: element.to_owned(),
            })?
            .round() as i64;
        let target = props
            .get("target")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| HookError::InvalidProp {
                name: "target".to_owned(),
                element: element.to_owned(),
            })?;
        Ok(Self { start_ms, target })
    }
}

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::hooks::Hook;
#[cfg(feature = "hydrate")]
use crate::util::attribute;

#[cfg(feature = "hydrate")]
struct TimerRuntime {
    el: web_sys::Element,
    target: Option<web_sys::Element>,
    countdown: Countdown,
    interval: Option<Interval>,
}

#[cfg(feature = "hydrate")]
impl TimerRuntime {
    /// One tick: advance the countdown and write the DOM. Returns whether
    /// the countdown just went terminal.
    fn advance(&mut self) -> bool {
        let tick = self.countdown.tick();
        if let Some(seconds) = tick.warning {
            let _ = self.el.set_attribute(WARNING_ATTR, &warning_attr_value(seconds));
        }
        if let Some(target) = &self.target {
            target.set_inner_html(&tick.label);
        }
        tick.done
    }
}

/// Countdown hook instance bound to one element.
///
/// The interval handle lives inside the shared runtime so the tick callback
/// can stop itself at expiry; drop cancels it on destroy.
#[cfg(feature = "hydrate")]
pub struct TimerHook {
    runtime: Rc<RefCell<TimerRuntime>>,
}

#[cfg(feature = "hydrate")]
impl TimerHook {
    #[must_use]
    pub fn new(el: web_sys::Element) -> Self {
        Self {
            runtime: Rc::new(RefCell::new(TimerRuntime {
                el,
                target: None,
                countdown: Countdown::new(0),
                interval: None,
            })),
        }
    }

    /// Re-read props (fresh starting duration) and re-resolve the target.
    fn initialize(&self) -> Result<(), HookError> {
        let mut runtime = self.runtime.borrow_mut();
        let element = attribute::element_descriptor(&runtime.el);
        let props_map = attribute::parse_hook_props(&runtime.el, &[])?;
        let props = TimerProps::from_props(&props_map, &element)?;

        let selector = format!(":scope{}", props.target);
        let target = runtime
            .el
            .query_selector(&selector)
            .ok()
            .flatten()
            .ok_or(HookError::MissingTarget { element, selector })?;

        runtime.target = Some(target);
        runtime.countdown = Countdown::new(props.start_ms);
        Ok(())
    }

    /// Start (or restart) the fixed-rate tick. Replacing the handle cancels
    /// any previous interval.
    fn start_ticking(&self) {
        let runtime = Rc::clone(&self.runtime);
        let interval = Interval::new(TICK_INTERVAL_MS, move || on_tick(&runtime));
        self.runtime.borrow_mut().interval = Some(interval);
    }
}

#[cfg(feature = "hydrate")]
fn on_tick(runtime: &Rc<RefCell<TimerRuntime>>) {
    let done = runtime.borrow_mut().advance();
    if done {
        // Terminal: stop ticking. The handle is taken out before the drop so
        // the RefCell borrow has already ended.
        let stopped = runtime.borrow_mut().interval.take();
        drop(stopped);
    }
}

#[cfg(feature = "hydrate")]
impl Hook for TimerHook {
    fn on_mount(&mut self) -> Result<(), HookError> {
        self.initialize()?;
        self.start_ticking();
        Ok(())
    }

    fn on_update(&mut self) -> Result<(), HookError> {
        self.initialize()?;
        let _ = self.runtime.borrow_mut().advance();
        self.start_ticking();
        Ok(())
    }

    fn on_destroy(&mut self) {
        self.runtime.borrow_mut().interval = None;
    }
}
