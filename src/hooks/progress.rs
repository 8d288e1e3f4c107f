//! Dual-layer progress indicator hook.
//!
//! The bound element names two layer elements (`main_id`, `trail_id`) plus a
//! target percentage and a delay. On every cycle the new target is compared
//! against the previously recorded value; the leading layer updates
//! immediately and the lagging layer follows after the delay, producing a
//! catch-up animation without an animation timeline.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use serde_json::{Map, Value};

use crate::hooks::HookError;

/// Props required on a progress element, post-normalization.
pub const REQUIRED_PROPS: [&str; 4] = ["main_id", "trail_id", "value", "delay"];

/// Which way the new target moved relative to the previous value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// The two visual layers of the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Main,
    Trail,
}

/// Per-cycle write order: one layer immediately, the other after the delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdatePlan {
    pub immediate: Layer,
    pub deferred: Layer,
}

/// Resolve the direction for one update cycle.
///
/// A target strictly greater than the previously recorded value means
/// increasing; anything else, including the first cycle with no previous
/// value, decreases.
#[must_use]
pub fn resolve_direction(previous: Option<f64>, value: f64) -> Direction {
    match previous {
        Some(prev) if value > prev => Direction::Increasing,
        _ => Direction::Decreasing,
    }
}

/// Write order for a direction: growth leads with the trail layer, shrinkage
/// leads with the main layer.
#[must_use]
pub fn plan_update(direction: Direction) -> UpdatePlan {
    match direction {
        Direction::Increasing => UpdatePlan { immediate: Layer::Trail, deferred: Layer::Main },
        Direction::Decreasing => UpdatePlan { immediate: Layer::Main, deferred: Layer::Trail },
    }
}

/// CSS width for a percentage target, clamped to the valid range.
#[must_use]
pub fn width_style(value: f64) -> String {
    format!("{}%", value.clamp(0.0, 100.0))
}

/// Typed progress configuration for one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressProps {
    pub main_id: String,
    pub trail_id: String,
    pub value: f64,
    pub delay_ms: u32,
}

impl ProgressProps {
    /// Extract typed fields from a normalized prop map.
    pub fn from_props(props: &Map<String, Value>, element: &str) -> Result<Self, HookError> {
        let main_id = prop_str(props, "main_id", element)?;
        let trail_id = prop_str(props, "trail_id", element)?;
        let value = props
            .get("value")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid_prop("value", element))?;
        let delay_ms = props
            .get("delay")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid_prop("delay", element))?
            .max(0.0) as u32;
        Ok(Self { main_id, trail_id, value, delay_ms })
    }
}

fn prop_str(props: &Map<String, Value>, name: &str, element: &str) -> Result<String, HookError> {
    props
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| invalid_prop(name, element))
}

fn invalid_prop(name: &str, element: &str) -> HookError {
    HookError::InvalidProp { name: name.to_owned(), element: element.to_owned() }
}

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::hooks::Hook;
#[cfg(feature = "hydrate")]
use crate::util::attribute;

/// Progress hook instance bound to one element.
///
/// Owns at most one pending deferred write; it is cancelled (by drop) before
/// a new one is scheduled and on destroy, so a superseded cycle can never
/// land a stale width.
#[cfg(feature = "hydrate")]
pub struct ProgressHook {
    el: web_sys::Element,
    main: Option<web_sys::HtmlElement>,
    trail: Option<web_sys::HtmlElement>,
    props: Option<ProgressProps>,
    direction: Direction,
    last_value: Option<f64>,
    pending: Option<Timeout>,
}

#[cfg(feature = "hydrate")]
impl ProgressHook {
    #[must_use]
    pub fn new(el: web_sys::Element) -> Self {
        Self {
            el,
            main: None,
            trail: None,
            props: None,
            direction: Direction::Decreasing,
            last_value: None,
            pending: None,
        }
    }

    /// Re-read props and re-resolve both layer elements for a cycle.
    fn initialize(&mut self) -> Result<(), HookError> {
        let element = attribute::element_descriptor(&self.el);
        let props_map = attribute::parse_hook_props(&self.el, &REQUIRED_PROPS)?;
        let props = ProgressProps::from_props(&props_map, &element)?;

        self.main = Some(resolve_layer(&props.main_id, &element)?);
        self.trail = Some(resolve_layer(&props.trail_id, &element)?);
        self.direction = resolve_direction(self.last_value, props.value);
        self.last_value = Some(props.value);
        self.props = Some(props);
        Ok(())
    }

    fn layer_element(&self, layer: Layer) -> Option<web_sys::HtmlElement> {
        match layer {
            Layer::Main => self.main.clone(),
            Layer::Trail => self.trail.clone(),
        }
    }

    /// Run the two-layer write plan for the current cycle.
    fn run_plan(&mut self) {
        // Cancel any pending write from a superseded cycle.
        self.pending = None;

        let Some(props) = self.props.clone() else {
            return;
        };
        let plan = plan_update(self.direction);

        if let Some(immediate) = self.layer_element(plan.immediate) {
            set_layer_width(&immediate, props.value);
        }
        if let Some(deferred) = self.layer_element(plan.deferred) {
            self.pending = Some(Timeout::new(props.delay_ms, move || {
                set_layer_width(&deferred, props.value);
            }));
        }
    }
}

#[cfg(feature = "hydrate")]
impl Hook for ProgressHook {
    fn on_mount(&mut self) -> Result<(), HookError> {
        self.initialize()?;
        // Both layers jump to the target before the first plan runs.
        if let Some(props) = &self.props {
            if let Some(main) = &self.main {
                set_layer_width(main, props.value);
            }
            if let Some(trail) = &self.trail {
                set_layer_width(trail, props.value);
            }
        }
        self.run_plan();
        Ok(())
    }

    fn on_update(&mut self) -> Result<(), HookError> {
        self.initialize()?;
        self.run_plan();
        Ok(())
    }

    fn on_destroy(&mut self) {
        self.pending = None;
    }
}

#[cfg(feature = "hydrate")]
fn resolve_layer(id: &str, element: &str) -> Result<web_sys::HtmlElement, HookError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| HookError::MissingTarget {
            element: element.to_owned(),
            selector: format!("#{id}"),
        })
}

#[cfg(feature = "hydrate")]
fn set_layer_width(layer: &web_sys::HtmlElement, value: f64) {
    let _ = layer.style().set_property("width", &width_style(value));
}
