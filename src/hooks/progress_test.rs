use super::*;

use crate::util::attribute::parse_props;

// =============================================================
// Direction resolution
// =============================================================

#[test]
fn direction_increases_when_target_strictly_greater() {
    assert_eq!(resolve_direction(Some(20.0), 50.0), Direction::Increasing);
}

#[test]
fn direction_decreases_when_target_lower() {
    assert_eq!(resolve_direction(Some(80.0), 30.0), Direction::Decreasing);
}

#[test]
fn direction_decreases_on_equal_target() {
    assert_eq!(resolve_direction(Some(50.0), 50.0), Direction::Decreasing);
}

#[test]
fn first_cycle_without_previous_value_decreases() {
    assert_eq!(resolve_direction(None, 50.0), Direction::Decreasing);
}

// =============================================================
// Update plan
// =============================================================

#[test]
fn increasing_updates_trail_immediately_and_defers_main() {
    let plan = plan_update(resolve_direction(Some(20.0), 50.0));
    assert_eq!(plan.immediate, Layer::Trail);
    assert_eq!(plan.deferred, Layer::Main);
}

#[test]
fn decreasing_updates_main_immediately_and_defers_trail() {
    let plan = plan_update(resolve_direction(Some(80.0), 30.0));
    assert_eq!(plan.immediate, Layer::Main);
    assert_eq!(plan.deferred, Layer::Trail);
}

// =============================================================
// Width rendering
// =============================================================

#[test]
fn width_style_formats_percentages() {
    assert_eq!(width_style(50.0), "50%");
    assert_eq!(width_style(33.5), "33.5%");
}

#[test]
fn width_style_clamps_to_valid_range() {
    assert_eq!(width_style(150.0), "100%");
    assert_eq!(width_style(-3.0), "0%");
}

// =============================================================
// Prop extraction
// =============================================================

fn props_from(raw: &str) -> serde_json::Map<String, serde_json::Value> {
    parse_props(Some(raw), "DIV#battle-hp", &REQUIRED_PROPS).expect("props should parse")
}

#[test]
fn progress_props_extracts_typed_fields() {
    let props = props_from(r#"{"mainId":"hp","trailId":"hp-trail","value":50,"delay":500}"#);
    let props = ProgressProps::from_props(&props, "DIV#battle-hp").expect("typed props");
    assert_eq!(props.main_id, "hp");
    assert_eq!(props.trail_id, "hp-trail");
    assert_eq!(props.value, 50.0);
    assert_eq!(props.delay_ms, 500);
}

#[test]
fn progress_props_rejects_non_numeric_value() {
    let props = props_from(r#"{"mainId":"hp","trailId":"hp-trail","value":"half","delay":500}"#);
    let err = ProgressProps::from_props(&props, "DIV#battle-hp").expect_err("value must be numeric");
    match err {
        HookError::InvalidProp { name, .. } => assert_eq!(name, "value"),
        other => panic!("expected InvalidProp, got {other:?}"),
    }
}

#[test]
fn progress_props_rejects_non_string_layer_id() {
    let props = props_from(r#"{"mainId":7,"trailId":"hp-trail","value":50,"delay":500}"#);
    let err = ProgressProps::from_props(&props, "DIV#battle-hp").expect_err("main_id must be a string");
    match err {
        HookError::InvalidProp { name, .. } => assert_eq!(name, "main_id"),
        other => panic!("expected InvalidProp, got {other:?}"),
    }
}
