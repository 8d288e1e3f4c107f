use super::*;

// =============================================================
// Key normalization
// =============================================================

#[test]
fn normalize_keys_snake_cases_camel_case_keys() {
    let value = serde_json::json!({ "mainId": "hp", "trailId": "hp-trail", "delay": 500 });
    let normalized = normalize_keys(value);
    assert_eq!(normalized["main_id"], "hp");
    assert_eq!(normalized["trail_id"], "hp-trail");
    assert_eq!(normalized["delay"], 500);
}

#[test]
fn normalize_keys_recurses_into_nested_objects_and_arrays() {
    let value = serde_json::json!({
        "outerKey": { "innerValue": 1 },
        "items": [{ "itemKind": "a" }]
    });
    let normalized = normalize_keys(value);
    assert_eq!(normalized["outer_key"]["inner_value"], 1);
    assert_eq!(normalized["items"][0]["item_kind"], "a");
}

#[test]
fn normalize_keys_accepts_kebab_case_and_existing_snake_case() {
    let value = serde_json::json!({ "kebab-key": 1, "already_snake": 2 });
    let normalized = normalize_keys(value);
    assert_eq!(normalized["kebab_key"], 1);
    assert_eq!(normalized["already_snake"], 2);
}

// =============================================================
// parse_props
// =============================================================

#[test]
fn parse_props_returns_mapping_with_every_required_field() {
    let raw = r#"{"mainId":"hp","trailId":"hp-trail","value":50,"delay":500}"#;
    let props = parse_props(Some(raw), "DIV#battle-hp", &["main_id", "trail_id", "value", "delay"])
        .expect("valid configuration should parse");
    assert_eq!(props["main_id"], "hp");
    assert_eq!(props["trail_id"], "hp-trail");
    assert_eq!(props["value"], 50);
    assert_eq!(props["delay"], 500);
}

#[test]
fn parse_props_fails_when_attribute_is_absent() {
    let err = parse_props(None, "DIV#battle-hp", &[]).expect_err("missing attribute should fail");
    match err {
        AttributeError::MissingAttribute { attr, element } => {
            assert_eq!(attr, HOOK_PROPS_ATTR);
            assert_eq!(element, "DIV#battle-hp");
        }
        other => panic!("expected MissingAttribute, got {other:?}"),
    }
}

#[test]
fn parse_props_names_the_missing_required_field() {
    let raw = r#"{"mainId":"hp","trailId":"hp-trail","value":50}"#;
    let err = parse_props(Some(raw), "DIV#battle-hp", &["main_id", "trail_id", "value", "delay"])
        .expect_err("missing required field should fail");
    match err {
        AttributeError::MissingRequiredField { name, .. } => assert_eq!(name, "delay"),
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn parse_props_checks_required_names_after_normalization() {
    // Required names are snake_case; the server emits camelCase.
    let raw = r#"{"startValue":1000}"#;
    let props =
        parse_props(Some(raw), "DIV#t", &["start_value"]).expect("normalized key satisfies requirement");
    assert_eq!(props["start_value"], 1000);
}

#[test]
fn parse_props_rejects_malformed_json() {
    let err = parse_props(Some("{nope"), "DIV#t", &[]).expect_err("malformed payload should fail");
    assert!(matches!(err, AttributeError::InvalidPayload { .. }));
}

#[test]
fn parse_props_rejects_non_object_payload() {
    let err = parse_props(Some("[1,2,3]"), "DIV#t", &[]).expect_err("non-object payload should fail");
    assert!(matches!(err, AttributeError::InvalidPayload { .. }));
}
