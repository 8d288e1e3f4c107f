//! Hook configuration parsing from the server-rendered `data-props` attribute.
//!
//! The server serializes per-element hook configuration as one JSON object in
//! a single attribute. Keys arrive camelCased from the renderer; they are
//! normalized to snake_case once per mount/update cycle before required-field
//! validation, so hooks read one canonical spelling.

#[cfg(test)]
#[path = "attribute_test.rs"]
mod attribute_test;

use serde_json::{Map, Value};

/// Attribute holding the serialized hook configuration.
pub const HOOK_PROPS_ATTR: &str = "data-props";

/// Error raised while reading hook configuration off an element.
///
/// Raised synchronously during hook mount/update and not locally recovered;
/// the registry reports it and abandons that hook's setup.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// The configuration attribute is absent from the element.
    #[error("missing attribute \"{attr}\" on element {element}")]
    MissingAttribute { attr: String, element: String },
    /// A required key is absent after normalization.
    #[error("required prop \"{name}\" not found on element {element}")]
    MissingRequiredField { name: String, element: String },
    /// The attribute is present but does not hold a JSON object.
    #[error("invalid props payload on element {element}: {reason}")]
    InvalidPayload { element: String, reason: String },
}

/// Recursively convert all object keys in a JSON value to snake_case.
#[must_use]
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (snake_case_key(&key), normalize_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

fn snake_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '-' || ch == ' ' {
            out.push('_');
            prev_lower = false;
        } else if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}

/// Parse a raw `data-props` payload and validate required field names.
///
/// `element` is a human-readable descriptor (`TAG#id`) used in error
/// messages. Required names are spelled post-normalization (snake_case).
pub fn parse_props(
    raw: Option<&str>,
    element: &str,
    required: &[&str],
) -> Result<Map<String, Value>, AttributeError> {
    let Some(raw) = raw else {
        return Err(AttributeError::MissingAttribute {
            attr: HOOK_PROPS_ATTR.to_owned(),
            element: element.to_owned(),
        });
    };

    let parsed = serde_json::from_str::<Value>(raw).map_err(|e| AttributeError::InvalidPayload {
        element: element.to_owned(),
        reason: e.to_string(),
    })?;
    let Value::Object(props) = normalize_keys(parsed) else {
        return Err(AttributeError::InvalidPayload {
            element: element.to_owned(),
            reason: "expected a JSON object".to_owned(),
        });
    };

    for name in required {
        if !props.contains_key(*name) {
            return Err(AttributeError::MissingRequiredField {
                name: (*name).to_owned(),
                element: element.to_owned(),
            });
        }
    }

    Ok(props)
}

/// Read and parse the hook configuration attribute from an element.
#[cfg(feature = "hydrate")]
pub fn parse_hook_props(
    el: &web_sys::Element,
    required: &[&str],
) -> Result<Map<String, Value>, AttributeError> {
    let element = element_descriptor(el);
    parse_props(el.get_attribute(HOOK_PROPS_ATTR).as_deref(), &element, required)
}

/// Human-readable element descriptor (`TAG#id`) for error messages.
#[cfg(feature = "hydrate")]
#[must_use]
pub(crate) fn element_descriptor(el: &web_sys::Element) -> String {
    let id = el.id();
    if id.is_empty() {
        el.tag_name()
    } else {
        format!("{}#{id}", el.tag_name())
    }
}
