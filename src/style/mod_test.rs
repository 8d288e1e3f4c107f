use super::*;

#[test]
fn config_lists_all_conditional_variants() {
    let config = config();
    let names = config.variants.iter().map(|v| v.name).collect::<Vec<_>>();
    assert_eq!(names, ["no-feedback", "click-loading", "submit-loading", "change-loading"]);
}

#[test]
fn variant_selectors_pair_self_and_ancestor_forms() {
    for variant in STATE_VARIANTS {
        assert_eq!(variant.self_selector, format!(".{}&", variant.name));
        assert_eq!(variant.ancestor_selector, format!(".{} &", variant.name));
    }
}

#[test]
fn theme_tokens_override_brand_and_accent() {
    let config = config();
    assert_eq!(config.theme.brand, "#AA00FF");
    assert_eq!(config.theme.accent, "#E1C564");
}

#[test]
fn content_globs_cover_source_and_templates() {
    let config = config();
    assert!(config.content.iter().any(|glob| glob.contains("src")));
    assert!(config.content.iter().any(|glob| glob.contains("templates")));
}
