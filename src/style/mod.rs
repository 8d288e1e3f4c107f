//! Declarative configuration for the utility-class styling build.
//!
//! Pure data consumed by the asset pipeline: where to scan for class usage,
//! theme token overrides, and the conditional-state variants that map
//! loading/feedback states to selector patterns. No runtime behavior.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Source globs scanned for utility-class usage.
pub const CONTENT_GLOBS: [&str; 2] = ["./src/**/*.rs", "./templates/**/*.html"];

/// Theme color token overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub brand: &'static str,
    pub accent: &'static str,
}

/// Theme tokens for the application palette.
pub const THEME_COLORS: ThemeColors = ThemeColors { brand: "#AA00FF", accent: "#E1C564" };

/// A conditional-state variant: a name expanded to the selector pair that
/// matches the state class on the element itself and on an ancestor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateVariant {
    pub name: &'static str,
    pub self_selector: &'static str,
    pub ancestor_selector: &'static str,
}

/// Conditional-state variants tied to loading/feedback classes.
pub const STATE_VARIANTS: [StateVariant; 4] = [
    StateVariant {
        name: "no-feedback",
        self_selector: ".no-feedback&",
        ancestor_selector: ".no-feedback &",
    },
    StateVariant {
        name: "click-loading",
        self_selector: ".click-loading&",
        ancestor_selector: ".click-loading &",
    },
    StateVariant {
        name: "submit-loading",
        self_selector: ".submit-loading&",
        ancestor_selector: ".submit-loading &",
    },
    StateVariant {
        name: "change-loading",
        self_selector: ".change-loading&",
        ancestor_selector: ".change-loading &",
    },
];

/// Styling build configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleConfig {
    pub content: Vec<&'static str>,
    pub theme: ThemeColors,
    pub variants: Vec<StateVariant>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        config()
    }
}

/// The application's styling configuration.
#[must_use]
pub fn config() -> StyleConfig {
    StyleConfig {
        content: CONTENT_GLOBS.to_vec(),
        theme: THEME_COLORS,
        variants: STATE_VARIANTS.to_vec(),
    }
}
