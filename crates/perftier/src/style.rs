//! Style-class and CSS variable views of a settings record.

use std::collections::BTreeSet;

use crate::settings::PerformanceSettings;

/// Presentation flags for styling consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleClasses(BTreeSet<String>);

impl StyleClasses {
    /// Whether a class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Space-separated, ready for an HTML `class` attribute.
    pub fn class_name(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    pub fn into_set(self) -> BTreeSet<String> {
        self.0
    }
}

impl From<StyleClasses> for BTreeSet<String> {
    fn from(classes: StyleClasses) -> Self {
        classes.0
    }
}

/// Derive the style classes for a settings record.
///
/// Always `perf-<tier>`, plus `no-blur`, `no-shadows` and `reduce-motion`
/// when the matching effect is off.
pub fn to_style_classes(settings: &PerformanceSettings) -> StyleClasses {
    let mut classes = BTreeSet::new();
    classes.insert(format!("perf-{}", settings.tier));
    if !settings.enable_blur {
        classes.insert("no-blur".to_string());
    }
    if !settings.enable_shadows {
        classes.insert("no-shadows".to_string());
    }
    if settings.reduce_motion {
        classes.insert("reduce-motion".to_string());
    }
    StyleClasses(classes)
}

/// CSS custom properties for the root element.
pub fn to_css_variables(settings: &PerformanceSettings) -> Vec<(&'static str, String)> {
    vec![
        (
            "--perf-duration-multiplier",
            format_multiplier(settings.animation_duration_multiplier),
        ),
        (
            "--perf-max-animated-elements",
            settings.max_animated_elements.to_string(),
        ),
    ]
}

/// Inline `style` declaration for the CSS variables.
pub fn css_variables_declaration(settings: &PerformanceSettings) -> String {
    to_css_variables(settings)
        .into_iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1.0` stays `1.0`, `0.8` stays `0.8`.
fn format_multiplier(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl PerformanceSettings {
    pub fn style_classes(&self) -> StyleClasses {
        to_style_classes(self)
    }
}
