//! Computed style lookup

use crate::platform::Platform;

/// Look up a CSS property, trying the legacy current-style object, then the
/// standard computed style, then the inline style. The first path that
/// yields a value wins.
pub fn css_property<P: Platform>(platform: &P, node: P::Node, property: &str) -> Option<String> {
    platform
        .legacy_style(node, property)
        .or_else(|| platform.computed_style(node, property))
        .or_else(|| platform.inline_style(node, property))
}

/// Effective `position` of an element, if any path reports one
pub fn computed_position<P: Platform>(platform: &P, node: P::Node) -> Option<String> {
    css_property(platform, node, "position")
}

/// Whether the element keeps the default `static` positioning and so does
/// not establish a coordinate frame for absolutely positioned descendants.
/// A missing or empty value counts as `static`.
pub fn is_static_positioned<P: Platform>(platform: &P, node: P::Node) -> bool {
    match computed_position(platform, node) {
        None => true,
        Some(value) => {
            let value = value.trim();
            value.is_empty() || value == "static"
        }
    }
}
