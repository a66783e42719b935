//! Per-call render input.

use serde::{Deserialize, Serialize};

use crate::props::PropertyMap;

/// Style declarations merged shallowly over an icon's default style.
pub type StyleMap = PropertyMap;

/// Attributes forwarded verbatim onto the rendered `<svg>` root.
pub type AttributeMap = PropertyMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Caller input for one [`render`](crate::render) call.
///
/// An absent `style_overrides` behaves exactly like an empty one. A `style` key inside
/// `attributes` is ignored: the root style always comes from the descriptor default plus
/// `style_overrides`.
pub struct RenderRequest {
    /// Style keys replacing (or extending) the default style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_overrides: Option<StyleMap>,
    /// Attributes spread onto the root element after the intrinsic ones.
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub attributes: AttributeMap,
}

impl RenderRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one style override.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style_overrides
            .get_or_insert_with(StyleMap::new)
            .insert(key, value);
        self
    }

    /// Adds one forwarded attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Parses a request from `{"style_overrides": {...}, "attributes": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] for malformed input or non-string values.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
