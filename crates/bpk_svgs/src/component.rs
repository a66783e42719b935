//! Leptos binding for the icon rendering contract.

use leptos::*;

use crate::descriptor::IconDescriptor;
use crate::node::{is_attribute_name, RenderableNode};
use crate::render::render;
use crate::request::{AttributeMap, RenderRequest, StyleMap};

#[derive(Debug, Clone, PartialEq)]
/// Icon geometry handed to [`BpkIcon`]: a catalog entry or an ad hoc descriptor.
pub enum IconSource {
    /// Entry from the generated catalog.
    Catalog(&'static IconDescriptor),
    /// Descriptor assembled at runtime.
    Owned(IconDescriptor),
}

impl IconSource {
    /// Descriptor behind the source.
    pub fn descriptor(&self) -> &IconDescriptor {
        match self {
            Self::Catalog(descriptor) => descriptor,
            Self::Owned(descriptor) => descriptor,
        }
    }
}

impl From<&'static IconDescriptor> for IconSource {
    fn from(descriptor: &'static IconDescriptor) -> Self {
        Self::Catalog(descriptor)
    }
}

impl From<IconDescriptor> for IconSource {
    fn from(descriptor: IconDescriptor) -> Self {
        Self::Owned(descriptor)
    }
}

#[component]
/// Renders a Backpack icon as an inline `<svg>`.
///
/// `style_overrides` and `attributes` go through [`render`], so the root carries the intrinsic
/// size, the merged default style, and the forwarded attributes. Attributes spread onto the
/// component (`<BpkIcon icon=... aria-label=move || label.get() />`) are applied afterwards and
/// may be reactive; a spread `style` is skipped so the merged style stays authoritative.
pub fn BpkIcon(
    /// Icon geometry.
    #[prop(into)]
    icon: IconSource,
    /// Style keys merged over the default `width`/`height`.
    #[prop(optional)]
    style_overrides: Option<StyleMap>,
    /// Static attributes forwarded onto the root.
    #[prop(optional, into)]
    attributes: AttributeMap,
    /// Spread attributes applied after the rendered ones.
    #[prop(attrs)]
    spread: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let request = RenderRequest {
        style_overrides,
        attributes,
    };
    let node = render(icon.descriptor(), &request);

    let mut root = view! { <svg inner_html=node.inner_markup() /> };
    for (name, value) in root_attributes(&node, spread) {
        root = root.attr(name, value);
    }
    root
}

/// Root attributes in application order: the rendered ones, the merged style, then the spread
/// attributes without `style`. Names that are not valid attribute names are dropped.
fn root_attributes(
    node: &RenderableNode,
    spread: Vec<(&'static str, Attribute)>,
) -> Vec<(Oco<'static, str>, Attribute)> {
    let mut applied: Vec<(Oco<'static, str>, Attribute)> = node
        .attributes()
        .iter()
        .filter(|(name, _)| is_attribute_name(name))
        .map(|(name, value)| {
            (
                Oco::from(name.to_string()),
                Attribute::String(Oco::from(value.to_string())),
            )
        })
        .collect();
    if !node.style().is_empty() {
        applied.push((
            Oco::Borrowed("style"),
            Attribute::String(Oco::from(node.style().to_css())),
        ));
    }
    applied.extend(
        spread
            .into_iter()
            .filter(|(name, _)| *name != "style" && is_attribute_name(name))
            .map(|(name, value)| (Oco::Borrowed(name), value)),
    );
    applied
}
