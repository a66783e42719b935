//! The generic icon rendering contract.

use crate::descriptor::IconDescriptor;
use crate::node::RenderableNode;
use crate::request::{RenderRequest, StyleMap};

/// Namespace set on every rendered root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Attribute key that callers cannot use to replace the merged style.
const STYLE_ATTRIBUTE: &str = "style";

/// Default inline style for a descriptor: `width` and `height` at its default display size.
pub fn default_style(descriptor: &IconDescriptor) -> StyleMap {
    StyleMap::from([
        ("width", descriptor.default_size()),
        ("height", descriptor.default_size()),
    ])
}

/// Shallow merge: override keys replace matching keys in place, new keys are appended.
pub fn merge_style(defaults: &StyleMap, overrides: Option<&StyleMap>) -> StyleMap {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        merged.extend(overrides.iter());
    }
    merged
}

/// Renders a descriptor into an `<svg>` element tree.
///
/// Root attributes are `xmlns`, `viewBox` (when the descriptor has one), `width` and `height`,
/// followed by `request.attributes` in caller order. A caller attribute with the same name as an
/// intrinsic one replaces it; a caller `style` attribute is dropped. Each draw instruction becomes
/// one `<path>` child in declaration order, so a descriptor without geometry yields an empty root.
///
/// The function is total and pure: equal inputs produce equal trees.
pub fn render(descriptor: &IconDescriptor, request: &RenderRequest) -> RenderableNode {
    let mut root = RenderableNode::element("svg");
    {
        let attributes = root.attributes_mut();
        attributes.insert("xmlns", SVG_NAMESPACE);
        if let Some(view_box) = descriptor.view_box() {
            attributes.insert("viewBox", view_box.to_string());
        }
        attributes.insert("width", descriptor.width().to_string());
        attributes.insert("height", descriptor.height().to_string());
        attributes.extend(
            request
                .attributes
                .iter()
                .filter(|(name, _)| *name != STYLE_ATTRIBUTE),
        );
    }
    root.set_style(merge_style(
        &default_style(descriptor),
        request.style_overrides.as_ref(),
    ));

    for shape in descriptor.shapes() {
        let mut path = RenderableNode::element("path");
        let attributes = path.attributes_mut();
        attributes.insert("d", shape.data());
        if let Some(fill_rule) = shape.fill_rule() {
            attributes.insert("fill-rule", fill_rule.token());
        }
        root.push_child(path);
    }

    root
}
