use bpk_svgs::{
    default_style, render, AttributeMap, DrawInstruction, FillRule, IconDescriptor, RenderRequest,
    StyleMap, ViewBox,
};
use proptest::prelude::*;

fn arb_shape() -> impl Strategy<Value = DrawInstruction> {
    (
        "M[0-9]{1,2} [0-9]{1,2}(L[0-9]{1,2} [0-9]{1,2}){1,3}z?",
        prop::option::of(prop_oneof![Just(FillRule::NonZero), Just(FillRule::EvenOdd)]),
    )
        .prop_map(|(data, fill_rule)| {
            let shape = DrawInstruction::new(data);
            match fill_rule {
                Some(rule) => shape.with_fill_rule(rule),
                None => shape,
            }
        })
}

fn arb_descriptor() -> impl Strategy<Value = IconDescriptor> {
    (
        "[a-z][a-z-]{0,12}",
        1u32..512,
        1u32..512,
        prop::option::of((0u8..8, 1u8..64)),
        prop_oneof![Just("1rem"), Just("1.125rem"), Just("1.5rem"), Just("2em")],
        prop::collection::vec(arb_shape(), 0..6),
    )
        .prop_map(|(name, width, height, frame, size, shapes)| {
            let icon = IconDescriptor::new(name, width, height, size).with_shapes(shapes);
            match frame {
                Some((origin, extent)) => icon.with_view_box(ViewBox::new(
                    f32::from(origin),
                    f32::from(origin),
                    f32::from(extent),
                    f32::from(extent),
                )),
                None => icon,
            }
        })
}

fn arb_style() -> impl Strategy<Value = StyleMap> {
    prop::collection::vec(
        (
            prop_oneof![
                Just("width"),
                Just("height"),
                Just("fill"),
                Just("color"),
                Just("vertical-align"),
            ],
            "[a-z0-9.#]{1,8}",
        ),
        0..6,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn arb_attributes() -> impl Strategy<Value = AttributeMap> {
    prop::collection::vec(
        (
            prop_oneof![
                Just("class".to_string()),
                Just("width".to_string()),
                Just("viewBox".to_string()),
                "(aria|data)-[a-z]{1,8}",
            ],
            "[ -~]{0,16}",
        ),
        0..6,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn empty_request_uses_default_display_size(icon in arb_descriptor()) {
        let node = render(&icon, &RenderRequest::new());
        prop_assert_eq!(node.style().get("width"), Some(icon.default_size()));
        prop_assert_eq!(node.style().get("height"), Some(icon.default_size()));
        prop_assert_eq!(node.style().len(), 2);
        let width = icon.width().to_string();
        let height = icon.height().to_string();
        prop_assert_eq!(node.attribute("width"), Some(width.as_str()));
        prop_assert_eq!(node.attribute("height"), Some(height.as_str()));
    }

    #[test]
    fn style_overrides_merge_shallowly(icon in arb_descriptor(), overrides in arb_style()) {
        let request = RenderRequest {
            style_overrides: Some(overrides.clone()),
            ..RenderRequest::default()
        };
        let node = render(&icon, &request);
        let defaults = default_style(&icon);

        for (key, value) in overrides.iter() {
            prop_assert_eq!(node.style().get(key), Some(value));
        }
        for (key, value) in defaults.iter().filter(|(key, _)| !overrides.contains_key(key)) {
            prop_assert_eq!(node.style().get(key), Some(value));
        }
        let extra = overrides.keys().filter(|key| !defaults.contains_key(key)).count();
        prop_assert_eq!(node.style().len(), defaults.len() + extra);
    }

    #[test]
    fn attributes_are_forwarded_unchanged(icon in arb_descriptor(), attributes in arb_attributes()) {
        let request = RenderRequest {
            attributes: attributes.clone(),
            ..RenderRequest::default()
        };
        let node = render(&icon, &request);

        for (key, value) in attributes.iter() {
            prop_assert_eq!(node.attribute(key), Some(value));
        }
    }

    #[test]
    fn rendering_is_idempotent(
        icon in arb_descriptor(),
        overrides in arb_style(),
        attributes in arb_attributes(),
    ) {
        let request = RenderRequest {
            style_overrides: Some(overrides),
            attributes,
        };
        let first = render(&icon, &request);
        let second = render(&icon, &request);
        prop_assert_eq!(first.to_markup(), second.to_markup());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn children_follow_declaration_order(icon in arb_descriptor()) {
        let node = render(&icon, &RenderRequest::new());
        prop_assert_eq!(node.children().len(), icon.shapes().len());
        for (child, shape) in node.children().iter().zip(icon.shapes()) {
            prop_assert_eq!(child.tag(), "path");
            prop_assert_eq!(child.attribute("d"), Some(shape.data()));
            prop_assert_eq!(child.attribute("fill-rule"), shape.fill_rule().map(FillRule::token));
        }
    }
}

#[test]
fn documented_example_renders_one_path_at_default_size() {
    let icon =
        IconDescriptor::new("example", 24, 24, "1.5rem").with_shape(DrawInstruction::new("M1 1L2 2"));
    let node = render(&icon, &RenderRequest::new());

    assert_eq!(node.style().get("width"), Some("1.5rem"));
    assert_eq!(node.style().get("height"), Some("1.5rem"));
    assert_eq!(node.attribute("width"), Some("24"));
    assert_eq!(node.attribute("height"), Some("24"));
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].attribute("d"), Some("M1 1L2 2"));
}

#[test]
fn degenerate_descriptor_is_not_an_error() {
    let icon = IconDescriptor::new("empty", 24, 24, "1.5rem");
    let node = render(&icon, &RenderRequest::new().with_attribute("id", "blank"));

    assert!(node.children().is_empty());
    assert_eq!(node.attribute("id"), Some("blank"));
}
