use bpk_svgs::{icons, lookup, IconKey, IconSet, RenderRequest};
use pretty_assertions::assert_eq;

#[test]
fn large_search_icon_matches_published_markup() {
    let icon = lookup(IconSet::Lg, "search").expect("search icon");
    let markup = bpk_svgs::render(icon, &RenderRequest::new()).to_markup();

    assert_eq!(
        markup,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" style="width:1.5rem;height:1.5rem">"#,
            r#"<path d="M10.5 4a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13zM2 10.5a8.5 8.5 0 1 1 15.176 5.262l4.531 4.53a1 1 0 0 1-1.414 1.415l-4.531-4.531A8.5 8.5 0 0 1 2 10.5z"/>"#,
            "</svg>"
        )
    );
}

const SMALL_ROOT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="18" height="18" style="width:1.125rem;height:1.125rem">"#;

#[test]
fn small_baggage_cabin_matches_published_markup() {
    let icon = lookup(IconSet::Sm, "baggage-cabin").expect("cabin icon");

    assert_eq!(
        bpk_svgs::render(icon, &RenderRequest::new()).to_markup(),
        [
            SMALL_ROOT,
            r#"<path d="M10.8 0h2.4A1.8 1.8 0 0 1 15 1.746v9.504a.75.75 0 0 1-1.5 0V3h-3v8.25a.75.75 0 0 1-1.5 0V1.8A1.8 1.8 0 0 1 10.8 0zM8.25 13.5h7.5A2.25 2.25 0 0 1 18 15.75v4.5a2.25 2.25 0 0 1-2.25 2.25v.375a1.125 1.125 0 0 1-2.25 0V22.5h-3v.375a1.125 1.125 0 0 1-2.25 0V22.5A2.25 2.25 0 0 1 6 20.25v-4.5a2.25 2.25 0 0 1 2.25-2.25z"/>"#,
            "</svg>",
        ]
        .concat()
    );
}

#[test]
fn small_baggage_checked_matches_published_markup() {
    let icon = lookup(IconSet::Sm, "baggage-checked").expect("checked icon");

    assert_eq!(
        bpk_svgs::render(icon, &RenderRequest::new()).to_markup(),
        [
            SMALL_ROOT,
            r#"<path d="M9 1.8A1.8 1.8 0 0 1 10.8 0h2.4A1.8 1.8 0 0 1 15 1.8v1.95a.75.75 0 0 1-1.5 0V3h-3v.75a.75.75 0 0 1-1.5 0V1.8zM8.25 6h7.5A2.25 2.25 0 0 1 18 8.25v12a2.25 2.25 0 0 1-2.25 2.25v.375a1.125 1.125 0 0 1-2.25 0V22.5h-3v.375a1.125 1.125 0 0 1-2.25 0V22.5A2.25 2.25 0 0 1 6 20.25v-12A2.25 2.25 0 0 1 8.25 6z"/>"#,
            "</svg>",
        ]
        .concat()
    );
}

#[test]
fn small_icons_carry_view_box_and_small_footprint() {
    let icon: IconKey = "sm/baggage-checked".parse().expect("icon key");
    let node = bpk_svgs::render(icon.resolve().expect("baggage icon"), &RenderRequest::new());

    assert_eq!(node.attribute("viewBox"), Some("0 0 24 24"));
    assert_eq!(node.attribute("width"), Some("18"));
    assert_eq!(node.attribute("height"), Some("18"));
    assert_eq!(node.style().to_css(), "width:1.125rem;height:1.125rem");
}

#[test]
fn request_json_drives_catalog_render() {
    let request = RenderRequest::from_json(
        r#"{
            "style_overrides": { "fill": "currentColor", "width": "2rem" },
            "attributes": { "aria-hidden": "true", "class": "bpk-icon", "style": "display:none" }
        }"#,
    )
    .expect("request json");
    let icon = lookup(IconSet::Lg, "menu--vertical").expect("menu icon");
    let node = bpk_svgs::render(icon, &request);

    assert_eq!(
        node.attributes().keys().collect::<Vec<_>>(),
        vec!["xmlns", "width", "height", "aria-hidden", "class"]
    );
    assert_eq!(
        node.style().to_css(),
        "width:2rem;height:1.5rem;fill:currentColor"
    );
}

#[test]
fn every_catalog_icon_renders_its_geometry() {
    for set in IconSet::ALL {
        for icon in icons(set) {
            let node = bpk_svgs::render(icon, &RenderRequest::new());
            assert_eq!(node.children().len(), icon.shapes().len(), "{set}/{}", icon.name());
            assert!(!node.inner_markup().is_empty(), "{set}/{}", icon.name());
        }
    }
}
