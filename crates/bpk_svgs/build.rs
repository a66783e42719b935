use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Icon sets compiled into the catalog, in `(manifest stem, generated table)` order.
const ICON_SETS: [(&str, &str); 2] = [("sm", "SM_ICONS"), ("lg", "LG_ICONS")];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SetDefaults {
    width: u32,
    height: u32,
    default_size: String,
    #[serde(default)]
    view_box: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PathEntry {
    Data(String),
    Detailed {
        d: String,
        #[serde(default)]
        fill_rule: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct IconEntry {
    name: String,
    paths: Vec<PathEntry>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    default_size: Option<String>,
    #[serde(default)]
    view_box: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct IconManifest {
    set: SetDefaults,
    #[serde(default)]
    icons: Vec<IconEntry>,
}

fn parse_view_box(raw: &str, path: &Path, icon: &str) -> [f32; 4] {
    let parts: Vec<f32> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f32>().unwrap_or_else(|err| {
                panic!(
                    "invalid view_box `{raw}` for `{icon}` in {}: {err}",
                    path.display()
                )
            })
        })
        .collect();
    let [min_x, min_y, width, height] = parts[..] else {
        panic!(
            "view_box `{raw}` for `{icon}` in {} must have four components",
            path.display()
        );
    };
    if !(min_x.is_finite() && min_y.is_finite()) {
        panic!(
            "view_box `{raw}` for `{icon}` in {} must have a finite origin",
            path.display()
        );
    }
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        panic!(
            "view_box `{raw}` for `{icon}` in {} must have a positive extent",
            path.display()
        );
    }
    [min_x, min_y, width, height]
}

fn fill_rule_variant(raw: &str, path: &Path, icon: &str) -> &'static str {
    match raw {
        "nonzero" => "crate::FillRule::NonZero",
        "evenodd" => "crate::FillRule::EvenOdd",
        other => panic!(
            "unknown fill_rule `{other}` for `{icon}` in {}: expected `nonzero` or `evenodd`",
            path.display()
        ),
    }
}

/// Emits one descriptor into `out` and its shape table into `shape_tables`.
fn render_icon(
    out: &mut String,
    shape_tables: &mut String,
    shape_table: &str,
    entry: &IconEntry,
    set: &SetDefaults,
    path: &Path,
) {
    let name = entry.name.as_str();
    if name.trim().is_empty() {
        panic!("icon with an empty name in {}", path.display());
    }
    let width = entry.width.unwrap_or(set.width);
    let height = entry.height.unwrap_or(set.height);
    if width == 0 || height == 0 {
        panic!(
            "icon `{name}` in {} must have a non-zero intrinsic size",
            path.display()
        );
    }
    let default_size = entry.default_size.as_deref().unwrap_or(&set.default_size);
    if default_size.trim().is_empty() {
        panic!("icon `{name}` in {} has an empty default_size", path.display());
    }
    let view_box = entry
        .view_box
        .as_deref()
        .or(set.view_box.as_deref())
        .map(|raw| parse_view_box(raw, path, name));

    let view_box = match view_box {
        Some([min_x, min_y, vb_width, vb_height]) => {
            format!("Some(crate::ViewBox::new({min_x:?}, {min_y:?}, {vb_width:?}, {vb_height:?}))")
        }
        None => "None".to_string(),
    };

    let mut shapes = String::new();
    for shape in &entry.paths {
        let (d, fill_rule) = match shape {
            PathEntry::Data(d) => (d.as_str(), None),
            PathEntry::Detailed { d, fill_rule } => (d.as_str(), fill_rule.as_deref()),
        };
        if d.trim().is_empty() {
            panic!("icon `{name}` in {} has empty path data", path.display());
        }
        let fill_rule = match fill_rule {
            Some(raw) => format!("Some({})", fill_rule_variant(raw, path, name)),
            None => "None".to_string(),
        };
        let _ = write!(
            shapes,
            "\n    crate::DrawInstruction::from_static({d:?}, {fill_rule}),"
        );
    }

    let _ = write!(
        shape_tables,
        "\nstatic {shape_table}: [crate::DrawInstruction; {}] = [{shapes}\n];\n",
        entry.paths.len()
    );
    let _ = write!(
        out,
        "    crate::IconDescriptor::from_static(\n        {name:?},\n        {width},\n        {height},\n        {view_box},\n        {default_size:?},\n        &{shape_table},\n    ),\n"
    );
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut generated = String::from("// Build-time generated icon catalog. Do not edit.\n");

    for (stem, table) in ICON_SETS {
        let path = crate_root.join("icons").join(format!("{stem}.toml"));
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let mut manifest: IconManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

        let mut seen = BTreeSet::new();
        for icon in &manifest.icons {
            if !seen.insert(icon.name.clone()) {
                panic!("duplicate icon `{}` in {}", icon.name, path.display());
            }
        }
        manifest.icons.sort_by(|a, b| a.name.cmp(&b.name));

        let _ = write!(
            generated,
            "\n/// Icons of the `{stem}` set, sorted by name.\npub(crate) static {table}: [crate::IconDescriptor; {}] = [\n",
            manifest.icons.len()
        );
        let mut shape_tables = String::new();
        for (index, icon) in manifest.icons.iter().enumerate() {
            let shape_table = format!("{table}_SHAPES_{index}");
            render_icon(
                &mut generated,
                &mut shape_tables,
                &shape_table,
                icon,
                &manifest.set,
                &path,
            );
        }
        generated.push_str("];\n");
        generated.push_str(&shape_tables);
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("icon_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
