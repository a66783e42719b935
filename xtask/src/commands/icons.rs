//! Icon catalog inspection, validation, rendering, and export.

use bpk_svgs::{icons, render, IconDescriptor, IconKey, IconSet, RenderRequest};
use serde::Serialize;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask icons ...`
pub struct IconsCommand;

/// Supported `cargo xtask icons` subcommands.
#[derive(Clone, Debug, PartialEq)]
pub enum IconsOptions {
    List { set: Option<IconSet> },
    Show { key: IconKey, request: RenderRequest },
    Check,
    Export { pretty: bool },
    Help,
}

impl XtaskCommand for IconsCommand {
    type Options = IconsOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_icons_options(args)
    }

    fn run(_ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        match options {
            IconsOptions::List { set } => {
                list_icons(set);
                Ok(())
            }
            IconsOptions::Show { key, request } => show_icon(&key, &request),
            IconsOptions::Check => check_catalog(),
            IconsOptions::Export { pretty } => export_catalog(pretty),
            IconsOptions::Help => {
                print_icons_usage();
                Ok(())
            }
        }
    }
}

fn parse_icons_options(args: &[String]) -> XtaskResult<IconsOptions> {
    match args.first().map(String::as_str) {
        None | Some("list") => {
            let set = args.get(1).map(|raw| raw.parse::<IconSet>()).transpose()?;
            Ok(IconsOptions::List { set })
        }
        Some("show") => parse_show_options(&args[1..]),
        Some("check") => Ok(IconsOptions::Check),
        Some("export") => match args.get(1).map(String::as_str) {
            None => Ok(IconsOptions::Export { pretty: false }),
            Some("--pretty") => Ok(IconsOptions::Export { pretty: true }),
            Some(other) => Err(XtaskError::validation(format!(
                "unknown export flag: {other}"
            ))),
        },
        Some("help" | "--help" | "-h") => Ok(IconsOptions::Help),
        Some(other) => Err(XtaskError::validation(format!(
            "unknown icons subcommand: {other}"
        ))),
    }
}

enum ShowFlag {
    Request,
    Style,
    Attr,
}

fn parse_show_options(args: &[String]) -> XtaskResult<IconsOptions> {
    let Some(key) = args.first() else {
        return Err(XtaskError::validation("`icons show` requires an icon key")
            .with_hint("pass `<set>/<name>`, for example `lg/search`"));
    };
    let key: IconKey = key.parse()?;

    let mut request = RenderRequest::new();
    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let kind = match flag.as_str() {
            "--request" => ShowFlag::Request,
            "--style" => ShowFlag::Style,
            "--attr" => ShowFlag::Attr,
            other => {
                return Err(XtaskError::validation(format!(
                    "unknown show flag: {other}"
                )));
            }
        };
        let value = rest
            .next()
            .ok_or_else(|| XtaskError::validation(format!("`{flag}` requires a value")))?;
        match kind {
            ShowFlag::Request => {
                let base = RenderRequest::from_json(value)?;
                if let Some(style) = base.style_overrides {
                    for (name, value) in style.iter() {
                        request = request.with_style(name, value);
                    }
                }
                request.attributes.extend(base.attributes.iter());
            }
            ShowFlag::Style => {
                let (name, value) = split_pair(flag, value)?;
                request = request.with_style(name, value);
            }
            ShowFlag::Attr => {
                let (name, value) = split_pair(flag, value)?;
                request = request.with_attribute(name, value);
            }
        }
    }

    Ok(IconsOptions::Show { key, request })
}

fn split_pair<'a>(flag: &str, raw: &'a str) -> XtaskResult<(&'a str, &'a str)> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| XtaskError::validation(format!("`{flag}` expects `name=value`, got `{raw}`")))
}

fn list_icons(set: Option<IconSet>) {
    let sets = match set {
        Some(set) => vec![set],
        None => IconSet::ALL.to_vec(),
    };
    for set in sets {
        for icon in icons(set) {
            println!(
                "{:<32} {}x{}  {:<9} {} path(s)",
                IconKey::new(set, icon.name()).to_string(),
                icon.width(),
                icon.height(),
                icon.default_size(),
                icon.shapes().len()
            );
        }
    }
}

fn show_icon(key: &IconKey, request: &RenderRequest) -> XtaskResult<()> {
    let icon = key.resolve()?;
    println!("{}", render(icon, request));
    Ok(())
}

fn check_catalog() -> XtaskResult<()> {
    let mut failures = Vec::new();
    let mut total = 0usize;
    for set in IconSet::ALL {
        for icon in icons(set) {
            total += 1;
            if let Err(err) = icon.validate() {
                tracing::warn!(set = set.token(), icon = icon.name(), %err, "invalid catalog icon");
                failures.push(format!("{set}/{}: {err}", icon.name()));
            }
        }
    }

    if failures.is_empty() {
        println!("icon catalog ok: {total} icon(s) across {} set(s)", IconSet::ALL.len());
        Ok(())
    } else {
        for failure in &failures {
            eprintln!("  {failure}");
        }
        Err(XtaskError::catalog(format!(
            "{} of {total} icon(s) failed validation",
            failures.len()
        ))
        .with_operation("icons check"))
    }
}

#[derive(Serialize)]
struct SetExport {
    set: &'static str,
    icons: &'static [IconDescriptor],
}

fn export_catalog(pretty: bool) -> XtaskResult<()> {
    let export: Vec<SetExport> = IconSet::ALL
        .into_iter()
        .map(|set| SetExport {
            set: set.token(),
            icons: icons(set),
        })
        .collect();
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    println!("{json}");
    Ok(())
}

pub(crate) fn print_icons_usage() {
    eprintln!(
        "Usage: cargo xtask icons <subcommand>\n\
         \n\
         Subcommands:\n\
           list [sm|lg]                 List catalog icons with size and path count\n\
           show <set/name> [flags]      Print rendered SVG markup for one icon\n\
             --style name=value         Add a style override (repeatable)\n\
             --attr name=value          Forward an attribute (repeatable)\n\
             --request <json>           Merge a JSON render request\n\
           check                        Validate every catalog descriptor\n\
           export [--pretty]            Print the catalog as JSON\n"
    );
}
