//! Local verification workflow.

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask verify`
pub struct VerifyCommand;

/// Verification depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerifyMode {
    /// Formatting and unit/integration tests.
    Fast,
    /// Fast checks plus clippy, docs, and a build without default features.
    Full,
}

/// Parsed `cargo xtask verify` options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyOptions {
    pub mode: VerifyMode,
    pub show_help: bool,
}

impl XtaskCommand for VerifyCommand {
    type Options = VerifyOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_verify_options(args)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        if options.show_help {
            print_verify_usage();
            return Ok(());
        }
        run_verify(ctx, options.mode).map_err(|err| err.with_operation("verify"))
    }
}

fn parse_verify_options(args: &[String]) -> XtaskResult<VerifyOptions> {
    let mut options = VerifyOptions {
        mode: VerifyMode::Full,
        show_help: false,
    };
    for arg in args {
        match arg.as_str() {
            "fast" => options.mode = VerifyMode::Fast,
            "full" => options.mode = VerifyMode::Full,
            "help" | "--help" | "-h" => options.show_help = true,
            other => {
                return Err(XtaskError::validation(format!(
                    "unknown verify argument: {other}"
                )));
            }
        }
    }
    Ok(options)
}

fn run_verify(ctx: &CommandContext, mode: VerifyMode) -> XtaskResult<()> {
    let root = ctx.root();
    let process = ctx.process();

    process.ensure_cargo_subcommand("fmt", "Install it with `rustup component add rustfmt`")?;
    process.run(root, "cargo", &["fmt", "--all", "--", "--check"])?;
    process.run(root, "cargo", &["test", "--workspace"])?;

    if mode == VerifyMode::Full {
        process.ensure_cargo_subcommand(
            "clippy",
            "Install it with `rustup component add clippy`",
        )?;
        process.run(
            root,
            "cargo",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        )?;
        process.run(
            root,
            "cargo",
            &["check", "-p", "bpk_svgs", "--no-default-features"],
        )?;
        process.run(root, "cargo", &["doc", "--workspace", "--no-deps"])?;
    }

    tracing::info!(?mode, "verification passed");
    Ok(())
}

pub(crate) fn print_verify_usage() {
    eprintln!(
        "Usage: cargo xtask verify [fast|full]\n\
         \n\
         Modes:\n\
           fast   rustfmt check and workspace tests\n\
           full   fast checks plus clippy, no-default-features check, and rustdoc (default)\n"
    );
}
