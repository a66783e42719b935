//! Shared process execution helpers.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::runtime::error::{XtaskError, XtaskResult};

/// Shared process runner used by command modules.
///
/// Commands are echoed in a stable `+ ...` format, run from the caller-provided root, and
/// non-zero exits are normalized into [`XtaskError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a process runner.
    pub fn new() -> Self {
        Self
    }

    /// Return whether a cargo subcommand is installed.
    pub fn cargo_subcommand_available(&self, subcommand: &str) -> bool {
        Command::new("cargo")
            .arg(subcommand)
            .arg("--help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Require a cargo subcommand to exist.
    pub fn ensure_cargo_subcommand(&self, subcommand: &str, hint: &str) -> XtaskResult<()> {
        if self.cargo_subcommand_available(subcommand) {
            Ok(())
        } else {
            Err(XtaskError::environment(format!(
                "required cargo subcommand `{subcommand}` not found. {hint}"
            )))
        }
    }

    /// Run a process with borrowed string arguments, inheriting the terminal stdio streams.
    pub fn run(&self, root: &Path, program: &str, args: &[&str]) -> XtaskResult<()> {
        self.print_command(program, args);
        tracing::debug!(program, ?args, cwd = %root.display(), "spawning process");
        let status = Command::new(program)
            .current_dir(root)
            .args(args)
            .status()
            .map_err(|err| {
                XtaskError::process_launch(format!("failed to start `{program}`: {err}"))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(XtaskError::process_exit(format!(
                "`{program}` exited with status {status}"
            )))
        }
    }

    fn print_command(&self, program: &str, args: &[&str]) {
        println!("+ {} {}", program, args.join(" "));
    }
}
