//! `cargo xtask` entrypoint.

fn main() -> std::process::ExitCode {
    xtask::init_tracing();
    xtask::exit_code(xtask::execute_from_env())
}
