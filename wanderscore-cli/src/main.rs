//! Entry point for the `wanderscore` command-line interface.
#![forbid(unsafe_code)]

use wanderscore_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = wanderscore_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("wanderscore: {err}");
        std::process::exit(1);
    }
}
