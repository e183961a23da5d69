#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use langshow::app;
use langshow::cli::Opts;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LANGSHOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let cmd = match Opts::parse() {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("langshow: {e}");
            eprintln!("Try 'langshow --help' for more information.");
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let mut out = stdout.lock();
    match app::run(&cmd, io::stdin().lock(), &mut out, is_terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "render failed");
            eprintln!("langshow: {e}");
            ExitCode::FAILURE
        }
    }
}
