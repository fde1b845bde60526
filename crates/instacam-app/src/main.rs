#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use instacam_app::app::App;
use instacam_app::cli::{self, Invocation};
use instacam_core::FileStore;
use instacam_runtime::Program;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let invocation = match cli::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("instacam: {e}");
            eprintln!("Try 'instacam --help'.");
            return ExitCode::from(2);
        }
    };
    let args = match invocation {
        Invocation::PrintHelp => {
            print!("{}", cli::HELP);
            return ExitCode::SUCCESS;
        }
        Invocation::PrintVersion => {
            println!("instacam {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Invocation::Run(args) => args,
    };

    if let Err(e) = init_tracing(&args) {
        eprintln!("instacam: failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let store = FileStore::open(&args.state_file);
    let app = App::new(Box::new(store), args.screen.as_deref());

    match Program::new(app).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("instacam: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to the file from `--log-file`, if given. The terminal is owned by
/// the UI, so without a file logging stays off.
fn init_tracing(args: &cli::Args) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "instacam starting");
    Ok(())
}
