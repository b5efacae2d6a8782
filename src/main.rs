//! kal CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use kal::analysis::Registry;
use kal::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("kal=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kal=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("kal starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // A bad registration is a build defect; stop before touching any input.
    let registry = match Registry::with_builtins() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher =
        CommandDispatcher::new(project_root, registry).with_color(console::colors_enabled());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = dispatcher.dispatch(&cli, &mut out);
    let _ = out.flush();

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
