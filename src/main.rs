use clap::Parser;
use tracing_subscriber::EnvFilter;

use passman::cli::{commands, Cli, Context};

fn main() {
    // Diagnostics go to stderr; user-facing output uses `cli::output`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PASSMAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = Context::load(&cli).and_then(|mut ctx| commands::run(&mut ctx, &cli.command));

    if let Err(e) = result {
        passman::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
