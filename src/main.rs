use anyhow::Result;
use clap::Parser;
use speakermap::cli::{Cli, Commands};
use speakermap::commands::{self, NormalizeConfig};
use speakermap::observability::install_panic_hook;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `-v` raises the default `warn` level.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    install_panic_hook();

    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Normalize {
            input,
            output,
            format,
            config,
            no_parallel,
            jobs,
            verbosity,
        } => commands::handle_normalize(NormalizeConfig {
            input,
            output,
            format: format.into(),
            config_path: config,
            parallel: !no_parallel,
            jobs,
            verbosity,
        }),
        Commands::Classify { text, verbosity } => commands::classify_text(&text, verbosity),
        Commands::Init { force } => commands::init_config(force),
    }
}
