use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use exrc::ex::Registry;
use exrc::script::{self, ScriptExecutor, TracingDiagnostics};

/// Run a vim-style rc file and print the resulting settings as JSON
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Script to run; defaults to ~/.ideavimrc, ~/_ideavimrc, ~/.vimrc or ~/_vimrc
    file: Option<PathBuf>,

    /// Print the settings on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> serde_json::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::new();

    // No rc file is fine
    match cli.file.or_else(script::locate) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading script");
            ScriptExecutor::new(&registry)
                .with_diagnostics(&TracingDiagnostics)
                .execute_file(&path);
        }
        None => tracing::debug!("no rc file found"),
    }

    let settings = registry.settings();
    let json = if cli.compact {
        serde_json::to_string(&settings)?
    } else {
        serde_json::to_string_pretty(&settings)?
    };
    println!("{}", json);

    Ok(())
}
