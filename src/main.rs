use anyhow::Result;
use chronolog::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging only when explicitly requested; normal runs print
    // plain console messages through the msg_* macros.
    if std::env::var("CHRONOLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
