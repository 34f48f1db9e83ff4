use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

// stderr: stdout is reserved for file content and prompts
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
