use crate::error::CrsError;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-q` and `-v` flags win over the configured level.
pub fn filter_directive(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence when set.
pub fn init(verbose: u8, quiet: bool, configured: &str) -> Result<(), CrsError> {
    let directive = filter_directive(verbose, quiet, configured);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&directive).map_err(|source| {
            CrsError::Telemetry(format!("invalid log level/filter '{directive}': {source}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| CrsError::Telemetry(err.to_string()))
}
