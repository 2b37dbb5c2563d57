use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use x25519_kat::harness::{ConsoleProgress, run_all};
use x25519_kat::keys::x25519::X25519;

const LOG_VAR: &str = "X25519_KAT_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the log filter from the `X25519_KAT_LOG` directives, falling
/// back to `warn` when the variable is unset or unparseable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn main() -> ExitCode {
    // `init` also bridges `log` records emitted by the library.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(LOG_VAR).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let mut progress = ConsoleProgress::stdout();

    match run_all(&X25519, &mut progress) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
