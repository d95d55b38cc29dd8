use anyhow::{Context, Result};
use std::{fs::File, io, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the tracing subscriber.
///
/// The terminal UI owns stdout and stderr while it runs, so interactive
/// sessions log to `log_file` or nowhere. Headless runs pass
/// `to_stderr = true`.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .without_time()
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if to_stderr => builder.with_writer(io::stderr).init(),
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}
