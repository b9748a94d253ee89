use flexi_logger::{Logger, LoggerHandle};
use log::info;

const LOG_ENV: &str = "so=warn";
const VERBOSE_LOG_ENV: &str = "so=debug";

fn log_spec(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_ENV
    } else {
        LOG_ENV
    }
}

/// Starts logging, filtered by `RUST_LOG` when it is set. Logging stops once the returned
/// handle is dropped.
pub fn init_logger(verbose: bool) -> Option<LoggerHandle> {
    let spec = log_spec(verbose);
    match Logger::try_with_env_or_str(spec).and_then(|logger| logger.start()) {
        Ok(handle) => {
            info!("Logger initialized ({})", spec);
            Some(handle)
        }
        Err(e) => {
            eprintln!("Failed to start logger: {}", e);
            None
        }
    }
}
