//! Logger setup for the `mazewalk` binary.

use flexi_logger::{FileSpec, Logger, LoggerHandle};

use crate::Args;

/// Start `flexi_logger` from `RUST_LOG`, falling back to `--log`. Output
/// goes to stderr, or to a file under `--log-dir` so it does not disturb
/// the animation.
///
/// The returned handle must be kept alive for the whole run.
pub fn init(args: &Args) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_env_or_str(&args.log)?;
    if let Some(dir) = &args.log_dir {
        logger = logger.log_to_file(FileSpec::default().directory(dir));
    }
    let handle = logger.start()?;
    log::debug!("logging at {}", args.log);
    Ok(handle)
}
