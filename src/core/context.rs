use crate::config::Config;
use crate::core::repository::StudentRepository;

use crate::errors::Result;
use crate::logging::Logger;
use std::path::Path;

/// Everything a session needs. Built once at startup and handed to the main flow.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub students: StudentRepository,
    pub logger: Logger,
    pub startup_displayed: bool,
}

impl AppContext {
    pub fn new_with_paths(config_path: &Path, logs_dir: &Path) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        Ok(Self::with_config(config, logs_dir))
    }

    /// The logger writes under `logs_dir`, and only when the config enables file logging.
    pub fn with_config(config: Config, logs_dir: &Path) -> Self {
        let logger = Logger::new();
        logger.set_log_dir(logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Self {
            config,
            students: StudentRepository::new(),
            logger,
            startup_displayed: false,
        }
    }
}
