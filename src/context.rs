use std::path::PathBuf;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

/// Per-invocation state. Config is resolved on demand so that commands which
/// never read it cannot fail on a broken config directory.
#[derive(Debug)]
pub struct AppContext {
    pub config_dir: Option<PathBuf>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config_dir: Option<PathBuf>, json: bool) -> Self {
        Self {
            config_dir,
            output: Output::new(json),
        }
    }

    pub fn paths(&self) -> AppResult<AppPaths> {
        match &self.config_dir {
            Some(root) => Ok(AppPaths::at(root)),
            None => AppPaths::discover(),
        }
    }

    pub fn settings(&self) -> AppResult<Settings> {
        let paths = self.paths()?;
        tracing::debug!(config_dir = %paths.config_dir().display(), "loading settings");
        config::load_settings(&paths)
    }
}
