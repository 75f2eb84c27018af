use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

const DEFAULT_PROFILE_PATH: &str = "cpu.pprof";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
}

impl Settings {
    pub fn profile_path_or_default(&self) -> PathBuf {
        self.profile_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_PATH))
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;
    restrict_permissions(&path)?;

    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> AppResult<()> {
    Ok(())
}
