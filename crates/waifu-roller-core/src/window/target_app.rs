use crate::{CoreError, CoreResult, TitleRule};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Description of the desktop application being automated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetApp {
    /// How the application's window is recognised.
    pub title_rule: TitleRule,
    /// Directory the application is installed under.
    pub install_dir: PathBuf,
    /// Prefix of the per-version folders inside `install_dir`.
    pub version_prefix: String,
    /// File name of the executable inside a version folder.
    pub executable_name: String,
}

impl TargetApp {
    /// The Discord desktop client installed under `install_dir`.
    ///
    /// On Windows the client lives in `%LOCALAPPDATA%\Discord\app-<version>\Discord.exe`.
    pub fn discord(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            title_rule: TitleRule::new("Discord", "Discord", "- Discord"),
            install_dir: install_dir.into(),
            version_prefix: "app-".to_string(),
            executable_name: "Discord.exe".to_string(),
        }
    }

    /// Human-readable name used in console lines.
    pub fn display_name(&self) -> &str {
        &self.title_rule.canonical_name
    }

    /// Locate the executable of the newest installed version.
    #[track_caller]
    #[instrument(skip(self), fields(install_dir = ?self.install_dir))]
    pub fn resolve_executable(&self) -> CoreResult<PathBuf> {
        let not_found = |path: &Path| CoreError::ExecutableNotFound {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        };

        let entries = fs::read_dir(&self.install_dir).map_err(|_| not_found(&self.install_dir))?;

        let version_dir = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(&self.version_prefix)
            })
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .max_by(|a, b| {
                self.version_of(a)
                    .cmp(&self.version_of(b))
                    .then_with(|| a.cmp(b))
            })
            .ok_or_else(|| not_found(&self.install_dir))?;

        let executable = self
            .install_dir
            .join(version_dir)
            .join(&self.executable_name);

        if !executable.is_file() {
            return Err(not_found(&executable));
        }

        debug!(executable = ?executable, "Resolved target executable");

        Ok(executable)
    }

    /// Numeric segments of a version folder name, `None` if any segment is not a number.
    ///
    /// `app-1.0.10` parses to `[1, 0, 10]`, so it sorts above `app-1.0.9`.
    pub fn version_of(&self, folder: &str) -> Option<Vec<u64>> {
        folder
            .strip_prefix(&self.version_prefix)?
            .split('.')
            .map(|segment| segment.parse::<u64>().ok())
            .collect()
    }
}
