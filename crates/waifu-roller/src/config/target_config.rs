use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// Where the target client is installed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Install directory override. Defaults to `<local data dir>/Discord`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
}

impl TargetConfig {
    /// The configured install directory, or the platform default.
    pub fn install_dir(&self) -> PathBuf {
        self.install_dir.clone().unwrap_or_else(|| {
            BaseDirs::new()
                .map(|dirs| dirs.data_local_dir().join("Discord"))
                .unwrap_or_else(|| PathBuf::from("Discord"))
        })
    }
}
