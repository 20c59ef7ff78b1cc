use serde::{Deserialize, Serialize};

/// Values used when command line arguments are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Command name, without `$` or `/` prefix.
    #[serde(default)]
    pub command: Option<String>,
    /// Channel to search for.
    #[serde(default)]
    pub destination: Option<String>,
    /// Number of times to send the command.
    #[serde(default)]
    pub repeat_count: Option<u32>,
}
