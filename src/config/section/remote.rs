//! `[remote]` section: the remote content service.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the remote content API. When absent the resolver goes
    /// straight to the local source.
    pub api_url: Option<String>,
    /// Master switch; `false` skips the remote attempt entirely.
    pub enabled: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            enabled: true,
        }
    }
}

impl RemoteConfig {
    /// Remote attempts happen only with a configured URL and the switch on.
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_url.is_some()
    }
}
