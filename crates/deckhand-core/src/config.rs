use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Credential block for the external work tracker.
///
/// The token is an opaque bearer secret. Debug output redacts it so it
/// cannot leak through diagnostics.
#[derive(Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub token: String,
}

impl std::fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// The dashboard's static configuration surface.
///
/// Built once at process start and read-only thereafter. Parsing config
/// files is the host's concern; these structs only define the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projects: Vec<Project>,
    pub deploy_user: String,
    pub notify: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}
