use serde::{Deserialize, Serialize};

/// A deployable environment of a project, e.g. staging or production.
///
/// `is_locked` is written by the external locking mechanism; this crate
/// only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
    pub deploy: String,
    pub repo_path: String,
    #[serde(default)]
    pub hosts: Vec<String>,
    pub branch: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_locked: bool,
}
