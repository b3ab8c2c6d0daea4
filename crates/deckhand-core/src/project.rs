use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::DeckhandError;
use crate::repo::Repo;

/// A project on the deployment dashboard: its repository identity and
/// the environments it can be deployed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(flatten)]
    pub repo: Repo,
    #[serde(rename = "envs", default)]
    pub environments: Vec<Environment>,
    /// Alternate repository carrying the full source history.
    /// Overrides `repo` for commit-history operations when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Repo>,
}

impl Project {
    /// The repository used for commit-history operations.
    pub fn source_repo(&self) -> Repo {
        self.source.clone().unwrap_or_else(|| self.repo.clone())
    }
}

/// Find a project by exact name. First match wins.
pub fn project_from_name(projects: &[Project], name: &str) -> Result<Project, DeckhandError> {
    projects
        .iter()
        .find(|p| p.name == name)
        .cloned()
        .ok_or_else(|| DeckhandError::NotFound(format!("no project: {name}")))
}

/// Find an environment by name under the named project.
/// Returns a copy; mutations do not propagate back to the config.
pub fn environment_from_name(
    projects: &[Project],
    project_name: &str,
    environment_name: &str,
) -> Result<Environment, DeckhandError> {
    let project = project_from_name(projects, project_name)?;
    project
        .environments
        .iter()
        .find(|e| e.name == environment_name)
        .cloned()
        .ok_or_else(|| DeckhandError::NotFound(format!("no environment: {environment_name}")))
}
