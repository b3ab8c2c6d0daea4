use serde::{Deserialize, Serialize};

/// Identifies a source-control repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(rename = "repo_owner")]
    pub owner: String,
    #[serde(rename = "repo_name")]
    pub name: String,
}
