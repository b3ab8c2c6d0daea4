pub mod github;
pub mod mock;
mod scan;

pub use github::GitHubScm;
pub use mock::MockScm;
pub use scan::{extract_item_id, scan_commit_range};

use async_trait::async_trait;
use deckhand_core::Repo;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScmError {
    #[error("auth failed: {0}")]
    AuthFailed(String),

    #[error("scm api error: {0}")]
    Api(String),
}

/// A commit as reported by a provider's comparison API.
#[derive(Debug, Clone)]
pub struct Commit {
    pub sha: String,
    pub message: String,
}

/// Abstraction over source-control comparison APIs.
///
/// The scanner and orchestrator program against this trait.
/// `GitHubScm` talks to the GitHub REST API; `MockScm` serves canned
/// commit lists for tests.
#[async_trait]
pub trait ScmProvider: Send + Sync {
    fn name(&self) -> &str;

    /// List the commits between `base` (exclusive, older) and `head`
    /// (inclusive, newer), in the order the provider reports them.
    async fn compare_commits(
        &self,
        repo: &Repo,
        base: &str,
        head: &str,
    ) -> Result<Vec<Commit>, ScmError>;
}
