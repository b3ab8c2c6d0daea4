use async_trait::async_trait;
use deckhand_core::Repo;

use crate::{Commit, ScmError, ScmProvider};

/// A mock provider serving a canned commit list, or a canned failure.
pub struct MockScm {
    commits: Vec<Commit>,
    fail: bool,
}

impl MockScm {
    /// Serve the given messages as the compare result, in order.
    pub fn with_messages(messages: &[&str]) -> Self {
        let commits = messages
            .iter()
            .enumerate()
            .map(|(i, m)| Commit {
                sha: format!("{i:040x}"),
                message: (*m).to_string(),
            })
            .collect();
        Self {
            commits,
            fail: false,
        }
    }

    /// Fail every comparison with an API error.
    pub fn failing() -> Self {
        Self {
            commits: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ScmProvider for MockScm {
    fn name(&self) -> &str {
        "mock"
    }

    async fn compare_commits(
        &self,
        _repo: &Repo,
        _base: &str,
        _head: &str,
    ) -> Result<Vec<Commit>, ScmError> {
        if self.fail {
            return Err(ScmError::Api("mock compare failure".into()));
        }
        Ok(self.commits.clone())
    }
}
