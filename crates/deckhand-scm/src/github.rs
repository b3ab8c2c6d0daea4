use async_trait::async_trait;
use deckhand_core::Repo;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{Commit, ScmError, ScmProvider};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const TOKEN_ENV_VAR: &str = "GITHUB_API_TOKEN";
const USER_AGENT: &str = "deckhand";

/// GitHub REST implementation of [`ScmProvider`].
pub struct GitHubScm {
    base_url: String,
    client: Client,
    /// Optional PAT sent as a bearer token. An unauthenticated client can
    /// still compare public repositories, subject to rate limits.
    token: Option<String>,
}

impl GitHubScm {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token,
        }
    }

    /// Read the token from `GITHUB_API_TOKEN` once at construction.
    /// An unset variable yields an unauthenticated client whose requests
    /// fail on the provider side, not here.
    pub fn from_env() -> Self {
        Self::new(std::env::var(TOKEN_ENV_VAR).ok())
    }
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

#[async_trait]
impl ScmProvider for GitHubScm {
    fn name(&self) -> &str {
        "github"
    }

    async fn compare_commits(
        &self,
        repo: &Repo,
        base: &str,
        head: &str,
    ) -> Result<Vec<Commit>, ScmError> {
        let url = format!(
            "{}/repos/{}/{}/compare/{base}...{head}",
            self.base_url, repo.owner, repo.name
        );
        debug!("comparing {}/{} {base}...{head}", repo.owner, repo.name);

        let mut builder = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(ref token) = self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let resp = builder.send().await.map_err(|e| {
            ScmError::Api(format!("compare {}/{}: {e}", repo.owner, repo.name))
        })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ScmError::AuthFailed(format!(
                "github rejected credentials: {status}"
            )));
        }
        if !status.is_success() {
            return Err(ScmError::Api(format!(
                "compare {}/{} {base}...{head}: {status}",
                repo.owner, repo.name
            )));
        }

        let compare = resp
            .json::<CompareResponse>()
            .await
            .map_err(|e| ScmError::Api(format!("json decode: {e}")))?;

        Ok(compare
            .commits
            .into_iter()
            .map(|c| Commit {
                sha: c.sha,
                message: c.commit.message,
            })
            .collect())
    }
}
