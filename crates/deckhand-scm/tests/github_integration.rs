//! Integration tests for GitHubScm against an in-process fake compare API.
//!
//! Each test spawns an axum server on 127.0.0.1:0 and points the client's
//! base URL at it, exercising the full request/response cycle.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use deckhand_core::Repo;
use deckhand_scm::{scan_commit_range, GitHubScm, ScmError, ScmProvider};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_fake(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn commit(sha: &str, message: &str) -> Value {
    json!({"sha": sha, "commit": {"message": message}})
}

fn test_repo() -> Repo {
    Repo {
        owner: "acme".into(),
        name: "dashboard".into(),
    }
}

#[tokio::test]
async fn compare_decodes_ordered_commits() {
    let app = Router::new().route(
        "/repos/{owner}/{repo}/compare/{range}",
        get(
            |Path((owner, repo, range)): Path<(String, String, String)>| async move {
                assert_eq!(owner, "acme");
                assert_eq!(repo, "dashboard");
                assert_eq!(range, "abc...def");
                Json(json!({"commits": [
                    commit("a1", "[Fix#100] patch"),
                    commit("b2", "unrelated"),
                ]}))
            },
        ),
    );
    let url = spawn_fake(app).await;

    let scm = GitHubScm::with_base_url(&url, None);
    let commits = scm
        .compare_commits(&test_repo(), "abc", "def")
        .await
        .unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].sha, "a1");
    assert_eq!(commits[0].message, "[Fix#100] patch");
    assert_eq!(commits[1].message, "unrelated");
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let app = Router::new().route(
        "/repos/{owner}/{repo}/compare/{range}",
        get(|headers: HeaderMap| async move {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer test-token") => {
                    Ok(Json(json!({"commits": [commit("a1", "[Fix#7] x")]})))
                }
                _ => Err(StatusCode::UNAUTHORIZED),
            }
        }),
    );
    let url = spawn_fake(app).await;

    let scm = GitHubScm::with_base_url(&url, Some("test-token".into()));
    let commits = scm
        .compare_commits(&test_repo(), "abc", "def")
        .await
        .unwrap();
    assert_eq!(commits.len(), 1);
}

#[tokio::test]
async fn rejected_credentials_surface_as_auth_failure() {
    let app = Router::new().route(
        "/repos/{owner}/{repo}/compare/{range}",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let url = spawn_fake(app).await;

    let scm = GitHubScm::with_base_url(&url, Some("bad-token".into()));
    let err = scm
        .compare_commits(&test_repo(), "abc", "def")
        .await
        .unwrap_err();
    assert!(matches!(err, ScmError::AuthFailed(_)));
}

#[tokio::test]
async fn unknown_repo_is_api_error() {
    // No route registered: the fake answers 404 for everything.
    let url = spawn_fake(Router::new()).await;

    let scm = GitHubScm::with_base_url(&url, None);
    let err = scm
        .compare_commits(&test_repo(), "abc", "def")
        .await
        .unwrap_err();
    assert!(matches!(err, ScmError::Api(_)));
}

#[tokio::test]
async fn undecodable_body_is_api_error() {
    let app = Router::new().route(
        "/repos/{owner}/{repo}/compare/{range}",
        get(|| async { Json(json!({"unexpected": true})) }),
    );
    let url = spawn_fake(app).await;

    let scm = GitHubScm::with_base_url(&url, None);
    let err = scm
        .compare_commits(&test_repo(), "abc", "def")
        .await
        .unwrap_err();
    assert!(matches!(err, ScmError::Api(_)));
}

#[tokio::test]
async fn scan_over_github_collects_unique_ids() {
    let app = Router::new().route(
        "/repos/{owner}/{repo}/compare/{range}",
        get(|| async {
            Json(json!({"commits": [
                commit("a1", "[Fix#100] patch"),
                commit("b2", "unrelated"),
                commit("c3", "[Fix#100] patch2"),
                commit("d4", "[Add#200] feature"),
            ]}))
        }),
    );
    let url = spawn_fake(app).await;

    let scm = GitHubScm::with_base_url(&url, None);
    let ids = scan_commit_range(&scm, &test_repo(), "abc", "def")
        .await
        .unwrap();
    assert_eq!(ids, vec!["100".to_string(), "200".to_string()]);
}
