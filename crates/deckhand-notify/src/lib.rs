mod timestamp;

pub use timestamp::deploy_timestamp;

use std::sync::Arc;

use deckhand_core::Repo;
use deckhand_scm::{scan_commit_range, ScmError, ScmProvider};
use deckhand_tracker::{TrackerClient, TrackerError};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("commit scan failed: {0}")]
    Scan(#[from] ScmError),
}

/// Completion report for one detached comment-posting task.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub item_id: String,
    pub result: Result<(), TrackerError>,
}

/// Notify the tracker that `repo` was deployed to `environment`.
///
/// Scans `base..head` for tracked-item tags and spawns one detached
/// posting task per unique item, in scan order. Only a scan failure is an
/// error; the posting tasks are unsupervised and their failures never
/// reach the caller. Each task reports a [`DispatchOutcome`] over the
/// returned channel, which the caller is free to drop.
pub async fn notify_deployment(
    provider: &dyn ScmProvider,
    tracker: Arc<TrackerClient>,
    environment: &str,
    repo: &Repo,
    head: &str,
    base: &str,
) -> Result<mpsc::Receiver<DispatchOutcome>, NotifyError> {
    let stamp = deploy_timestamp();
    let ids = scan_commit_range(provider, repo, base, head).await?;
    info!(
        "deploy of {}/{} to {environment}: {} tracked item(s) in {base}..{head}",
        repo.owner,
        repo.name,
        ids.len()
    );

    let (tx, rx) = mpsc::channel(ids.len().max(1));
    for id in ids {
        let tracker = Arc::clone(&tracker);
        let message = format!("Deployed to {environment}: {stamp}");
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = tracker.post_comment(&id, &message).await;
            if let Err(ref e) = result {
                error!("posting deploy comment on item {id}: {e}");
            }
            // Receiver may already be gone; fire-and-forget callers drop it.
            let _ = tx.send(DispatchOutcome { item_id: id, result }).await;
        });
    }
    Ok(rx)
}
