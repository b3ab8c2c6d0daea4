use std::sync::LazyLock;

use deckhand_core::Repo;
use regex::Regex;

use crate::{ScmError, ScmProvider};

/// Matches a bracketed work-item tag in a commit message, e.g.
/// `[Fix#123] correct the frobnicator`. Capture 1 is the item ID.
static ITEM_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*#(\d+)\]").expect("item tag regex is valid"));

/// Extract the tracked-item ID referenced by a commit message, if any.
/// Only the first tag per message is considered.
pub fn extract_item_id(message: &str) -> Option<String> {
    ITEM_TAG.captures(message).map(|caps| caps[1].to_string())
}

/// Collect the unique tracked-item IDs referenced by the commits between
/// `base` and `head`, preserving first-seen order.
///
/// A failed comparison aborts the scan with no partial result. An empty
/// range is an empty result, not an error. Commit order is whatever the
/// provider reports; it is not re-normalized here.
pub async fn scan_commit_range(
    provider: &dyn ScmProvider,
    repo: &Repo,
    base: &str,
    head: &str,
) -> Result<Vec<String>, ScmError> {
    let commits = provider.compare_commits(repo, base, head).await?;
    let mut ids: Vec<String> = Vec::new();
    for commit in commits {
        if let Some(id) = extract_item_id(&commit.message) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockScm;

    fn test_repo() -> Repo {
        Repo {
            owner: "acme".into(),
            name: "dashboard".into(),
        }
    }

    #[test]
    fn extracts_tagged_item_id() {
        assert_eq!(extract_item_id("[anything#123] rest"), Some("123".into()));
        assert_eq!(extract_item_id("[Fix#100] patch"), Some("100".into()));
    }

    #[test]
    fn ignores_untagged_messages() {
        assert_eq!(extract_item_id("no brackets here"), None);
        assert_eq!(extract_item_id("[no hash here]"), None);
        assert_eq!(extract_item_id("[#] empty tag"), None);
    }

    #[test]
    fn one_item_per_message() {
        // Greedy match: a double-tagged message still yields a single ID.
        assert_eq!(
            extract_item_id("[Fix#1][Add#2] double-tagged"),
            Some("2".into())
        );
    }

    #[tokio::test]
    async fn scan_dedupes_preserving_first_seen_order() {
        let scm = MockScm::with_messages(&[
            "[Fix#100] patch",
            "unrelated",
            "[Fix#100] patch2",
            "[Add#200] feature",
        ]);
        let ids = scan_commit_range(&scm, &test_repo(), "abc", "def")
            .await
            .unwrap();
        assert_eq!(ids, vec!["100".to_string(), "200".to_string()]);
    }

    #[tokio::test]
    async fn scan_of_empty_range_is_empty() {
        let scm = MockScm::with_messages(&[]);
        let ids = scan_commit_range(&scm, &test_repo(), "abc", "abc")
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn scan_aborts_on_provider_failure() {
        let scm = MockScm::failing();
        let err = scan_commit_range(&scm, &test_repo(), "abc", "def")
            .await
            .unwrap_err();
        assert!(matches!(err, ScmError::Api(_)));
    }
}
