use crate::github::pull_request::PullRequest;
use itertools::Itertools;

/// Outcome of a notifier run: every matching pull request lands in exactly
/// one of the two sets
#[derive(Debug, Default)]
pub struct Report {
    pub ready: Vec<PullRequest>,
    pub pending: Vec<PullRequest>,
}

const NO_READY_PRS_MESSAGE: &str = "No mergeable PRs found.";
const NO_PENDING_PRS_MESSAGE: &str = "No pending PRs found.";

impl Report {
    pub fn ready_urls(&self) -> Vec<&str> {
        self.ready
            .iter()
            .map(|pr| pr.html_url.as_str())
            .collect_vec()
    }

    pub fn pending_urls(&self) -> Vec<&str> {
        self.pending
            .iter()
            .map(|pr| pr.html_url.as_str())
            .collect_vec()
    }

    pub fn summary(&self) -> String {
        let ready = if self.ready.is_empty() {
            NO_READY_PRS_MESSAGE.to_owned()
        } else {
            self.ready_urls().into_iter().join("\n")
        };

        let pending = if self.pending.is_empty() {
            NO_PENDING_PRS_MESSAGE.to_owned()
        } else {
            self.pending_urls().into_iter().join("\n")
        };

        format!("Mergeable PRs:\n{ready}\n\nPending PRs (not ready for merge):\n{pending}")
    }

    pub fn log(&self) {
        for line in self.summary().lines() {
            log::info!("{}", line);
        }
    }
}
