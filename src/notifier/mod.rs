mod artifacts;
pub mod report;

use crate::{
    config::{Config, PollConfig},
    github::{
        github_client::GithubClient,
        handler::pull_requests_handler::PullRequestsHandler,
        pull_request::{MergeableState, PullRequest},
    },
    webhook::WebhookNotifier,
};
use anyhow::{Context, Result};
use report::Report;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Pending,
}

pub async fn run(config: &Config) -> Result<()> {
    let client = GithubClient::new(&config.api_url);
    let pull_requests = client
        .repo(&config.repository.owner, &config.repository.name)
        .pull_requests();

    log::info!("Fetching pull requests");
    let prs = pull_requests
        .list()
        .await
        .context("Cannot list pull requests")?;

    if let Some(dir) = &config.artifacts_dir {
        artifacts::write(dir, artifacts::ALL_PRS, &prs).await?;
    }

    log::info!("Filtering PRs with label '{}'", config.target_label);
    let matching: Vec<PullRequest> = prs
        .into_iter()
        .filter(|pr| pr.has_label(&config.target_label))
        .collect();

    if let Some(dir) = &config.artifacts_dir {
        let urls: Vec<&str> = matching.iter().map(|pr| pr.html_url.as_str()).collect();
        artifacts::write(dir, artifacts::TARGET_LABEL_PRS, &urls).await?;
    }

    if matching.is_empty() {
        log::info!("No PRs found with label '{}'", config.target_label);
        return Ok(());
    }

    log::info!("Checking merge readiness of {} PRs", matching.len());
    let report = check_merge_readiness(&pull_requests, matching, &config.poll).await;

    if let Some(dir) = &config.artifacts_dir {
        artifacts::write(dir, artifacts::MERGEABLE_PRS, &report.ready_urls()).await?;
        artifacts::write(dir, artifacts::PENDING_PRS, &report.pending_urls()).await?;
    }

    report.log();

    match WebhookNotifier::from_env() {
        Some(notifier) => notifier.send(&report.summary()).await,
        None => log::warn!("No webhook configured, skipping notification"),
    }

    Ok(())
}

pub(crate) async fn check_merge_readiness(
    pull_requests: &PullRequestsHandler,
    prs: Vec<PullRequest>,
    poll: &PollConfig,
) -> Report {
    let mut report = Report::default();

    for pr in prs {
        match poll_merge_state(pull_requests, pr.number, poll).await {
            Readiness::Ready => report.ready.push(pr),
            Readiness::Pending => report.pending.push(pr),
        }
    }

    report
}

/// Polls the detail endpoint until the merge state settles or the attempt
/// budget runs out. A state still unknown after the last attempt counts as
/// pending
async fn poll_merge_state(
    pull_requests: &PullRequestsHandler,
    number: u64,
    poll: &PollConfig,
) -> Readiness {
    let delay = Duration::from_secs(poll.delay_secs);

    for attempt in 1..=poll.max_attempts {
        match pull_requests.detail(number).await {
            Ok(pr) => match pr.mergeable_state.unwrap_or_default() {
                MergeableState::Clean => return Readiness::Ready,
                MergeableState::Unknown => log::info!(
                    "Merge state of #{} is unknown, retrying in {}s ({}/{})",
                    number,
                    poll.delay_secs,
                    attempt,
                    poll.max_attempts
                ),
                state => {
                    log::debug!("Merge state of #{} is {:?}", number, state);
                    return Readiness::Pending;
                }
            },
            Err(e) => log::warn!("Failed to fetch details of #{}: {:#}", number, e),
        }

        if attempt < poll.max_attempts {
            tokio::time::sleep(delay).await;
        }
    }

    Readiness::Pending
}
