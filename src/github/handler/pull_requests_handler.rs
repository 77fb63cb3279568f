use crate::{get, github::pull_request::PullRequest};
use anyhow::Result;

pub struct PullRequestsHandler {
    api_url: String,
    owner: String,
    repo: String,
}

impl PullRequestsHandler {
    pub fn new(
        api_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        PullRequestsHandler {
            api_url: api_url.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<PullRequest>> {
        let uri = format!("{}/repos/{}/{}/pulls", self.api_url, self.owner, self.repo);

        let response = get!(&uri)?;

        let prs = serde_json::from_str::<Vec<PullRequest>>(&response)?;

        Ok(prs)
    }

    pub async fn detail(&self, number: u64) -> Result<PullRequest> {
        let uri = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, self.owner, self.repo, number
        );

        let response = get!(&uri)?;

        let pr = serde_json::from_str::<PullRequest>(&response)?;

        Ok(pr)
    }
}
