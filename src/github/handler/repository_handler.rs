use super::pull_requests_handler::PullRequestsHandler;

pub struct RepositoryHandler {
    api_url: String,
    owner: String,
    repo: String,
}

impl RepositoryHandler {
    pub fn new(
        api_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            api_url: api_url.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn pull_requests(&self) -> PullRequestsHandler {
        PullRequestsHandler::new(&self.api_url, &self.owner, &self.repo)
    }
}
