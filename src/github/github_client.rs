use super::handler::repository_handler::RepositoryHandler;
use once_cell::sync::Lazy;
use std::env;

pub static GITHUB_TOKEN: Lazy<String> =
    Lazy::new(|| env::var("GITHUB_TOKEN").expect("GITHUB_TOKEN must be set"));

pub struct GithubClient {
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        GithubClient {
            api_url: api_url.into(),
        }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler {
        RepositoryHandler::new(&self.api_url, owner, name)
    }
}
