pub mod github_client;
pub mod handler;
mod macros;
pub mod pull_request;
