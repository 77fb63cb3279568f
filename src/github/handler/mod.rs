pub mod pull_requests_handler;
pub mod repository_handler;
