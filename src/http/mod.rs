use reqwest::Client;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected status code {status}: {body}")]
    UnexpectedStatusError { status: u16, body: String },
}

/// Collapses a finished request into the response body, mapping transport
/// faults and non-2xx statuses into [`Error`]
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::UnexpectedStatusError { status, body });
        }

        Ok(body)
    }
}
