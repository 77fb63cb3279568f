use super::github_client::GITHUB_TOKEN;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self) -> RequestBuilder {
        self.bearer_auth(GITHUB_TOKEN.to_string())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "prnotifier")
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;
    use std::env;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";

        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "prnotifier")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(url)?;

        mock.assert_async().await;

        assert_eq!(response, expected_body);

        Ok(())
    }
}
