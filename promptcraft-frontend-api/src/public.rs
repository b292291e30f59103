use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use web_sys::RequestCredentials;

use promptcraft_boundary::{Comment, ContributionCount, Credentials, Prompt};

use crate::{into_json, Result, UserApi};

/// Public PromptCraft API
///
/// Covers anonymous reads and account creation. Everything that mutates
/// prompt, vote or comment records requires a [`UserApi`].
#[derive(Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    /// All prompts, newest first.
    pub async fn prompts(&self) -> Result<Vec<Prompt>> {
        let url = format!("{}/prompts", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn prompt(&self, id: &str) -> Result<Prompt> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        let url = format!("{}/prompts/{encoded_id}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Comments of a single prompt, oldest first.
    pub async fn comments(&self, prompt_id: &str) -> Result<Vec<Comment>> {
        let encoded_id = utf8_percent_encode(prompt_id, NON_ALPHANUMERIC);
        let url = format!("{}/prompts/{encoded_id}/comments", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Prompt counts per author, aggregated and sorted by the backend.
    pub async fn top_contributors(&self, limit: usize) -> Result<Vec<ContributionCount>> {
        let url = format!("{}/stats/contributors?limit={limit}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        let url = format!("{}/users", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        into_json(response).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserApi> {
        let url = format!("{}/login", self.url);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(credentials)?
            .send()
            .await?;
        let token = into_json(response).await?;
        Ok(UserApi::new(self.url, token))
    }
}
