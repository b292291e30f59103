use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use promptcraft_boundary::{
    ApiToken, Comment, NewComment, NewPrompt, NewVote, Prompt, User, Vote, VoteCounts,
    VoteDirection,
};

use crate::{into_json, Result};

/// Authorized PromptCraft API
#[derive(Clone)]
pub struct UserApi {
    url: &'static str,
    token: ApiToken,
}

impl UserApi {
    #[must_use]
    pub const fn new(url: &'static str, token: ApiToken) -> Self {
        Self { url, token }
    }

    fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.token.token)
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &self.auth_header_value())
            .credentials(RequestCredentials::Include)
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .add_auth_headers(req)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        into_json(response).await
    }

    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data)?.send().await?;
        into_json(response).await
    }

    fn prompt_url(&self, prompt_id: &str, suffix: &str) -> String {
        let encoded_id = utf8_percent_encode(prompt_id, NON_ALPHANUMERIC);
        format!("{}/prompts/{encoded_id}{suffix}", self.url)
    }

    pub async fn user_info(&self) -> Result<User> {
        let url = format!("{}/users/current", self.url);
        let request = Request::get(&url);
        self.send(request).await
    }

    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.url);
        let request = Request::post(&url);
        self.send(request).await
    }

    /// Inserts a new prompt record and returns it with the fields assigned
    /// by the backend (id, author, timestamp, zeroed counters).
    pub async fn create_prompt(&self, prompt: &NewPrompt) -> Result<Prompt> {
        let url = format!("{}/prompts", self.url);
        let request = Request::post(&url);
        self.send_json(request, prompt).await
    }

    pub async fn post_comment(&self, prompt_id: &str, comment: &NewComment) -> Result<Comment> {
        let url = self.prompt_url(prompt_id, "/comments");
        let request = Request::post(&url);
        self.send_json(request, comment).await
    }

    /// The session user's vote on the given prompt, if any.
    pub async fn my_vote(&self, prompt_id: &str) -> Result<Option<Vote>> {
        let url = self.prompt_url(prompt_id, "/vote");
        let request = Request::get(&url);
        self.send(request).await
    }

    /// Upserts the session user's vote record, keyed by the backend's
    /// (user, prompt) uniqueness constraint. Placing and flipping a vote
    /// are the same call.
    pub async fn place_vote(&self, prompt_id: &str, direction: VoteDirection) -> Result<()> {
        let url = self.prompt_url(prompt_id, "/vote");
        let request = Request::put(&url);
        let vote = NewVote {
            direction: direction.into(),
        };
        self.send_json(request, &vote).await
    }

    /// Deletes the session user's vote record on the given prompt.
    pub async fn retract_vote(&self, prompt_id: &str) -> Result<()> {
        let url = self.prompt_url(prompt_id, "/vote");
        let request = Request::delete(&url);
        self.send(request).await
    }

    /// Updates a prompt's aggregate counters and returns the updated record.
    ///
    /// Issued after the vote-record mutation succeeded. The two calls are
    /// not atomic: if this one fails the counters are stale relative to the
    /// vote-record table until a later corrective action.
    pub async fn update_vote_counts(&self, prompt_id: &str, counts: &VoteCounts) -> Result<Prompt> {
        let url = self.prompt_url(prompt_id, "/vote-counts");
        let request = Request::put(&url);
        self.send_json(request, counts).await
    }

    #[must_use]
    pub fn token(&self) -> &ApiToken {
        &self.token
    }
}
