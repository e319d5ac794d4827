use crate::chat::{ChatRequest, ChatResponse};
use crate::constants::{CHAT_COMPLETIONS_PATH, REQUEST_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::utils::build_headers;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Anything that can answer a chat completion request.
#[async_trait]
pub trait ChatCompletions {
    async fn create(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// Client for the Z.ai (Zhipu) chat completion endpoint.
pub struct ZaiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ZaiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_client(client, api_key, base_url))
    }

    pub fn with_client(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl ChatCompletions for ZaiClient {
    async fn create(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.endpoint();
        debug!("POST {} model={}", url, request.model);

        let response = self
            .client
            .post(&url)
            .headers(build_headers(&self.api_key)?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!("could not read error body for {}: {}", status, err);
                    String::new()
                }
            };
            return Err(Error::Api { status, body });
        }

        let body = response.json::<ChatResponse>().await?;
        debug!(
            "response id={:?} model={:?} choices={}",
            body.id,
            body.model,
            body.choices.len()
        );
        Ok(body)
    }
}
