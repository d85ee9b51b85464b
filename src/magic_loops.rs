/// MagicLoops client - runs the hosted translation loop over HTTP

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::MagicLoopsConfig;

#[derive(Debug, Clone)]
pub struct MagicLoopsClient {
    client: Client,
    loop_url: String,
}

#[derive(Debug, Error)]
pub enum MagicLoopsError {
    #[error("request to translation service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response from translation API: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
pub struct LoopRunRequest {
    pub text: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct LoopRunResponse {
    #[serde(rename = "loopOutput")]
    pub loop_output: Option<LoopOutput>,
}

#[derive(Debug, Deserialize)]
pub struct LoopOutput {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

impl MagicLoopsClient {
    pub fn new(config: &MagicLoopsConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            loop_url: config.loop_url.clone(),
        })
    }

    /// Runs the loop with the caller's text, which may be null.
    ///
    /// The loop-run endpoint takes a GET carrying a JSON body. The body of
    /// the reply is parsed without checking the HTTP status.
    pub async fn run_loop(&self, text: Option<Value>) -> Result<LoopOutput, MagicLoopsError> {
        let request = LoopRunRequest { text };
        let response = self
            .client
            .get(&self.loop_url)
            .json(&request)
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: LoopRunResponse = serde_json::from_str(&body)
            .map_err(|e| MagicLoopsError::InvalidResponse(e.to_string()))?;

        parsed
            .loop_output
            .ok_or_else(|| MagicLoopsError::InvalidResponse("missing loopOutput".to_string()))
    }
}
