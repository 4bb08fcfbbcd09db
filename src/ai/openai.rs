//! OpenAI chat-completions review adapter.
//!
//! The one component allowed to block on the network. The request carries
//! an explicit timeout; every failure maps into `ReviewError`, which the
//! engine records as SKIPPED.

use std::time::Duration;

use serde_json::json;

use super::prompt::{self, REVIEW_SYSTEM_PROMPT};
use super::{ReviewError, ReviewOutcome, StrategyReviewer, Verdict};
use crate::brief::Brief;
use crate::config::ReviewConfig;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MAX_RESPONSE_TOKENS: u32 = 300;

pub struct OpenAiReviewer {
    api_key: String,
    model: String,
    timeout: Duration,
    prompt_template: String,
    max_strategy_chars: usize,
    endpoint: String,
}

impl OpenAiReviewer {
    pub fn new(api_key: String, config: &ReviewConfig) -> Self {
        OpenAiReviewer {
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            prompt_template: config.prompt_template.clone(),
            max_strategy_chars: config.max_strategy_chars,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    fn request_body(&self, brief: &Brief, strategy_text: &str) -> serde_json::Value {
        let user_prompt = prompt::build(
            &self.prompt_template,
            brief,
            strategy_text,
            self.max_strategy_chars,
        );
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": REVIEW_SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt },
            ],
            "max_tokens": MAX_RESPONSE_TOKENS,
            "temperature": 0.1,
        })
    }
}

impl StrategyReviewer for OpenAiReviewer {
    fn review(&self, brief: &Brief, strategy_text: &str) -> Result<ReviewOutcome, ReviewError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(brief, strategy_text))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReviewError::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let payload: serde_json::Value = response.json()?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ReviewError::MalformedResponse("missing choices[0].message.content".to_string())
            })?
            .trim()
            .to_string();

        let verdict = Verdict::from_response(&content).ok_or_else(|| {
            ReviewError::MalformedResponse(format!(
                "response does not start with a verdict token: {:.60}",
                content
            ))
        })?;

        Ok(ReviewOutcome {
            verdict,
            rationale: content,
        })
    }
}
