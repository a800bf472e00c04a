use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::InferenceError;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const DEFAULT_SUMMARIZER_MODEL: &str = "facebook/bart-large-cnn";

/// Configuration for the hosted inference endpoints
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// API token (from HF_API_TOKEN env var)
    pub api_token: String,
    /// Endpoint root; model paths are appended as `/models/{model}`
    pub base_url: String,
    /// Text-classification model used for sentiment
    pub classifier_model: String,
    /// Summarization model used for the executive summary
    pub summarizer_model: String,
}

impl InferenceConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, InferenceError> {
        let api_token = std::env::var("HF_API_TOKEN").map_err(|_| {
            InferenceError::Config("HF_API_TOKEN environment variable not set".to_string())
        })?;

        Ok(Self {
            api_token,
            base_url: env_or("DEBATEPULSE_INFERENCE_URL", DEFAULT_INFERENCE_URL),
            classifier_model: env_or("DEBATEPULSE_CLASSIFIER_MODEL", DEFAULT_CLASSIFIER_MODEL),
            summarizer_model: env_or("DEBATEPULSE_SUMMARIZER_MODEL", DEFAULT_SUMMARIZER_MODEL),
        })
    }

    /// Create with the default models against a custom endpoint
    pub fn new(api_token: String, base_url: String) -> Self {
        Self {
            api_token,
            base_url,
            classifier_model: DEFAULT_CLASSIFIER_MODEL.to_string(),
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
        }
    }

    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), model)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// HTTP client shared by the classifier and summarizer handles
pub struct InferenceClient {
    client: Client,
    config: InferenceConfig,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// POST a JSON payload to a model endpoint and decode the JSON reply
    pub async fn post_model<Req, Resp>(&self, model: &str, payload: &Req) -> Result<Resp, InferenceError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.config.model_url(model);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| InferenceError::Malformed(format!("{}: {}", e, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url_joins_cleanly() {
        let config = InferenceConfig::new("token".to_string(), "http://localhost:8080/".to_string());
        assert_eq!(
            config.model_url("facebook/bart-large-cnn"),
            "http://localhost:8080/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_new_uses_default_models() {
        let config = InferenceConfig::new("token".to_string(), DEFAULT_INFERENCE_URL.to_string());
        assert_eq!(config.classifier_model, DEFAULT_CLASSIFIER_MODEL);
        assert_eq!(config.summarizer_model, DEFAULT_SUMMARIZER_MODEL);
    }
}
