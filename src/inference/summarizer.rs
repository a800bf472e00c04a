use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::InferenceClient;
use crate::error::InferenceError;

/// Decoding parameters sent with every summarization request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            min_length: 50,
            max_length: 150,
            do_sample: false,
        }
    }
}

/// External abstractive-summarization capability
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, document: &str, params: &SummaryParams) -> Result<String, InferenceError>;
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

/// Extract the first `summary_text` out of a summarization response
pub fn parse_summary_response(value: serde_json::Value) -> Result<String, InferenceError> {
    let outputs: Vec<SummaryOutput> = serde_json::from_value(value)
        .map_err(|e| InferenceError::Malformed(format!("unexpected summarizer response: {}", e)))?;

    outputs
        .into_iter()
        .next()
        .map(|o| o.summary_text)
        .ok_or_else(|| InferenceError::Malformed("summarizer returned no output".to_string()))
}

/// Summarizer backed by a hosted inference endpoint
pub struct HttpSummarizer {
    client: Arc<InferenceClient>,
    model: String,
}

impl HttpSummarizer {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        let model = client.config().summarizer_model.clone();
        Self { client, model }
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, document: &str, params: &SummaryParams) -> Result<String, InferenceError> {
        let request = SummarizeRequest {
            inputs: document,
            parameters: params,
        };
        let value: serde_json::Value = self.client.post_model(&self.model, &request).await?;
        parse_summary_response(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_params() {
        let params = SummaryParams::default();
        assert_eq!(params.min_length, 50);
        assert_eq!(params.max_length, 150);
        assert!(!params.do_sample);
    }

    #[test]
    fn test_request_shape() {
        let params = SummaryParams::default();
        let request = SummarizeRequest {
            inputs: "a b c",
            parameters: &params,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": "a b c",
                "parameters": {"min_length": 50, "max_length": 150, "do_sample": false}
            })
        );
    }

    #[test]
    fn test_parse_summary_response() {
        let value = json!([{"summary_text": "Both speakers agree action is needed."}]);
        assert_eq!(
            parse_summary_response(value).unwrap(),
            "Both speakers agree action is needed."
        );
    }

    #[test]
    fn test_parse_summary_rejects_empty() {
        assert!(parse_summary_response(json!([])).is_err());
        assert!(parse_summary_response(json!({"error": "overloaded"})).is_err());
    }
}
