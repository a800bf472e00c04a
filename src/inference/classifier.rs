use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::InferenceClient;
use crate::error::InferenceError;
use crate::models::Sentiment;

/// Raw label and confidence returned by a text classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: String,
    pub score: f64,
}

impl ClassifierOutput {
    pub fn sentiment(&self) -> Sentiment {
        map_label(&self.label)
    }
}

/// External text-classification capability
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<ClassifierOutput, InferenceError>;
}

/// Map a free-form classifier label onto the three sentiment classes
pub fn map_label(label: &str) -> Sentiment {
    let label = label.to_lowercase();
    if label.contains("positive") || label.contains("joy") {
        Sentiment::Positive
    } else if label.contains("negative") || label.contains("sad") || label.contains("anger") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// Classification endpoints answer either `[[{..}, ..]]` or `[{..}, ..]`
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<ClassifierOutput>>),
    Flat(Vec<ClassifierOutput>),
}

/// Pick the highest-scoring label out of a classification response
pub fn parse_classifier_response(value: serde_json::Value) -> Result<ClassifierOutput, InferenceError> {
    let response: ClassifyResponse = serde_json::from_value(value)
        .map_err(|e| InferenceError::Malformed(format!("unexpected classifier response: {}", e)))?;

    let candidates = match response {
        ClassifyResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        ClassifyResponse::Flat(candidates) => candidates,
    };

    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| InferenceError::Malformed("classifier returned no labels".to_string()))
}

/// Sentiment classifier backed by a hosted inference endpoint
pub struct HttpSentimentClassifier {
    client: Arc<InferenceClient>,
    model: String,
}

impl HttpSentimentClassifier {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        let model = client.config().classifier_model.clone();
        Self { client, model }
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifierOutput, InferenceError> {
        let value: serde_json::Value = self
            .client
            .post_model(&self.model, &ClassifyRequest { inputs: text })
            .await?;
        parse_classifier_response(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_label() {
        assert_eq!(map_label("positive"), Sentiment::Positive);
        assert_eq!(map_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(map_label("joy"), Sentiment::Positive);
        assert_eq!(map_label("negative"), Sentiment::Negative);
        assert_eq!(map_label("sadness"), Sentiment::Negative);
        assert_eq!(map_label("anger"), Sentiment::Negative);
        assert_eq!(map_label("neutral"), Sentiment::Neutral);
        assert_eq!(map_label("LABEL_1"), Sentiment::Neutral);
        assert_eq!(map_label("surprise"), Sentiment::Neutral);
    }

    #[test]
    fn test_parse_nested_response_picks_top_score() {
        let value = json!([[
            {"label": "neutral", "score": 0.2},
            {"label": "positive", "score": 0.7},
            {"label": "negative", "score": 0.1}
        ]]);
        let output = parse_classifier_response(value).unwrap();
        assert_eq!(output.label, "positive");
        assert_eq!(output.sentiment(), Sentiment::Positive);
    }

    #[test]
    fn test_parse_flat_response() {
        let value = json!([{"label": "negative", "score": 0.93}]);
        let output = parse_classifier_response(value).unwrap();
        assert_eq!(output.sentiment(), Sentiment::Negative);
        assert!((output.score - 0.93).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_malformed_response() {
        assert!(matches!(
            parse_classifier_response(json!({"error": "Model is loading"})),
            Err(InferenceError::Malformed(_))
        ));
        assert!(matches!(
            parse_classifier_response(json!([])),
            Err(InferenceError::Malformed(_))
        ));
    }
}
