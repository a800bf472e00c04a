use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::info;

use super::{
    HttpSentimentClassifier, HttpSummarizer, InferenceClient, InferenceConfig, SentimentClassifier,
    Summarizer,
};
use crate::error::InferenceError;

/// Builds model handles the first time they are requested
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load_classifier(&self) -> Result<Arc<dyn SentimentClassifier>, InferenceError>;
    async fn load_summarizer(&self) -> Result<Arc<dyn Summarizer>, InferenceError>;
}

/// Loader for the hosted endpoints, configured from the environment at load time
#[derive(Default)]
pub struct HttpModelLoader {
    client: OnceCell<Arc<InferenceClient>>,
}

impl HttpModelLoader {
    async fn client(&self) -> Result<Arc<InferenceClient>, InferenceError> {
        self.client
            .get_or_try_init(|| async {
                let config = InferenceConfig::from_env()?;
                Ok::<_, InferenceError>(Arc::new(InferenceClient::new(config)))
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
    async fn load_classifier(&self) -> Result<Arc<dyn SentimentClassifier>, InferenceError> {
        let client = self.client().await?;
        info!("Loading sentiment classifier {}", client.config().classifier_model);
        Ok(Arc::new(HttpSentimentClassifier::new(client)))
    }

    async fn load_summarizer(&self) -> Result<Arc<dyn Summarizer>, InferenceError> {
        let client = self.client().await?;
        info!("Loading summarizer {}", client.config().summarizer_model);
        Ok(Arc::new(HttpSummarizer::new(client)))
    }
}

/// Session-wide cache of external model handles
///
/// Each handle is created at most once, on first use, and the same `Arc` is
/// handed out for the rest of the process. A failed load is not cached, so the
/// next request tries again.
pub struct ModelRegistry {
    loader: Box<dyn ModelLoader>,
    classifier: OnceCell<Arc<dyn SentimentClassifier>>,
    summarizer: OnceCell<Arc<dyn Summarizer>>,
}

impl ModelRegistry {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            classifier: OnceCell::new(),
            summarizer: OnceCell::new(),
        }
    }

    /// Registry backed by the hosted inference endpoints
    pub fn from_env() -> Self {
        Self::new(HttpModelLoader::default())
    }

    pub async fn classifier(&self) -> Result<Arc<dyn SentimentClassifier>, InferenceError> {
        self.classifier
            .get_or_try_init(|| self.loader.load_classifier())
            .await
            .cloned()
    }

    pub async fn summarizer(&self) -> Result<Arc<dyn Summarizer>, InferenceError> {
        self.summarizer
            .get_or_try_init(|| self.loader.load_summarizer())
            .await
            .cloned()
    }

    pub fn classifier_loaded(&self) -> bool {
        self.classifier.initialized()
    }

    pub fn summarizer_loaded(&self) -> bool {
        self.summarizer.initialized()
    }
}
