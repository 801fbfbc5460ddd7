use crate::core::dedupe_top_n;
use crate::models::Prediction;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Number of distinct ingredients taken from one image
pub const DEFAULT_TOP_N: usize = 3;

/// Errors that can occur when recognizing ingredients in an image
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No classifiable content in image")]
    NoClassifiableContent,
}

/// Image classification capability
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify an encoded image, best prediction first
    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, VisionError>;
}

/// Classifier backed by a remote inference endpoint
///
/// The endpoint receives the raw image bytes and answers with a JSON array
/// of `{ "label", "confidence" }` objects (`className` / `probability` are
/// accepted as aliases).
pub struct HttpClassifier {
    endpoint: String,
    client: Client,
}

impl HttpClassifier {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, VisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, VisionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VisionError::Unavailable(format!(
                "classifier returned {}",
                status
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| VisionError::InvalidResponse(e.to_string()))
    }
}

/// Classifier built on first use and kept for the life of the process
///
/// A failed initialization is not cached; the next call tries again.
pub struct LazyClassifier<C, F> {
    cell: OnceCell<C>,
    factory: F,
}

impl<C, F> LazyClassifier<C, F>
where
    C: Classifier,
    F: Fn() -> Result<C, VisionError> + Send + Sync,
{
    pub fn new(factory: F) -> Self {
        Self {
            cell: OnceCell::new(),
            factory,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    async fn get(&self) -> Result<&C, VisionError> {
        self.cell
            .get_or_try_init(|| async {
                tracing::info!("Initializing image classifier");
                (self.factory)()
            })
            .await
    }
}

#[async_trait]
impl<C, F> Classifier for LazyClassifier<C, F>
where
    C: Classifier,
    F: Fn() -> Result<C, VisionError> + Send + Sync,
{
    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, VisionError> {
        self.get().await?.classify(image).await
    }
}

/// Classify an image and map its labels to up to `n` pantry ingredients
///
/// Any failure is returned to the caller, who must leave the pantry
/// untouched. An image whose labels map to no ingredient yields `Ok` with
/// an empty list.
pub async fn recognize_ingredients(
    classifier: &dyn Classifier,
    image: &[u8],
    n: usize,
) -> Result<Vec<String>, VisionError> {
    if image.is_empty() {
        return Err(VisionError::NoClassifiableContent);
    }

    let predictions = classifier.classify(image).await?;
    if predictions.is_empty() {
        return Err(VisionError::NoClassifiableContent);
    }

    tracing::debug!(
        "Classifier returned {} predictions, top: {:?}",
        predictions.len(),
        predictions.first().map(|p| p.label.as_str())
    );

    Ok(dedupe_top_n(&predictions, n))
}
