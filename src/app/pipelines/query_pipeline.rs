use crate::core::collection::Aggregator;
use crate::core::render::Renderer;
use crate::domain::model::{parse_batch, Record};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{ReliquaryError, Result};

/// Reads a query batch from storage, classifies it and renders the reply.
pub struct QueryPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> QueryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QueryPipeline<S, C> {
    async fn extract(&self) -> Result<Option<Vec<Record>>> {
        let path = self
            .config
            .input_path()
            .ok_or_else(|| ReliquaryError::MissingConfigError {
                field: "source.path".to_string(),
            })?;

        tracing::debug!("Reading query batch from: {}", path);
        let bytes = self.storage.read_file(path).await?;
        let batch = parse_batch(&bytes)?;

        if batch.is_none() {
            tracing::warn!("Query batch is null, nothing to classify");
        }
        Ok(batch)
    }

    async fn transform(&self, data: Option<Vec<Record>>) -> Result<Aggregator> {
        Aggregator::with_policy(data, self.config.malformed_policy())
    }

    async fn load(&self, result: &Aggregator) -> Result<String> {
        let renderer = Renderer::new(
            self.config.output_format(),
            self.config.theme().clone(),
            *self.config.limits(),
        );
        let rendered = renderer.render(result)?;

        if let Some(path) = self.config.output_path() {
            tracing::debug!("Writing rendered reply to: {}", path);
            self.storage.write_file(path, rendered.as_bytes()).await?;
        }

        Ok(rendered)
    }
}
