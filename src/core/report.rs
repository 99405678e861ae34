use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives one query through extract, classify and render.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();

        tracing::info!("Reading query batch...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} records",
            raw_data.as_ref().map_or(0, Vec::len)
        );

        tracing::info!("Classifying records...");
        let items = self.pipeline.transform(raw_data).await?;
        tracing::info!("Kept {} items", items.len());

        tracing::info!("Rendering reply...");
        let rendered = self.pipeline.load(&items).await?;

        tracing::debug!("Query handled in {:?}", started.elapsed());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection::Aggregator;
    use crate::domain::model::Record;
    use crate::utils::error::ReliquaryError;

    struct MockPipeline {
        records: Option<Vec<Record>>,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        async fn extract(&self) -> Result<Option<Vec<Record>>> {
            if self.fail_extract {
                return Err(ReliquaryError::ProcessingError {
                    message: "source unavailable".to_string(),
                });
            }
            Ok(self.records.clone())
        }

        async fn transform(&self, data: Option<Vec<Record>>) -> Result<Aggregator> {
            Ok(Aggregator::new(data))
        }

        async fn load(&self, result: &Aggregator) -> Result<String> {
            Ok(result.render_list().join("\n"))
        }
    }

    #[tokio::test]
    async fn test_run_passes_items_through_phases() {
        let engine = ReportEngine::new(MockPipeline {
            records: Some(vec![
                Record::from(serde_json::json!({"kind": "Relic", "name": "Meso N6"})),
                Record::from(serde_json::json!({"kind": "Arcane", "name": "Energize"})),
            ]),
            fail_extract: false,
        });

        assert_eq!(engine.run().await.unwrap(), "Meso N6");
    }

    #[tokio::test]
    async fn test_run_propagates_extract_error() {
        let engine = ReportEngine::new(MockPipeline {
            records: None,
            fail_extract: true,
        });

        assert!(matches!(
            engine.run().await,
            Err(ReliquaryError::ProcessingError { .. })
        ));
    }
}
