use crate::core::classifier::MalformedPolicy;
use crate::core::collection::Aggregator;
use crate::core::render::{OutputFormat, RenderLimits, Theme};
use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// What a classified item must offer to be presented.
pub trait Renderable {
    fn render(&self) -> String;
    fn kind_tag(&self) -> &'static str;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Option<Vec<Record>>>;
    async fn transform(&self, data: Option<Vec<Record>>) -> Result<Aggregator>;
    async fn load(&self, result: &Aggregator) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn malformed_policy(&self) -> MalformedPolicy;
    fn theme(&self) -> &Theme;
    fn limits(&self) -> &RenderLimits;
}
