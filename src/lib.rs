pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::query_pipeline::QueryPipeline;
pub use config::ReliquaryConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::classifier::{classify, classify_kind, Classification, MalformedPolicy};
pub use crate::core::collection::Aggregator;
pub use crate::core::render::{OutputFormat, RenderLimits, Renderer, Theme, NO_RESULTS_MESSAGE, OVERFLOW_MESSAGE};
pub use crate::core::report::ReportEngine;
pub use domain::items::{ClassifiedItem, PrimePart, Relic};
pub use domain::model::Record;
pub use domain::ports::Renderable;
pub use utils::error::{ReliquaryError, Result};
