pub mod query_pipeline;
