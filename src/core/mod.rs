pub mod classifier;
pub mod collection;
pub mod render;
pub mod report;

pub use crate::domain::items::ClassifiedItem;
pub use crate::domain::model::Record;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Renderable, Storage};
pub use crate::utils::error::Result;
