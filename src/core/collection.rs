use crate::core::classifier::{classify, MalformedPolicy};
use crate::core::render::{self, RenderLimits, Theme};
use crate::domain::items::ClassifiedItem;
use crate::domain::model::Record;
use crate::utils::error::Result;

/// Classified items of one query batch, in input order. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    items: Box<[ClassifiedItem]>,
}

impl Aggregator {
    /// Builds the collection, dropping records that don't classify or don't parse.
    pub fn new(records: Option<Vec<Record>>) -> Self {
        let mut items = Vec::new();
        let seen = records.as_ref().map_or(0, Vec::len);
        for record in records.iter().flatten() {
            // Skip 模式下 classify 不會回傳錯誤
            if let Ok(Some(item)) = classify(record, MalformedPolicy::Skip) {
                items.push(item);
            }
        }
        Self::finish(items, seen)
    }

    pub fn with_policy(records: Option<Vec<Record>>, policy: MalformedPolicy) -> Result<Self> {
        let mut items = Vec::new();
        let seen = records.as_ref().map_or(0, Vec::len);
        for record in records.iter().flatten() {
            if let Some(item) = classify(record, policy)? {
                items.push(item);
            }
        }
        Ok(Self::finish(items, seen))
    }

    fn finish(items: Vec<ClassifiedItem>, seen: usize) -> Self {
        tracing::debug!(
            "Classified {} records: kept {}, dropped {}",
            seen,
            items.len(),
            seen - items.len()
        );
        Self {
            items: items.into_boxed_slice(),
        }
    }

    pub fn get_all(&self) -> &[ClassifiedItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Block rendering with the default limits.
    pub fn render_block(&self, theme: &Theme) -> String {
        render::render_block(self, theme, &RenderLimits::default())
    }

    /// List rendering with the default limits.
    pub fn render_list(&self) -> Vec<String> {
        render::render_list(self, &RenderLimits::default())
    }
}

impl<'a> IntoIterator for &'a Aggregator {
    type Item = &'a ClassifiedItem;
    type IntoIter = std::slice::Iter<'a, ClassifiedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
