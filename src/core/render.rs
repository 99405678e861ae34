//! Renderer module
//!
//! Turns an [`Aggregator`] into chat-sized text: one wrapped block, or an
//! itemized list with a relic cap and an overflow notice.

use crate::core::collection::Aggregator;
use crate::domain::ports::Renderable;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const NO_RESULTS_MESSAGE: &str = "Operator, no relics available for that query.";
pub const OVERFLOW_MESSAGE: &str = "Your query returned more results than I can display, operator. Refine your search for more accurate results.";

/// Delimiter tokens supplied by the chat front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub block_open: String,
    pub separator: String,
    pub block_close: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            block_open: "```\n".to_string(),
            separator: "\n\n".to_string(),
            block_close: "\n```".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderLimits {
    /// Items shown in a block; the rest are cut silently
    pub block_max_items: usize,
    /// Relics stop being listed once the list holds this many entries
    pub list_relic_cap: usize,
    /// More stored items than this appends the overflow notice
    pub list_overflow_threshold: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            block_max_items: 4,
            list_relic_cap: 3,
            list_overflow_threshold: 4,
        }
    }
}

pub fn render_block(items: &Aggregator, theme: &Theme, limits: &RenderLimits) -> String {
    let body = if items.is_empty() {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        items
            .iter()
            .take(limits.block_max_items)
            .map(|item| item.render())
            .collect::<Vec<_>>()
            .join(&theme.separator)
    };

    format!("{}{}{}", theme.block_open, body, theme.block_close)
}

pub fn render_list(items: &Aggregator, limits: &RenderLimits) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for item in items {
        if item.is_relic() && lines.len() >= limits.list_relic_cap {
            continue;
        }
        lines.push(item.render());
    }

    if lines.is_empty() {
        lines.push(NO_RESULTS_MESSAGE.to_string());
    }

    // 以儲存總數判斷，而不是輸出清單的長度
    if items.len() > limits.list_overflow_threshold {
        lines.push(OVERFLOW_MESSAGE.to_string());
    }
    lines
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Block,
    List,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "block" => Ok(OutputFormat::Block),
            "list" => Ok(OutputFormat::List),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for classified query results
pub struct Renderer {
    format: OutputFormat,
    theme: Theme,
    limits: RenderLimits,
}

impl Renderer {
    pub fn new(format: OutputFormat, theme: Theme, limits: RenderLimits) -> Self {
        Self {
            format,
            theme,
            limits,
        }
    }

    pub fn render(&self, items: &Aggregator) -> Result<String> {
        let rendered = match self.format {
            OutputFormat::Block => render_block(items, &self.theme, &self.limits),
            OutputFormat::List => render_list(items, &self.limits).join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(items.get_all())?,
        };
        Ok(rendered)
    }
}
