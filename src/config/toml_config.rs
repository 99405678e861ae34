use crate::core::classifier::MalformedPolicy;
use crate::core::render::{OutputFormat, RenderLimits, Theme};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReliquaryError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid ENV_VAR_RE regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliquaryConfig {
    pub source: SourceConfig,
    pub classify: ClassifyConfig,
    pub theme: Theme,
    pub limits: RenderLimits,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON file holding the query batch
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// "skip" or "fail"
    pub on_malformed: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            on_malformed: "skip".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "block", "list" or "json"
    pub format: String,
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "block".to_string(),
            path: None,
        }
    }
}

impl ReliquaryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReliquaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReliquaryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RELIC_THEME_OPEN})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        let input = validation::validate_required_field("source.path", &self.source.path)?;
        validation::validate_path("source.path", input)?;

        if let Some(output) = &self.output.path {
            validation::validate_path("output.path", output)?;
        }

        validation::validate_one_of(
            "classify.on_malformed",
            &self.classify.on_malformed,
            &["skip", "fail"],
        )?;
        validation::validate_one_of(
            "output.format",
            &self.output.format,
            &["block", "list", "json"],
        )?;

        validation::validate_positive_number(
            "limits.block_max_items",
            self.limits.block_max_items,
            1,
        )?;
        validation::validate_positive_number(
            "limits.list_relic_cap",
            self.limits.list_relic_cap,
            1,
        )?;
        validation::validate_positive_number(
            "limits.list_overflow_threshold",
            self.limits.list_overflow_threshold,
            1,
        )?;

        Ok(())
    }
}

impl ConfigProvider for ReliquaryConfig {
    fn input_path(&self) -> Option<&str> {
        self.source.path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.parse().unwrap_or_default()
    }

    fn malformed_policy(&self) -> MalformedPolicy {
        self.classify.on_malformed.parse().unwrap_or_default()
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn limits(&self) -> &RenderLimits {
        &self.limits
    }
}

impl Validate for ReliquaryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
