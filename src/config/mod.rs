pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::ReliquaryConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "reliquary")]
#[command(about = "Classify relic query results and render them for chat")]
pub struct CliConfig {
    /// JSON file with the query batch (overrides [source] path)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: block, list or json (overrides [output] format)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also write the rendered output to this file
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有）並套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::utils::error::Result<ReliquaryConfig> {
        let mut config = match &self.config {
            Some(path) => ReliquaryConfig::from_file(path).map_err(|e| {
                crate::utils::error::ReliquaryError::ConfigError {
                    message: format!("cannot load config file '{}': {}", path, e),
                }
            })?,
            None => ReliquaryConfig::default(),
        };

        if let Some(input) = &self.input {
            config.source.path = Some(input.clone());
        }
        if let Some(format) = &self.format {
            config.output.format = format.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
        Ok(config)
    }
}
