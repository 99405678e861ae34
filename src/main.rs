use anyhow::Context;
use clap::Parser;
use reliquary::utils::{logger, validation::Validate};
use reliquary::{CliConfig, LocalStorage, QueryPipeline, ReportEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting reliquary");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let engine = ReportEngine::new(QueryPipeline::new(LocalStorage::new(cwd), config));

    match engine.run().await {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
