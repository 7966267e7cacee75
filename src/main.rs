use anyhow::Context;
use clap::Parser;
use tagsync::config::file::FileConfig;
use tagsync::core::retire::RetirementPolicy;
use tagsync::domain::ports::ConfigProvider;
use tagsync::utils::{logger, validation::Validate};
use tagsync::{CliConfig, HttpItemGateway, HttpPosGateway, LocalDocuments, SyncEngine, SyncSummary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting tagsync");

    let summary = if let Some(config_path) = &cli.config {
        let config = FileConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config file {}", config_path))?;
        config.validate()?;
        let policy = config.policy()?.into_policy();
        run_sync(config, policy).await?
    } else {
        cli.validate()?;
        let policy = cli.policy.into_policy();
        run_sync(cli, policy).await?
    };

    println!(
        "✅ Sync complete for {} ({})",
        summary.store_name, summary.store_id
    );
    println!(
        "   {} EPC(s) scanned, {} SKU count(s) pushed, {} EPC(s) retired",
        summary.epcs_scanned, summary.counts_pushed, summary.epcs_retired
    );
    println!("   Idempotency key: {}", summary.idempotency_key);
    if !summary.warnings.is_empty() {
        println!("   ⚠️  {} warning(s):", summary.warnings.len());
        for warning in &summary.warnings {
            println!("      - {}", warning);
        }
    }
    if let Some(report) = &summary.report_path {
        println!("   📁 Report: {}", report);
    }

    Ok(())
}

async fn run_sync<C: ConfigProvider>(
    config: C,
    policy: Box<dyn RetirementPolicy>,
) -> anyhow::Result<SyncSummary> {
    let documents = LocalDocuments::new(".".to_string());
    let pos = HttpPosGateway::new(config.pos_endpoint().to_string());
    let items = HttpItemGateway::new(config.items_endpoint().to_string());

    let engine = SyncEngine::new(documents, pos, items, config, policy);
    let summary = engine.run().await?;
    Ok(summary)
}
