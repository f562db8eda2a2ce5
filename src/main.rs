use clap::Parser;
use tech_radar::utils::logger;
use tech_radar::{CliConfig, RunOutcome};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tech-radar");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match tech_radar::run(&config) {
        Ok(RunOutcome::Rendered(path)) => {
            tracing::info!("✅ Tech radar rendered successfully!");
            println!("✅ Tech radar saved to: {}", path.display());
        }
        Ok(RunOutcome::DryRun { markers }) => {
            println!("🔍 Dry run complete: {} technologies laid out", markers);
        }
        Err(e) => {
            tracing::error!("❌ Tech radar failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
