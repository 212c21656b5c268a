use clap::Parser;
use module_meta::utils::{logger, validation::Validate};
use module_meta::{CliConfig, ModuleSpec, ModuleSummary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting module-meta CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證模組描述
    if let Err(e) = config.validate() {
        tracing::error!("❌ Module description validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 快照成不可變的模組描述
    let spec = ModuleSpec::from_descriptor(&config);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
    } else {
        let summary = ModuleSummary::collect(&spec);
        println!("📋 Module Description:");
        print!("{}", summary.render_text());
    }

    tracing::info!("✅ Module description generated for '{}'", spec.name);

    Ok(())
}
