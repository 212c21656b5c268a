use anyhow::Context;
use clap::Parser;
use module_meta::config::toml_config::ManifestConfig;
use module_meta::utils::error::ErrorSeverity;
use module_meta::utils::{logger, validation::Validate};
use module_meta::ModuleSummary;

#[derive(Parser)]
#[command(name = "toml-modules")]
#[command(about = "Inspect build modules declared in a TOML manifest")]
struct Args {
    /// Path to TOML manifest file
    #[arg(short, long, default_value = "modules.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only show the module with this name
    #[arg(long)]
    module: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Validate the manifest without displaying module details
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML module inspector");
    tracing::info!("📁 Loading manifest from: {}", args.config);

    // 載入 TOML 清單
    let config = match ManifestConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load manifest '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證清單
    if let Err(e) = config.validate() {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Manifest validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    tracing::info!("✅ Manifest loaded and validated successfully");

    // 顯示清單摘要
    display_manifest_summary(&config, &args);

    if args.check {
        println!(
            "✅ Manifest '{}' is valid ({} modules)",
            config.manifest.name,
            config.module_count()
        );
        return Ok(());
    }

    // 選擇要顯示的模組
    let specs = match &args.module {
        Some(name) => {
            let module = config
                .find_module(name)
                .with_context(|| format!("module '{}' not found in manifest", name))?;
            vec![module.to_spec()]
        }
        None => config.module_specs(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&specs)?),
        "text" => {
            for spec in &specs {
                let summary = ModuleSummary::collect(spec);
                print!("{}", summary.render_text());
                println!();
            }
        }
        other => {
            anyhow::bail!("unsupported format '{}'. Hint: use 'text' or 'json'", other);
        }
    }

    tracing::info!("✅ Displayed {} module(s)", specs.len());

    Ok(())
}

fn display_manifest_summary(config: &ManifestConfig, args: &Args) {
    println!("📋 Manifest Summary:");
    println!(
        "  Manifest: {} v{}",
        config.manifest.name, config.manifest.version
    );
    println!("  Description: {}", config.manifest.description);
    println!("  Modules: {}", config.module_count());

    if let Some(module) = &args.module {
        println!("  Selected Module: {}", module);
    }

    if args.check {
        println!("  🔍 CHECK MODE ENABLED");
    }

    println!();
}
