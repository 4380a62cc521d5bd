use anyhow::Context;
use clap::Parser;
use strip_scraper::config::toml_config::TomlConfig;
use strip_scraper::domain::ports::ConfigProvider;
use strip_scraper::utils::error::ErrorSeverity;
use strip_scraper::utils::{logger, validation::Validate};
use strip_scraper::{EtlEngine, LocalStorage, StripPipeline};

#[derive(Parser)]
#[command(name = "toml-strip")]
#[command(about = "Strip standings driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "strip-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the strip setting from config
    #[arg(long)]
    strip: Option<bool>,

    /// Dry run - show what would be fetched and written without doing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based strip standings");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Some(strip) = args.strip {
        config.strip.enabled = strip;
        tracing::info!("🔧 Strip mode overridden to: {}", strip);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be downloaded or written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = StripPipeline::new(storage, config).context("failed to build the HTTP client")?;
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Strip standings completed successfully!");
            println!("✅ Strip standings completed successfully!");
            for path in &written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Strip standings failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

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
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  URLs: {}", config.source_urls().len());
    println!("  Files: {}", config.source_files().len());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Strip mode: {}", config.strip_enabled());
    println!("  Snake groups: {}", config.snake_groups());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Sources:");
    for url in config.source_urls() {
        println!("  GET {}", url);
    }
    for file in config.source_files() {
        println!("  READ {}", file);
    }
    println!("  Timeout: {}s", config.request_timeout_seconds());
    if let Some(user_agent) = config.user_agent() {
        println!("  User-Agent: {}", user_agent);
    }

    println!();
    println!("⚙️ Processing:");
    if config.strip_enabled() {
        println!("  Cadet and Juvenil pages merged per division into \"Tira\" standings");
    } else {
        println!("  Pages ranked as they are");
    }
    println!(
        "  Teams dealt into {} snake groups",
        config.snake_groups()
    );

    println!();
    println!("💾 Output:");
    println!("  Path: {}", config.output_path());
    for format in config.output_formats() {
        println!("  {{category}}-{{date}}.{}", format.to_ascii_lowercase());
    }

    println!();
    println!("✅ Dry run analysis complete.");
}
