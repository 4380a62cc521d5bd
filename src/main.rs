use clap::Parser;
use strip_scraper::utils::error::{ErrorSeverity, StripError};
use strip_scraper::utils::{logger, validation::Validate};
use strip_scraper::{CliConfig, EtlEngine, LocalStorage, StripPipeline};

fn exit_code(e: &StripError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(context: &str, e: &StripError) {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting strip-scraper");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
        std::process::exit(exit_code(&e));
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = match StripPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            report_failure("Could not build the HTTP client", &e);
            std::process::exit(exit_code(&e));
        }
    };

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
            report_failure("Strip standings failed", &e);
            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
