use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::domain::ports::ConfigProvider;
use crate::domain::services::DEFAULT_SNAKE_GROUPS;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "strip-scraper")]
#[command(about = "Builds combined Cadet/Juvenil strip standings from volleyball results pages")]
pub struct CliConfig {
    /// Standings page URL (repeat the flag or separate with commas)
    #[arg(long = "url", value_delimiter = ',')]
    pub urls: Vec<String>,

    /// Saved standings page (.html), read instead of or besides URLs
    #[arg(long = "file", value_delimiter = ',')]
    pub files: Vec<String>,

    #[arg(long, default_value = "./outputs")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_values = ["csv", "xlsx"])]
    pub formats: Vec<String>,

    /// Rank the pages as they are, without merging Cadet and Juvenil
    #[arg(long)]
    pub no_strip: bool,

    #[arg(long, default_value_t = DEFAULT_SNAKE_GROUPS)]
    pub snake_groups: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source_urls(&self) -> &[String] {
        &self.urls
    }

    fn source_files(&self) -> &[String] {
        &self.files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn strip_enabled(&self) -> bool {
        !self.no_strip
    }

    fn snake_groups(&self) -> usize {
        self.snake_groups
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_sources(&self.urls, &self.files)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        validation::validate_positive_number("snake_groups", self.snake_groups, 1)?;
        validation::validate_range("timeout", self.timeout, 1, 300)?;
        Ok(())
    }
}
