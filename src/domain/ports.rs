use crate::domain::model::{Classification, GlobalClassification};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for rendered reports.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_urls(&self) -> &[String];
    fn source_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Merge Cadet and Juvenil pages into strip standings before ranking.
    fn strip_enabled(&self) -> bool;
    fn snake_groups(&self) -> usize;
    fn request_timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Classification>>;
    async fn transform(&self, data: Vec<Classification>) -> Result<Vec<GlobalClassification>>;
    async fn load(&self, result: Vec<GlobalClassification>) -> Result<Vec<String>>;
}
