use std::path::Path;

use crate::utils::error::Result;

/// Reads a saved standings page. Invalid UTF-8 is replaced rather than
/// rejected; the pages are sometimes saved in a legacy encoding.
pub async fn read_html_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let html = String::from_utf8_lossy(&bytes).into_owned();
    tracing::info!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(html)
}
