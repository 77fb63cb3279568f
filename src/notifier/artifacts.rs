use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const ALL_PRS: &str = "all_prs.json";
pub const TARGET_LABEL_PRS: &str = "target_label_prs_urls.json";
pub const MERGEABLE_PRS: &str = "mergeable_prs_urls.json";
pub const PENDING_PRS: &str = "pending_prs_urls.json";

/// Dumps a run artifact as pretty-printed json so the CI job can pick it up
pub async fn write(dir: &Path, name: &str, payload: &impl Serialize) -> Result<()> {
    let content = serde_json::to_string_pretty(payload)?;
    let path = dir.join(name);

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Cannot write artifact {}", path.display()))?;

    Ok(())
}
