use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read the template context from `path`; no path means no context.
pub async fn load_context(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(Value::Null);
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read context file {}", path.display()))?;
    parse_context(path, &text)
}

/// `.json` files go through serde_json, everything else through serde_yaml.
pub fn parse_context(path: &Path, text: &str) -> Result<Value> {
    let value = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    } else {
        serde_yaml::from_str(text)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    };
    Ok(value)
}
