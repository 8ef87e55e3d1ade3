use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;

/// Read documents from `path`: a `.jsonl` file, a JSON array, or a single
/// JSON object.
pub fn read_documents(path: &Path) -> anyhow::Result<Vec<Value>> {
    if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        return serde_jsonlines::json_lines(path)
            .and_then(|lines| lines.collect::<std::io::Result<Vec<Value>>>())
            .with_context(|| format!("failed to read JSON lines from {}", path.display()));
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match parsed {
        Value::Array(documents) => Ok(documents),
        document @ Value::Object(_) => Ok(vec![document]),
        _ => bail!(
            "{} must hold a JSON object or an array of objects",
            path.display()
        ),
    }
}
