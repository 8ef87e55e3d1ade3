use anyhow::bail;
use foody_core::enums::EntityKind;
use foody_schema::SchemaRegistry;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DocumentsArgs;
use crate::commands::shared::read_documents;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub index: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub kind: EntityKind,
    pub total: usize,
    pub invalid: usize,
    pub documents: Vec<DocumentReport>,
}

/// Validate each document independently; a failure does not stop the run.
pub fn report(
    registry: &SchemaRegistry,
    kind: EntityKind,
    documents: &[Value],
) -> anyhow::Result<ValidateResponse> {
    let mut reports = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let report = match registry.validate(kind, document) {
            Ok(()) => DocumentReport {
                index,
                valid: true,
                rule: None,
                path: None,
                message: None,
            },
            Err(error) => {
                let Some(violation) = error.validation() else {
                    return Err(error.into());
                };
                DocumentReport {
                    index,
                    valid: false,
                    rule: Some(violation.rule()),
                    path: Some(violation.path().to_string()),
                    message: Some(violation.to_string()),
                }
            }
        };
        reports.push(report);
    }

    Ok(ValidateResponse {
        kind,
        total: reports.len(),
        invalid: reports.iter().filter(|r| !r.valid).count(),
        documents: reports,
    })
}

/// Handle `foody validate`. Exits non-zero if any document is invalid.
pub fn handle(
    args: &DocumentsArgs,
    registry: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let documents = read_documents(&args.file)?;
    let response = report(registry, args.kind, &documents)?;
    output(&response, flags.format)?;

    if response.invalid > 0 {
        bail!(
            "{} of {} {} documents failed validation",
            response.invalid,
            response.total,
            args.kind
        );
    }
    Ok(())
}
