//! Ordered document validation.
//!
//! Stages run in a fixed order and each stage completes over every present
//! field before the next begins: required presence, type, numeric range and
//! item counts, string length/pattern/identifier shape, enum membership,
//! nested shapes. Cross-field checks run last. The first violation is
//! returned, so a missing field is never reported as a type error and a
//! type error is never reported as a range error.

use std::collections::BTreeSet;

use foody_core::entities::GeoPoint;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::rules::{DocumentCheck, FieldType, Schema, ValueSpec};

type Outcome = Result<(), ValidationError>;

/// Absolute tolerance (scaled by the total) when comparing money sums.
const AMOUNT_TOLERANCE: f64 = 1e-6;

/// Path used when the document itself is not an object.
const ROOT: &str = "$";

#[derive(Debug, Clone, Copy)]
enum Stage {
    Type,
    Range,
    Text,
    Enum,
    Nested,
}

const STAGES: [Stage; 5] = [
    Stage::Type,
    Stage::Range,
    Stage::Text,
    Stage::Enum,
    Stage::Nested,
];

pub(crate) fn validate_document(schema: &Schema, document: &Value) -> Outcome {
    validate_object(schema, document, "")
}

fn validate_object(schema: &Schema, value: &Value, prefix: &str) -> Outcome {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::TypeMismatch {
            path: (if prefix.is_empty() { ROOT } else { prefix }).to_string(),
            expected: "an object",
            found: json_type(value),
        });
    };

    for rule in schema.fields.iter().filter(|r| r.required) {
        if !object.contains_key(rule.name) {
            return Err(ValidationError::MissingField {
                path: join(prefix, rule.name),
            });
        }
    }

    for stage in STAGES {
        for rule in &schema.fields {
            if let Some(field) = object.get(rule.name) {
                check_stage(stage, &rule.spec, field, &join(prefix, rule.name))?;
            }
        }
    }

    for check in &schema.checks {
        run_document_check(*check, object, prefix)?;
    }

    Ok(())
}

/// Validate a single value through every stage.
fn check_value(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    for stage in STAGES {
        check_stage(stage, spec, value, path)?;
    }
    Ok(())
}

fn check_stage(stage: Stage, spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    match stage {
        Stage::Type => check_type(spec, value, path),
        Stage::Range => check_range(spec, value, path),
        Stage::Text => check_text(spec, value, path),
        Stage::Enum => check_enum(spec, value, path),
        Stage::Nested => check_nested(spec, value, path),
    }
}

fn check_type(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    let ok = match spec.ty {
        FieldType::String | FieldType::Reference => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::List(_) | FieldType::Position => value.is_array(),
        FieldType::Map(_) | FieldType::Object(_) => value.is_object(),
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch {
            path: path.to_string(),
            expected: spec.ty.name(),
            found: json_type(value),
        })
    }
}

fn check_range(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    if let Some(n) = value.as_f64() {
        if let Some(min) = spec.minimum {
            if n < min {
                return Err(range(path, format!("must be >= {min}, got {n}")));
            }
        }
        if let Some(max) = spec.maximum {
            if n > max {
                return Err(range(path, format!("must be <= {max}, got {n}")));
            }
        }
    }

    if let Some(items) = value.as_array() {
        if let Some(min) = spec.min_items {
            if items.len() < min {
                return Err(range(
                    path,
                    format!("must have at least {min} items, got {}", items.len()),
                ));
            }
        }
        if let Some(max) = spec.max_items {
            if items.len() > max {
                return Err(range(
                    path,
                    format!("must have at most {max} items, got {}", items.len()),
                ));
            }
        }
    }

    Ok(())
}

fn check_text(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    let Some(text) = value.as_str() else {
        return Ok(());
    };

    if let Some(max) = spec.max_length {
        let len = text.chars().count();
        if len > max {
            return Err(range(
                path,
                format!("must be at most {max} characters, got {len}"),
            ));
        }
    }

    if let Some(pattern) = &spec.pattern {
        if !pattern.is_match(text) {
            return Err(ValidationError::PatternMismatch {
                path: path.to_string(),
                pattern: pattern.as_str().to_string(),
            });
        }
    }

    if matches!(spec.ty, FieldType::Reference) {
        check_identifier(text, path)?;
    }

    Ok(())
}

fn check_enum(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    if let (Some(allowed), Some(text)) = (spec.allowed, value.as_str()) {
        if !allowed.contains(&text) {
            return Err(ValidationError::EnumViolation {
                path: path.to_string(),
                allowed,
            });
        }
    }
    Ok(())
}

fn check_nested(spec: &ValueSpec, value: &Value, path: &str) -> Outcome {
    match &spec.ty {
        FieldType::List(element) => {
            if let Some(items) = value.as_array() {
                for (i, item) in items.iter().enumerate() {
                    check_value(element, item, &format!("{path}[{i}]"))?;
                }
            }
            Ok(())
        }
        FieldType::Map(inner) => {
            if let Some(entries) = value.as_object() {
                for (key, entry) in entries {
                    let entry_path = join(path, key);
                    check_identifier(key, &entry_path)?;
                    check_value(inner, entry, &entry_path)?;
                }
            }
            Ok(())
        }
        FieldType::Object(schema) => validate_object(schema, value, path),
        FieldType::Position => check_position(value, path),
        FieldType::String | FieldType::Number | FieldType::Integer | FieldType::Reference => Ok(()),
    }
}

fn check_position(value: &Value, path: &str) -> Outcome {
    let Some(components) = value.as_array() else {
        return Ok(());
    };

    if components.len() != 2 {
        return Err(range(
            path,
            format!(
                "must have exactly 2 components [longitude, latitude], got {}",
                components.len()
            ),
        ));
    }

    let bounds = [
        ("longitude", GeoPoint::LONGITUDE_RANGE),
        ("latitude", GeoPoint::LATITUDE_RANGE),
    ];
    for (i, (component, (label, (min, max)))) in components.iter().zip(bounds).enumerate() {
        let component_path = format!("{path}[{i}]");
        let Some(n) = component.as_f64() else {
            return Err(ValidationError::TypeMismatch {
                path: component_path,
                expected: "a number",
                found: json_type(component),
            });
        };
        if !(min..=max).contains(&n) {
            return Err(range(
                &component_path,
                format!("{label} must be within [{min}, {max}], got {n}"),
            ));
        }
    }

    Ok(())
}

fn check_identifier(text: &str, path: &str) -> Outcome {
    if text.is_empty() {
        return Err(ValidationError::ReferentialShape {
            path: path.to_string(),
            reason: "identifier must be a non-empty string",
        });
    }
    Ok(())
}

fn run_document_check(check: DocumentCheck, object: &Map<String, Value>, prefix: &str) -> Outcome {
    match check {
        DocumentCheck::SumEquals { parts, total } => {
            let (Some(parts_map), Some(expected)) = (
                object.get(parts).and_then(Value::as_object),
                object.get(total).and_then(Value::as_f64),
            ) else {
                return Ok(());
            };

            let sum: f64 = parts_map.values().filter_map(Value::as_f64).sum();
            if (sum - expected).abs() > AMOUNT_TOLERANCE * expected.abs().max(1.0) {
                return Err(ValidationError::Inconsistent {
                    path: join(prefix, parts),
                    reason: format!("values sum to {sum} but {total} is {expected}"),
                });
            }
            Ok(())
        }
        DocumentCheck::KeysMatch { left, right } => {
            let (Some(left_map), Some(right_map)) = (
                object.get(left).and_then(Value::as_object),
                object.get(right).and_then(Value::as_object),
            ) else {
                return Ok(());
            };

            let left_keys: BTreeSet<&str> = left_map.keys().map(String::as_str).collect();
            let right_keys: BTreeSet<&str> = right_map.keys().map(String::as_str).collect();
            if left_keys != right_keys {
                let missing: Vec<_> = right_keys.difference(&left_keys).collect();
                let unexpected: Vec<_> = left_keys.difference(&right_keys).collect();
                return Err(ValidationError::Inconsistent {
                    path: join(prefix, left),
                    reason: format!(
                        "keys must match {right}: missing {missing:?}, unexpected {unexpected:?}"
                    ),
                });
            }
            Ok(())
        }
    }
}

fn range(path: &str, constraint: String) -> ValidationError {
    ValidationError::RangeViolation {
        path: path.to_string(),
        constraint,
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
