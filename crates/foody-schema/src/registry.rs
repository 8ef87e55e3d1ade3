//! Central schema registry for all entity kinds.
//!
//! The rule table is assembled once through [`SchemaRegistryBuilder`] and is
//! immutable afterwards, so a single `SchemaRegistry` can be shared (by
//! reference or `Arc`) across any number of concurrent validation calls
//! without locking. Every call site receives the registry explicitly.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use foody_core::entities::{Entity, Feedback, Item, MenuEntry, Order, Restaurant, User};
use foody_core::enums::EntityKind;
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;
use crate::persistence::Persistence;
use crate::rules::Schema;
use crate::standard;
use crate::validate::validate_document;

/// Collects rule sets before the registry is frozen.
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    schemas: HashMap<EntityKind, Schema>,
}

impl SchemaRegistryBuilder {
    /// Register the rule set for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Configuration` if `kind` already has a rule set.
    pub fn define_schema(&mut self, kind: EntityKind, schema: Schema) -> Result<&mut Self, SchemaError> {
        match self.schemas.entry(kind) {
            Entry::Occupied(_) => Err(SchemaError::Configuration(format!(
                "schema for '{kind}' is already defined"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(schema);
                Ok(self)
            }
        }
    }

    #[must_use]
    pub fn build(self) -> SchemaRegistry {
        SchemaRegistry {
            schemas: self.schemas,
        }
    }
}

/// Immutable table of one rule set per entity kind.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: HashMap<EntityKind, Schema>,
}

impl SchemaRegistry {
    /// Start an empty registry.
    #[must_use]
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Build a registry holding the standard rule set of every kind.
    #[must_use]
    pub fn new() -> Self {
        let schemas = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, standard::for_kind(kind)))
            .collect();
        Self { schemas }
    }

    /// Rule set for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotRegistered` if no rule set was defined.
    pub fn schema(&self, kind: EntityKind) -> Result<&Schema, SchemaError> {
        self.schemas
            .get(&kind)
            .ok_or(SchemaError::NotRegistered(kind))
    }

    /// Registered kinds in declaration order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EntityKind> {
        let mut kinds: Vec<EntityKind> = self.schemas.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Unique fields of `kind`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotRegistered` for an unknown kind.
    pub fn unique_fields(&self, kind: EntityKind) -> Result<Vec<&'static str>, SchemaError> {
        Ok(self.schema(kind)?.unique_fields().collect())
    }

    /// Check a candidate document against the rule set of `kind`.
    ///
    /// Pure: nothing is stored and no collaborator is consulted.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotRegistered` for an unknown kind, or
    /// `SchemaError::Invalid` carrying the first violation found.
    pub fn validate(&self, kind: EntityKind, document: &Value) -> Result<(), SchemaError> {
        let schema = self.schema(kind)?;
        validate_document(schema, document).map_err(|error| {
            tracing::debug!(%kind, path = error.path(), rule = error.rule(), "document rejected");
            SchemaError::Invalid(error)
        })
    }

    /// Validate a typed record through its serialized form.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate), plus `SchemaError::Serde` if the
    /// record cannot be serialized.
    pub fn validate_entity<T: Entity>(&self, record: &T) -> Result<(), SchemaError> {
        let document = serde_json::to_value(record).map_err(|source| SchemaError::Serde {
            kind: T::KIND,
            source,
        })?;
        self.validate(T::KIND, &document)
    }

    /// Validate a document, then decode it into its typed record.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate), plus `SchemaError::Serde` if the
    /// accepted document still does not fit the record type.
    pub fn decode<T: Entity>(&self, document: Value) -> Result<T, SchemaError> {
        self.validate(T::KIND, &document)?;
        serde_json::from_value(document).map_err(|source| SchemaError::Serde {
            kind: T::KIND,
            source,
        })
    }

    /// Ask `lookup` whether `value` is already taken for a unique field.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Configuration` if `field` is not declared unique
    /// for `kind`, or the collaborator's error unchanged.
    pub fn check_uniqueness<P: Persistence + ?Sized>(
        &self,
        kind: EntityKind,
        field: &str,
        value: &Value,
        lookup: &P,
    ) -> Result<bool, SchemaError> {
        let schema = self.schema(kind)?;
        if !schema.unique_fields().any(|unique| unique == field) {
            return Err(SchemaError::Configuration(format!(
                "'{kind}.{field}' is not a unique field"
            )));
        }
        Ok(lookup.exists(kind, field, value)?)
    }

    /// Validate every document, then hand the whole batch to `store`.
    ///
    /// All-or-nothing: if any document fails, the first failure is returned
    /// with its position and `store` is never called. Uniqueness is left to
    /// the store, whose errors are surfaced unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::BatchRejected` for the first invalid document,
    /// or `SchemaError::Persistence` if the store refuses the batch.
    pub fn seed<P: Persistence + ?Sized>(
        &self,
        kind: EntityKind,
        documents: Vec<Value>,
        store: &P,
    ) -> Result<usize, SchemaError> {
        let schema = self.schema(kind)?;

        for (index, document) in documents.iter().enumerate() {
            if let Err(source) = validate_document(schema, document) {
                tracing::warn!(
                    %kind,
                    index,
                    path = source.path(),
                    rule = source.rule(),
                    "seed batch rejected"
                );
                return Err(SchemaError::BatchRejected {
                    kind,
                    index,
                    source,
                });
            }
        }

        let batch_len = documents.len();
        let written = store.insert_many(kind, documents).inspect_err(|error| {
            tracing::warn!(%kind, batch_len, %error, "store refused seed batch");
        })?;
        tracing::info!(%kind, written, "seeded batch");
        Ok(written)
    }

    /// JSON Schema of the typed record for `kind`, for external tooling.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Serde` if the generated schema cannot be
    /// converted to a JSON value.
    pub fn json_schema(kind: EntityKind) -> Result<Value, SchemaError> {
        let generated = match kind {
            EntityKind::User => schema_for!(User),
            EntityKind::Restaurant => schema_for!(Restaurant),
            EntityKind::Item => schema_for!(Item),
            EntityKind::MenuEntry => schema_for!(MenuEntry),
            EntityKind::Order => schema_for!(Order),
            EntityKind::Feedback => schema_for!(Feedback),
        };
        serde_json::to_value(generated).map_err(|source| SchemaError::Serde { kind, source })
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
