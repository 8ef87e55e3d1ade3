//! Declarative rule types.
//!
//! A [`Schema`] is an ordered list of [`FieldRule`]s plus cross-field
//! [`DocumentCheck`]s. Nested shapes (addresses, order lines, geo points)
//! are themselves `Schema`s embedded through [`FieldType::Object`], so the
//! same ordered validation runs at every depth.

use regex::Regex;

/// JSON shape a value must have.
#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    Number,
    /// A number without a fractional part.
    Integer,
    /// An identifier of another document: a non-empty string.
    Reference,
    /// An array whose elements all satisfy the inner spec.
    List(Box<ValueSpec>),
    /// An object keyed by identifiers whose values satisfy the inner spec.
    Map(Box<ValueSpec>),
    /// A nested record.
    Object(Schema),
    /// A `[longitude, latitude]` pair.
    Position,
}

impl FieldType {
    /// Human-readable name used in type mismatch errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Reference => "an identifier string",
            Self::List(_) => "an array",
            Self::Map(_) | Self::Object(_) => "an object",
            Self::Position => "a [longitude, latitude] array",
        }
    }
}

/// Type plus the constraints a value must satisfy.
#[derive(Debug, Clone)]
pub struct ValueSpec {
    pub(crate) ty: FieldType,
    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) allowed: Option<&'static [&'static str]>,
    pub(crate) min_items: Option<usize>,
    pub(crate) max_items: Option<usize>,
}

impl ValueSpec {
    #[must_use]
    pub const fn of(ty: FieldType) -> Self {
        Self {
            ty,
            minimum: None,
            maximum: None,
            max_length: None,
            pattern: None,
            allowed: None,
            min_items: None,
            max_items: None,
        }
    }

    #[must_use]
    pub const fn string() -> Self {
        Self::of(FieldType::String)
    }

    #[must_use]
    pub const fn number() -> Self {
        Self::of(FieldType::Number)
    }

    #[must_use]
    pub const fn integer() -> Self {
        Self::of(FieldType::Integer)
    }

    #[must_use]
    pub const fn reference() -> Self {
        Self::of(FieldType::Reference)
    }

    #[must_use]
    pub const fn position() -> Self {
        Self::of(FieldType::Position)
    }

    #[must_use]
    pub fn list_of(element: Self) -> Self {
        Self::of(FieldType::List(Box::new(element)))
    }

    #[must_use]
    pub fn map_of(value: Self) -> Self {
        Self::of(FieldType::Map(Box::new(value)))
    }

    #[must_use]
    pub const fn object(schema: Schema) -> Self {
        Self::of(FieldType::Object(schema))
    }

    /// Inclusive lower bound for numbers.
    #[must_use]
    pub const fn minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// Inclusive upper bound for numbers.
    #[must_use]
    pub const fn maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    #[must_use]
    pub const fn range(self, min: f64, max: f64) -> Self {
        self.minimum(min).maximum(max)
    }

    /// Maximum string length in characters.
    #[must_use]
    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Restrict a string to a closed set of values.
    #[must_use]
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    #[must_use]
    pub const fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    #[must_use]
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    #[must_use]
    pub const fn field_type(&self) -> &FieldType {
        &self.ty
    }
}

/// A named field of a document.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub(crate) name: &'static str,
    pub(crate) required: bool,
    pub(crate) unique: bool,
    pub(crate) spec: ValueSpec,
}

impl FieldRule {
    #[must_use]
    pub const fn required(name: &'static str, spec: ValueSpec) -> Self {
        Self {
            name,
            required: true,
            unique: false,
            spec,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, spec: ValueSpec) -> Self {
        Self {
            name,
            required: false,
            unique: false,
            spec,
        }
    }

    /// Mark the field as unique within its kind. Enforcement belongs to the
    /// persistence collaborator.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    #[must_use]
    pub const fn spec(&self) -> &ValueSpec {
        &self.spec
    }
}

/// A constraint spanning more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCheck {
    /// The values of map field `parts` sum to number field `total`.
    SumEquals {
        parts: &'static str,
        total: &'static str,
    },
    /// Map fields `left` and `right` carry exactly the same keys.
    KeysMatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Rule set for one document shape.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) fields: Vec<FieldRule>,
    pub(crate) checks: Vec<DocumentCheck>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    #[must_use]
    pub fn check(mut self, check: DocumentCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    #[must_use]
    pub fn checks(&self) -> &[DocumentCheck] {
        &self.checks
    }

    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Names of required top-level fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|r| r.required).map(|r| r.name)
    }

    /// Names of unique top-level fields, in declaration order.
    pub fn unique_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|r| r.unique).map(|r| r.name)
    }
}
