use std::path::PathBuf;

use clap::{Args, Subcommand};
use foody_core::enums::EntityKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List entity kinds with their collections and key fields.
    Kinds,
    /// Validate documents from a file without persisting them.
    Validate(DocumentsArgs),
    /// Validate and insert documents from a file, all or nothing.
    Seed(DocumentsArgs),
    /// Reset the store and seed every collection in dependency order.
    Setup(SetupArgs),
    /// Dump the JSON Schema of an entity kind.
    Schema(SchemaArgs),
    /// Show the declared indexes.
    Indexes(IndexesArgs),
    /// Count stored documents per collection.
    Count,
    /// Find the stored documents closest to a point.
    Nearest(NearestArgs),
}

/// Arguments for `foody validate` and `foody seed`.
#[derive(Clone, Debug, Args)]
pub struct DocumentsArgs {
    /// Entity kind or collection name (`item`, `menu`, `menu_entry`, ...).
    pub kind: EntityKind,
    /// JSON file (one document or an array) or `.jsonl` file.
    pub file: PathBuf,
}

/// Arguments for `foody setup`.
#[derive(Clone, Debug, Args)]
pub struct SetupArgs {
    /// Fixture file keyed by collection name (defaults to the built-in sample).
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
    /// Keep existing documents instead of resetting first.
    #[arg(long)]
    pub keep: bool,
}

/// Arguments for `foody schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: EntityKind,
}

/// Arguments for `foody indexes`.
#[derive(Clone, Debug, Args)]
pub struct IndexesArgs {
    /// Restrict to one kind.
    pub kind: Option<EntityKind>,
}

/// Arguments for `foody nearest`.
#[derive(Clone, Debug, Args)]
pub struct NearestArgs {
    pub kind: EntityKind,
    /// Longitude of the origin, in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Latitude of the origin, in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}
