//! # foody-store
//!
//! Persistence collaborators for the Foodylicious schema registry.
//!
//! Both stores implement [`foody_schema::Persistence`] and enforce the unique
//! indexes declared by the registry atomically at insert time:
//! - [`MemoryStore`]: `RwLock`-guarded collections, used in tests and for dry runs
//! - [`JsonlStore`]: one `<collection>.jsonl` file per kind, mirrored in memory
//!
//! Beyond the capability the registry needs, the stores serve the lookups
//! the index catalog declares: counts, `find_by` on indexed fields, and
//! nearest-neighbour queries over geo-indexed addresses.

mod collection;
pub mod geo;
mod jsonl;
mod memory;

pub use geo::Nearby;
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
