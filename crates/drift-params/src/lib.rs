//! Drift Params - persisted, runtime-tunable parameter groups
//!
//! Each group of tunables is described by a compiled-in [`GroupSchema`]
//! (defaults plus bounds/step/label metadata for control surfaces). Persisted
//! values are merged on top of the defaults at resolve time, never the other
//! way around: a missing or corrupt blob silently falls back to the defaults.
//!
//! Persistence is a single TOML blob behind the [`SettingsStorage`] seam, so
//! hosts can plug in a file, an in-memory cell, or whatever key-value store
//! the embedding environment offers.

pub mod groups;
pub mod schema;
pub mod storage;
pub mod store;

pub use schema::{GroupSchema, ParamSpec, ParamValue, ResolvedGroup};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::ParamStore;
