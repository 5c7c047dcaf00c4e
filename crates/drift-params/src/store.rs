//! The parameter store: one persisted TOML blob, many independent groups

use drift_core::{DriftError, Result};

use crate::schema::{GroupSchema, ResolvedGroup};
use crate::storage::SettingsStorage;

/// Loads, resolves, and writes back parameter groups against an injected
/// storage backend.
///
/// The persisted blob is a TOML table of per-group tables:
///
/// ```toml
/// [noise]
/// scale = 0.01
///
/// [camera]
/// fov = 75.0
/// ```
///
/// The blob is parsed once at construction; a corrupt or absent blob behaves
/// as an empty one. All operations are synchronous and single-threaded — the
/// only writers are change-driven control-surface edits.
pub struct ParamStore {
    storage: Box<dyn SettingsStorage>,
    blob: toml::Table,
}

impl ParamStore {
    pub fn new(storage: Box<dyn SettingsStorage>) -> Self {
        let blob = match storage.read() {
            Some(text) => match toml::from_str::<toml::Table>(&text) {
                Ok(table) => table,
                Err(err) => {
                    log::warn!("corrupt settings blob, using defaults: {err}");
                    toml::Table::new()
                }
            },
            None => toml::Table::new(),
        };
        Self { storage, blob }
    }

    /// Persisted entries for one group, if any
    pub fn load(&self, group: &str) -> Option<&toml::Table> {
        self.blob.get(group)?.as_table()
    }

    /// Resolve a group: persisted value where present and kind-compatible,
    /// schema default everywhere else. Unknown persisted keys are ignored.
    pub fn resolve(&self, schema: &'static GroupSchema) -> ResolvedGroup {
        let persisted = self.load(schema.name);
        let values = schema
            .params
            .iter()
            .map(|spec| {
                persisted
                    .and_then(|table| table.get(spec.key))
                    .and_then(|value| spec.coerce(value))
                    .unwrap_or(spec.default)
            })
            .collect();
        ResolvedGroup::from_values(schema, values)
    }

    /// Overwrite one group's entry in the blob and write through to storage.
    /// Never fails from the caller's point of view; write errors are logged
    /// by the backend.
    pub fn persist(&mut self, group: &ResolvedGroup) {
        self.blob
            .insert(group.name().to_string(), toml::Value::Table(group.to_table()));
        self.write_through();
    }

    /// The full persisted blob as transferable text
    pub fn export_all(&self) -> Result<String> {
        toml::to_string_pretty(&self.blob).map_err(DriftError::from)
    }

    /// Delete all persisted state. Callers are expected to re-resolve from
    /// defaults afterward (a full reload is fine).
    pub fn reset_all(&mut self) {
        self.blob.clear();
        self.storage.clear();
    }

    fn write_through(&self) {
        match toml::to_string_pretty(&self.blob) {
            Ok(text) => self.storage.write(&text),
            Err(err) => log::warn!("failed to serialize settings blob: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups;
    use crate::storage::MemoryStorage;

    fn store_with(blob: &str) -> ParamStore {
        ParamStore::new(Box::new(MemoryStorage::with_contents(blob)))
    }

    #[test]
    fn empty_storage_resolves_defaults() {
        let store = ParamStore::new(Box::new(MemoryStorage::new()));
        let noise = store.resolve(&groups::NOISE);
        assert!(noise.toggle("enabled"));
        assert!((noise.number("scale") - 0.02).abs() < 1e-12);
    }

    #[test]
    fn persisted_value_wins_over_default() {
        let store = store_with("[noise]\nscale = 0.01\n");
        let noise = store.resolve(&groups::NOISE);
        assert!((noise.number("scale") - 0.01).abs() < 1e-12);
        // Every other key stays at its default
        assert!((noise.number("speed") - 0.0003).abs() < 1e-12);
        assert!((noise.number("strength_x") - 0.05).abs() < 1e-12);
        assert!(noise.toggle("enabled"));
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let store = store_with("this is { not toml");
        let noise = store.resolve(&groups::NOISE);
        assert!((noise.number("scale") - 0.02).abs() < 1e-12);
    }

    #[test]
    fn kind_mismatch_is_ignored() {
        let store = store_with("[noise]\nenabled = 3.5\nscale = true\n");
        let noise = store.resolve(&groups::NOISE);
        assert!(noise.toggle("enabled"));
        assert!((noise.number("scale") - 0.02).abs() < 1e-12);
    }

    #[test]
    fn resolve_is_idempotent() {
        let store = store_with("[camera]\nfov = 75.0\n");
        let first = store.resolve(&groups::CAMERA);
        let second = store.resolve(&groups::CAMERA);
        for spec in groups::CAMERA.params {
            assert_eq!(first.get(spec.key), second.get(spec.key));
        }
    }

    #[test]
    fn persist_overwrites_only_that_group() {
        let mut store = store_with("[camera]\nfov = 75.0\n");

        let mut noise = store.resolve(&groups::NOISE);
        noise.set_number("scale", 0.03);
        store.persist(&noise);

        // Camera entry survives untouched
        let camera = store.resolve(&groups::CAMERA);
        assert!((camera.number("fov") - 75.0).abs() < 1e-12);
        let noise = store.resolve(&groups::NOISE);
        assert!((noise.number("scale") - 0.03).abs() < 1e-12);
    }

    #[test]
    fn persist_writes_through_to_storage() {
        let mut store = ParamStore::new(Box::new(MemoryStorage::new()));
        let mut dof = store.resolve(&groups::DOF);
        dof.set_toggle("enabled", false);
        store.persist(&dof);

        let exported = store.export_all().unwrap();
        // Reload from the exported text as a fresh session would
        let reloaded = store_with(&exported);
        assert!(!reloaded.resolve(&groups::DOF).toggle("enabled"));
    }

    #[test]
    fn reset_all_returns_every_group_to_defaults() {
        let mut store = store_with("[noise]\nscale = 0.09\n[dof]\nenabled = false\n");
        store.reset_all();

        for group in groups::ALL {
            let resolved = store.resolve(group);
            for spec in group.params {
                assert_eq!(resolved.get(spec.key), Some(spec.default), "{}", spec.key);
            }
        }
        assert!(store.export_all().unwrap().trim().is_empty());
    }

    #[test]
    fn load_missing_group_is_none() {
        let store = store_with("[noise]\nscale = 0.01\n");
        assert!(store.load("camera").is_none());
        assert!(store.load("noise").is_some());
    }
}
