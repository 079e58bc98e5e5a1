//! Catalog - the static list of model presets
//!
//! The catalog is the source of truth for what models exist. It is built
//! once, never mutated, and keeps declaration order (animals, plants,
//! primitives) for the sidebar.

pub mod builtins;
pub mod descriptor;
pub mod kind;

pub use descriptor::ModelDescriptor;
pub use kind::{AnimalKind, Category, ModelKind, PlantKind, PrimitiveKind};

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{GalleryError, GalleryResult};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::with_builtins);

/// Ordered descriptors plus an id index
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ModelDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from entries in display order. A repeated id keeps the first
    /// occurrence reachable by lookup.
    pub fn new(entries: Vec<ModelDescriptor>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.contains_key(&entry.id) {
                tracing::warn!(id = %entry.id, "duplicate catalog id ignored for lookup");
                continue;
            }
            index.insert(entry.id.clone(), i);
        }
        Self { entries, index }
    }

    pub fn with_builtins() -> Self {
        Self::new(builtins::builtin_descriptors())
    }

    /// Process-wide built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn require(&self, id: &str) -> GalleryResult<&ModelDescriptor> {
        self.get(id).ok_or_else(|| GalleryError::UnknownModel(id.to_string()))
    }

    pub fn all(&self) -> &[ModelDescriptor] {
        &self.entries
    }

    pub fn first(&self) -> Option<&ModelDescriptor> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let tiger = catalog.get("a-0").unwrap();
        assert_eq!(tiger.tag, "tiger");
        assert_eq!(catalog.all()[20].id, "t-0");
        assert!(catalog.get("z-1").is_none());
    }

    #[test]
    fn require_reports_unknown_id() {
        let err = Catalog::builtin().require("nope").unwrap_err();
        assert_eq!(err, GalleryError::UnknownModel("nope".into()));
    }

    #[test]
    fn categories_hold_twenty_each() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let count = catalog.all().iter().filter(|d| d.category == *category).count();
            assert_eq!(count, 20, "{category}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        for d in catalog.all() {
            assert!(std::ptr::eq(catalog.get(&d.id).unwrap(), d), "{}", d.id);
        }
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let a = ModelDescriptor::new("dup", Category::Primitive, "box", "first", "1");
        let b = ModelDescriptor::new("dup", Category::Primitive, "sphere", "second", "2");
        let catalog = Catalog::new(vec![a, b]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("dup").unwrap().name, "first");
    }
}
