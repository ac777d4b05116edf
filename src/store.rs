//! Generic in-memory resource store.
//!
//! The administration screens repeat one pattern per entity: an ordered
//! collection of one entity type with list / case-insensitive search /
//! create / partial update / delete. `ResourceStore` is that pattern once,
//! instantiated per entity through the `Resource` trait.
//!
//! Key properties:
//! - Insertion order is display order; search never reorders or mutates
//! - `create` validates the draft and assigns a fresh id before appending
//! - `update` applies the patch to a copy first — a rejected patch leaves
//!   the stored entity untouched
//! - All state is volatile; nothing here persists

use thiserror::Error;
use uuid::Uuid;

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from store operations, shared by all entity types.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Missing required field for {entity}: {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Duplicate {field} for {entity}: {value}")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Invalid {entity} status transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: &'static str,
        to: &'static str,
    },

    #[error("Cannot delete {entity} {id}: {dependents} dependent record(s) still reference it")]
    HasDependents {
        entity: &'static str,
        id: Uuid,
        dependents: usize,
    },
}

// ═══════════════════════════════════════════════════════════
// Resource trait
// ═══════════════════════════════════════════════════════════

/// One storable entity kind: how to build it from form input, how to merge
/// a partial edit, and which text fields the search box matches against.
pub trait Resource: Clone {
    /// Validated form input for creation. `from_draft` assigns the id.
    type Draft;
    /// Partial update — every field optional, unset fields preserved.
    type Patch;

    /// Entity name used in error messages ("patient", "doctor", ...).
    const KIND: &'static str;

    fn from_draft(draft: Self::Draft) -> Result<Self, StoreError>;
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), StoreError>;
    fn id(&self) -> Uuid;

    /// Text fields the substring filter searches over.
    fn search_haystack(&self) -> Vec<String>;
}

// ═══════════════════════════════════════════════════════════
// ResourceStore
// ═══════════════════════════════════════════════════════════

/// An ordered in-memory collection of one entity type.
pub struct ResourceStore<T: Resource> {
    items: Vec<T>,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    // ── Read path ────────────────────────────────────────

    /// All entities in insertion order.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    /// Entities whose haystack contains `query`, case-insensitively.
    ///
    /// `None`, empty, or whitespace-only queries return the full
    /// collection in insertion order. Pure projection — never mutates.
    pub fn search(&self, query: Option<&str>) -> Vec<&T> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            None => self.items.iter().collect(),
            Some(q) => {
                let needle = q.to_lowercase();
                self.items
                    .iter()
                    .filter(|e| {
                        e.search_haystack()
                            .iter()
                            .any(|field| field.to_lowercase().contains(&needle))
                    })
                    .collect()
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Like `get`, but a missing id is an error.
    pub fn require(&self, id: Uuid) -> Result<&T, StoreError> {
        self.get(id).ok_or(StoreError::NotFound {
            entity: T::KIND,
            id,
        })
    }

    // ── Write path ───────────────────────────────────────

    /// Validate a draft, assign a fresh id, and append.
    pub fn create(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let entity = T::from_draft(draft)?;
        let created = entity.clone();
        self.items.push(entity);
        Ok(created)
    }

    /// Append an already-built entity. Seed/import path — skips validation.
    pub fn insert(&mut self, entity: T) -> Uuid {
        let id = entity.id();
        self.items.push(entity);
        id
    }

    /// Merge a partial update into the entity with `id`.
    ///
    /// The patch is applied to a copy and committed only if it validates,
    /// so a rejected patch leaves the store unchanged.
    pub fn update(&mut self, id: Uuid, patch: T::Patch) -> Result<T, StoreError> {
        let idx = self.position(id)?;
        let mut updated = self.items[idx].clone();
        updated.apply_patch(patch)?;
        self.items[idx] = updated.clone();
        Ok(updated)
    }

    /// Apply a checked mutation (status transitions, stock moves).
    ///
    /// Same copy-then-commit discipline as `update`.
    pub fn try_modify(
        &mut self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> Result<(), StoreError>,
    ) -> Result<T, StoreError> {
        let idx = self.position(id)?;
        let mut modified = self.items[idx].clone();
        f(&mut modified)?;
        self.items[idx] = modified.clone();
        Ok(modified)
    }

    /// Remove the entity with `id`. Does not touch dependent stores.
    pub fn remove(&mut self, id: Uuid) -> Result<T, StoreError> {
        let idx = self.position(id)?;
        Ok(self.items.remove(idx))
    }

    fn position(&self, id: Uuid) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|e| e.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::KIND,
                id,
            })
    }
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
