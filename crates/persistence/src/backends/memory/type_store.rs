//! Per-type keyed collection.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{ResourceError, StorageError, StorageResult};
use crate::types::{ResourceType, StoredResource};

/// Insertion-ordered resources keyed by id.
#[derive(Debug, Default)]
struct Entries {
    index: HashMap<String, usize>,
    items: Vec<StoredResource>,
}

impl Entries {
    fn get(&self, id: &str) -> Option<&StoredResource> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    fn put(&mut self, resource: StoredResource) {
        match self.index.get(resource.id()) {
            Some(&pos) => self.items[pos] = resource,
            None => {
                self.index.insert(resource.id().to_string(), self.items.len());
                self.items.push(resource);
            }
        }
    }
}

/// The store for a single resource type.
///
/// Every method takes the lock once, so `put`, `get` and `list` are each
/// atomic. An overwrite keeps the resource's original position in the
/// enumeration order.
#[derive(Debug)]
pub struct TypeStore {
    resource_type: ResourceType,
    entries: RwLock<Entries>,
}

impl TypeStore {
    /// Creates an empty store for `resource_type`.
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Returns the resource type held by this store.
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Unconditionally inserts or overwrites a resource under its id.
    pub fn put(&self, resource: StoredResource) {
        self.entries.write().put(resource);
    }

    /// Inserts a resource whose id must not be present yet.
    pub fn insert_new(&self, resource: StoredResource) -> StorageResult<()> {
        let mut entries = self.entries.write();
        if entries.index.contains_key(resource.id()) {
            return Err(StorageError::Resource(ResourceError::AlreadyExists {
                resource_type: self.resource_type,
                id: resource.id().to_string(),
            }));
        }
        entries.put(resource);
        Ok(())
    }

    /// Replaces an existing resource with the one built from it by `next`.
    ///
    /// The write lock is held across `next`, so concurrent replacements of
    /// the same id are serialised. If `next` fails the stored resource is
    /// left untouched.
    pub fn replace_with<F>(&self, id: &str, next: F) -> StorageResult<StoredResource>
    where
        F: FnOnce(&StoredResource) -> StorageResult<StoredResource>,
    {
        let mut entries = self.entries.write();
        let prior = entries
            .get(id)
            .ok_or_else(|| StorageError::not_found(self.resource_type, id))?;
        let replacement = next(prior)?;
        entries.put(replacement.clone());
        Ok(replacement)
    }

    /// Returns the resource with `id`.
    pub fn get(&self, id: &str) -> StorageResult<StoredResource> {
        self.entries
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found(self.resource_type, id))
    }

    /// Returns a snapshot of every resource in enumeration order.
    pub fn list(&self) -> Vec<StoredResource> {
        self.entries.read().items.clone()
    }

    /// Returns a snapshot of the resources accepted by `predicate`, in
    /// enumeration order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<StoredResource>
    where
        P: FnMut(&StoredResource) -> bool,
    {
        self.entries
            .read()
            .items
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Returns the number of stored resources.
    pub fn len(&self) -> usize {
        self.entries.read().items.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
