//! The entity type registry.
//!
//! One canonical mapping from case-sensitive entity-kind strings to
//! [`TypeDescriptor`] values. Built once, read many times: steady-state
//! lookups go straight to a concurrent map with no locking cost, while the
//! one-time bootstrap and [`EntityTypeRegistry::clear`] serialize through a
//! mutex so no caller can observe a partially built catalog.

use crate::catalog;
use crate::error::{RegistryError, RegistryResult};
use dashmap::DashMap;
use rolodex_types::{EntityObject, Linked, LinkedReference, TypeDescriptor};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Runtime mapping from entity type names to type descriptors.
///
/// All operations take `&self` and are safe to call from any number of
/// threads. Every public operation triggers the idempotent catalog
/// bootstrap on first use, so a freshly constructed registry behaves as if
/// the built-in catalog were already present.
#[derive(Debug)]
pub struct EntityTypeRegistry {
    types: DashMap<String, TypeDescriptor>,
    initialized: AtomicBool,
    bootstrap_lock: Mutex<()>,
}

impl EntityTypeRegistry {
    /// Creates an empty registry. The built-in catalog is installed lazily
    /// by the first operation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: DashMap::new(),
            initialized: AtomicBool::new(false),
            bootstrap_lock: Mutex::new(()),
        }
    }

    /// Installs the built-in catalog exactly once per registry lifetime.
    ///
    /// Idempotent and safe to call redundantly or concurrently: a fast
    /// unsynchronized flag check skips the mutex in the steady state, and
    /// the flag is re-checked under the mutex before the one-time bulk
    /// insert. Any caller that returns from here observes the fully
    /// populated catalog.
    pub fn initialize(&self) {
        if self.initialized.load(Ordering::Acquire) {
            return;
        }
        let _guard = self
            .bootstrap_lock
            .lock()
            .expect("registry bootstrap lock poisoned");
        if self.initialized.load(Ordering::Acquire) {
            return;
        }
        for descriptor in catalog::builtin_descriptors() {
            self.types
                .entry(descriptor.name().to_owned())
                .or_insert(descriptor);
        }
        debug!(count = self.types.len(), "entity type registry bootstrapped");
        self.initialized.store(true, Ordering::Release);
    }

    /// Registers `descriptor` under its canonical name.
    ///
    /// First registration wins: re-registering an existing name is a
    /// silent no-op, never an error and never an overwrite.
    pub fn register(&self, descriptor: TypeDescriptor) {
        self.register_as(descriptor.name(), descriptor);
    }

    /// Registers `descriptor` under an explicit name.
    ///
    /// Same first-registration-wins contract as [`Self::register`]. An
    /// empty name is ignored: empty never resolves, so binding it would
    /// create an unreachable entry.
    pub fn register_as(&self, name: impl Into<String>, descriptor: TypeDescriptor) {
        self.initialize();
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.types.entry(name).or_insert(descriptor);
    }

    /// Looks up the descriptor registered under `name`.
    ///
    /// Case-sensitive exact match, no normalization. Empty and unregistered
    /// names are `None`, never an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        self.initialize();
        if name.is_empty() {
            return None;
        }
        self.types.get(name).map(|entry| *entry.value())
    }

    /// True when `name` resolves to a registered descriptor.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Snapshot of the currently registered names.
    ///
    /// Safe to take while other threads read or register; the snapshot
    /// holds no locks once returned.
    #[must_use]
    pub fn registered_names(&self) -> Vec<String> {
        self.initialize();
        self.types.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered names.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.initialize();
        self.types.len()
    }

    /// Empties the registry and re-arms the bootstrap; the next operation
    /// rebuilds the built-in catalog from scratch.
    ///
    /// Exclusive with any in-flight bootstrap: both serialize through the
    /// same mutex, so a clear can never interleave with a half-finished
    /// catalog install. Readers racing a clear observe pre- or post-clear
    /// entries, never corrupted state. Intended for test isolation;
    /// production code has no reason to call it.
    pub fn clear(&self) {
        let _guard = self
            .bootstrap_lock
            .lock()
            .expect("registry bootstrap lock poisoned");
        self.types.clear();
        self.initialized.store(false, Ordering::Release);
        debug!("entity type registry cleared");
    }

    /// Resolves a polymorphic link by attaching `candidate` as its owning
    /// entity.
    ///
    /// The candidate's concrete type must be registered under its canonical
    /// name and match the registered descriptor; otherwise the link is left
    /// in its current (unresolved) state and the failure is reported
    /// immediately. On success the link's type name is derived from the
    /// candidate, so the two can never diverge.
    pub fn resolve_link(
        &self,
        link: &mut LinkedReference,
        candidate: Arc<dyn EntityObject>,
    ) -> RegistryResult<()> {
        self.initialize();
        let name = candidate.entity_type_name();
        let Some(descriptor) = self.get(name) else {
            warn!(entity_type = name, "link resolution against unregistered entity type");
            return Err(RegistryError::UnregisteredType(name.to_owned()));
        };
        if !descriptor.matches(candidate.as_ref()) {
            warn!(entity_type = name, "registered descriptor does not match candidate");
            return Err(RegistryError::DescriptorMismatch {
                name: name.to_owned(),
            });
        }
        link.attach(candidate)?;
        Ok(())
    }

    /// Convenience over [`Self::resolve_link`] for any linking record.
    pub fn resolve<L: Linked>(
        &self,
        record: &mut L,
        candidate: Arc<dyn EntityObject>,
    ) -> RegistryResult<()> {
        self.resolve_link(record.link_mut(), candidate)
    }
}

impl Default for EntityTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
