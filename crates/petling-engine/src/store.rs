//! Opaque pet storage with per-pet write serialization.
//!
//! The engine never interleaves two read-modify-write sequences against the
//! same pet: [`PetStore::transact`] holds that pet's lock for the whole
//! closure. Atomicity on failure is the engine's job (it mutates a clone and
//! commits by assignment), the store only provides isolation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::error::EngineError;
use crate::pet::Pet;

/// Keyed pet storage. Single logical record per pet id.
pub trait PetStore {
    /// Add or replace a pet record.
    fn insert(&self, pet: Pet);

    /// Run one serialized read-modify-write transaction against a pet.
    fn transact<R>(
        &self,
        pet_id: &str,
        f: impl FnOnce(&mut Pet) -> Result<R, EngineError>,
    ) -> Result<R, EngineError>;

    /// Snapshot one pet.
    fn get(&self, pet_id: &str) -> Result<Pet, EngineError>;

    /// Snapshot every pet (for save files).
    fn pets(&self) -> Vec<Pet>;
}

/// In-memory store: a map of pets, each behind its own mutex.
#[derive(Default)]
pub struct MemoryStore {
    pets: RwLock<HashMap<String, Arc<Mutex<Pet>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, pet_id: &str) -> Result<Arc<Mutex<Pet>>, EngineError> {
        let map = read_lock(&self.pets);
        map.get(pet_id)
            .cloned()
            .ok_or_else(|| EngineError::PetNotFound(pet_id.to_string()))
    }
}

impl PetStore for MemoryStore {
    fn insert(&self, pet: Pet) {
        let mut map = write_lock(&self.pets);
        map.insert(pet.id.clone(), Arc::new(Mutex::new(pet)));
    }

    fn transact<R>(
        &self,
        pet_id: &str,
        f: impl FnOnce(&mut Pet) -> Result<R, EngineError>,
    ) -> Result<R, EngineError> {
        let entry = self.entry(pet_id)?;
        let mut pet = lock(&entry);
        f(&mut pet)
    }

    fn get(&self, pet_id: &str) -> Result<Pet, EngineError> {
        let entry = self.entry(pet_id)?;
        let pet = lock(&entry);
        Ok(pet.clone())
    }

    fn pets(&self) -> Vec<Pet> {
        let map = read_lock(&self.pets);
        map.values().map(|entry| lock(entry).clone()).collect()
    }
}

// A poisoned lock means another transaction panicked; its clone-commit
// never ran, so the record is still consistent and safe to reuse.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn read_lock<K, V>(lock: &RwLock<HashMap<K, V>>) -> std::sync::RwLockReadGuard<'_, HashMap<K, V>> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<K, V>(
    lock: &RwLock<HashMap<K, V>>,
) -> std::sync::RwLockWriteGuard<'_, HashMap<K, V>> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
