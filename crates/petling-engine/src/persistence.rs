//! Save/Load for the whole pet store.
//!
//! Binary snapshots use bincode for compactness; a JSON form exists for
//! debugging and hand-editing fixtures. Either way the snapshot is the
//! full set of pet records plus a format version.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::pet::Pet;
use crate::store::PetStore;

/// Version number for the save format (increment when the format changes).
pub const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of every pet record.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub pets: Vec<Pet>,
}

/// Snapshot save/load errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save version {0} (expected {SAVE_VERSION})")]
    Version(u32),
}

/// Write a binary snapshot of the store.
pub fn save<S: PetStore, W: Write>(store: &S, writer: W) -> Result<(), SnapshotError> {
    let data = SaveData {
        version: SAVE_VERSION,
        pets: store.pets(),
    };
    bincode::serialize_into(writer, &data)?;
    Ok(())
}

/// Read a binary snapshot back into the store, replacing matching records.
pub fn load<S: PetStore, R: Read>(store: &S, reader: R) -> Result<usize, SnapshotError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    restore(store, data)
}

/// Serialize the store to pretty JSON (fixtures, debugging).
pub fn save_json<S: PetStore>(store: &S) -> Result<String, SnapshotError> {
    let data = SaveData {
        version: SAVE_VERSION,
        pets: store.pets(),
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Load a JSON snapshot back into the store.
pub fn load_json<S: PetStore>(store: &S, json: &str) -> Result<usize, SnapshotError> {
    let data: SaveData = serde_json::from_str(json)?;
    restore(store, data)
}

fn restore<S: PetStore>(store: &S, data: SaveData) -> Result<usize, SnapshotError> {
    if data.version != SAVE_VERSION {
        return Err(SnapshotError::Version(data.version));
    }
    let count = data.pets.len();
    for pet in data.pets {
        store.insert(pet);
    }
    log::info!("restored {count} pets from snapshot");
    Ok(count)
}
