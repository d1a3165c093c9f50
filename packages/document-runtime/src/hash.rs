//! State hashing for operation records.
//!
//! The hash of a scope is the lowercase hex SHA-256 of its JSON form. Struct
//! fields serialize in declaration order and collections are sequences, so
//! equal states always produce equal hashes.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hash any serializable state.
pub fn state_hash<T: Serialize>(state: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(state)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}
