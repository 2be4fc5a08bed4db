// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Keypair encoding for the `PRIVATE_KEY` environment entry.
//!
//! The secret is stored as a JSON array of the 64 keypair bytes
//! (32-byte ed25519 secret followed by the 32-byte public key), the same
//! layout the Solana CLI uses for keypair files.

use solana_sdk::signature::{keypair_from_seed, Keypair, Signer};

/// Length of a serialized keypair.
pub const KEYPAIR_LENGTH: usize = 64;

/// Errors raised while decoding a stored keypair.
#[derive(Debug, thiserror::Error)]
pub enum KeypairError {
    #[error("Secret key is not a JSON byte array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Secret key must be 64 bytes, got {0}")]
    Length(usize),

    #[error("Secret key byte at index {index} is out of range: {value}")]
    ByteOutOfRange { index: usize, value: i64 },

    #[error("Invalid keypair: {0}")]
    Invalid(String),
}

/// Generate a fresh random keypair.
pub fn generate_keypair() -> Keypair {
    Keypair::new()
}

/// Decode a keypair from its JSON byte-array form.
///
/// # Arguments
/// * `json` - e.g. `[174,47,154,...]`, 64 entries in `0..=255`
///
/// # Returns
/// * `Ok(Keypair)` - when the public half matches the secret half
/// * `Err(KeypairError)` - on malformed input
pub fn keypair_from_json(json: &str) -> Result<Keypair, KeypairError> {
    // i64 so out-of-range values get a precise error instead of a serde one
    let values: Vec<i64> = serde_json::from_str(json.trim())?;
    if values.len() != KEYPAIR_LENGTH {
        return Err(KeypairError::Length(values.len()));
    }

    let bytes = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| KeypairError::ByteOutOfRange { index, value })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let (secret, public) = bytes.split_at(KEYPAIR_LENGTH / 2);
    let keypair = keypair_from_seed(secret).map_err(|e| KeypairError::Invalid(e.to_string()))?;
    if keypair.pubkey().as_ref() != public {
        return Err(KeypairError::Invalid(
            "public key does not match secret key".to_string(),
        ));
    }

    Ok(keypair)
}

/// Encode a keypair as a compact JSON byte array.
pub fn keypair_to_json(keypair: &Keypair) -> String {
    let bytes: Vec<u8> = keypair.to_bytes().to_vec();
    // Vec<u8> always serializes
    serde_json::to_string(&bytes).unwrap_or_default()
}
