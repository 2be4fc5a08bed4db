// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Signer Storage
//!
//! The signer's secret key lives in a single `.env` entry:
//!
//! ```text
//! PRIVATE_KEY=[174,47,154,...]   # 64 bytes: secret || public
//! ```
//!
//! A `PRIVATE_KEY` already present in the process environment wins over the
//! file. When neither has one, a new keypair is generated and written to the
//! file before any network call is made.

pub mod env_file;
pub mod keystore;

use std::io;

use crate::blockchain::signing::KeypairError;

pub use env_file::EnvFile;
pub use keystore::{KeySource, SignerStore};

/// Error type for signer storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations
    Io(io::Error),
    /// Stored secret could not be decoded
    Keypair { source_name: &'static str, error: KeypairError },
    /// Key or value that cannot be written to an env file
    InvalidEntry(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Keypair { source_name, error } => {
                write!(f, "PRIVATE_KEY from {source_name} is invalid: {error}")
            }
            StorageError::InvalidEntry(msg) => write!(f, "Invalid env entry: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Keypair { error, .. } => Some(error),
            StorageError::InvalidEntry(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
