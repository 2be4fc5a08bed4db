// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Load-or-create lifecycle for the signing keypair.

use std::path::{Path, PathBuf};

use solana_sdk::signature::Keypair;
use tracing::{debug, info};

use super::{EnvFile, StorageError, StorageResult};
use crate::blockchain::signing::{generate_keypair, keypair_from_json, keypair_to_json};
use crate::config::PRIVATE_KEY_ENV;

/// Where the signer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// `PRIVATE_KEY` set in the process environment
    Environment,
    /// `PRIVATE_KEY` read from the env file
    EnvFile,
    /// Freshly generated and written to the env file
    Generated,
}

/// Keypair store backed by an env file.
pub struct SignerStore {
    path: PathBuf,
    /// `PRIVATE_KEY` from the process environment, if any
    process_secret: Option<String>,
}

impl SignerStore {
    /// Create a store for `path`.
    ///
    /// `process_secret` is the process-level `PRIVATE_KEY`; it takes
    /// precedence over the file, matching dotenv loading rules.
    pub fn new(path: impl AsRef<Path>, process_secret: Option<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            process_secret: process_secret.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Path of the backing env file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored signer, generating and persisting one if none exists.
    pub fn load_or_create(&self) -> StorageResult<(Keypair, KeySource)> {
        if let Some(secret) = &self.process_secret {
            debug!("Using PRIVATE_KEY from process environment");
            let keypair = keypair_from_json(secret).map_err(|error| StorageError::Keypair {
                source_name: "environment",
                error,
            })?;
            return Ok((keypair, KeySource::Environment));
        }

        let mut env = EnvFile::load(&self.path)?;
        if let Some(secret) = env.get(PRIVATE_KEY_ENV).filter(|s| !s.trim().is_empty()) {
            debug!(path = %self.path.display(), "Using PRIVATE_KEY from env file");
            let keypair = keypair_from_json(secret).map_err(|error| StorageError::Keypair {
                source_name: "env file",
                error,
            })?;
            return Ok((keypair, KeySource::EnvFile));
        }

        let keypair = generate_keypair();
        env.set(PRIVATE_KEY_ENV, &keypair_to_json(&keypair))?;
        env.save()?;
        info!(path = %self.path.display(), "Generated new signer and saved PRIVATE_KEY");

        Ok((keypair, KeySource::Generated))
    }
}
