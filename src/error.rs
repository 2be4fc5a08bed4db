// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::blockchain::SolClientError;
use crate::storage::StorageError;

/// Top-level error returned by [`crate::app::run`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Client(#[from] SolClientError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
