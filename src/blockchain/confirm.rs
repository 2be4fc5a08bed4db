// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signature confirmation polling.
//!
//! A submitted signature is polled until one of:
//! - it reaches the client's commitment level (success),
//! - it lands with an execution error,
//! - the cluster's block height passes the blockhash's
//!   `last_valid_block_height` (it can no longer land),
//! - the wall-clock timeout elapses.

use std::time::Duration;

use solana_sdk::signature::Signature;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::client::{BlockhashInfo, Ledger, SignatureState, SolClientError};

/// Default interval between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default upper bound on how long to wait for a signature.
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);

/// Polling parameters.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmOptions {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_CONFIRM_TIMEOUT,
        }
    }
}

/// Wait for `signature` to be confirmed.
pub async fn confirm_signature<L: Ledger>(
    ledger: &L,
    signature: &Signature,
    blockhash: &BlockhashInfo,
    options: ConfirmOptions,
) -> Result<(), SolClientError> {
    let deadline = Instant::now() + options.timeout;

    loop {
        match ledger.get_signature_state(signature).await {
            Ok(Some(SignatureState::Confirmed)) => {
                debug!(%signature, "Signature confirmed");
                return Ok(());
            }
            Ok(Some(SignatureState::Failed(reason))) => {
                return Err(SolClientError::TransactionFailed(format!(
                    "{signature}: {reason}"
                )));
            }
            Ok(Some(SignatureState::Processing)) | Ok(None) => {
                match ledger.get_block_height().await {
                    Ok(height) if height > blockhash.last_valid_block_height => {
                        return Err(SolClientError::BlockhashExpired(signature.to_string()));
                    }
                    Ok(_) => {}
                    Err(e) => warn!(%signature, error = %e, "Failed to read block height"),
                }
            }
            Err(e) => {
                warn!(%signature, error = %e, "Failed to read signature status, retrying");
            }
        }

        if Instant::now() >= deadline {
            return Err(SolClientError::ConfirmationTimeout(signature.to_string()));
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}
