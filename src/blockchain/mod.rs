// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Solana integration module.
//!
//! This module provides functionality for:
//! - Querying SOL balances and requesting faucet airdrops
//! - Building, signing and broadcasting SOL transfers
//! - Polling signatures until they are confirmed

pub mod client;
pub mod confirm;
pub mod funding;
pub mod signing;
pub mod transactions;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{BlockhashInfo, Ledger, SignatureState, SolClient, SolClientError};
pub use confirm::{confirm_signature, ConfirmOptions, DEFAULT_CONFIRM_TIMEOUT, DEFAULT_POLL_INTERVAL};
pub use funding::{airdrop_if_needed, FundingOutcome, FundingPolicy};
pub use signing::{generate_keypair, keypair_from_json, keypair_to_json, KeypairError};
pub use transactions::{build_transfer, send_and_confirm, TransferReceipt};
pub use types::*;
