// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! sol-devnet-transfer - Solana test-network funding and transfer tool
//!
//! Loads a signer from an env file (or generates and saves one), tops it
//! up with a faucet airdrop when its balance is low, and sends a single SOL
//! transfer, waiting for each step to be confirmed.
//!
//! ## Modules
//!
//! - `app` - Program flow
//! - `blockchain` - Solana RPC, signing, funding and transfers
//! - `cli` - Command-line flags (clap)
//! - `config` - Environment and flag resolution
//! - `storage` - Env-file backed keypair storage

pub mod app;
pub mod blockchain;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
