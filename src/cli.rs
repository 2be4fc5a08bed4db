// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Command-line flags. Every flag is optional and overrides the matching
//! environment variable documented in [`crate::config`].

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Cluster to use: devnet, testnet, mainnet-beta or localnet
    #[arg(long)]
    pub cluster: Option<String>,

    /// JSON-RPC endpoint, overriding the cluster default
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Env file holding PRIVATE_KEY
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// SOL to send
    #[arg(long)]
    pub amount: Option<String>,

    /// Receiver public key (base58); a random one is generated if omitted
    #[arg(long)]
    pub to: Option<String>,

    /// Airdrop when the balance is below this many SOL
    #[arg(long)]
    pub min_balance: Option<String>,

    /// SOL to request per airdrop
    #[arg(long)]
    pub airdrop: Option<String>,

    /// Seconds to wait for each confirmation
    #[arg(long)]
    pub timeout: Option<u64>,
}
