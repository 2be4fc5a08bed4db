// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Cluster types, constants and SOL amount helpers.

use super::client::SolClientError;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places of the SOL unit.
pub const SOL_DECIMALS: u8 = 9;

/// Solana cluster configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Cluster name for display
    pub name: &'static str,
    /// Default JSON-RPC endpoint URL
    pub rpc_url: &'static str,
    /// Value of the `cluster` query parameter on the Solana Explorer
    pub explorer_cluster: &'static str,
    /// Whether the cluster serves `requestAirdrop`
    pub airdrop_enabled: bool,
}

/// Solana devnet configuration.
pub const SOLANA_DEVNET: ClusterConfig = ClusterConfig {
    name: "devnet",
    rpc_url: "https://api.devnet.solana.com",
    explorer_cluster: "devnet",
    airdrop_enabled: true,
};

/// Solana testnet configuration.
pub const SOLANA_TESTNET: ClusterConfig = ClusterConfig {
    name: "testnet",
    rpc_url: "https://api.testnet.solana.com",
    explorer_cluster: "testnet",
    airdrop_enabled: true,
};

/// Solana mainnet-beta configuration.
pub const SOLANA_MAINNET: ClusterConfig = ClusterConfig {
    name: "mainnet-beta",
    rpc_url: "https://api.mainnet-beta.solana.com",
    explorer_cluster: "mainnet-beta",
    airdrop_enabled: false,
};

/// Local test validator configuration.
pub const SOLANA_LOCALNET: ClusterConfig = ClusterConfig {
    name: "localnet",
    rpc_url: "http://127.0.0.1:8899",
    explorer_cluster: "custom",
    airdrop_enabled: true,
};

/// Default cluster identifier.
pub const CLUSTER_DEVNET: &str = "devnet";

/// Resolve a cluster by name.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// `None` selects devnet.
pub fn cluster_by_name(raw: Option<&str>) -> Result<ClusterConfig, SolClientError> {
    let value = raw.unwrap_or(CLUSTER_DEVNET).trim().to_ascii_lowercase();
    match value.as_str() {
        "devnet" => Ok(SOLANA_DEVNET),
        "testnet" => Ok(SOLANA_TESTNET),
        "mainnet" | "mainnet-beta" => Ok(SOLANA_MAINNET),
        "localnet" | "localhost" => Ok(SOLANA_LOCALNET),
        other => Err(SolClientError::UnknownCluster(other.to_string())),
    }
}

/// Parse a decimal SOL amount (e.g. "0.1") into lamports.
pub fn sol_to_lamports(amount: &str) -> Result<u64, SolClientError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(SolClientError::InvalidAmount("Amount is empty".to_string()));
    }

    let (whole_str, frac_str) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };

    if frac_str.contains('.') {
        return Err(SolClientError::InvalidAmount(format!(
            "Invalid amount format: {amount}"
        )));
    }
    if whole_str.is_empty() && frac_str.is_empty() {
        return Err(SolClientError::InvalidAmount(format!(
            "Invalid amount format: {amount}"
        )));
    }
    if !whole_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(SolClientError::InvalidAmount(format!(
            "Amount must be a non-negative decimal number: {amount}"
        )));
    }
    if frac_str.len() > SOL_DECIMALS as usize {
        return Err(SolClientError::InvalidAmount(format!(
            "Too many decimal places (max {SOL_DECIMALS})"
        )));
    }

    let whole = if whole_str.is_empty() {
        0
    } else {
        whole_str
            .parse::<u64>()
            .map_err(|_| SolClientError::InvalidAmount("Amount overflow".to_string()))?
    };

    let frac = if frac_str.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac_str, width = SOL_DECIMALS as usize);
        padded
            .parse::<u64>()
            .map_err(|_| SolClientError::InvalidAmount("Invalid decimal".to_string()))?
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| SolClientError::InvalidAmount("Amount overflow".to_string()))
}

/// Format lamports as a human-readable SOL amount.
pub fn lamports_to_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let remainder = lamports % LAMPORTS_PER_SOL;

    if remainder == 0 {
        return whole.to_string();
    }

    let decimal_str = format!("{:0>width$}", remainder, width = SOL_DECIMALS as usize);
    format!("{}.{}", whole, decimal_str.trim_end_matches('0'))
}

/// Explorer link for a transaction signature.
pub fn explorer_tx_url(signature: &str, cluster: &ClusterConfig, rpc_url: &str) -> String {
    explorer_url("tx", signature, cluster, rpc_url)
}

/// Explorer link for an account address.
pub fn explorer_address_url(address: &str, cluster: &ClusterConfig, rpc_url: &str) -> String {
    explorer_url("address", address, cluster, rpc_url)
}

fn explorer_url(kind: &str, id: &str, cluster: &ClusterConfig, rpc_url: &str) -> String {
    let base = format!("https://explorer.solana.com/{kind}/{id}");
    if *cluster == SOLANA_MAINNET {
        return base;
    }

    let mut url = format!("{base}?cluster={}", cluster.explorer_cluster);
    if *cluster == SOLANA_LOCALNET {
        let encoded: String = url::form_urlencoded::byte_serialize(rpc_url.as_bytes()).collect();
        url.push_str("&customUrl=");
        url.push_str(&encoded);
    }
    url
}
