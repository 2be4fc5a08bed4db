// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Solana JSON-RPC client.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};

use super::types::ClusterConfig;

/// Latest blockhash together with the last block height at which a
/// transaction referencing it can still land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockhashInfo {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Status of a submitted signature at the client's commitment level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureState {
    /// Seen by the cluster but not yet at the required commitment
    Processing,
    /// Reached the required commitment without error
    Confirmed,
    /// Landed with an execution error
    Failed(String),
}

/// The subset of the RPC surface this tool relies on.
///
/// Implemented by [`SolClient`] against a live node; tests provide an
/// in-memory ledger.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Balance of an account in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, SolClientError>;

    /// Ask the cluster faucet for `lamports`.
    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, SolClientError>;

    async fn get_latest_blockhash(&self) -> Result<BlockhashInfo, SolClientError>;

    async fn get_block_height(&self) -> Result<u64, SolClientError>;

    /// `None` when the cluster has not seen the signature yet.
    async fn get_signature_state(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureState>, SolClientError>;

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SolClientError>;
}

/// Solana RPC client bound to one cluster.
pub struct SolClient {
    /// Cluster configuration
    cluster: ClusterConfig,
    /// Endpoint actually in use (may override the cluster default)
    rpc_url: String,
    rpc: RpcClient,
}

impl SolClient {
    /// Create a new client for the given cluster and endpoint.
    pub fn new(cluster: ClusterConfig, rpc_url: &str) -> Result<Self, SolClientError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| SolClientError::InvalidRpcUrl(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SolClientError::InvalidRpcUrl(format!(
                "Unsupported scheme: {}",
                url.scheme()
            )));
        }

        let rpc = RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed());

        Ok(Self {
            cluster,
            rpc_url: url.to_string(),
            rpc,
        })
    }

    /// Get the RPC endpoint.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl Ledger for SolClient {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, SolClientError> {
        self.rpc
            .get_balance(pubkey)
            .await
            .map_err(|e| SolClientError::Rpc(e.to_string()))
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, SolClientError> {
        if !self.cluster.airdrop_enabled {
            return Err(SolClientError::AirdropUnavailable(self.cluster.name.to_string()));
        }

        self.rpc
            .request_airdrop(pubkey, lamports)
            .await
            .map_err(|e| SolClientError::Rpc(format!("Airdrop request failed: {e}")))
    }

    async fn get_latest_blockhash(&self) -> Result<BlockhashInfo, SolClientError> {
        let (blockhash, last_valid_block_height) = self
            .rpc
            .get_latest_blockhash_with_commitment(self.rpc.commitment())
            .await
            .map_err(|e| SolClientError::Rpc(format!("Failed to get blockhash: {e}")))?;

        Ok(BlockhashInfo {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn get_block_height(&self) -> Result<u64, SolClientError> {
        self.rpc
            .get_block_height()
            .await
            .map_err(|e| SolClientError::Rpc(e.to_string()))
    }

    async fn get_signature_state(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureState>, SolClientError> {
        let response = self
            .rpc
            .get_signature_statuses(&[*signature])
            .await
            .map_err(|e| SolClientError::Rpc(format!("Failed to get signature status: {e}")))?;

        let commitment = self.rpc.commitment();
        Ok(response
            .value
            .into_iter()
            .next()
            .flatten()
            .map(|status| match status.err {
                Some(err) => SignatureState::Failed(err.to_string()),
                None if status.satisfies_commitment(commitment) => SignatureState::Confirmed,
                None => SignatureState::Processing,
            }))
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SolClientError> {
        self.rpc
            .send_transaction(tx)
            .await
            .map_err(|e| SolClientError::TransactionFailed(format!("Failed to send: {e}")))
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum SolClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Airdrops are not available on {0}")]
    AirdropUnavailable(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Blockhash expired before {0} was confirmed")]
    BlockhashExpired(String),

    #[error("Timed out waiting for {0} to be confirmed")]
    ConfirmationTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::{SOLANA_DEVNET, SOLANA_LOCALNET, SOLANA_MAINNET};

    #[test]
    fn new_rejects_malformed_urls() {
        assert!(matches!(
            SolClient::new(SOLANA_DEVNET, "not a url"),
            Err(SolClientError::InvalidRpcUrl(_))
        ));
        assert!(matches!(
            SolClient::new(SOLANA_DEVNET, "ftp://example.com"),
            Err(SolClientError::InvalidRpcUrl(_))
        ));
    }

    #[tokio::test]
    async fn new_normalizes_endpoint() {
        let client = SolClient::new(SOLANA_LOCALNET, SOLANA_LOCALNET.rpc_url).unwrap();
        assert_eq!(client.rpc_url(), "http://127.0.0.1:8899/");
    }

    #[tokio::test]
    async fn mainnet_airdrop_is_refused_without_rpc() {
        // Nothing listens on port 1; an RPC attempt would fail with `Rpc`.
        let client = SolClient::new(SOLANA_MAINNET, "http://127.0.0.1:1").unwrap();
        let err = client
            .request_airdrop(&Pubkey::new_unique(), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SolClientError::AirdropUnavailable(name) if name == "mainnet-beta"));
    }
}
