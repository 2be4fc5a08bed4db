// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Program flow: load or create the signer, top it up, send one transfer.

use solana_sdk::{pubkey::Pubkey, signature::Signer};
use tracing::info;

use crate::blockchain::{
    airdrop_if_needed, explorer_address_url, explorer_tx_url, generate_keypair, lamports_to_sol,
    send_and_confirm, FundingOutcome, Ledger, SolClient, TransferReceipt,
};
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::storage::{KeySource, SignerStore};

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub key_source: KeySource,
    pub funding: FundingOutcome,
    pub receipt: TransferReceipt,
    pub explorer_url: String,
}

/// Run against the configured cluster.
pub async fn run(config: &RuntimeConfig) -> Result<RunSummary, AppError> {
    let client = SolClient::new(config.cluster, &config.rpc_url)?;
    info!(cluster = config.cluster.name, rpc_url = client.rpc_url(), "Connected");
    run_with(&client, config).await
}

/// Run against any [`Ledger`].
pub async fn run_with<L: Ledger>(ledger: &L, config: &RuntimeConfig) -> Result<RunSummary, AppError> {
    let store = SignerStore::new(&config.env_file, config.private_key.clone());
    if config.private_key.is_none() {
        info!(path = %store.path().display(), "Loading signer");
    }

    let (sender, key_source) = store.load_or_create()?;
    if key_source == KeySource::Generated {
        println!("Generated new keypair, saved to {}", store.path().display());
    }

    let funding =
        airdrop_if_needed(ledger, &sender.pubkey(), &config.funding, config.confirm).await?;

    let receiver = config
        .receiver
        .unwrap_or_else(|| generate_keypair().pubkey());
    print_keys(&sender.pubkey(), &receiver, config);

    println!(
        "Sending {} SOL",
        lamports_to_sol(config.transfer_lamports)
    );
    let receipt = send_and_confirm(
        ledger,
        &sender,
        &receiver,
        config.transfer_lamports,
        config.confirm,
    )
    .await?;

    let explorer_url = explorer_tx_url(
        &receipt.signature.to_string(),
        &config.cluster,
        &config.rpc_url,
    );
    println!("You can view your transaction on the Solana Explorer at:\n{explorer_url}");

    Ok(RunSummary {
        key_source,
        funding,
        receipt,
        explorer_url,
    })
}

fn print_keys(sender: &Pubkey, receiver: &Pubkey, config: &RuntimeConfig) {
    println!("Sender public key: {sender}");
    println!("Receiver public key: {receiver}");
    info!(
        sender_url = %explorer_address_url(&sender.to_string(), &config.cluster, &config.rpc_url),
        "Sender account"
    );
}
