// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! SOL transfer building and broadcasting.
//!
//! A transfer is a single System Program `transfer` instruction with the
//! sender as fee payer, signed against the latest blockhash and confirmed
//! before it is reported.

use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_system_interface::instruction as system_instruction;
use tracing::info;

use super::client::{Ledger, SolClientError};
use super::confirm::{confirm_signature, ConfirmOptions};

/// Confirmed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Transaction signature
    pub signature: Signature,
    pub from: Pubkey,
    pub to: Pubkey,
    /// Amount moved, in lamports
    pub lamports: u64,
}

/// Build and sign a transfer of `lamports` from `sender` to `to`.
pub fn build_transfer(sender: &Keypair, to: &Pubkey, lamports: u64, blockhash: Hash) -> Transaction {
    let instruction = system_instruction::transfer(&sender.pubkey(), to, lamports);
    Transaction::new_signed_with_payer(
        &[instruction],
        Some(&sender.pubkey()),
        &[sender],
        blockhash,
    )
}

fn validate_transfer(sender: &Pubkey, to: &Pubkey, lamports: u64) -> Result<(), SolClientError> {
    if lamports == 0 {
        return Err(SolClientError::InvalidAmount(
            "Transfer amount must be greater than zero".to_string(),
        ));
    }
    if sender == to {
        return Err(SolClientError::InvalidAddress(format!(
            "Receiver {to} is the sender"
        )));
    }
    Ok(())
}

/// Send a SOL transfer and wait for it to be confirmed.
///
/// # Arguments
/// * `ledger` - RPC surface to submit through
/// * `sender` - Fee payer and source of funds
/// * `to` - Receiver
/// * `lamports` - Amount to move
/// * `confirm` - Polling parameters
pub async fn send_and_confirm<L: Ledger>(
    ledger: &L,
    sender: &Keypair,
    to: &Pubkey,
    lamports: u64,
    confirm: ConfirmOptions,
) -> Result<TransferReceipt, SolClientError> {
    let from = sender.pubkey();
    validate_transfer(&from, to, lamports)?;

    let blockhash = ledger.get_latest_blockhash().await?;
    let tx = build_transfer(sender, to, lamports, blockhash.blockhash);

    let signature = ledger.send_transaction(&tx).await?;
    info!(%signature, %from, %to, lamports, "Transfer submitted");

    confirm_signature(ledger, &signature, &blockhash, confirm).await?;
    info!(%signature, "Transfer confirmed");

    Ok(TransferReceipt {
        signature,
        from,
        to: *to,
        lamports,
    })
}
