// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Airdrop top-up for test-network signers.

use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::info;

use super::client::{Ledger, SolClientError};
use super::confirm::{confirm_signature, ConfirmOptions};
use super::types::{lamports_to_sol, LAMPORTS_PER_SOL};

/// When and how much to airdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingPolicy {
    /// Airdrop when the balance is strictly below this many lamports
    pub min_balance: u64,
    /// Lamports requested per airdrop
    pub airdrop_amount: u64,
}

impl Default for FundingPolicy {
    fn default() -> Self {
        Self {
            min_balance: LAMPORTS_PER_SOL / 10,
            airdrop_amount: LAMPORTS_PER_SOL,
        }
    }
}

/// Result of a funding check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingOutcome {
    pub starting_balance: u64,
    /// Airdrop signature, if one was requested
    pub airdrop: Option<Signature>,
    pub final_balance: u64,
}

/// Request an airdrop for `pubkey` when its balance is below the policy's
/// threshold, and wait for it to be confirmed.
pub async fn airdrop_if_needed<L: Ledger>(
    ledger: &L,
    pubkey: &Pubkey,
    policy: &FundingPolicy,
    confirm: ConfirmOptions,
) -> Result<FundingOutcome, SolClientError> {
    let balance = ledger.get_balance(pubkey).await?;
    println!("Current balance is {} SOL", lamports_to_sol(balance));

    if balance >= policy.min_balance {
        return Ok(FundingOutcome {
            starting_balance: balance,
            airdrop: None,
            final_balance: balance,
        });
    }

    println!("Airdropping {} SOL", lamports_to_sol(policy.airdrop_amount));
    info!(
        %pubkey,
        balance,
        lamports = policy.airdrop_amount,
        "Balance below threshold, requesting airdrop"
    );

    let signature = ledger.request_airdrop(pubkey, policy.airdrop_amount).await?;
    let blockhash = ledger.get_latest_blockhash().await?;
    confirm_signature(ledger, &signature, &blockhash, confirm).await?;

    let new_balance = ledger.get_balance(pubkey).await?;
    println!("New balance is {} SOL", lamports_to_sol(new_balance));
    info!(%pubkey, %signature, new_balance, "Airdrop confirmed");

    Ok(FundingOutcome {
        starting_balance: balance,
        airdrop: Some(signature),
        final_balance: new_balance,
    })
}
