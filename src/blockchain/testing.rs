// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`Ledger`] used by unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};

use super::client::{BlockhashInfo, Ledger, SignatureState, SolClientError};

#[derive(Default)]
struct Inner {
    balances: HashMap<Pubkey, u64>,
    airdrops: Vec<(Pubkey, u64)>,
    sent: Vec<Transaction>,
    known: HashSet<Signature>,
    scripted: HashMap<Signature, VecDeque<Option<SignatureState>>>,
    failing_polls: usize,
    status_polls: usize,
    block_height: u64,
    airdrop_error: Option<String>,
    airdrop_state: Option<SignatureState>,
    send_error: Option<String>,
}

pub(crate) struct MockLedger {
    blockhash: BlockhashInfo,
    inner: Mutex<Inner>,
}

impl MockLedger {
    pub(crate) fn new() -> Self {
        Self {
            blockhash: BlockhashInfo {
                blockhash: Hash::new_unique(),
                last_valid_block_height: 150,
            },
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub(crate) fn set_balance(&self, pubkey: Pubkey, lamports: u64) {
        self.lock().balances.insert(pubkey, lamports);
    }

    pub(crate) fn set_block_height(&self, height: u64) {
        self.lock().block_height = height;
    }

    /// Status responses returned in order; the last one repeats.
    pub(crate) fn script_states(&self, signature: Signature, states: Vec<Option<SignatureState>>) {
        self.lock().scripted.insert(signature, states.into());
    }

    pub(crate) fn fail_status_polls(&self, count: usize) {
        self.lock().failing_polls = count;
    }

    pub(crate) fn fail_airdrops(&self, reason: &str) {
        self.lock().airdrop_error = Some(reason.to_string());
    }

    /// Status reported for every later airdrop signature.
    pub(crate) fn airdrops_land_as(&self, state: SignatureState) {
        self.lock().airdrop_state = Some(state);
    }

    pub(crate) fn fail_sends(&self, reason: &str) {
        self.lock().send_error = Some(reason.to_string());
    }

    pub(crate) fn status_polls(&self) -> usize {
        self.lock().status_polls
    }

    pub(crate) fn airdrops(&self) -> Vec<(Pubkey, u64)> {
        self.lock().airdrops.clone()
    }

    pub(crate) fn sent(&self) -> Vec<Transaction> {
        self.lock().sent.clone()
    }

    pub(crate) fn blockhash(&self) -> Hash {
        self.blockhash.blockhash
    }
}

impl Ledger for MockLedger {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, SolClientError> {
        Ok(self.lock().balances.get(pubkey).copied().unwrap_or(0))
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, SolClientError> {
        let mut inner = self.lock();
        if let Some(reason) = &inner.airdrop_error {
            return Err(SolClientError::Rpc(reason.clone()));
        }

        *inner.balances.entry(*pubkey).or_default() += lamports;
        inner.airdrops.push((*pubkey, lamports));
        let signature = Signature::new_unique();
        inner.known.insert(signature);
        if let Some(state) = inner.airdrop_state.clone() {
            inner.scripted.insert(signature, VecDeque::from([Some(state)]));
        }
        Ok(signature)
    }

    async fn get_latest_blockhash(&self) -> Result<BlockhashInfo, SolClientError> {
        Ok(self.blockhash)
    }

    async fn get_block_height(&self) -> Result<u64, SolClientError> {
        Ok(self.lock().block_height)
    }

    async fn get_signature_state(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureState>, SolClientError> {
        let mut inner = self.lock();
        inner.status_polls += 1;
        if inner.failing_polls > 0 {
            inner.failing_polls -= 1;
            return Err(SolClientError::Rpc("connection reset".to_string()));
        }

        if let Some(script) = inner.scripted.get_mut(signature) {
            let state = if script.len() > 1 {
                script.pop_front().flatten()
            } else {
                script.front().cloned().flatten()
            };
            return Ok(state);
        }

        if inner.known.contains(signature) {
            Ok(Some(SignatureState::Confirmed))
        } else {
            Ok(None)
        }
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SolClientError> {
        let mut inner = self.lock();
        if let Some(reason) = &inner.send_error {
            return Err(SolClientError::TransactionFailed(reason.clone()));
        }

        let signature = tx.signatures[0];
        inner.known.insert(signature);
        inner.sent.push(tx.clone());
        Ok(signature)
    }
}
