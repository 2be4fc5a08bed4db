// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Settings come from environment variables, with command-line flags taking
//! precedence. The env file named by `ENV_FILE` is also consulted for these
//! variables when the process environment does not set them. `ENV_FILE` and
//! `PRIVATE_KEY` themselves are never read from inside the file.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PRIVATE_KEY` | Signer secret as a JSON byte array | Generated on first run |
//! | `ENV_FILE` | File holding `PRIVATE_KEY` | `.env` |
//! | `SOLANA_CLUSTER` | `devnet`, `testnet`, `mainnet-beta` or `localnet` | `devnet` |
//! | `SOLANA_RPC_URL` | JSON-RPC endpoint override | Cluster default |
//! | `TRANSFER_AMOUNT_SOL` | SOL sent to the receiver | `0.1` |
//! | `MIN_BALANCE_SOL` | Airdrop when the balance is below this | `0.1` |
//! | `AIRDROP_AMOUNT_SOL` | SOL requested per airdrop | `1` |
//! | `CONFIRM_TIMEOUT_SECS` | Max wait for each confirmation | `60` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::path::PathBuf;
use std::time::Duration;

use solana_sdk::pubkey::Pubkey;

use crate::blockchain::{
    cluster_by_name, sol_to_lamports, ClusterConfig, ConfirmOptions, FundingPolicy,
    DEFAULT_CONFIRM_TIMEOUT, DEFAULT_POLL_INTERVAL,
};
use crate::cli::Args;
use crate::error::AppError;
use crate::storage::EnvFile;

/// Signer secret, JSON byte array.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Path of the env file holding `PRIVATE_KEY`.
pub const ENV_FILE_ENV: &str = "ENV_FILE";

/// Cluster name.
pub const CLUSTER_ENV: &str = "SOLANA_CLUSTER";

/// RPC endpoint override.
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// Transfer amount in SOL.
pub const TRANSFER_AMOUNT_ENV: &str = "TRANSFER_AMOUNT_SOL";

/// Airdrop threshold in SOL.
pub const MIN_BALANCE_ENV: &str = "MIN_BALANCE_SOL";

/// Airdrop size in SOL.
pub const AIRDROP_AMOUNT_ENV: &str = "AIRDROP_AMOUNT_SOL";

/// Confirmation timeout in seconds.
pub const CONFIRM_TIMEOUT_ENV: &str = "CONFIRM_TIMEOUT_SECS";

/// Logging format selector.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default env file path.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default transfer amount, in SOL.
pub const DEFAULT_TRANSFER_SOL: &str = "0.1";

/// Environment lookup over the process environment, falling back to `file`.
///
/// `PRIVATE_KEY` is only taken from the process here; the signer store reads
/// the file entry itself so it can report where the key came from. A file
/// cannot redirect to another file through `ENV_FILE`.
pub fn layered_env(file: Option<EnvFile>) -> impl Fn(&str) -> Option<String> {
    move |key| {
        std::env::var(key).ok().or_else(|| {
            if key == PRIVATE_KEY_ENV || key == ENV_FILE_ENV {
                return None;
            }
            file.as_ref()
                .and_then(|f| f.get(key))
                .map(str::to_string)
        })
    }
}

/// Env file path named by the flag, then `ENV_FILE`, then the default.
pub fn env_file_path<F>(args: &Args, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    args.env_file
        .clone()
        .or_else(|| {
            env(ENV_FILE_ENV)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub cluster: ClusterConfig,
    pub rpc_url: String,
    pub env_file: PathBuf,
    /// `PRIVATE_KEY` from the process environment
    pub private_key: Option<String>,
    /// Explicit receiver; a random one is generated when absent
    pub receiver: Option<Pubkey>,
    pub transfer_lamports: u64,
    pub funding: FundingPolicy,
    pub confirm: ConfirmOptions,
}

impl RuntimeConfig {
    /// Merge command-line flags over environment values.
    ///
    /// `env` looks a variable up; `main` passes a reader over the process
    /// environment and the env file.
    pub fn resolve<F>(args: &Args, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: &Option<String>, var: &str| -> Option<String> {
            flag.clone()
                .or_else(|| env(var))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cluster = cluster_by_name(pick(&args.cluster, CLUSTER_ENV).as_deref())?;
        let rpc_url =
            pick(&args.rpc_url, RPC_URL_ENV).unwrap_or_else(|| cluster.rpc_url.to_string());

        let env_file = env_file_path(args, &env);

        let receiver = args
            .to
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<Pubkey>()
                    .map_err(|e| AppError::Config(format!("Invalid receiver {raw}: {e}")))
            })
            .transpose()?;

        let transfer_lamports = sol_to_lamports(
            pick(&args.amount, TRANSFER_AMOUNT_ENV)
                .as_deref()
                .unwrap_or(DEFAULT_TRANSFER_SOL),
        )?;
        if transfer_lamports == 0 {
            return Err(AppError::Config(
                "Transfer amount must be greater than zero".to_string(),
            ));
        }

        let defaults = FundingPolicy::default();
        let min_balance = pick(&args.min_balance, MIN_BALANCE_ENV)
            .map(|v| sol_to_lamports(&v))
            .transpose()?
            .unwrap_or(defaults.min_balance);
        let airdrop_amount = pick(&args.airdrop, AIRDROP_AMOUNT_ENV)
            .map(|v| sol_to_lamports(&v))
            .transpose()?
            .unwrap_or(defaults.airdrop_amount);
        if airdrop_amount == 0 {
            return Err(AppError::Config(
                "Airdrop amount must be greater than zero".to_string(),
            ));
        }

        let timeout = match args.timeout {
            Some(secs) => Duration::from_secs(secs),
            None => match env(CONFIRM_TIMEOUT_ENV) {
                Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("{CONFIRM_TIMEOUT_ENV} must be whole seconds"))
                })?),
                None => DEFAULT_CONFIRM_TIMEOUT,
            },
        };
        if timeout.is_zero() {
            return Err(AppError::Config(
                "Confirmation timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            cluster,
            rpc_url,
            env_file,
            private_key: env(PRIVATE_KEY_ENV),
            receiver,
            transfer_lamports,
            funding: FundingPolicy {
                min_balance,
                airdrop_amount,
            },
            confirm: ConfirmOptions {
                poll_interval: DEFAULT_POLL_INTERVAL,
                timeout,
            },
        })
    }
}
