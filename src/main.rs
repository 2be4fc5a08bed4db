// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use clap::Parser;
use sol_devnet_transfer::{
    app,
    cli::Args,
    config::{env_file_path, layered_env, RuntimeConfig, LOG_FORMAT_ENV},
    logging::{self, LogFormat},
    storage::EnvFile,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let env_file = match EnvFile::load(env_file_path(&args, |key| std::env::var(key).ok())) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Failed to read env file: {e}");
            return ExitCode::FAILURE;
        }
    };
    let env = layered_env(env_file);

    let log_format = LogFormat::from_env_value(env(LOG_FORMAT_ENV).as_deref());
    if let Err(e) = logging::init(log_format, env("RUST_LOG").as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = match RuntimeConfig::resolve(&args, &env) {
        Ok(config) => app::run(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => {
            println!("Finished successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
