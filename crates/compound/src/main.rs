// Copyright 2025 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{num::ParseIntError, path::PathBuf, time::Duration};

use alloy::{network::EthereumWallet, providers::ProviderBuilder};
use anyhow::Context;
use clap::Parser;
use monad_compound::{
    compounder::{Compounder, Outcome},
    config::Config,
    CompoundError,
};
use monad_staking::StakingClient;

/// Arguments of the auto-compounder.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct MainArgs {
    /// Path to the config file.
    #[clap(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Show what would happen without submitting any transaction.
    #[clap(long)]
    dry_run: bool,

    /// Transaction receipt timeout in seconds. When unset, the provider's
    /// default applies.
    #[clap(long, env = "TX_TIMEOUT", value_parser = |arg: &str| -> Result<Duration, ParseIntError> {Ok(Duration::from_secs(arg.parse()?))})]
    tx_timeout: Option<Duration>,

    /// Whether to log in JSON format.
    #[clap(long, env, default_value_t = false)]
    log_json: bool,
}

#[tokio::main]
async fn main() {
    let args = MainArgs::parse();

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    if args.log_json {
        tracing_subscriber::fmt().with_ansi(false).json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_ansi(false).with_env_filter(filter).init();
    }

    match run(&args).await {
        Ok(Outcome::NothingToStake) => tracing::info!("Done, nothing restaked"),
        Ok(Outcome::DryRun { .. }) => tracing::info!("Dry run complete"),
        Ok(Outcome::Compounded { .. }) => tracing::info!("Compounding complete"),
        Err(e) => {
            tracing::error!("FATAL: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(args: &MainArgs) -> Result<Outcome, CompoundError> {
    let config = Config::load(&args.config)?;
    let signer = config.signer()?;
    let wallet_address = signer.address();

    let rpc_url = config.network.rpc_url.clone();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(rpc_url.as_str())
        .await
        .with_context(|| format!("failed to connect provider to {rpc_url}"))
        .map_err(CompoundError::Connectivity)?;

    let client = StakingClient::new(provider, config.network.contract_address)
        .with_tx_timeout(args.tx_timeout);

    Compounder::new(&config, wallet_address, args.dry_run).run(&client).await
}
