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

//! The compounding workflow: claim pending rewards, then restake the wallet
//! balance minus the configured reserve.

use alloy::primitives::{utils::format_ether, Address, U256};
use anyhow::anyhow;
use monad_staking::{calldata, Deployment};

use crate::{chain::StakingChain, config::Config, units, CompoundError};

/// Terminal state of a successful run. All variants exit the process with
/// status 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The balance after reserving funds rounds down to zero whole MON;
    /// nothing was submitted.
    NothingToStake,
    /// Dry-run mode; the run reported what it would do without submitting.
    DryRun {
        /// Amount the live run would have delegated, in wei.
        would_stake_wei: U256,
    },
    /// Rewards (if any) were claimed and the surplus balance was delegated.
    Compounded {
        /// Amount delegated, in wei.
        staked_wei: U256,
    },
}

/// One compounding run for a single (wallet, validator) pair.
///
/// The workflow is strictly sequential: the claim must confirm (or be an
/// explicit no-op) before the balance is read, and the balance feeds the
/// stake computation. Every error is fatal to the run; a scheduler retries
/// by invoking the whole binary again.
pub struct Compounder {
    expected_chain_id: u64,
    contract_address: Address,
    validator_id: u64,
    wallet: Address,
    reserve_wei: U256,
    dry_run: bool,
}

impl Compounder {
    /// Build a run from the loaded config and the wallet address derived
    /// from its private key.
    pub fn new(config: &Config, wallet: Address, dry_run: bool) -> Self {
        Self {
            expected_chain_id: config.network.chain_id,
            contract_address: config.network.contract_address,
            validator_id: config.staking.validator_id,
            wallet,
            reserve_wei: units::mon_to_wei(config.staking.reserve_mon),
            dry_run,
        }
    }

    /// Execute the workflow against `chain`.
    pub async fn run<C: StakingChain>(&self, chain: &C) -> Result<Outcome, CompoundError> {
        self.check_connectivity(chain).await?;

        tracing::info!(
            "Compounding wallet {} on validator {} (reserve: {} MON{})",
            self.wallet,
            self.validator_id,
            format_ether(self.reserve_wei),
            if self.dry_run { ", dry run" } else { "" },
        );

        let info = chain
            .delegator(self.validator_id, self.wallet)
            .await
            .map_err(CompoundError::Query)?;
        tracing::info!(
            "Current stake: {} MON (active) + {} MON (pending)",
            format_ether(info.active_stake),
            format_ether(info.pending_stake),
        );
        tracing::info!("Pending rewards: {} MON", format_ether(info.unclaimed_rewards));

        if info.unclaimed_rewards > U256::ZERO {
            self.claim(chain, info.unclaimed_rewards).await?;
        } else {
            tracing::info!("No pending rewards to claim");
        }

        let balance = chain.balance(self.wallet).await.map_err(CompoundError::Query)?;
        tracing::info!("Wallet balance: {} MON", format_ether(balance));

        let Some(stake_wei) = self.stake_amount(balance) else {
            return Ok(Outcome::NothingToStake);
        };

        let outcome = self.delegate(chain, stake_wei).await?;

        // Best-effort closing report; a failure here does not fail the run.
        match chain.balance(self.wallet).await {
            Ok(final_balance) => {
                tracing::info!("Remaining balance: {} MON", format_ether(final_balance))
            }
            Err(e) => tracing::warn!("Failed to query final balance: {e:#}"),
        }

        Ok(outcome)
    }

    /// Confirm the endpoint is reachable and serves the configured chain.
    async fn check_connectivity<C: StakingChain>(&self, chain: &C) -> Result<(), CompoundError> {
        let chain_id = chain.chain_id().await.map_err(CompoundError::Connectivity)?;
        if chain_id != self.expected_chain_id {
            return Err(CompoundError::Connectivity(anyhow!(
                "endpoint reports chain ID {chain_id}, config expects {}",
                self.expected_chain_id
            )));
        }
        if let Some(deployment) = Deployment::from_chain_id(chain_id) {
            if deployment.staking_address != self.contract_address {
                tracing::warn!(
                    "Configured staking contract {} differs from the known address {} for chain {}",
                    self.contract_address,
                    deployment.staking_address,
                    chain_id,
                );
            }
        }
        Ok(())
    }

    async fn claim<C: StakingChain>(
        &self,
        chain: &C,
        rewards: U256,
    ) -> Result<(), CompoundError> {
        tracing::info!("Claiming {} MON rewards...", format_ether(rewards));
        if self.dry_run {
            tracing::info!("[DRY RUN] Would claim rewards");
            tracing::info!("[DRY RUN] claim calldata: {}", calldata::claim_rewards(self.validator_id));
            return Ok(());
        }
        let tx_hash = chain
            .claim_rewards(self.validator_id)
            .await
            .map_err(CompoundError::Transaction)?;
        tracing::info!(%tx_hash, "Claimed rewards");
        Ok(())
    }

    /// Balance minus reserve, rounded down to whole MON. `None` means there
    /// is nothing worth staking this run.
    fn stake_amount(&self, balance: U256) -> Option<U256> {
        let surplus = match balance.checked_sub(self.reserve_wei) {
            Some(surplus) if surplus > U256::ZERO => surplus,
            _ => {
                tracing::info!(
                    "Insufficient balance to stake; need more than {} MON. Nothing to restake.",
                    format_ether(self.reserve_wei)
                );
                return None;
            }
        };
        let stake_wei = units::truncate_to_whole_mon(surplus);
        if stake_wei.is_zero() {
            tracing::info!("Stake amount rounds down to 0 MON. Nothing to restake.");
            return None;
        }
        Some(stake_wei)
    }

    async fn delegate<C: StakingChain>(
        &self,
        chain: &C,
        stake_wei: U256,
    ) -> Result<Outcome, CompoundError> {
        tracing::info!(
            "Staking {} MON to validator {}...",
            format_ether(stake_wei),
            self.validator_id
        );
        if self.dry_run {
            tracing::info!("[DRY RUN] Would delegate stake");
            tracing::info!("[DRY RUN] delegate calldata: {}", calldata::delegate(self.validator_id));
            return Ok(Outcome::DryRun { would_stake_wei: stake_wei });
        }
        let tx_hash = chain
            .delegate(self.validator_id, stake_wei)
            .await
            .map_err(CompoundError::Transaction)?;
        tracing::info!(%tx_hash, "Staked {} MON", format_ether(stake_wei));
        Ok(Outcome::Compounded { staked_wei: stake_wei })
    }
}
