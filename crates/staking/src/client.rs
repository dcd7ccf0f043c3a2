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

//! Typed client for one staking system contract on one chain.

use std::time::Duration;

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::Provider,
};
use anyhow::{ensure, Context, Result};

use crate::contracts::IStaking;

/// A delegator's position on a single validator, decoded from the
/// `getDelegator` getter into named fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegatorInfo {
    /// Stake currently earning rewards.
    pub active_stake: U256,
    /// Stake waiting for activation at the next epoch boundary.
    pub pending_stake: U256,
    /// Rewards accumulated but not yet claimed.
    pub unclaimed_rewards: U256,
}

/// Client bound to one staking system contract address.
///
/// The two mutating calls send the transaction, wait for its receipt and
/// require receipt success; a reverted transaction is an error, never a
/// silently-returned hash.
#[derive(Clone)]
pub struct StakingClient<P> {
    provider: P,
    contract_address: Address,
    tx_timeout: Option<Duration>,
}

impl<P: Provider + Clone> StakingClient<P> {
    /// Create a client for the staking contract at `contract_address`.
    pub fn new(provider: P, contract_address: Address) -> Self {
        Self { provider, contract_address, tx_timeout: None }
    }

    /// Set a timeout for transaction receipt waits. When unset, the
    /// provider's default applies.
    pub fn with_tx_timeout(self, tx_timeout: Option<Duration>) -> Self {
        Self { tx_timeout, ..self }
    }

    /// Address of the staking contract this client is bound to.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// EIP-155 chain ID reported by the connected endpoint.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.context("failed to query chain ID from RPC endpoint")
    }

    /// Native token balance of `address` in wei.
    pub async fn balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .with_context(|| format!("failed to query balance of {address}"))
    }

    /// Fetch the staking position of `delegator` on validator `validator_id`.
    pub async fn delegator(&self, validator_id: u64, delegator: Address) -> Result<DelegatorInfo> {
        let staking = IStaking::new(self.contract_address, self.provider.clone());
        let info = staking
            .getDelegator(validator_id, delegator)
            .call()
            .await
            .with_context(|| format!("getDelegator({validator_id}, {delegator}) call failed"))?;
        Ok(DelegatorInfo {
            active_stake: info.activeStake,
            pending_stake: info.pendingStake,
            unclaimed_rewards: info.unclaimedRewards,
        })
    }

    /// Claim all pending rewards from validator `validator_id`. Zero-value
    /// transaction; returns the confirmed transaction hash.
    pub async fn claim_rewards(&self, validator_id: u64) -> Result<TxHash> {
        let staking = IStaking::new(self.contract_address, self.provider.clone());
        let pending_tx = staking
            .claimRewards(validator_id)
            .send()
            .await
            .context("failed to send claimRewards transaction")?;

        let tx_hash = *pending_tx.tx_hash();
        tracing::info!(%tx_hash, "Sent transaction for claimRewards");

        let timeout = self.tx_timeout.or(pending_tx.timeout());
        tracing::debug!(?timeout, %tx_hash, "Waiting for transaction receipt");
        let tx_receipt = pending_tx
            .with_timeout(timeout)
            .get_receipt()
            .await
            .context("failed to receive receipt for claimRewards transaction")?;

        ensure!(
            tx_receipt.status(),
            "claimRewards transaction failed: tx_hash = {}",
            tx_receipt.transaction_hash
        );
        Ok(tx_receipt.transaction_hash)
    }

    /// Delegate `amount` wei to validator `validator_id`. The amount is
    /// carried as the transaction value; returns the confirmed hash.
    pub async fn delegate(&self, validator_id: u64, amount: U256) -> Result<TxHash> {
        let staking = IStaking::new(self.contract_address, self.provider.clone());
        let pending_tx = staking
            .delegate(validator_id)
            .value(amount)
            .send()
            .await
            .context("failed to send delegate transaction")?;

        let tx_hash = *pending_tx.tx_hash();
        tracing::info!(%tx_hash, "Sent transaction for delegate");

        let timeout = self.tx_timeout.or(pending_tx.timeout());
        tracing::debug!(?timeout, %tx_hash, "Waiting for transaction receipt");
        let tx_receipt = pending_tx
            .with_timeout(timeout)
            .get_receipt()
            .await
            .context("failed to receive receipt for delegate transaction")?;

        ensure!(
            tx_receipt.status(),
            "delegate transaction failed: tx_hash = {}",
            tx_receipt.transaction_hash
        );
        Ok(tx_receipt.transaction_hash)
    }
}
