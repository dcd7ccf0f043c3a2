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

//! The chain operations the compounding workflow consumes.
//!
//! [`Compounder`] is generic over this trait so the claim/delegate gating
//! logic is testable against an in-memory fake; [`StakingClient`] is the
//! production implementation.
//!
//! [`Compounder`]: crate::compounder::Compounder

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::Provider,
};
use anyhow::Result;
use async_trait::async_trait;
use monad_staking::{DelegatorInfo, StakingClient};

/// Chain operations used by one compounding run.
#[async_trait]
pub trait StakingChain {
    /// Chain ID reported by the connected endpoint.
    async fn chain_id(&self) -> Result<u64>;

    /// Staking position of `delegator` on validator `validator_id`.
    async fn delegator(&self, validator_id: u64, delegator: Address) -> Result<DelegatorInfo>;

    /// Native balance of `address` in wei.
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Claim pending rewards; returns once the transaction is confirmed
    /// successful.
    async fn claim_rewards(&self, validator_id: u64) -> Result<TxHash>;

    /// Delegate `amount` wei; returns once the transaction is confirmed
    /// successful.
    async fn delegate(&self, validator_id: u64, amount: U256) -> Result<TxHash>;
}

#[async_trait]
impl<P: Provider + Clone> StakingChain for StakingClient<P> {
    async fn chain_id(&self) -> Result<u64> {
        StakingClient::chain_id(self).await
    }

    async fn delegator(&self, validator_id: u64, delegator: Address) -> Result<DelegatorInfo> {
        StakingClient::delegator(self, validator_id, delegator).await
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        StakingClient::balance(self, address).await
    }

    async fn claim_rewards(&self, validator_id: u64) -> Result<TxHash> {
        StakingClient::claim_rewards(self, validator_id).await
    }

    async fn delegate(&self, validator_id: u64, amount: U256) -> Result<TxHash> {
        StakingClient::delegate(self, validator_id, amount).await
    }
}
