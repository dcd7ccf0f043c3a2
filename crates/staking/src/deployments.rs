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

//! Known deployments of the staking system contract.

use alloy::primitives::{address, Address};

/// Configuration for a deployment of the staking system contract.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    /// EIP-155 chain ID of the network.
    pub chain_id: u64,

    /// Address of the [IStaking] contract.
    ///
    /// [IStaking]: crate::contracts::IStaking
    pub staking_address: Address,
}

impl Deployment {
    /// Lookup the [Deployment] by chain ID.
    pub const fn from_chain_id(chain_id: u64) -> Option<Deployment> {
        match chain_id {
            10143 => Some(TESTNET),
            143 => Some(MAINNET),
            _ => None,
        }
    }
}

// The staking system contract is a predeploy; it lives at the same reserved
// address on every Monad network.
const STAKING_PREDEPLOY: Address = address!("0x0000000000000000000000000000000000001000");

/// [Deployment] for the Monad testnet.
pub const TESTNET: Deployment = Deployment { chain_id: 10143, staking_address: STAKING_PREDEPLOY };

/// [Deployment] for the Monad mainnet.
pub const MAINNET: Deployment = Deployment { chain_id: 143, staking_address: STAKING_PREDEPLOY };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_chain_id_known_networks() {
        assert_eq!(Deployment::from_chain_id(10143), Some(TESTNET));
        assert_eq!(Deployment::from_chain_id(143), Some(MAINNET));
        assert_eq!(Deployment::from_chain_id(1), None);
    }
}
