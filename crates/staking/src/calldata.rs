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

//! ABI-encoded call payloads for the staking system contract.
//!
//! These are the raw calldata bytes a transaction to the contract carries.
//! They are printed during dry runs so the same call can be submitted through
//! another tool (e.g. a hardware wallet) without re-deriving the encoding.

use alloy::{primitives::Bytes, sol_types::SolCall};

use crate::contracts::IStaking;

/// Calldata for `claimRewards(validatorId)`.
pub fn claim_rewards(validator_id: u64) -> Bytes {
    IStaking::claimRewardsCall { validatorId: validator_id }.abi_encode().into()
}

/// Calldata for `delegate(validatorId)`. The stake amount is the transaction
/// value, not a call argument.
pub fn delegate(validator_id: u64) -> Bytes {
    IStaking::delegateCall { validatorId: validator_id }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_rewards_calldata_decodes() {
        let calldata = claim_rewards(42);
        let call = IStaking::claimRewardsCall::abi_decode(&calldata).unwrap();
        assert_eq!(call.validatorId, 42);
    }

    #[test]
    fn delegate_calldata_decodes() {
        let calldata = delegate(7);
        let call = IStaking::delegateCall::abi_decode(&calldata).unwrap();
        assert_eq!(call.validatorId, 7);
    }

    #[test]
    fn calldata_is_selector_plus_one_word() {
        // 4-byte selector + one abi-encoded uint64 argument.
        assert_eq!(claim_rewards(1).len(), 36);
        assert_eq!(delegate(1).len(), 36);
    }
}
