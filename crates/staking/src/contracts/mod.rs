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

//! Smart contract interface for the Monad staking system contract.

alloy::sol! {
    /// Interface of the staking system contract.
    ///
    /// `getDelegator` reports a delegator's position on a single validator.
    /// `delegate` is payable; the stake amount rides in the transaction value.
    #[sol(rpc, all_derives)]
    interface IStaking {
        /// Get the staking position of a delegator on the given validator.
        function getDelegator(uint64 validatorId, address delegator)
            external
            view
            returns (uint256 activeStake, uint256 pendingStake, uint256 unclaimedRewards);

        /// Claim all accumulated rewards from the given validator.
        function claimRewards(uint64 validatorId) external;

        /// Delegate `msg.value` to the given validator.
        function delegate(uint64 validatorId) external payable;
    }
}
