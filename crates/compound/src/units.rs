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

//! MON / wei conversions. 1 MON = 10^18 wei.

use alloy::primitives::U256;

/// Wei per whole MON.
pub const WEI_PER_MON: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Convert a whole-MON amount to wei. Exact.
pub fn mon_to_wei(mon: u64) -> U256 {
    U256::from(mon) * WEI_PER_MON
}

/// Round a wei amount down to the nearest whole MON, returned in wei.
///
/// Only whole-MON amounts are ever staked; the sub-MON remainder stays in
/// the wallet on top of the configured reserve.
pub fn truncate_to_whole_mon(wei: U256) -> U256 {
    (wei / WEI_PER_MON) * WEI_PER_MON
}
