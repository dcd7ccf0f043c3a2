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

//! Single-shot auto-compounding of Monad staking rewards.
//!
//! One run handles exactly one (wallet, validator) pair: claim pending
//! rewards if there are any, then delegate the wallet balance minus a
//! configured reserve back to the same validator. Scheduling repeated runs is
//! left to cron or a systemd timer.

pub mod chain;
pub mod compounder;
pub mod config;
pub mod units;

/// Failure taxonomy of a compounding run. Every variant is fatal; the process
/// reports it and exits non-zero without retrying.
#[derive(Debug, thiserror::Error)]
pub enum CompoundError {
    /// The config file is missing, unparseable, or still holds placeholder
    /// values.
    #[error("configuration error: {0:#}")]
    Config(anyhow::Error),

    /// The RPC endpoint is unreachable, or reports a different chain than
    /// the config expects.
    #[error("connectivity error: {0:#}")]
    Connectivity(anyhow::Error),

    /// A read-only chain query failed.
    #[error("query error: {0:#}")]
    Query(anyhow::Error),

    /// A transaction failed to send, confirm, or succeed.
    #[error("transaction error: {0:#}")]
    Transaction(anyhow::Error),
}
