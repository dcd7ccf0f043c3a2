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

//! Exit-code tests for the auto-compounder CLI.
//!
//! These cover the failure paths reachable without a chain: bad config files
//! and an unreachable RPC endpoint. The happy paths are covered by the
//! workflow tests against a mock chain.

use std::io::Write;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::NamedTempFile;

// Well-known Anvil dev key.
const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn config_file(private_key: &str, rpc_url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [network]
        rpc_url = "{rpc_url}"
        chain_id = 10143
        contract_address = "0x0000000000000000000000000000000000001000"

        [staking]
        private_key = "{private_key}"
        validator_id = 42
        reserve_mon = 5
        "#
    )
    .unwrap();
    file
}

#[test]
fn help_exits_zero() {
    let mut cmd = Command::cargo_bin("monad-compound").unwrap();
    cmd.arg("--help").assert().success().stdout(contains("--dry-run"));
}

#[test]
fn missing_config_file_exits_one() {
    let mut cmd = Command::cargo_bin("monad-compound").unwrap();
    cmd.args(["--config", "/nonexistent/config.toml"])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(contains("FATAL").and(contains("configuration error")));
}

#[test]
fn malformed_config_exits_one() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[network\nrpc_url =").unwrap();

    let mut cmd = Command::cargo_bin("monad-compound").unwrap();
    cmd.args(["--config", file.path().to_str().unwrap()])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(contains("configuration error"));
}

#[test]
fn placeholder_private_key_exits_one() {
    let file = config_file("0xYOUR_PRIVATE_KEY_HERE", "https://rpc.testnet.monad.xyz");

    let mut cmd = Command::cargo_bin("monad-compound").unwrap();
    cmd.args(["--config", file.path().to_str().unwrap()])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(contains("placeholder"));
}

#[test]
fn unreachable_rpc_exits_one() {
    // Nothing listens on port 1; the first chain query fails.
    let file = config_file(TEST_KEY, "http://127.0.0.1:1");

    let mut cmd = Command::cargo_bin("monad-compound").unwrap();
    cmd.args(["--config", file.path().to_str().unwrap(), "--dry-run"])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(contains("connectivity error"));
}
