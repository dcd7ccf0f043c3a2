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

//! TOML configuration for a compounding run.

use std::{fmt, path::Path, str::FromStr};

use alloy::{
    primitives::Address,
    signers::{local::PrivateKeySigner, Signer},
};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use url::Url;

use crate::CompoundError;

/// Private key value shipped in the example config. A run aborts before any
/// network call while this is still in place.
pub const PLACEHOLDER_PRIVATE_KEY: &str = "0xYOUR_PRIVATE_KEY_HERE";

/// Parsed contents of the config file, read once at startup and immutable
/// afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub staking: StakingConfig,
}

/// The `[network]` section.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkConfig {
    /// URL of the Monad RPC endpoint.
    pub rpc_url: Url,
    /// Expected EIP-155 chain ID; checked against the endpoint after
    /// connecting.
    pub chain_id: u64,
    /// Address of the staking system contract.
    pub contract_address: Address,
}

/// The `[staking]` section.
#[derive(Clone, Deserialize)]
pub struct StakingConfig {
    /// Private key of the delegator wallet.
    pub private_key: String,
    /// Validator to claim from and delegate to.
    pub validator_id: u64,
    /// Whole MON to keep liquid in the wallet (gas for future runs).
    pub reserve_mon: u64,
}

// Manual impl so the private key never reaches logs or error output.
impl fmt::Debug for StakingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StakingConfig")
            .field("private_key", &"<redacted>")
            .field("validator_id", &self.validator_id)
            .field("reserve_mon", &self.reserve_mon)
            .finish()
    }
}

impl Config {
    /// Load and validate the config file at `path`.
    ///
    /// Validation covers everything that can be checked without touching the
    /// network: the file exists and parses, the private key is not the
    /// placeholder, and the key decodes to a valid signing key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompoundError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))
            .map_err(CompoundError::Config)?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
            .map_err(CompoundError::Config)?;

        if config.staking.private_key == PLACEHOLDER_PRIVATE_KEY {
            return Err(CompoundError::Config(anyhow!(
                "private_key in {} still holds the placeholder value; set your key",
                path.display()
            )));
        }
        config.signer()?;

        Ok(config)
    }

    /// Build the transaction signer from the configured private key, bound
    /// to the configured chain ID.
    pub fn signer(&self) -> Result<PrivateKeySigner, CompoundError> {
        let signer = PrivateKeySigner::from_str(&self.staking.private_key)
            .map_err(|e| CompoundError::Config(anyhow!("invalid private_key in config: {e}")))?;
        Ok(signer.with_chain_id(Some(self.network.chain_id)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    // Well-known Anvil dev key, no funds anywhere that matters.
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn write_config(private_key: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [network]
            rpc_url = "https://rpc.testnet.monad.xyz"
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
    fn loads_valid_config() {
        let file = write_config(TEST_KEY);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.network.chain_id, 10143);
        assert_eq!(config.staking.validator_id, 42);
        assert_eq!(config.staking.reserve_mon, 5);
        assert!(config.signer().is_ok());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Config::load("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(err, CompoundError::Config(_)));
    }

    #[test]
    fn unparseable_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[network\nrpc_url =").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, CompoundError::Config(_)));
    }

    #[test]
    fn placeholder_key_is_rejected() {
        let file = write_config(PLACEHOLDER_PRIVATE_KEY);
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn garbage_key_is_rejected() {
        let file = write_config("0xnot-a-key");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, CompoundError::Config(_)));
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let file = write_config(TEST_KEY);
        let config = Config::load(file.path()).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(&TEST_KEY[2..10]));
    }
}
