//! Deployed delegation framework contracts per chain and version

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Released versions of the delegation framework
///
/// Only the 1.3.0 release is shipped, so it is both the default and the
/// latest. A new release is appended to [`Self::ALL`]. Redeployments of a
/// shipped release on other chains go through [`ContractRegistry::insert`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DelegationFrameworkVersion {
    #[default]
    #[serde(rename = "1.3.0")]
    V1_3_0,
}

impl DelegationFrameworkVersion {
    /// All known versions, oldest first
    pub const ALL: [Self; 1] = [Self::V1_3_0];

    /// Returns the newest version
    pub const fn latest() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1_3_0 => "1.3.0",
        }
    }
}

impl fmt::Display for DelegationFrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelegationFrameworkVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix('v').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| Error::UnsupportedVersion(s.to_string()))
    }
}

/// Smart account implementation contracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Implementations {
    pub hybrid_delegator: Address,
    pub multi_sig_delegator: Address,
    pub eip7702_stateless_delegator: Address,
}

/// Caveat enforcer contracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaveatEnforcers {
    pub allowed_calldata: Address,
    pub allowed_methods: Address,
    pub allowed_targets: Address,
    pub args_equality_check: Address,
    pub block_number: Address,
    pub deployed: Address,
    pub erc20_balance_change: Address,
    pub erc20_transfer_amount: Address,
    pub exact_calldata: Address,
    pub id: Address,
    pub limited_calls: Address,
    pub native_token_transfer_amount: Address,
    pub nonce: Address,
    pub redeemer: Address,
    pub timestamp: Address,
    pub value_lte: Address,
}

/// Contract addresses of one framework deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorEnvironment {
    pub delegation_manager: Address,
    pub entry_point: Address,
    pub simple_factory: Address,
    pub implementations: Implementations,
    pub caveat_enforcers: CaveatEnforcers,
}

impl DelegatorEnvironment {
    /// Returns the v1.3.0 addresses
    /// These addresses are the same across all supported chains (CREATE2 deployment)
    pub fn v1_3_0() -> Self {
        Self {
            delegation_manager: address!("db9B1e94B5b69Df7e401DDbedE43491141047dB3"),
            entry_point: address!("0000000071727De22E5E9d8BAf0edAc6f37da032"),
            simple_factory: address!("69Aa2f9fe1572F1B640E1bbc512f5c3a734fc77c"),
            implementations: Implementations {
                hybrid_delegator: address!("48dBe696A4D990079e039489bA2053B36E8FFEC4"),
                multi_sig_delegator: address!("56a9EdB16a0105eb5a4C54f4C062e2868844f3A7"),
                eip7702_stateless_delegator: address!("63c0c19a282a1B52b07dD5a65b58948A07DAE32B"),
            },
            caveat_enforcers: CaveatEnforcers {
                allowed_calldata: address!("c2b0d624c1c4319760C96503BA27C347F3260f55"),
                allowed_methods: address!("2c21fD0Cb9DC8445CB3fb0DC5E7Bb0Aca01842B5"),
                allowed_targets: address!("7F20f61b1f09b08D970938F6fa563634d65c4EeB"),
                args_equality_check: address!("44B8C6ae3C304213c3e298495e12497Ed3E56E41"),
                block_number: address!("5d9818dF0AE3f66e9c3D0c5029DAF99d1823ca6c"),
                deployed: address!("24ff2AA430D53a8CD6788018E902E098083dcCd2"),
                erc20_balance_change: address!("cdF6aB796408598Cea671d79506d7D48E97a5437"),
                erc20_transfer_amount: address!("f100b0819427117EcF76Ed94B358B1A5b5C6D2Fc"),
                exact_calldata: address!("99F2e9bF15ce5eC84685604836F71aB835DBBdED"),
                id: address!("C8B5D93463c893401094cc70e66A206fb5987997"),
                limited_calls: address!("04658B29F6b82ed55274221a06Fc97D318E25416"),
                native_token_transfer_amount: address!("F71af580b9c3078fbc2BBF16FbB8EEd82b330320"),
                nonce: address!("DE4f2FAC4B3D87A1d9953Ca5FC09FCa7F366254f"),
                redeemer: address!("E144b0b2618071B4E56f746313528a669c7E65c5"),
                timestamp: address!("1046bb45C8d673d4ea75321280DB34899413c069"),
                value_lte: address!("92Bf12322527cAA612fd31a0e810472BBB106A8F"),
            },
        }
    }

    /// Returns the addresses of `version`
    pub fn for_version(version: DelegationFrameworkVersion) -> Self {
        match version {
            DelegationFrameworkVersion::V1_3_0 => Self::v1_3_0(),
        }
    }
}

/// Well-known chain IDs
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const OPTIMISM: u64 = 10;
    pub const BSC: u64 = 56;
    pub const GNOSIS: u64 = 100;
    pub const POLYGON: u64 = 137;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM: u64 = 42161;
    pub const LINEA: u64 = 59144;
    pub const SEPOLIA: u64 = 11155111;
    pub const OPTIMISM_SEPOLIA: u64 = 11155420;
    pub const BASE_SEPOLIA: u64 = 84532;
    pub const ARBITRUM_SEPOLIA: u64 = 421614;
    pub const LINEA_SEPOLIA: u64 = 59141;
    pub const POLYGON_AMOY: u64 = 80002;
}

/// Chains carrying the canonical v1.3.0 deployment
const V1_3_0_CHAINS: [u64; 14] = [
    chain_ids::MAINNET,
    chain_ids::OPTIMISM,
    chain_ids::BSC,
    chain_ids::GNOSIS,
    chain_ids::POLYGON,
    chain_ids::BASE,
    chain_ids::ARBITRUM,
    chain_ids::LINEA,
    chain_ids::SEPOLIA,
    chain_ids::OPTIMISM_SEPOLIA,
    chain_ids::BASE_SEPOLIA,
    chain_ids::ARBITRUM_SEPOLIA,
    chain_ids::LINEA_SEPOLIA,
    chain_ids::POLYGON_AMOY,
];

static BUILTIN: LazyLock<ContractRegistry> = LazyLock::new(|| {
    let mut registry = ContractRegistry::new();
    for chain_id in V1_3_0_CHAINS {
        registry.insert(
            DelegationFrameworkVersion::V1_3_0,
            chain_id,
            DelegatorEnvironment::v1_3_0(),
        );
    }
    registry
});

/// Lookup table from `(version, chain id)` to deployed addresses
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    deployments: BTreeMap<(DelegationFrameworkVersion, u64), DelegatorEnvironment>,
}

impl ContractRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry of known deployments
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Registers a deployment, e.g. on a local devnet, returning the entry it replaced
    pub fn insert(
        &mut self,
        version: DelegationFrameworkVersion,
        chain_id: u64,
        environment: DelegatorEnvironment,
    ) -> Option<DelegatorEnvironment> {
        self.deployments.insert((version, chain_id), environment)
    }

    /// Looks up the deployment of `version` on `chain_id`
    pub fn get(
        &self,
        chain_id: u64,
        version: DelegationFrameworkVersion,
    ) -> Result<&DelegatorEnvironment> {
        debug!(chain_id, %version, "looking up delegator environment");
        self.deployments
            .get(&(version, chain_id))
            .ok_or_else(|| Error::ContractsNotFound {
                version: version.to_string(),
                chain_id,
            })
    }

    /// Returns the chains that carry `version`
    pub fn chain_ids(&self, version: DelegationFrameworkVersion) -> Vec<u64> {
        self.deployments
            .keys()
            .filter(|(v, _)| *v == version)
            .map(|(_, chain_id)| *chain_id)
            .collect()
    }
}

/// Looks up the builtin deployment of `version` on `chain_id`
pub fn get_delegator_environment(
    chain_id: u64,
    version: DelegationFrameworkVersion,
) -> Result<&'static DelegatorEnvironment> {
    ContractRegistry::builtin().get(chain_id, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: DelegationFrameworkVersion = DelegationFrameworkVersion::V1_3_0;

    fn parse(s: &str) -> Result<DelegationFrameworkVersion> {
        s.parse()
    }

    #[test]
    fn test_v1_3_0_addresses() {
        let environment = DelegatorEnvironment::v1_3_0();
        let entry_point = address!("0000000071727De22E5E9d8BAf0edAc6f37da032");
        assert_eq!(
            environment.delegation_manager,
            address!("db9B1e94B5b69Df7e401DDbedE43491141047dB3")
        );
        assert_eq!(environment.entry_point, entry_point);
    }

    #[test]
    fn test_lookup_mainnet() {
        let version = DelegationFrameworkVersion::default();
        let environment = get_delegator_environment(chain_ids::MAINNET, version).unwrap();
        assert_eq!(environment, &DelegatorEnvironment::v1_3_0());
    }

    #[test]
    fn test_lookup_missing_chain() {
        let err = get_delegator_environment(31337, VERSION).unwrap_err();
        let expected = "no contracts found for version 1.3.0 chain 31337";
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = ContractRegistry::new();
        assert!(registry.get(31337, VERSION).is_err());

        let mut environment = DelegatorEnvironment::v1_3_0();
        environment.delegation_manager = Address::repeat_byte(0x01);
        assert!(registry.insert(VERSION, 31337, environment).is_none());

        let found = registry.get(31337, VERSION).unwrap();
        assert_eq!(found.delegation_manager, Address::repeat_byte(0x01));
        assert_eq!(registry.chain_ids(VERSION), vec![31337]);
    }

    #[test]
    fn test_builtin_chains() {
        let chains = ContractRegistry::builtin().chain_ids(VERSION);
        assert!(chains.contains(&chain_ids::SEPOLIA));
        assert_eq!(chains.len(), V1_3_0_CHAINS.len());
    }

    #[test]
    fn test_shipped_versions() {
        let latest = DelegationFrameworkVersion::latest();
        assert_eq!(DelegationFrameworkVersion::ALL.last(), Some(&latest));
        assert_eq!(DelegationFrameworkVersion::default(), latest);

        for version in DelegationFrameworkVersion::ALL {
            assert!(!ContractRegistry::builtin().chain_ids(version).is_empty());
        }
    }

    #[test]
    fn test_version_parse() {
        assert_eq!(parse("1.3.0").unwrap(), VERSION);
        assert_eq!(parse("v1.3.0").unwrap(), VERSION);
        assert!(parse("0.9.0").is_err());
        assert!(parse("1.2.0").is_err());
        assert_eq!(DelegationFrameworkVersion::latest().to_string(), "1.3.0");
    }
}
