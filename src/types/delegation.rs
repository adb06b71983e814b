//! Delegation types
//!
//! A delegation exists in two shapes. [`Delegation`] carries its salt as a hex
//! string, the form produced by [`create_delegation`](crate::create_delegation)
//! and exchanged as JSON. [`DelegationStruct`] carries the salt as a `uint256`
//! and is the form that is hashed and ABI-encoded.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use super::Caveat;
use crate::contracts::{IDelegationManager, ROOT_AUTHORITY};
use crate::error::{Error, Result};
use crate::hex::{hex_to_number, HEX_PREFIX};

fn root_authority() -> B256 {
    ROOT_AUTHORITY
}

fn empty_salt() -> String {
    HEX_PREFIX.to_string()
}

/// Delegation with a hex-string salt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    /// Account allowed to redeem the delegation
    pub delegate: Address,
    /// Account granting the authority
    pub delegator: Address,
    /// Hash of the parent delegation, or [`ROOT_AUTHORITY`]
    #[serde(default = "root_authority")]
    pub authority: B256,
    /// Conditions, in hashing order
    #[serde(default)]
    pub caveats: Vec<Caveat>,
    /// Big-endian hex integer; `0x` is zero
    #[serde(default = "empty_salt")]
    pub salt: String,
    /// Delegator signature over the delegation hash
    #[serde(default)]
    pub signature: Bytes,
}

impl Delegation {
    /// Converts to the canonical struct form
    pub fn to_struct(&self) -> Result<DelegationStruct> {
        to_delegation_struct(self)
    }

    /// Sets the signature
    pub fn with_signature(mut self, signature: impl Into<Bytes>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Returns true if this delegation has no parent
    pub fn is_root(&self) -> bool {
        self.authority == ROOT_AUTHORITY
    }
}

/// Delegation with a numeric salt, as hashed and encoded on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationStruct {
    pub delegate: Address,
    pub delegator: Address,
    pub authority: B256,
    pub caveats: Vec<Caveat>,
    pub salt: U256,
    pub signature: Bytes,
}

/// Converts a hex-salt delegation into its canonical struct form.
///
/// The salt `0x` maps to zero; any other value must be a `0x`-prefixed hex
/// integer that fits in 256 bits.
pub fn to_delegation_struct(delegation: &Delegation) -> Result<DelegationStruct> {
    let salt = hex_to_number(&delegation.salt).map_err(|_| Error::InvalidSalt {
        salt: delegation.salt.clone(),
        reason: "expected a 0x-prefixed hex integer of at most 32 bytes".to_string(),
    })?;

    Ok(DelegationStruct {
        delegate: delegation.delegate,
        delegator: delegation.delegator,
        authority: delegation.authority,
        caveats: delegation.caveats.clone(),
        salt,
        signature: delegation.signature.clone(),
    })
}

impl TryFrom<&Delegation> for DelegationStruct {
    type Error = Error;

    fn try_from(delegation: &Delegation) -> Result<Self> {
        to_delegation_struct(delegation)
    }
}

impl From<&DelegationStruct> for IDelegationManager::Delegation {
    fn from(delegation: &DelegationStruct) -> Self {
        Self {
            delegate: delegation.delegate,
            delegator: delegation.delegator,
            authority: delegation.authority,
            caveats: delegation.caveats.iter().map(Into::into).collect(),
            salt: delegation.salt,
            signature: delegation.signature.clone(),
        }
    }
}
