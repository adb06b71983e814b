//! Creating delegations and linking them into chains

use alloy::primitives::{Address, Bytes, B256};
use tracing::debug;

use crate::caveats::{resolve_caveats, CaveatsInput};
use crate::contracts::{ANY_BENEFICIARY, ROOT_AUTHORITY};
use crate::encoding::delegation_hash_offchain;
use crate::error::Result;
use crate::hex::HEX_PREFIX;
use crate::types::Delegation;

/// Produces salts for new delegations as hex strings
pub trait SaltSource {
    fn next_salt(&mut self) -> String;
}

/// 32 random bytes per salt
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSalt;

impl SaltSource for RandomSalt {
    fn next_salt(&mut self) -> String {
        B256::random().to_string()
    }
}

impl<F> SaltSource for F
where
    F: FnMut() -> String,
{
    fn next_salt(&mut self) -> String {
        self()
    }
}

/// The delegation a new one derives its authority from
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    /// Hash of an existing delegation
    Hash(B256),
    /// The delegation itself, hashed on resolution
    Delegation(&'a Delegation),
}

impl From<B256> for Parent<'_> {
    fn from(hash: B256) -> Self {
        Parent::Hash(hash)
    }
}

impl<'a> From<&'a Delegation> for Parent<'a> {
    fn from(delegation: &'a Delegation) -> Self {
        Parent::Delegation(delegation)
    }
}

/// Returns the authority a child of `parent` carries
pub fn resolve_authority(parent: Option<Parent<'_>>) -> Result<B256> {
    match parent {
        None => Ok(ROOT_AUTHORITY),
        Some(Parent::Hash(hash)) => Ok(hash),
        Some(Parent::Delegation(delegation)) => delegation_hash_offchain(delegation),
    }
}

/// Inputs of [`create_delegation`]
#[derive(Debug, Clone)]
pub struct CreateDelegationOptions<'a> {
    pub to: Address,
    pub from: Address,
    pub caveats: CaveatsInput,
    pub parent_delegation: Option<Parent<'a>>,
}

/// Inputs of [`create_open_delegation`]
#[derive(Debug, Clone)]
pub struct CreateOpenDelegationOptions<'a> {
    pub from: Address,
    pub caveats: CaveatsInput,
    pub parent_delegation: Option<Parent<'a>>,
}

/// Creates an unsigned delegation from `from` to `to` with a fresh salt
pub fn create_delegation(
    options: CreateDelegationOptions<'_>,
    salts: &mut impl SaltSource,
) -> Result<Delegation> {
    let authority = resolve_authority(options.parent_delegation)?;
    let caveats = resolve_caveats(options.caveats)?;
    let salt = salts.next_salt();

    debug!(
        delegate = %options.to,
        delegator = %options.from,
        %authority,
        caveats = caveats.len(),
        "creating delegation"
    );

    Ok(Delegation {
        delegate: options.to,
        delegator: options.from,
        authority,
        caveats,
        salt,
        signature: Bytes::new(),
    })
}

/// Creates an unsigned delegation any account may redeem
///
/// The salt is always `0x`, so two open delegations with equal inputs hash
/// the same.
pub fn create_open_delegation(options: CreateOpenDelegationOptions<'_>) -> Result<Delegation> {
    let authority = resolve_authority(options.parent_delegation)?;
    let caveats = resolve_caveats(options.caveats)?;

    debug!(delegator = %options.from, %authority, "creating open delegation");

    Ok(Delegation {
        delegate: ANY_BENEFICIARY,
        delegator: options.from,
        authority,
        caveats,
        salt: HEX_PREFIX.to_string(),
        signature: Bytes::new(),
    })
}
