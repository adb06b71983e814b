//! # delegation-rs
//!
//! Offline hashing and calldata encoding for ERC-7710 delegations on the
//! MetaMask delegation framework.
//!
//! ## Features
//!
//! - EIP-712 struct hashes for delegations and caveats, bit-exact with the
//!   on-chain `DelegationManager`
//! - `redeemDelegations`, `disableDelegation` and ERC-7579 `execute` calldata
//! - Fluent caveat builder over the deployed caveat enforcers
//! - Static registry of framework deployments per chain and version
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use delegation_rs::{
//!     create_delegation, delegation_hash_offchain, encode_redeem_delegations,
//!     get_delegator_environment, CaveatBuilder, CaveatKind, CreateDelegationOptions,
//!     DelegationFrameworkVersion, Execution, ExecutionMode, RandomSalt,
//! };
//!
//! let environment = get_delegator_environment(1, DelegationFrameworkVersion::V1_3_0)?;
//!
//! let caveats = CaveatBuilder::new(environment)
//!     .add(CaveatKind::AllowedTargets { targets: vec![token] })
//!     .add(CaveatKind::LimitedCalls { limit: 1 });
//!
//! let options = CreateDelegationOptions {
//!     to: bob,
//!     from: alice,
//!     caveats: caveats.into(),
//!     parent_delegation: None,
//! };
//! let delegation = create_delegation(options, &mut RandomSalt)?;
//!
//! // Sign this hash with the delegator's key, then attach the signature
//! let hash = delegation_hash_offchain(&delegation)?;
//! let delegation = delegation.with_signature(signature);
//!
//! let calldata = encode_redeem_delegations(
//!     &[vec![delegation]],
//!     &[ExecutionMode::SingleDefault],
//!     &[vec![Execution::call(token, transfer_calldata)]],
//! )?;
//! ```

pub mod caveats;
pub mod contracts;
pub mod delegation;
pub mod encoding;
pub mod environment;
pub mod error;
pub mod hex;
pub mod types;

// Re-export main types at crate root
pub use caveats::{resolve_caveats, CaveatBuilder, CaveatBuilderConfig, CaveatKind, CaveatsInput};
pub use contracts::{IDelegationManager, IERC7579Account, ANY_BENEFICIARY, ROOT_AUTHORITY};
pub use delegation::{
    create_delegation, create_open_delegation, resolve_authority, CreateDelegationOptions,
    CreateOpenDelegationOptions, Parent, RandomSalt, SaltSource,
};
pub use encoding::{
    caveat_array_packet_hash, caveat_packet_hash, decode_disabled_delegations_result,
    delegation_hash_offchain, encode_batch_execution, encode_delegations,
    encode_disable_delegation, encode_disabled_delegations_check, encode_enable_delegation,
    encode_execute, encode_execution_calldata, encode_execution_calldatas,
    encode_permission_contexts, encode_redeem_delegations, encode_single_execution,
    to_delegation_chains,
};
pub use environment::{
    get_delegator_environment, ContractRegistry, DelegationFrameworkVersion, DelegatorEnvironment,
};
pub use error::{CaveatError, Error, Result};
pub use types::{
    create_caveat, create_execution, to_delegation_struct, Caveat, Delegation, DelegationStruct,
    Execution, ExecutionMode,
};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
