//! DelegationManager calldata encoding

use alloy::primitives::{Bytes, B256};
use alloy::sol_types::{SolCall, SolValue};
use tracing::debug;

use super::execution::encode_execution_calldatas;
use crate::contracts::IDelegationManager;
use crate::error::Result;
use crate::hex::hex_to_number;
use crate::types::{to_delegation_struct, Delegation, DelegationStruct, Execution, ExecutionMode};

/// Encodes a delegation chain as `abi.encode(Delegation[])`
///
/// This is the permission context passed to `redeemDelegations`, ordered from
/// the leaf delegation to the root.
pub fn encode_delegations(delegations: &[DelegationStruct]) -> Bytes {
    let delegations: Vec<IDelegationManager::Delegation> =
        delegations.iter().map(Into::into).collect();
    Bytes::from(delegations.abi_encode())
}

/// Encodes one permission context per delegation chain
pub fn encode_permission_contexts(delegation_chains: &[Vec<DelegationStruct>]) -> Vec<Bytes> {
    delegation_chains
        .iter()
        .map(|chain| encode_delegations(chain))
        .collect()
}

/// Converts every delegation of every chain to struct form
pub fn to_delegation_chains(
    delegation_chains: &[Vec<Delegation>],
) -> Result<Vec<Vec<DelegationStruct>>> {
    delegation_chains
        .iter()
        .map(|chain| chain.iter().map(to_delegation_struct).collect())
        .collect()
}

/// Encodes a `disableDelegation` call revoking `delegation`
pub fn encode_disable_delegation(delegation: &Delegation) -> Result<Bytes> {
    let call = IDelegationManager::disableDelegationCall {
        _delegation: (&to_delegation_struct(delegation)?).into(),
    };
    Ok(Bytes::from(call.abi_encode()))
}

/// Encodes an `enableDelegation` call restoring a revoked `delegation`
pub fn encode_enable_delegation(delegation: &Delegation) -> Result<Bytes> {
    let call = IDelegationManager::enableDelegationCall {
        _delegation: (&to_delegation_struct(delegation)?).into(),
    };
    Ok(Bytes::from(call.abi_encode()))
}

/// Encodes a `disabledDelegations(bytes32)` view call
pub fn encode_disabled_delegations_check(delegation_hash: B256) -> Bytes {
    let call = IDelegationManager::disabledDelegationsCall {
        _delegationHash: delegation_hash,
    };
    Bytes::from(call.abi_encode())
}

/// Interprets the hex result of a `disabledDelegations` call
///
/// An empty result or `0x` means not disabled; any non-zero word means disabled.
pub fn decode_disabled_delegations_result(result: &str) -> Result<bool> {
    if result.is_empty() {
        return Ok(false);
    }
    Ok(!hex_to_number(result)?.is_zero())
}

/// Encodes a `redeemDelegations` call
///
/// `delegations`, `modes` and `executions` are parallel: entry `i` redeems
/// chain `i` with mode `i` over execution list `i`.
pub fn encode_redeem_delegations(
    delegations: &[Vec<Delegation>],
    modes: &[ExecutionMode],
    executions: &[Vec<Execution>],
) -> Result<Bytes> {
    let contexts = encode_permission_contexts(&to_delegation_chains(delegations)?);
    let calldatas = encode_execution_calldatas(executions)?;

    debug!(
        contexts = contexts.len(),
        modes = modes.len(),
        calldatas = calldatas.len(),
        "encoding redeemDelegations"
    );

    let call = IDelegationManager::redeemDelegationsCall {
        _permissionContexts: contexts,
        _modes: modes.iter().map(ExecutionMode::as_b256).collect(),
        _executionCallDatas: calldatas,
    };

    Ok(Bytes::from(call.abi_encode()))
}
