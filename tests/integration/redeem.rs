//! Encoding redemptions and revocations

use alloy::primitives::{Bytes, U256};
use alloy::sol_types::{SolCall, SolValue};
use delegation_rs::{
    delegation_hash_offchain, encode_disable_delegation, encode_disabled_delegations_check,
    encode_execute, encode_execution_calldata, encode_redeem_delegations, Execution,
    ExecutionMode, IDelegationManager, IERC7579Account,
};

use crate::common::{counter, token_delegation, IERC20, ALICE, BOB, CAROL, TOKEN};

type SolDelegations = Vec<IDelegationManager::Delegation>;
type SolExecutions = Vec<IERC7579Account::Execution>;

fn transfer(amount: u64) -> Execution {
    let call = IERC20::transferCall {
        to: CAROL,
        amount: U256::from(amount),
    };
    Execution::typed(TOKEN, &call)
}

#[test]
fn test_redeem_chain_leaf_first() {
    let mut salts = counter();
    let root = token_delegation(ALICE, BOB, None, &mut salts);
    let leaf = token_delegation(BOB, CAROL, Some((&root).into()), &mut salts);

    let chains = vec![vec![leaf.clone(), root.clone()]];
    let modes = [ExecutionMode::SingleDefault];
    let executions = vec![vec![transfer(10)]];
    let data = encode_redeem_delegations(&chains, &modes, &executions).unwrap();

    let call = IDelegationManager::redeemDelegationsCall::abi_decode(&data).unwrap();
    assert_eq!(call._permissionContexts.len(), 1);

    let chain = SolDelegations::abi_decode(&call._permissionContexts[0]).unwrap();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].delegate, CAROL);
    assert_eq!(chain[0].authority, delegation_hash_offchain(&root).unwrap());
    assert_eq!(chain[1].delegate, BOB);
    assert_eq!(chain[1].salt, U256::from(1));
    assert_eq!(chain[1].caveats.len(), 3);

    let expected = encode_execution_calldata(&executions[0]).unwrap();
    assert_eq!(call._executionCallDatas[0], expected);
}

#[test]
fn test_redeem_multiple_batches() {
    let mut salts = counter();
    let first = token_delegation(ALICE, BOB, None, &mut salts);
    let second = token_delegation(ALICE, CAROL, None, &mut salts);

    let executions = vec![vec![transfer(1)], vec![transfer(2), transfer(3)]];
    let modes = vec![ExecutionMode::SingleDefault, ExecutionMode::BatchTry];
    let chains = vec![vec![first], vec![second]];
    let data = encode_redeem_delegations(&chains, &modes, &executions).unwrap();

    let call = IDelegationManager::redeemDelegationsCall::abi_decode(&data).unwrap();
    let mode_words: Vec<_> = modes.iter().map(ExecutionMode::as_b256).collect();
    assert_eq!(call._modes, mode_words);

    // Single execution is packed: target, value word, calldata
    let single = &call._executionCallDatas[0];
    assert_eq!(&single[..20], TOKEN.as_slice());
    assert_eq!(&single[52..], transfer(1).call_data.as_ref());

    let batch = SolExecutions::abi_decode(&call._executionCallDatas[1]).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1].callData, transfer(3).call_data);
}

#[test]
fn test_disable_then_check() {
    let mut salts = counter();
    let delegation = token_delegation(ALICE, BOB, None, &mut salts);

    let disable = encode_disable_delegation(&delegation).unwrap();
    let call = IDelegationManager::disableDelegationCall::abi_decode(&disable).unwrap();
    assert_eq!(call._delegation.delegator, ALICE);
    assert_eq!(call._delegation.signature, Bytes::from(vec![0x1b; 65]));

    let hash = delegation_hash_offchain(&delegation).unwrap();
    let check = encode_disabled_delegations_check(hash);
    let call = IDelegationManager::disabledDelegationsCall::abi_decode(&check).unwrap();
    assert_eq!(call._delegationHash, hash);
}

#[test]
fn test_direct_execute() {
    let data = encode_execute(&[transfer(5)], false).unwrap();
    let call = IERC7579Account::executeCall::abi_decode(&data).unwrap();

    assert_eq!(call.mode, ExecutionMode::SingleDefault.as_b256());
    let expected = encode_execution_calldata(&[transfer(5)]).unwrap();
    assert_eq!(call.executionCalldata, expected);
}
