//! Hashing and calldata encoding for delegations and executions

mod delegation;
mod eip712;
mod execution;

pub use delegation::{
    decode_disabled_delegations_result, encode_delegations, encode_disable_delegation,
    encode_disabled_delegations_check, encode_enable_delegation, encode_permission_contexts,
    encode_redeem_delegations, to_delegation_chains,
};
pub use eip712::{caveat_array_packet_hash, caveat_packet_hash, delegation_hash_offchain};
pub use execution::{
    encode_batch_execution, encode_execute, encode_execution_calldata,
    encode_execution_calldatas, encode_single_execution,
};
