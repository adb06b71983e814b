//! Hashing and encoding properties over generated inputs

use alloy::primitives::{Address, Bytes, U256};
use delegation_rs::hex::{hex_to_bytes, hex_to_number, to_hex};
use delegation_rs::{
    caveat_array_packet_hash, encode_batch_execution, encode_execution_calldata,
    encode_single_execution, Caveat, Delegation, Execution, ROOT_AUTHORITY,
};
use proptest::prelude::*;

fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn caveat() -> impl Strategy<Value = Caveat> {
    let terms = prop::collection::vec(any::<u8>(), 0..64);
    (address(), terms).prop_map(|(enforcer, terms)| Caveat::new(enforcer, terms))
}

fn execution() -> impl Strategy<Value = Execution> {
    let value = any::<u64>().prop_map(U256::from);
    let data = prop::collection::vec(any::<u8>(), 0..64);
    (address(), value, data).prop_map(|(target, value, data)| Execution::new(target, value, data))
}

proptest! {
    #[test]
    fn caveat_hash_is_deterministic(caveats in prop::collection::vec(caveat(), 1..6)) {
        let expected = caveat_array_packet_hash(&caveats);
        prop_assert_eq!(caveat_array_packet_hash(&caveats.clone()), expected);
    }

    #[test]
    fn caveat_hash_is_order_sensitive(a in caveat(), b in caveat()) {
        prop_assume!(a != b);
        prop_assert_ne!(
            caveat_array_packet_hash(&[a.clone(), b.clone()]),
            caveat_array_packet_hash(&[b, a])
        );
    }

    #[test]
    fn bytes_survive_hex(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = to_hex(bytes.as_slice(), None).unwrap();
        prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), Bytes::from(bytes));
    }

    #[test]
    fn numbers_survive_hex(value in any::<u128>()) {
        let encoded = to_hex(U256::from(value), None).unwrap();
        prop_assert_eq!(hex_to_number(&encoded).unwrap(), U256::from(value));
    }

    #[test]
    fn salt_parses_as_integer(salt in any::<u64>()) {
        let delegation = Delegation {
            delegate: Address::ZERO,
            delegator: Address::ZERO,
            authority: ROOT_AUTHORITY,
            caveats: Vec::new(),
            salt: format!("{salt:#x}"),
            signature: Bytes::new(),
        };
        prop_assert_eq!(delegation.to_struct().unwrap().salt, U256::from(salt));
    }

    #[test]
    fn calldata_dispatches_on_count(executions in prop::collection::vec(execution(), 1..5)) {
        let encoded = encode_execution_calldata(&executions).unwrap();
        if executions.len() == 1 {
            prop_assert_eq!(encoded, encode_single_execution(&executions[0]));
        } else {
            prop_assert_eq!(encoded, encode_batch_execution(&executions));
        }
    }
}
