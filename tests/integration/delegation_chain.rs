//! Creating, hashing and chaining delegations

use alloy::primitives::{b256, keccak256, Bytes, B256, U256};
use delegation_rs::{
    caveat_array_packet_hash, create_delegation, create_open_delegation, delegation_hash_offchain,
    get_delegator_environment, resolve_authority, CreateDelegationOptions,
    CreateOpenDelegationOptions, DelegationFrameworkVersion, RandomSalt, ANY_BENEFICIARY,
    ROOT_AUTHORITY,
};

use crate::common::{counter, token_delegation, ALICE, BOB, CAROL};

#[test]
fn test_root_delegation_hash_is_stable() {
    let options = CreateDelegationOptions {
        to: BOB,
        from: ALICE,
        caveats: Vec::new().into(),
        parent_delegation: None,
    };
    let delegation = create_delegation(options, &mut RandomSalt).unwrap();

    assert_eq!(delegation.authority, ROOT_AUTHORITY);
    assert!(delegation.signature.is_empty());
    assert_eq!(delegation.salt.len(), 66);

    let first = delegation_hash_offchain(&delegation).unwrap();
    let second = delegation_hash_offchain(&delegation).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_caveats_hash() {
    assert_eq!(
        caveat_array_packet_hash(&[]),
        b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
    assert_eq!(caveat_array_packet_hash(&[]), keccak256(b""));
}

#[test]
fn test_chain_of_three() {
    let mut salts = counter();
    let root = token_delegation(ALICE, BOB, None, &mut salts);
    let middle = token_delegation(BOB, CAROL, Some((&root).into()), &mut salts);
    let leaf = token_delegation(CAROL, ALICE, Some((&middle).into()), &mut salts);

    assert_eq!(root.salt, "0x1");
    assert_eq!(leaf.salt, "0x3");

    let root_hash = delegation_hash_offchain(&root).unwrap();
    assert_eq!(resolve_authority(Some((&root).into())).unwrap(), root_hash);
    assert_eq!(middle.authority, root_hash);
    assert_eq!(leaf.authority, delegation_hash_offchain(&middle).unwrap());

    let hashes = [root_hash, middle.authority, leaf.authority];
    assert!(hashes.iter().all(|hash| *hash != ROOT_AUTHORITY));
}

#[test]
fn test_signature_changes_hash() {
    let mut salts = counter();
    let delegation = token_delegation(ALICE, BOB, None, &mut salts);
    let signature = Bytes::from(vec![0x1c; 65]);
    let resigned = delegation.clone().with_signature(signature);

    assert_ne!(
        delegation_hash_offchain(&delegation).unwrap(),
        delegation_hash_offchain(&resigned).unwrap()
    );
}

#[test]
fn test_open_delegation_under_parent_hash() {
    let parent = B256::repeat_byte(0xaa);
    let options = CreateOpenDelegationOptions {
        from: BOB,
        caveats: Vec::new().into(),
        parent_delegation: Some(parent.into()),
    };
    let open = create_open_delegation(options).unwrap();

    assert_eq!(open.delegate, ANY_BENEFICIARY);
    assert_eq!(open.authority, parent);
    assert_eq!(open.salt, "0x");
    assert_eq!(open.to_struct().unwrap().salt, U256::ZERO);
}

#[test]
fn test_json_round_trip_keeps_hash() {
    let mut salts = counter();
    let delegation = token_delegation(ALICE, BOB, None, &mut salts);

    let json = serde_json::to_string(&delegation).unwrap();
    let restored: delegation_rs::Delegation = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, delegation);
    assert_eq!(
        delegation_hash_offchain(&restored).unwrap(),
        delegation_hash_offchain(&delegation).unwrap()
    );
}

#[test]
fn test_environment_enforcers_are_used() {
    let version = DelegationFrameworkVersion::V1_3_0;
    let environment = get_delegator_environment(11155111, version).unwrap();
    let mut salts = counter();
    let delegation = token_delegation(ALICE, BOB, None, &mut salts);

    let enforcers: Vec<_> = delegation
        .caveats
        .iter()
        .map(|caveat| caveat.enforcer)
        .collect();
    let caveat_enforcers = &environment.caveat_enforcers;
    let expected = vec![
        caveat_enforcers.allowed_targets,
        caveat_enforcers.allowed_methods,
        caveat_enforcers.erc20_transfer_amount,
    ];
    assert_eq!(enforcers, expected);
}
