//! EIP-712 struct hashing for caveats and delegations

use alloy::primitives::{keccak256, B256};
use tracing::trace;

use crate::contracts::{CAVEAT_TYPEHASH, DELEGATION_TYPEHASH};
use crate::error::Result;
use crate::types::{to_delegation_struct, Caveat, Delegation, DelegationStruct};

/// Computes the struct hash of a caveat
///
/// caveatHash = keccak256(abi.encode(CAVEAT_TYPEHASH, enforcer, keccak256(terms)))
///
/// `args` are supplied at redemption time and are not part of the hash.
pub fn caveat_packet_hash(caveat: &Caveat) -> B256 {
    let mut encoded = Vec::with_capacity(96);

    // CAVEAT_TYPEHASH (32 bytes)
    encoded.extend_from_slice(CAVEAT_TYPEHASH.as_slice());

    // enforcer (32 bytes, left-padded address)
    encoded.extend_from_slice(caveat.enforcer.into_word().as_slice());

    // keccak256(terms) (32 bytes)
    encoded.extend_from_slice(keccak256(&caveat.terms).as_slice());

    keccak256(&encoded)
}

/// Computes the hash of an ordered caveat list
///
/// arrayHash = keccak256(abi.encodePacked(caveatHash[0], ..., caveatHash[n-1]))
///
/// Each step appends the next caveat hash to the raw accumulated bytes, and
/// only the final buffer is hashed, so both order and length change the
/// result. The empty list hashes to `keccak256("")`.
pub fn caveat_array_packet_hash(caveats: &[Caveat]) -> B256 {
    let mut packed = Vec::with_capacity(caveats.len() * 32);
    for caveat in caveats {
        packed.extend_from_slice(caveat_packet_hash(caveat).as_slice());
    }

    let hash = keccak256(&packed);
    trace!(caveats = caveats.len(), %hash, "hashed caveat array");
    hash
}

impl DelegationStruct {
    /// Computes the struct hash of the delegation
    ///
    /// delegationHash = keccak256(abi.encode(
    ///     DELEGATION_TYPEHASH,
    ///     delegate, delegator, authority, caveatArrayHash, salt, keccak256(signature)
    /// ))
    pub fn struct_hash(&self) -> B256 {
        let mut encoded = Vec::with_capacity(224);

        // DELEGATION_TYPEHASH (32 bytes)
        encoded.extend_from_slice(DELEGATION_TYPEHASH.as_slice());

        // delegate (32 bytes, left-padded address)
        encoded.extend_from_slice(self.delegate.into_word().as_slice());

        // delegator (32 bytes, left-padded address)
        encoded.extend_from_slice(self.delegator.into_word().as_slice());

        // authority (32 bytes)
        encoded.extend_from_slice(self.authority.as_slice());

        // caveat array hash (32 bytes)
        encoded.extend_from_slice(caveat_array_packet_hash(&self.caveats).as_slice());

        // salt (32 bytes)
        encoded.extend_from_slice(&self.salt.to_be_bytes::<32>());

        // keccak256(signature) (32 bytes)
        encoded.extend_from_slice(keccak256(&self.signature).as_slice());

        keccak256(&encoded)
    }
}

/// Computes the off-chain hash of a delegation, used as the `authority` of
/// its children
pub fn delegation_hash_offchain(delegation: &Delegation) -> Result<B256> {
    let hash = to_delegation_struct(delegation)?.struct_hash();
    trace!(
        delegate = %delegation.delegate,
        delegator = %delegation.delegator,
        %hash,
        "hashed delegation"
    );
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ROOT_AUTHORITY;
    use alloy::primitives::{address, b256, Address, Bytes, U256};

    fn caveat(byte: u8) -> Caveat {
        Caveat::new(Address::repeat_byte(byte), vec![byte; 3])
    }

    fn root_delegation(salt: &str) -> Delegation {
        Delegation {
            delegate: address!("0x1111111111111111111111111111111111111111"),
            delegator: address!("0x2222222222222222222222222222222222222222"),
            authority: ROOT_AUTHORITY,
            caveats: vec![caveat(0xaa)],
            salt: salt.to_string(),
            signature: Bytes::new(),
        }
    }

    #[test]
    fn test_empty_caveat_array_hash() {
        assert_eq!(
            caveat_array_packet_hash(&[]),
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_caveat_packet_hash_layout() {
        let caveat = caveat(0x01);

        let mut expected = Vec::new();
        expected.extend_from_slice(CAVEAT_TYPEHASH.as_slice());
        expected.extend_from_slice(&[0u8; 12]);
        expected.extend_from_slice(caveat.enforcer.as_slice());
        expected.extend_from_slice(keccak256(&caveat.terms).as_slice());

        assert_eq!(caveat_packet_hash(&caveat), keccak256(&expected));
    }

    #[test]
    fn test_caveat_args_not_hashed() {
        let plain = caveat(0x01);
        let with_args = plain.clone().with_args(vec![0xff; 8]);
        assert_eq!(caveat_packet_hash(&plain), caveat_packet_hash(&with_args));
    }

    #[test]
    fn test_caveat_array_is_packed_concatenation() {
        let caveats = vec![caveat(0x01), caveat(0x02)];

        let mut packed = Vec::new();
        packed.extend_from_slice(caveat_packet_hash(&caveats[0]).as_slice());
        packed.extend_from_slice(caveat_packet_hash(&caveats[1]).as_slice());

        assert_eq!(caveat_array_packet_hash(&caveats), keccak256(&packed));
    }

    #[test]
    fn test_caveat_array_order_sensitive() {
        let forward = vec![caveat(0x01), caveat(0x02)];
        let reversed = vec![caveat(0x02), caveat(0x01)];

        let forward_hash = caveat_array_packet_hash(&forward);
        assert_eq!(forward_hash, caveat_array_packet_hash(&forward));
        assert_ne!(forward_hash, caveat_array_packet_hash(&reversed));
    }

    #[test]
    fn test_caveat_array_length_sensitive() {
        let once = vec![caveat(0x01)];
        let twice = vec![caveat(0x01), caveat(0x01)];
        let once_hash = caveat_array_packet_hash(&once);
        assert_ne!(once_hash, caveat_array_packet_hash(&twice));
    }

    #[test]
    fn test_delegation_struct_hash_layout() {
        let delegation = root_delegation("0x2a").to_struct().unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(DELEGATION_TYPEHASH.as_slice());
        expected.extend_from_slice(delegation.delegate.into_word().as_slice());
        expected.extend_from_slice(delegation.delegator.into_word().as_slice());
        expected.extend_from_slice(ROOT_AUTHORITY.as_slice());
        expected.extend_from_slice(caveat_array_packet_hash(&delegation.caveats).as_slice());
        expected.extend_from_slice(&U256::from(42).to_be_bytes::<32>());
        expected.extend_from_slice(keccak256(b"").as_slice());

        assert_eq!(delegation.struct_hash(), keccak256(&expected));
    }

    #[test]
    fn test_delegation_hash_deterministic() {
        let delegation = root_delegation("0x01");
        let first = delegation_hash_offchain(&delegation).unwrap();
        let second = delegation_hash_offchain(&delegation).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_delegation_hash_depends_on_salt_and_signature() {
        let base = delegation_hash_offchain(&root_delegation("0x01")).unwrap();
        let other_salt = delegation_hash_offchain(&root_delegation("0x02")).unwrap();
        let signed = root_delegation("0x01").with_signature(vec![0x01; 65]);
        let signed = delegation_hash_offchain(&signed).unwrap();

        assert_ne!(base, other_salt);
        assert_ne!(base, signed);
    }

    #[test]
    fn test_equivalent_salts_hash_equal() {
        let short = delegation_hash_offchain(&root_delegation("0x1")).unwrap();
        let padded = delegation_hash_offchain(&root_delegation("0x0001")).unwrap();
        assert_eq!(short, padded);
    }
}
