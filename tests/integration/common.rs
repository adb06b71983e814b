//! Shared fixtures for integration tests

use alloy::primitives::{address, Address, Bytes, U256};
use alloy::sol;
use delegation_rs::{
    create_delegation, CaveatBuilder, CaveatKind, CreateDelegationOptions, Delegation,
    DelegatorEnvironment, Parent,
};

pub const ALICE: Address = address!("0x1111111111111111111111111111111111111111");
pub const BOB: Address = address!("0x2222222222222222222222222222222222222222");
pub const CAROL: Address = address!("0x3333333333333333333333333333333333333333");
pub const TOKEN: Address = address!("0x4444444444444444444444444444444444444444");

sol! {
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Salts counting up from one
pub fn counter() -> impl FnMut() -> String {
    let mut next = 0u64;
    move || {
        next += 1;
        format!("{next:#x}")
    }
}

/// A delegation limited to ERC-20 transfers on [`TOKEN`], signed with a dummy signature
pub fn token_delegation(
    from: Address,
    to: Address,
    parent: Option<Parent<'_>>,
    salts: &mut impl FnMut() -> String,
) -> Delegation {
    let allowed_targets = CaveatKind::AllowedTargets {
        targets: vec![TOKEN],
    };
    let allowed_methods = CaveatKind::AllowedMethods {
        selectors: vec!["transfer(address,uint256)".to_string()],
    };
    let transfer_amount = CaveatKind::Erc20TransferAmount {
        token: TOKEN,
        max_amount: U256::from(1_000_000),
    };
    let caveats = CaveatBuilder::new(&DelegatorEnvironment::v1_3_0())
        .add(allowed_targets)
        .add(allowed_methods)
        .add(transfer_amount);

    let options = CreateDelegationOptions {
        to,
        from,
        caveats: caveats.into(),
        parent_delegation: parent,
    };
    create_delegation(options, salts)
        .expect("delegation should build")
        .with_signature(Bytes::from(vec![0x1b; 65]))
}
