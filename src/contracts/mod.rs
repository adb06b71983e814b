//! Contract ABI definitions for the delegation framework

use alloy::primitives::{address, b256, Address, B256};
use alloy::sol;

sol! {
    /// DelegationManager entry points used for redemption and revocation
    #[sol(all_derives)]
    interface IDelegationManager {
        /// On-chain layout of a caveat
        struct Caveat {
            address enforcer;
            bytes terms;
            bytes args;
        }

        /// On-chain layout of a delegation (numeric salt)
        struct Delegation {
            address delegate;
            address delegator;
            bytes32 authority;
            Caveat[] caveats;
            uint256 salt;
            bytes signature;
        }

        /// Redeems one delegation chain per execution batch
        /// @param _permissionContexts ABI-encoded `Delegation[]`, leaf first
        /// @param _modes ERC-7579 execution modes, one per context
        /// @param _executionCallDatas single or batch encoded executions
        function redeemDelegations(
            bytes[] calldata _permissionContexts,
            bytes32[] calldata _modes,
            bytes[] calldata _executionCallDatas
        ) external;

        /// Revokes a delegation
        function disableDelegation(Delegation calldata _delegation) external;

        /// Restores a previously revoked delegation
        function enableDelegation(Delegation calldata _delegation) external;

        /// Returns true if the delegation hash has been revoked
        function disabledDelegations(bytes32 _delegationHash) external view returns (bool);
    }

    /// ERC-7579 smart account execution entry point
    #[sol(all_derives)]
    interface IERC7579Account {
        /// On-chain layout of a single call
        struct Execution {
            address target;
            uint256 value;
            bytes callData;
        }

        /// Executes single or batch encoded calldata according to `mode`
        function execute(bytes32 mode, bytes calldata executionCalldata) external payable;
    }
}

/// EIP-712 type hash for Delegation
/// keccak256("Delegation(address delegate,address delegator,bytes32 authority,Caveat[] caveats,uint256 salt)Caveat(address enforcer,bytes terms)")
pub const DELEGATION_TYPEHASH: B256 =
    b256!("88c1d2ecf185adf710588203a5f263f0ff61be0d33da39792cde19ba9aa4331e");

/// EIP-712 type hash for Caveat
/// keccak256("Caveat(address enforcer,bytes terms)")
pub const CAVEAT_TYPEHASH: B256 =
    b256!("80ad7e1b04ee6d994a125f4714ca0720908bd80ed16063ec8aee4b88e9253e2d");

/// Authority of a delegation that has no parent
pub const ROOT_AUTHORITY: B256 = B256::ZERO;

/// Delegate of an open delegation, redeemable by anyone
pub const ANY_BENEFICIARY: Address = address!("0000000000000000000000000000000000000a11");
