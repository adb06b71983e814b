//! Named caveat kinds and the terms their enforcers expect

use alloy::primitives::{Address, Bytes, B256, U256};

use crate::environment::CaveatEnforcers;
use crate::error::CaveatError;
use crate::hex::{concat, hex_to_bytes, is_hex, to_function_selector, to_hex};
use crate::types::Caveat;

/// A caveat described by its purpose rather than its raw terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaveatKind {
    /// Restricts calls to the given functions. Each entry is a 4-byte
    /// selector (`0xa9059cbb`) or a signature (`transfer(address,uint256)`).
    AllowedMethods { selectors: Vec<String> },
    /// Restricts calls to the given targets
    AllowedTargets { targets: Vec<Address> },
    /// Requires `value` at byte offset `start_index` of the calldata
    AllowedCalldata { start_index: usize, value: Bytes },
    /// Caps the native value of each call
    ValueLte { max_value: U256 },
    /// Caps the number of redemptions
    LimitedCalls { limit: u64 },
    /// Valid strictly between two unix timestamps; zero disables a bound
    Timestamp {
        after_threshold: u128,
        before_threshold: u128,
    },
    /// Valid strictly between two block numbers; zero disables a bound
    BlockNumber {
        after_threshold: u128,
        before_threshold: u128,
    },
    /// Ties the delegation to a revocable nonce
    Nonce { nonce: U256 },
    /// Groups delegations so only one with a given id can be redeemed
    Id { id: U256 },
    /// Restricts who may redeem
    Redeemer { redeemers: Vec<Address> },
    /// Caps the total native token transferred
    NativeTokenTransferAmount { max_amount: U256 },
    /// Caps the total ERC-20 amount transferred
    Erc20TransferAmount { token: Address, max_amount: U256 },
    /// Requires this exact calldata
    ExactCalldata { call_data: Bytes },
    /// Requires the redeemer args to equal these terms
    ArgsEqualityCheck { args: Bytes },
    /// Deploys a contract with CREATE2 before execution if missing
    Deployed {
        contract_address: Address,
        salt: B256,
        bytecode: Bytes,
    },
}

impl CaveatKind {
    /// Name used for duplicate detection and error messages
    pub const fn name(&self) -> &'static str {
        match self {
            CaveatKind::AllowedMethods { .. } => "allowedMethods",
            CaveatKind::AllowedTargets { .. } => "allowedTargets",
            CaveatKind::AllowedCalldata { .. } => "allowedCalldata",
            CaveatKind::ValueLte { .. } => "valueLte",
            CaveatKind::LimitedCalls { .. } => "limitedCalls",
            CaveatKind::Timestamp { .. } => "timestamp",
            CaveatKind::BlockNumber { .. } => "blockNumber",
            CaveatKind::Nonce { .. } => "nonce",
            CaveatKind::Id { .. } => "id",
            CaveatKind::Redeemer { .. } => "redeemer",
            CaveatKind::NativeTokenTransferAmount { .. } => "nativeTokenTransferAmount",
            CaveatKind::Erc20TransferAmount { .. } => "erc20TransferAmount",
            CaveatKind::ExactCalldata { .. } => "exactCalldata",
            CaveatKind::ArgsEqualityCheck { .. } => "argsEqualityCheck",
            CaveatKind::Deployed { .. } => "deployed",
        }
    }

    /// Returns the enforcer that checks this kind
    pub fn enforcer(&self, enforcers: &CaveatEnforcers) -> Address {
        match self {
            CaveatKind::AllowedMethods { .. } => enforcers.allowed_methods,
            CaveatKind::AllowedTargets { .. } => enforcers.allowed_targets,
            CaveatKind::AllowedCalldata { .. } => enforcers.allowed_calldata,
            CaveatKind::ValueLte { .. } => enforcers.value_lte,
            CaveatKind::LimitedCalls { .. } => enforcers.limited_calls,
            CaveatKind::Timestamp { .. } => enforcers.timestamp,
            CaveatKind::BlockNumber { .. } => enforcers.block_number,
            CaveatKind::Nonce { .. } => enforcers.nonce,
            CaveatKind::Id { .. } => enforcers.id,
            CaveatKind::Redeemer { .. } => enforcers.redeemer,
            CaveatKind::NativeTokenTransferAmount { .. } => enforcers.native_token_transfer_amount,
            CaveatKind::Erc20TransferAmount { .. } => enforcers.erc20_transfer_amount,
            CaveatKind::ExactCalldata { .. } => enforcers.exact_calldata,
            CaveatKind::ArgsEqualityCheck { .. } => enforcers.args_equality_check,
            CaveatKind::Deployed { .. } => enforcers.deployed,
        }
    }

    /// Validates the arguments and renders the enforcer terms
    pub fn terms(&self) -> Result<Bytes, CaveatError> {
        let name = self.name();
        let invalid = |reason: &str| CaveatError::invalid(name, reason);
        let word = |value: U256| padded_hex(name, value, 32);

        let terms = match self {
            CaveatKind::AllowedMethods { selectors } => {
                if selectors.is_empty() {
                    return Err(invalid("must provide at least one selector"));
                }
                let selectors = selectors
                    .iter()
                    .map(|selector| method_selector(name, selector))
                    .collect::<Result<Vec<_>, _>>()?;
                concat(&selectors)
            }
            CaveatKind::AllowedTargets { targets }
            | CaveatKind::Redeemer { redeemers: targets } => {
                if targets.is_empty() {
                    return Err(invalid("must provide at least one address"));
                }
                let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
                concat(&targets)
            }
            CaveatKind::AllowedCalldata { start_index, value } => {
                concat(&[word(U256::from(*start_index))?, value.to_string()])
            }
            CaveatKind::ValueLte { max_value } => word(*max_value)?,
            CaveatKind::LimitedCalls { limit } => {
                if *limit == 0 {
                    return Err(invalid("limit must be a positive integer"));
                }
                word(U256::from(*limit))?
            }
            CaveatKind::Timestamp {
                after_threshold,
                before_threshold,
            } => {
                if is_inverted(*after_threshold, *before_threshold) {
                    return Err(invalid(INVERTED_THRESHOLDS));
                }
                threshold_pair(name, *after_threshold, *before_threshold)?
            }
            CaveatKind::BlockNumber {
                after_threshold,
                before_threshold,
            } => {
                if *after_threshold == 0 && *before_threshold == 0 {
                    return Err(invalid(MISSING_THRESHOLD));
                }
                if is_inverted(*after_threshold, *before_threshold) {
                    return Err(invalid(INVERTED_THRESHOLDS));
                }
                threshold_pair(name, *after_threshold, *before_threshold)?
            }
            CaveatKind::Nonce { nonce } => word(*nonce)?,
            CaveatKind::Id { id } => word(*id)?,
            CaveatKind::NativeTokenTransferAmount { max_amount } => word(*max_amount)?,
            CaveatKind::Erc20TransferAmount { token, max_amount } => {
                if max_amount.is_zero() {
                    return Err(invalid("max_amount must be a positive number"));
                }
                concat(&[token.to_string(), word(*max_amount)?])
            }
            CaveatKind::ExactCalldata { call_data } => call_data.to_string(),
            CaveatKind::ArgsEqualityCheck { args } => args.to_string(),
            CaveatKind::Deployed {
                contract_address,
                salt,
                bytecode,
            } => {
                if bytecode.is_empty() {
                    return Err(invalid("bytecode must not be empty"));
                }
                concat(&[
                    contract_address.to_string(),
                    salt.to_string(),
                    bytecode.to_string(),
                ])
            }
        };

        hex_to_bytes(&terms).map_err(|err| CaveatError::invalid(name, err.to_string()))
    }

    /// Builds the caveat against the given enforcer set
    pub fn into_caveat(self, enforcers: &CaveatEnforcers) -> Result<Caveat, CaveatError> {
        Ok(Caveat::new(self.enforcer(enforcers), self.terms()?))
    }
}

const MISSING_THRESHOLD: &str =
    "at least one of after_threshold or before_threshold must be specified";

const INVERTED_THRESHOLDS: &str =
    "before_threshold must be greater than after_threshold when both are specified";

fn padded_hex(kind: &'static str, value: U256, size: usize) -> Result<String, CaveatError> {
    to_hex(value, Some(size)).map_err(|err| CaveatError::invalid(kind, err.to_string()))
}

/// Both bounds are set and `before` does not come after `after`
fn is_inverted(after: u128, before: u128) -> bool {
    after != 0 && before != 0 && before <= after
}

/// Two 16-byte thresholds, `after` first
fn threshold_pair(kind: &'static str, after: u128, before: u128) -> Result<String, CaveatError> {
    let after = padded_hex(kind, U256::from(after), 16)?;
    let before = padded_hex(kind, U256::from(before), 16)?;
    Ok(concat(&[after, before]))
}

fn method_selector(kind: &'static str, selector: &str) -> Result<String, CaveatError> {
    if is_hex(selector, true) && selector.len() == 10 {
        return Ok(selector.to_lowercase());
    }
    to_function_selector(selector).map_err(|_| {
        let reason = format!(
            "{selector} must be a 4 byte hex string or a function signature"
        );
        CaveatError::invalid(kind, reason)
    })
}
