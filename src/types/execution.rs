//! Execution types

use alloy::primitives::{b256, Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::contracts::IERC7579Account;

/// Single call, revert on failure
pub const SINGLE_DEFAULT_MODE: B256 = B256::ZERO;
/// Single call, continue on failure
pub const SINGLE_TRY_MODE: B256 =
    b256!("0001000000000000000000000000000000000000000000000000000000000000");
/// Batch call, revert on failure
pub const BATCH_DEFAULT_MODE: B256 =
    b256!("0100000000000000000000000000000000000000000000000000000000000000");
/// Batch call, continue on failure
pub const BATCH_TRY_MODE: B256 =
    b256!("0101000000000000000000000000000000000000000000000000000000000000");

/// A call performed by a smart account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Target address
    pub target: Address,
    /// Value to send
    #[serde(default)]
    pub value: U256,
    /// Calldata
    #[serde(default)]
    pub call_data: Bytes,
}

impl Execution {
    /// Creates a new Execution with the given parameters
    pub fn new(target: Address, value: U256, call_data: impl Into<Bytes>) -> Self {
        Self {
            target,
            value,
            call_data: call_data.into(),
        }
    }

    /// Creates a new Execution with zero value
    pub fn call(target: Address, call_data: impl Into<Bytes>) -> Self {
        Self::new(target, U256::ZERO, call_data)
    }

    /// Creates an Execution from a `sol!` generated call
    pub fn typed<C: SolCall>(target: Address, call: &C) -> Self {
        Self::call(target, call.abi_encode())
    }

    /// Sets the value
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}

/// Creates an execution from its parts
pub fn create_execution(target: Address, value: U256, call_data: impl Into<Bytes>) -> Execution {
    Execution::new(target, value, call_data)
}

impl From<&Execution> for IERC7579Account::Execution {
    fn from(execution: &Execution) -> Self {
        Self {
            target: execution.target,
            value: execution.value,
            callData: execution.call_data.clone(),
        }
    }
}

/// ERC-7579 execution mode
///
/// The first byte of the mode word is the call type (`0x01` for batch), the
/// second the exec type (`0x01` for try). Whether calldata is single or batch
/// encoded is decided separately by the number of executions, and both must
/// agree for the account to decode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionMode {
    #[default]
    SingleDefault,
    SingleTry,
    BatchDefault,
    BatchTry,
}

impl ExecutionMode {
    /// Returns the 32-byte mode word
    pub const fn as_b256(&self) -> B256 {
        match self {
            ExecutionMode::SingleDefault => SINGLE_DEFAULT_MODE,
            ExecutionMode::SingleTry => SINGLE_TRY_MODE,
            ExecutionMode::BatchDefault => BATCH_DEFAULT_MODE,
            ExecutionMode::BatchTry => BATCH_TRY_MODE,
        }
    }

    /// Parses a mode word
    pub fn from_b256(mode: B256) -> Option<Self> {
        [
            Self::SingleDefault,
            Self::SingleTry,
            Self::BatchDefault,
            Self::BatchTry,
        ]
        .into_iter()
        .find(|candidate| candidate.as_b256() == mode)
    }

    /// Returns the mode matching the encoding chosen for `count` executions
    pub fn for_executions(count: usize, try_mode: bool) -> Self {
        match (count > 1, try_mode) {
            (false, false) => ExecutionMode::SingleDefault,
            (false, true) => ExecutionMode::SingleTry,
            (true, false) => ExecutionMode::BatchDefault,
            (true, true) => ExecutionMode::BatchTry,
        }
    }

    pub const fn is_batch(&self) -> bool {
        matches!(self, ExecutionMode::BatchDefault | ExecutionMode::BatchTry)
    }

    pub const fn is_try(&self) -> bool {
        matches!(self, ExecutionMode::SingleTry | ExecutionMode::BatchTry)
    }
}

impl From<ExecutionMode> for B256 {
    fn from(mode: ExecutionMode) -> Self {
        mode.as_b256()
    }
}

impl TryFrom<B256> for ExecutionMode {
    type Error = &'static str;

    fn try_from(mode: B256) -> Result<Self, Self::Error> {
        ExecutionMode::from_b256(mode).ok_or("Invalid execution mode")
    }
}
