//! Value types for delegations, caveats and executions

mod caveat;
mod delegation;
mod execution;

pub use caveat::{create_caveat, Caveat};
pub use delegation::{to_delegation_struct, Delegation, DelegationStruct};
pub use execution::{
    create_execution, Execution, ExecutionMode, BATCH_DEFAULT_MODE, BATCH_TRY_MODE,
    SINGLE_DEFAULT_MODE, SINGLE_TRY_MODE,
};
