//! ERC-7579 execution calldata encoding
//!
//! A single execution is packed:
//! - target: 20 bytes
//! - value: 32 bytes
//! - callData: variable length, no length prefix
//!
//! Two or more executions use the standard ABI encoding of
//! `(address,uint256,bytes)[]`. The account decodes according to the call
//! type of the execution mode, so a batch of one is not the same bytes as a
//! single execution.

use alloy::primitives::Bytes;
use alloy::sol_types::{SolCall, SolValue};
use tracing::debug;

use crate::contracts::IERC7579Account;
use crate::error::{Error, Result};
use crate::types::{Execution, ExecutionMode};

/// Encodes a single execution in packed format
///
/// Format: target (20 bytes) | value (32 bytes) | callData
pub fn encode_single_execution(execution: &Execution) -> Bytes {
    let mut encoded = Vec::with_capacity(52 + execution.call_data.len());

    // Target address (20 bytes)
    encoded.extend_from_slice(execution.target.as_slice());

    // Value (32 bytes, big-endian)
    encoded.extend_from_slice(&execution.value.to_be_bytes::<32>());

    // Calldata
    encoded.extend_from_slice(&execution.call_data);

    Bytes::from(encoded)
}

/// Encodes executions as `abi.encode(Execution[])`
pub fn encode_batch_execution(executions: &[Execution]) -> Bytes {
    let executions: Vec<IERC7579Account::Execution> = executions.iter().map(Into::into).collect();
    Bytes::from(executions.abi_encode())
}

/// Encodes executions using the single layout for one and the batch layout
/// for more
pub fn encode_execution_calldata(executions: &[Execution]) -> Result<Bytes> {
    match executions {
        [] => Err(Error::EmptyExecutions),
        [execution] => Ok(encode_single_execution(execution)),
        _ => {
            debug!(count = executions.len(), "encoding batch execution");
            Ok(encode_batch_execution(executions))
        }
    }
}

/// Encodes one calldata per execution list
pub fn encode_execution_calldatas(executions_batch: &[Vec<Execution>]) -> Result<Vec<Bytes>> {
    if executions_batch.is_empty() {
        return Err(Error::EmptyExecutionsBatch);
    }

    executions_batch
        .iter()
        .map(|executions| encode_execution_calldata(executions))
        .collect()
}

/// Encodes a direct `execute(bytes32,bytes)` call on an ERC-7579 account,
/// picking the mode that matches the calldata layout
pub fn encode_execute(executions: &[Execution], try_mode: bool) -> Result<Bytes> {
    let mode = ExecutionMode::for_executions(executions.len(), try_mode);
    let call = IERC7579Account::executeCall {
        mode: mode.as_b256(),
        executionCalldata: encode_execution_calldata(executions)?,
    };

    Ok(Bytes::from(call.abi_encode()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Address, U256};

    fn execution(byte: u8) -> Execution {
        Execution::new(Address::repeat_byte(byte), U256::from(byte), vec![byte; 4])
    }

    #[test]
    fn test_encode_single_execution() {
        let execution = Execution::new(
            address!("0x1234567890123456789012345678901234567890"),
            U256::from(1000),
            vec![0xa9, 0x05, 0x9c, 0xbb],
        );

        let encoded = encode_single_execution(&execution);

        // Check address (bytes 0-19)
        assert_eq!(
            &encoded[0..20],
            address!("0x1234567890123456789012345678901234567890").as_slice()
        );

        // Check value (bytes 20-51)
        let value_bytes = &encoded[20..52];
        assert_eq!(value_bytes[31], 0xe8); // 1000 = 0x3e8
        assert_eq!(value_bytes[30], 0x03);

        // Check data (bytes 52+), no length prefix
        assert_eq!(&encoded[52..], &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_encode_single_empty_data() {
        let encoded = encode_single_execution(&Execution::default());
        assert_eq!(encoded.len(), 52);
        assert!(encoded.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encode_batch_execution_layout() {
        let executions = vec![execution(0x01), execution(0x02)];
        let encoded = encode_batch_execution(&executions);

        // Offset to the array (32 bytes)
        assert_eq!(U256::from_be_slice(&encoded[0..32]), U256::from(32));
        // Array length (32 bytes)
        assert_eq!(U256::from_be_slice(&encoded[32..64]), U256::from(2));

        let decoded = <Vec<IERC7579Account::Execution>>::abi_decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].target, Address::repeat_byte(0x02));
        assert_eq!(decoded[1].callData, Bytes::from(vec![0x02; 4]));
    }

    #[test]
    fn test_calldata_dispatch_single() {
        let executions = vec![execution(0x01)];
        assert_eq!(
            encode_execution_calldata(&executions).unwrap(),
            encode_single_execution(&executions[0])
        );
    }

    #[test]
    fn test_calldata_dispatch_batch() {
        let executions = vec![execution(0x01), execution(0x02)];
        assert_eq!(
            encode_execution_calldata(&executions).unwrap(),
            encode_batch_execution(&executions)
        );
    }

    #[test]
    fn test_batch_of_one_differs_from_single() {
        let executions = vec![execution(0x01)];
        assert_ne!(
            encode_batch_execution(&executions),
            encode_single_execution(&executions[0])
        );
    }

    #[test]
    fn test_calldata_empty() {
        let err = encode_execution_calldata(&[]).unwrap_err();
        assert_eq!(err.to_string(), "executions is empty");
    }

    #[test]
    fn test_calldatas() {
        let batches = vec![
            vec![execution(0x01)],
            vec![execution(0x02), execution(0x03)],
        ];
        let encoded = encode_execution_calldatas(&batches).unwrap();

        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded[0], encode_single_execution(&batches[0][0]));
        assert_eq!(encoded[1], encode_batch_execution(&batches[1]));
    }

    #[test]
    fn test_calldatas_empty() {
        let err = encode_execution_calldatas(&[]).unwrap_err();
        assert_eq!(err.to_string(), "executionsBatch is empty");

        let err = encode_execution_calldatas(&[vec![execution(0x01)], vec![]]).unwrap_err();
        assert!(matches!(err, Error::EmptyExecutions));
    }

    #[test]
    fn test_encode_execute() {
        let encoded = encode_execute(&[execution(0x01), execution(0x02)], true).unwrap();
        assert_eq!(&encoded[..4], &[0xe9, 0xae, 0x5c, 0x53]);

        let call = IERC7579Account::executeCall::abi_decode(&encoded).unwrap();
        assert_eq!(call.mode, ExecutionMode::BatchTry.as_b256());

        assert!(encode_execute(&[], false).is_err());
    }
}
