use alloy::primitives::{Address, Bytes, Selector, B256};
use delegation_rs::{Delegation, DelegationFrameworkVersion, DelegatorEnvironment};
use serde::Serialize;

#[derive(Serialize)]
pub struct SelectorOutput {
    pub signature: String,
    pub selector: Selector,
}

impl SelectorOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("{}", self.selector);
        }
    }
}

#[derive(Serialize)]
pub struct HashOutput {
    pub hash: B256,
    pub delegate: Address,
    pub delegator: Address,
    pub authority: B256,
    pub caveats: usize,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("{}", self.hash);
        }
    }
}

#[derive(Serialize)]
pub struct CreateOutput {
    pub hash: B256,
    pub delegation: Delegation,
}

impl CreateOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Delegation Hash: {}", self.hash);
            let delegation = serde_json::to_string_pretty(&self.delegation).unwrap();
            println!("{}", delegation);
        }
    }
}

/// A transaction to send to the DelegationManager
#[derive(Serialize)]
pub struct CalldataOutput {
    pub to: Address,
    pub data: Bytes,
}

impl CalldataOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("To: {}", self.to);
            println!("Data: {}", self.data);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentOutput {
    pub chain_id: u64,
    pub version: DelegationFrameworkVersion,
    pub environment: DelegatorEnvironment,
}

impl EnvironmentOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
            return;
        }

        let environment = &self.environment;
        let implementations = &environment.implementations;
        let enforcers = &environment.caveat_enforcers;
        println!(
            "Delegation Framework {} on chain {}",
            self.version, self.chain_id
        );
        println!("  DelegationManager: {}", environment.delegation_manager);
        println!("  EntryPoint: {}", environment.entry_point);
        println!("  SimpleFactory: {}", environment.simple_factory);
        println!("  Implementations:");
        println!("    HybridDelegator: {}", implementations.hybrid_delegator);
        println!(
            "    MultiSigDelegator: {}",
            implementations.multi_sig_delegator
        );
        println!(
            "    EIP7702StatelessDelegator: {}",
            implementations.eip7702_stateless_delegator
        );
        println!("  Caveat Enforcers:");
        for (name, address) in [
            ("AllowedCalldata", enforcers.allowed_calldata),
            ("AllowedMethods", enforcers.allowed_methods),
            ("AllowedTargets", enforcers.allowed_targets),
            ("ArgsEqualityCheck", enforcers.args_equality_check),
            ("BlockNumber", enforcers.block_number),
            ("Deployed", enforcers.deployed),
            ("ERC20BalanceChange", enforcers.erc20_balance_change),
            ("ERC20TransferAmount", enforcers.erc20_transfer_amount),
            ("ExactCalldata", enforcers.exact_calldata),
            ("Id", enforcers.id),
            ("LimitedCalls", enforcers.limited_calls),
            (
                "NativeTokenTransferAmount",
                enforcers.native_token_transfer_amount,
            ),
            ("Nonce", enforcers.nonce),
            ("Redeemer", enforcers.redeemer),
            ("Timestamp", enforcers.timestamp),
            ("ValueLte", enforcers.value_lte),
        ] {
            println!("    {}Enforcer: {}", name, address);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainsOutput {
    pub version: DelegationFrameworkVersion,
    pub chain_ids: Vec<u64>,
}

impl ChainsOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Delegation Framework {} chains:", self.version);
            for chain_id in &self.chain_ids {
                println!("  {}", chain_id);
            }
        }
    }
}
