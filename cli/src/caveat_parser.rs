use alloy::primitives::{Address, B256};
use color_eyre::eyre::{eyre, Result};
use delegation_rs::{Caveat, CaveatBuilder, CaveatKind};

use crate::sig_parser::{parse_address, parse_bytes, parse_uint, split_params};

/// A parsed `--caveat` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaveatSpec {
    Kind(CaveatKind),
    Raw(Caveat),
}

impl CaveatSpec {
    /// Appends this caveat to `builder`
    pub fn apply(self, builder: CaveatBuilder) -> CaveatBuilder {
        match self {
            CaveatSpec::Kind(kind) => builder.add(kind),
            CaveatSpec::Raw(caveat) => builder.add_caveat(caveat),
        }
    }
}

/// Parses a caveat specification
///
/// Named kinds use "kind:arg1,arg2", e.g. "allowedTargets:0xA,0xB" or
/// "limitedCalls:3". A caveat with explicit enforcer uses
/// "0xEnforcer:0xTerms" with an optional ":0xArgs" suffix.
pub fn parse_caveat_spec(spec: &str) -> Result<CaveatSpec> {
    let Some((head, rest)) = spec.split_once(':') else {
        return Err(eyre!(
            "Invalid caveat spec '{}'. Expected 'kind:args' or '0xEnforcer:0xTerms'",
            spec
        ));
    };

    if head.starts_with("0x") {
        let (terms, args) = rest.split_once(':').unwrap_or((rest, ""));
        let enforcer = parse_address(head)?;
        let caveat = Caveat::new(enforcer, parse_bytes(terms)?).with_args(parse_bytes(args)?);
        return Ok(CaveatSpec::Raw(caveat));
    }

    let args = split_params(rest);
    let arity = |expected: usize| -> Result<()> {
        let found = args.len();
        if found != expected {
            return Err(eyre!(
                "Caveat '{}' expects {} arguments, got {}",
                head, expected, found
            ));
        }
        Ok(())
    };

    let kind = match head {
        "allowedMethods" => CaveatKind::AllowedMethods {
            selectors: args.clone(),
        },
        "allowedTargets" => CaveatKind::AllowedTargets {
            targets: parse_addresses(&args)?,
        },
        "redeemer" => CaveatKind::Redeemer {
            redeemers: parse_addresses(&args)?,
        },
        "allowedCalldata" => {
            arity(2)?;
            let start_index: usize = args[0]
                .parse()
                .map_err(|e| eyre!("Invalid start index: {}", e))?;
            CaveatKind::AllowedCalldata {
                start_index,
                value: parse_bytes(&args[1])?,
            }
        }
        "valueLte" => {
            arity(1)?;
            CaveatKind::ValueLte {
                max_value: parse_uint(&args[0])?,
            }
        }
        "limitedCalls" => {
            arity(1)?;
            let limit: u64 = args[0].parse().map_err(|e| eyre!("Invalid limit: {}", e))?;
            CaveatKind::LimitedCalls { limit }
        }
        "timestamp" | "blockNumber" => {
            arity(2)?;
            let after_threshold = parse_threshold(&args[0])?;
            let before_threshold = parse_threshold(&args[1])?;
            if head == "timestamp" {
                CaveatKind::Timestamp {
                    after_threshold,
                    before_threshold,
                }
            } else {
                CaveatKind::BlockNumber {
                    after_threshold,
                    before_threshold,
                }
            }
        }
        "nonce" => {
            arity(1)?;
            CaveatKind::Nonce {
                nonce: parse_uint(&args[0])?,
            }
        }
        "id" => {
            arity(1)?;
            CaveatKind::Id {
                id: parse_uint(&args[0])?,
            }
        }
        "nativeTokenTransferAmount" => {
            arity(1)?;
            CaveatKind::NativeTokenTransferAmount {
                max_amount: parse_uint(&args[0])?,
            }
        }
        "erc20TransferAmount" => {
            arity(2)?;
            CaveatKind::Erc20TransferAmount {
                token: parse_address(&args[0])?,
                max_amount: parse_uint(&args[1])?,
            }
        }
        "exactCalldata" => {
            arity(1)?;
            CaveatKind::ExactCalldata {
                call_data: parse_bytes(&args[0])?,
            }
        }
        "argsEqualityCheck" => {
            arity(1)?;
            CaveatKind::ArgsEqualityCheck {
                args: parse_bytes(&args[0])?,
            }
        }
        "deployed" => {
            arity(3)?;
            CaveatKind::Deployed {
                contract_address: parse_address(&args[0])?,
                salt: parse_uint(&args[1]).map(B256::from)?,
                bytecode: parse_bytes(&args[2])?,
            }
        }
        other => return Err(eyre!("Unknown caveat kind: {}", other)),
    };

    Ok(CaveatSpec::Kind(kind))
}

fn parse_addresses(args: &[String]) -> Result<Vec<Address>> {
    args.iter().map(|a| parse_address(a)).collect()
}

fn parse_threshold(s: &str) -> Result<u128> {
    let value = parse_uint(s)?;
    u128::try_from(value).map_err(|_| eyre!("Threshold {} does not fit in 16 bytes", s))
}
