use alloy::primitives::{hex, Address, Bytes, FixedBytes, I256, U256};
use alloy_dyn_abi::{DynSolType, DynSolValue};
use color_eyre::eyre::{eyre, Result};
use delegation_rs::hex::{function_selector, normalize_signature};
use delegation_rs::Execution;

/// Parses a function signature and encodes it with arguments
/// e.g., "transfer(address,uint256)" with args ["0x...", "1000"]
pub fn encode_function_call(sig: &str, args: &[String]) -> Result<Bytes> {
    let sig = normalize_signature(sig)?;
    let selector = function_selector(&sig)?;
    let param_types = parse_param_types(&sig)?;

    if param_types.len() != args.len() {
        return Err(eyre!(
            "Expected {} arguments, got {}",
            param_types.len(),
            args.len()
        ));
    }

    let values = parse_args(&param_types, args)?;

    let mut calldata = selector.to_vec();
    calldata.extend(encode_values(&values));

    Ok(Bytes::from(calldata))
}

/// Extracts parameter types from a normalized signature
/// e.g., "transfer(address,uint256)" -> ["address", "uint256"]
fn parse_param_types(sig: &str) -> Result<Vec<String>> {
    let open_paren = sig
        .find('(')
        .ok_or_else(|| eyre!("Invalid signature: missing '('"))?;
    let close_paren = sig
        .rfind(')')
        .ok_or_else(|| eyre!("Invalid signature: missing ')'"))?;

    if close_paren <= open_paren {
        return Err(eyre!("Invalid signature format"));
    }

    Ok(split_params(&sig[open_paren + 1..close_paren]))
}

/// Splits a comma separated list, ignoring commas nested in parentheses or brackets
pub fn split_params(params_str: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for c in params_str.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                let param = current.trim().to_string();
                if !param.is_empty() {
                    params.push(param);
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let param = current.trim().to_string();
    if !param.is_empty() {
        params.push(param);
    }

    params
}

fn parse_args(types: &[String], args: &[String]) -> Result<Vec<DynSolValue>> {
    types
        .iter()
        .zip(args.iter())
        .map(|(ty, arg)| parse_arg(ty, arg))
        .collect()
}

fn parse_arg(ty: &str, arg: &str) -> Result<DynSolValue> {
    match ty.parse::<DynSolType>() {
        Ok(sol_type) => parse_value(&sol_type, arg),
        Err(e) => Err(eyre!("Invalid type '{}': {}", ty, e)),
    }
}

/// Parses a value according to its type
fn parse_value(sol_type: &DynSolType, arg: &str) -> Result<DynSolValue> {
    match sol_type {
        DynSolType::Address => Ok(DynSolValue::Address(parse_address(arg)?)),
        DynSolType::Bool => {
            let b = match arg.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(eyre!("Invalid bool value: {}", arg)),
            };
            Ok(DynSolValue::Bool(b))
        }
        DynSolType::Int(bits) => Ok(DynSolValue::Int(parse_int(arg, *bits)?, *bits)),
        DynSolType::Uint(bits) => Ok(DynSolValue::Uint(parse_uint(arg)?, *bits)),
        DynSolType::Bytes => Ok(DynSolValue::Bytes(parse_bytes(arg)?.to_vec())),
        DynSolType::FixedBytes(len) => {
            let bytes = parse_bytes(arg)?;
            if bytes.len() != *len {
                return Err(eyre!("Expected {} bytes, got {}", len, bytes.len()));
            }
            // Right-padded to a full word
            let mut padded = [0u8; 32];
            padded[..*len].copy_from_slice(&bytes);
            Ok(DynSolValue::FixedBytes(FixedBytes::from(padded), *len))
        }
        DynSolType::String => Ok(DynSolValue::String(arg.to_string())),
        DynSolType::Array(inner) => {
            let values = parse_list(arg, '[', ']')
                .iter()
                .map(|el| parse_value(inner, el))
                .collect::<Result<Vec<_>>>()?;
            Ok(DynSolValue::Array(values))
        }
        DynSolType::FixedArray(inner, len) => {
            let elements = parse_list(arg, '[', ']');
            if elements.len() != *len {
                return Err(eyre!("Expected {} elements, got {}", len, elements.len()));
            }
            let values = elements
                .iter()
                .map(|el| parse_value(inner, el))
                .collect::<Result<Vec<_>>>()?;
            Ok(DynSolValue::FixedArray(values))
        }
        DynSolType::Tuple(types) => {
            let arg = arg.trim();
            if !arg.starts_with('(') || !arg.ends_with(')') {
                return Err(eyre!("Tuple must be wrapped in parentheses: {}", arg));
            }
            let elements = parse_list(arg, '(', ')');
            if elements.len() != types.len() {
                return Err(eyre!(
                    "Expected {} tuple elements, got {}",
                    types.len(),
                    elements.len()
                ));
            }
            let values = types
                .iter()
                .zip(elements.iter())
                .map(|(ty, el)| parse_value(ty, el))
                .collect::<Result<Vec<_>>>()?;
            Ok(DynSolValue::Tuple(values))
        }
        _ => Err(eyre!("Unsupported type: {:?}", sol_type)),
    }
}

pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();
    trimmed
        .parse()
        .map_err(|e| eyre!("Invalid address '{}': {}", s, e))
}

/// Parses a uint value (supports decimal and hex)
pub fn parse_uint(s: &str) -> Result<U256> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => {
            U256::from_str_radix(digits, 16).map_err(|e| eyre!("Invalid hex uint: {}", e))
        }
        None => s.parse::<U256>().map_err(|e| eyre!("Invalid uint: {}", e)),
    }
}

fn parse_int(s: &str, bits: usize) -> Result<I256> {
    let s = s.trim();
    let (negative, abs_str) = match s.strip_prefix('-') {
        Some(abs) => (true, abs),
        None => (false, s),
    };

    let abs_value = parse_uint(abs_str)?;
    let value = I256::try_from(abs_value)
        .map_err(|e| eyre!("Int conversion error: {}", e))?;

    if negative {
        let max_neg = U256::from(1u64) << (bits - 1);
        if abs_value > max_neg {
            return Err(eyre!("Value out of range for int{}", bits));
        }
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Parses a hex string, with or without `0x`
pub fn parse_bytes(s: &str) -> Result<Bytes> {
    hex::decode(s.trim())
        .map(Bytes::from)
        .map_err(|e| eyre!("Invalid hex bytes: {}", e))
}

/// Strips optional delimiters and splits the elements
fn parse_list(s: &str, open: char, close: char) -> Vec<String> {
    let s = s.trim();
    let s = s.strip_prefix(open).unwrap_or(s);
    let s = s.strip_suffix(close).unwrap_or(s);
    split_params(s)
}

fn encode_values(values: &[DynSolValue]) -> Vec<u8> {
    if values.is_empty() {
        return Vec::new();
    }
    DynSolValue::Tuple(values.to_vec()).abi_encode_params()
}

/// Parses a call specification like "0xAddr:sig(types):arg1,arg2"
pub fn parse_call_spec(spec: &str) -> Result<Execution> {
    let parts: Vec<&str> = spec.splitn(3, ':').collect();
    if parts.len() < 2 {
        return Err(eyre!(
            "Invalid call spec format. Expected '0xAddr:sig(types)' or '0xAddr:sig(types):args'"
        ));
    }

    let target = parse_address(parts[0])?;
    let args = match parts.get(2) {
        Some(args) if !args.is_empty() => split_params(args),
        _ => Vec::new(),
    };

    let data = encode_function_call(parts[1], &args)?;
    Ok(Execution::call(target, data))
}
