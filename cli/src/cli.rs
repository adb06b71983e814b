use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use delegation_rs::DelegationFrameworkVersion;

#[derive(Parser)]
#[command(name = "delegation")]
#[command(about = "Offline tooling for ERC-7710 delegations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the 4-byte selector of a function signature
    Selector(SelectorArgs),

    /// Compute the off-chain hash of a delegation
    Hash(HashArgs),

    /// Create a new unsigned delegation
    Create(CreateArgs),

    /// Encode a disableDelegation (or enableDelegation) call
    Disable(DisableArgs),

    /// Encode a redeemDelegations call
    Redeem(RedeemArgs),

    /// Display the framework contract addresses of a chain
    Environment(EnvironmentArgs),
}

/// Selects a framework deployment
#[derive(Args, Clone)]
pub struct NetworkArgs {
    /// Chain ID of the deployment
    #[arg(long, env = "DELEGATION_CHAIN_ID", default_value = "1")]
    pub chain_id: u64,

    /// Delegation framework version
    #[arg(
        long = "framework-version",
        env = "DELEGATION_FRAMEWORK_VERSION",
        default_value = "1.3.0"
    )]
    pub version: DelegationFrameworkVersion,
}

#[derive(Parser, Clone)]
pub struct SelectorArgs {
    /// Function signature (e.g., "transfer(address,uint256)")
    #[arg(value_name = "SIG")]
    pub sig: String,
}

#[derive(Parser, Clone)]
pub struct HashArgs {
    /// Path to a delegation JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Clone)]
pub struct CreateArgs {
    /// Delegator address
    #[arg(long)]
    pub from: String,

    /// Delegate address (omit with --open)
    #[arg(long, required_unless_present = "open", conflicts_with = "open")]
    pub to: Option<String>,

    /// Parent delegation, as a 32-byte hash or a path to a delegation JSON file
    #[arg(long)]
    pub parent: Option<String>,

    /// Create an open delegation any account may redeem
    #[arg(long)]
    pub open: bool,

    /// Caveat specification (format: "kind:arg1,arg2" or "0xEnforcer:0xTerms")
    #[arg(long = "caveat", value_name = "CAVEAT")]
    pub caveats: Vec<String>,

    /// Fixed salt instead of a random one
    #[arg(long, conflicts_with = "open")]
    pub salt: Option<String>,

    /// Allow a delegation without caveats
    #[arg(long)]
    pub allow_empty: bool,

    /// Allow the same caveat kind more than once
    #[arg(long)]
    pub allow_duplicates: bool,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Parser, Clone)]
pub struct DisableArgs {
    /// Path to a delegation JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Encode enableDelegation instead
    #[arg(long)]
    pub enable: bool,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Parser, Clone)]
pub struct RedeemArgs {
    /// Path to a redeem bundle JSON file
    #[arg(value_name = "BUNDLE", required_unless_present = "delegation")]
    pub bundle: Option<PathBuf>,

    /// Path to a delegation chain JSON file, leaf first (used with --call)
    #[arg(long, conflicts_with = "bundle", requires = "calls")]
    pub delegation: Option<PathBuf>,

    /// Call specification (format: "0xAddr:sig(types):arg1,arg2")
    #[arg(long = "call", value_name = "CALL")]
    pub calls: Vec<String>,

    /// Use try mode so failing executions do not revert
    #[arg(long = "try")]
    pub try_mode: bool,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Parser, Clone)]
pub struct EnvironmentArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// List the chains carrying the selected version instead
    #[arg(long)]
    pub list: bool,
}
