use alloy::primitives::B256;
use color_eyre::eyre::{eyre, Result};
use delegation_rs::{
    create_delegation, create_open_delegation, delegation_hash_offchain, get_delegator_environment,
    CaveatBuilder, CaveatBuilderConfig, CreateDelegationOptions, CreateOpenDelegationOptions,
    Delegation, Parent, RandomSalt,
};
use std::path::Path;

use crate::bundle::load_delegation;
use crate::caveat_parser::parse_caveat_spec;
use crate::cli::CreateArgs;
use crate::output::CreateOutput;
use crate::sig_parser::parse_address;

pub fn run(args: CreateArgs, json: bool) -> Result<()> {
    let delegation = build_delegation(&args)?;

    let output = CreateOutput {
        hash: delegation_hash_offchain(&delegation)?,
        delegation,
    };

    output.print(json);

    Ok(())
}

/// A `--parent` value, owned so that `Parent::Delegation` can borrow it
#[derive(Debug)]
enum ParentArg {
    Hash(B256),
    Delegation(Delegation),
}

impl ParentArg {
    fn as_parent(&self) -> Parent<'_> {
        match self {
            ParentArg::Hash(hash) => Parent::Hash(*hash),
            ParentArg::Delegation(delegation) => Parent::Delegation(delegation),
        }
    }
}

/// Reads a 32-byte hash, or else a path to a delegation JSON file
fn parse_parent(value: &str) -> Result<ParentArg> {
    match value.parse::<B256>() {
        Ok(hash) => Ok(ParentArg::Hash(hash)),
        Err(_) => load_delegation(Path::new(value)).map(ParentArg::Delegation),
    }
}

fn build_caveats(args: &CreateArgs) -> Result<CaveatBuilder> {
    let environment = get_delegator_environment(args.network.chain_id, args.network.version)?;
    let config = CaveatBuilderConfig {
        allow_empty_caveats: args.allow_empty,
        allow_duplicate_kinds: args.allow_duplicates,
    };
    let specs = args
        .caveats
        .iter()
        .map(|spec| parse_caveat_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = CaveatBuilder::new(environment).with_config(config);
    for spec in specs {
        builder = spec.apply(builder);
    }
    Ok(builder)
}

/// Builds the unsigned delegation described by the arguments
fn build_delegation(args: &CreateArgs) -> Result<Delegation> {
    let caveats = build_caveats(args)?;
    let from = parse_address(&args.from)?;
    let parent = args.parent.as_deref().map(parse_parent).transpose()?;
    let parent_delegation = parent.as_ref().map(ParentArg::as_parent);

    if args.open {
        let options = CreateOpenDelegationOptions {
            from,
            caveats: caveats.into(),
            parent_delegation,
        };
        return Ok(create_open_delegation(options)?);
    }

    let to = args
        .to
        .as_deref()
        .ok_or_else(|| eyre!("--to is required unless --open is set"))
        .and_then(parse_address)?;
    let options = CreateDelegationOptions {
        to,
        from,
        caveats: caveats.into(),
        parent_delegation,
    };

    let delegation = match &args.salt {
        Some(salt) => create_delegation(options, &mut || salt.clone())?,
        None => create_delegation(options, &mut RandomSalt)?,
    };
    Ok(delegation)
}
