use color_eyre::eyre::{eyre, Result};
use delegation_rs::{encode_redeem_delegations, get_delegator_environment, ExecutionMode};
use tracing::debug;

use crate::bundle::{load_bundle, load_chain, RedeemBundle};
use crate::cli::RedeemArgs;
use crate::output::CalldataOutput;
use crate::sig_parser::parse_call_spec;

pub fn run(args: RedeemArgs, json: bool) -> Result<()> {
    let environment = get_delegator_environment(args.network.chain_id, args.network.version)?;
    let bundle = build_bundle(&args)?;
    let modes = bundle.modes();

    let redemptions = bundle.delegations.len();
    debug!(redemptions, "encoding redemption");

    let data = encode_redeem_delegations(&bundle.delegations, &modes, &bundle.executions)?;

    let output = CalldataOutput {
        to: environment.delegation_manager,
        data,
    };

    output.print(json);

    Ok(())
}

/// Reads the bundle file, or assembles a single redemption from a chain file
/// and call specs
fn build_bundle(args: &RedeemArgs) -> Result<RedeemBundle> {
    if let Some(path) = &args.bundle {
        return load_bundle(path);
    }

    let path = args
        .delegation
        .as_ref()
        .ok_or_else(|| eyre!("Either BUNDLE or --delegation is required"))?;
    let executions = args
        .calls
        .iter()
        .map(|spec| parse_call_spec(spec))
        .collect::<Result<Vec<_>>>()?;
    if executions.is_empty() {
        return Err(eyre!("No calls specified"));
    }

    let mode = ExecutionMode::for_executions(executions.len(), args.try_mode);
    Ok(RedeemBundle {
        delegations: vec![load_chain(path)?],
        modes: vec![mode],
        executions: vec![executions],
    })
}
