use color_eyre::eyre::Result;
use delegation_rs::{encode_disable_delegation, encode_enable_delegation, get_delegator_environment};
use tracing::debug;

use crate::bundle::load_delegation;
use crate::cli::DisableArgs;
use crate::output::CalldataOutput;

pub fn run(args: DisableArgs, json: bool) -> Result<()> {
    let environment = get_delegator_environment(args.network.chain_id, args.network.version)?;
    let delegation = load_delegation(&args.file)?;

    debug!(enable = args.enable, delegator = %delegation.delegator, "encoding delegation toggle");

    let data = if args.enable {
        encode_enable_delegation(&delegation)?
    } else {
        encode_disable_delegation(&delegation)?
    };

    let output = CalldataOutput {
        to: environment.delegation_manager,
        data,
    };

    output.print(json);

    Ok(())
}
