use color_eyre::eyre::Result;
use delegation_rs::delegation_hash_offchain;

use crate::bundle::load_delegation;
use crate::cli::HashArgs;
use crate::output::HashOutput;

pub fn run(args: HashArgs, json: bool) -> Result<()> {
    let delegation = load_delegation(&args.file)?;

    let output = HashOutput {
        hash: delegation_hash_offchain(&delegation)?,
        delegate: delegation.delegate,
        delegator: delegation.delegator,
        authority: delegation.authority,
        caveats: delegation.caveats.len(),
    };

    output.print(json);

    Ok(())
}
