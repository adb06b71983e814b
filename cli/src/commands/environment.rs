use color_eyre::eyre::Result;
use delegation_rs::{get_delegator_environment, ContractRegistry};

use crate::cli::EnvironmentArgs;
use crate::output::{ChainsOutput, EnvironmentOutput};

pub fn run(args: EnvironmentArgs, json: bool) -> Result<()> {
    let network = args.network;

    if args.list {
        let output = ChainsOutput {
            version: network.version,
            chain_ids: ContractRegistry::builtin().chain_ids(network.version),
        };
        output.print(json);
        return Ok(());
    }

    let environment = get_delegator_environment(network.chain_id, network.version)?;
    let output = EnvironmentOutput {
        chain_id: network.chain_id,
        version: network.version,
        environment: environment.clone(),
    };

    output.print(json);

    Ok(())
}
