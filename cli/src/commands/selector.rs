use color_eyre::eyre::Result;
use delegation_rs::hex::{function_selector, normalize_signature};

use crate::cli::SelectorArgs;
use crate::output::SelectorOutput;

pub fn run(args: SelectorArgs, json: bool) -> Result<()> {
    let output = SelectorOutput {
        signature: normalize_signature(&args.sig)?,
        selector: function_selector(&args.sig)?,
    };

    output.print(json);

    Ok(())
}
