use std::fs;
use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use delegation_rs::{Delegation, Execution, ExecutionMode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Redeem bundle JSON format
///
/// Entry `i` of each list belongs to redemption `i`. `modes` may be omitted,
/// in which case each redemption uses the default mode matching its
/// execution count.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemBundle {
    pub delegations: Vec<Vec<Delegation>>,
    #[serde(default)]
    pub modes: Vec<ExecutionMode>,
    pub executions: Vec<Vec<Execution>>,
}

impl RedeemBundle {
    /// Returns the explicit modes, or one derived mode per execution list
    pub fn modes(&self) -> Vec<ExecutionMode> {
        if !self.modes.is_empty() {
            return self.modes.clone();
        }
        self.executions
            .iter()
            .map(|executions| executions.len())
            .map(|count| ExecutionMode::for_executions(count, false))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let redemptions = self.delegations.len();
        let modes_match = self.modes.is_empty() || self.modes.len() == redemptions;
        if self.executions.len() != redemptions || !modes_match {
            return Err(eyre!(
                "Bundle lists differ in length: {} delegation chains, {} modes, {} execution lists",
                redemptions,
                self.modes.len(),
                self.executions.len()
            ));
        }
        Ok(())
    }
}

/// A delegation chain file holds either one delegation or an array, leaf first
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChainFile {
    Single(Delegation),
    Chain(Vec<Delegation>),
}

/// Loads a redeem bundle file
pub fn load_bundle(path: &Path) -> Result<RedeemBundle> {
    parse_bundle(&read(path)?)
}

/// Parses redeem bundle JSON content
pub fn parse_bundle(content: &str) -> Result<RedeemBundle> {
    let bundle: RedeemBundle = parse_json(content, "bundle")?;
    bundle.validate()?;
    Ok(bundle)
}

/// Loads a single delegation file
pub fn load_delegation(path: &Path) -> Result<Delegation> {
    parse_json(&read(path)?, "delegation")
}

/// Loads a delegation chain file
pub fn load_chain(path: &Path) -> Result<Vec<Delegation>> {
    parse_chain(&read(path)?)
}

/// Parses a delegation chain, accepting a lone delegation as a chain of one
pub fn parse_chain(content: &str) -> Result<Vec<Delegation>> {
    Ok(match parse_json(content, "delegation chain")? {
        ChainFile::Single(delegation) => vec![delegation],
        ChainFile::Chain(chain) => chain,
    })
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(eyre!("File not found: {}", path.display()));
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_json<T: DeserializeOwned>(content: &str, what: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| eyre!("Invalid {} JSON: {}", what, e))
}
