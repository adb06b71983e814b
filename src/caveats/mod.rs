//! Fluent assembly of caveat lists

mod kinds;

pub use kinds::CaveatKind;

use std::collections::HashSet;

use alloy::primitives::U256;
use tracing::trace;

use crate::environment::{CaveatEnforcers, DelegatorEnvironment};
use crate::error::{CaveatError, Result};
use crate::types::Caveat;

/// Validation switches for [`CaveatBuilder::build`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaveatBuilderConfig {
    /// Permit building an empty caveat list
    pub allow_empty_caveats: bool,
    /// Permit adding the same [`CaveatKind`] more than once
    pub allow_duplicate_kinds: bool,
}

#[derive(Debug, Clone)]
enum Entry {
    Kind(CaveatKind),
    Raw(Caveat),
}

/// Accumulates caveats against one deployment's enforcers
///
/// Arguments are validated in [`build`](Self::build), so a chain of `add`
/// calls never fails midway.
#[derive(Debug, Clone)]
pub struct CaveatBuilder {
    enforcers: CaveatEnforcers,
    config: CaveatBuilderConfig,
    entries: Vec<Entry>,
}

impl CaveatBuilder {
    pub fn new(environment: &DelegatorEnvironment) -> Self {
        Self {
            enforcers: environment.caveat_enforcers.clone(),
            config: CaveatBuilderConfig::default(),
            entries: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: CaveatBuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a caveat of a named kind
    pub fn add(mut self, kind: CaveatKind) -> Self {
        self.entries.push(Entry::Kind(kind));
        self
    }

    /// Adds a caveat with explicit enforcer and terms
    ///
    /// Raw caveats are exempt from duplicate kind checks.
    pub fn add_caveat(mut self, caveat: Caveat) -> Self {
        self.entries.push(Entry::Raw(caveat));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates every entry and returns the caveats in insertion order
    pub fn build(self) -> Result<Vec<Caveat>> {
        let mut kinds = HashSet::new();
        let mut ids: HashSet<U256> = HashSet::new();
        let mut caveats = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            match entry {
                Entry::Raw(caveat) => caveats.push(caveat),
                Entry::Kind(kind) => {
                    if let CaveatKind::Id { id } = &kind {
                        if !ids.insert(*id) {
                            return Err(CaveatError::DuplicateId(id.to_string()).into());
                        }
                    }
                    let name = kind.name();
                    if !kinds.insert(name) && !self.config.allow_duplicate_kinds {
                        return Err(CaveatError::DuplicateKind(name).into());
                    }
                    trace!(kind = name, "building caveat");
                    caveats.push(kind.into_caveat(&self.enforcers)?);
                }
            }
        }

        if caveats.is_empty() && !self.config.allow_empty_caveats {
            return Err(CaveatError::Empty.into());
        }

        Ok(caveats)
    }
}

/// Caveats given either ready-made or as a builder still to be built
#[derive(Debug, Clone)]
pub enum CaveatsInput {
    Built(Vec<Caveat>),
    Builder(CaveatBuilder),
}

impl Default for CaveatsInput {
    fn default() -> Self {
        CaveatsInput::Built(Vec::new())
    }
}

impl From<Vec<Caveat>> for CaveatsInput {
    fn from(caveats: Vec<Caveat>) -> Self {
        CaveatsInput::Built(caveats)
    }
}

impl From<CaveatBuilder> for CaveatsInput {
    fn from(builder: CaveatBuilder) -> Self {
        CaveatsInput::Builder(builder)
    }
}

/// Returns the caveat list, building it first if given a builder
pub fn resolve_caveats(input: impl Into<CaveatsInput>) -> Result<Vec<Caveat>> {
    match input.into() {
        CaveatsInput::Built(caveats) => Ok(caveats),
        CaveatsInput::Builder(builder) => builder.build(),
    }
}
