//! Caveat type

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::contracts::IDelegationManager;

/// A condition attached to a delegation, checked on-chain by `enforcer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caveat {
    /// Enforcer contract address
    pub enforcer: Address,
    /// Terms fixed by the delegator; part of the delegation hash
    pub terms: Bytes,
    /// Arguments supplied by the redeemer; not hashed
    #[serde(default)]
    pub args: Bytes,
}

impl Caveat {
    /// Creates a caveat with empty args
    pub fn new(enforcer: Address, terms: impl Into<Bytes>) -> Self {
        Self {
            enforcer,
            terms: terms.into(),
            args: Bytes::new(),
        }
    }

    /// Sets the redeemer args
    pub fn with_args(mut self, args: impl Into<Bytes>) -> Self {
        self.args = args.into();
        self
    }
}

/// Creates a caveat from its parts
pub fn create_caveat(enforcer: Address, terms: impl Into<Bytes>, args: impl Into<Bytes>) -> Caveat {
    Caveat {
        enforcer,
        terms: terms.into(),
        args: args.into(),
    }
}

impl From<&Caveat> for IDelegationManager::Caveat {
    fn from(caveat: &Caveat) -> Self {
        Self {
            enforcer: caveat.enforcer,
            terms: caveat.terms.clone(),
            args: caveat.args.clone(),
        }
    }
}
