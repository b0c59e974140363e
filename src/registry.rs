//! Name → factory registry (C6): looks a tournament algorithm up by name,
//! constructing it fresh from a shared judge. Mirrors the base crate's
//! explicit-init registration style rather than reaching for a global
//! `inventory`/`ctor` link-time registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::drivers::{Anchor, DoubleElimination, GroupRewardModel, RoundRobin, Swiss};
use crate::drivers::single_elim::SingleElimination;
use crate::error::TournamentError;
use crate::judge::Judge;

type Factory = Box<dyn Fn(Arc<dyn Judge>) -> Box<dyn GroupRewardModel> + Send + Sync>;

/// Maps an algorithm name to a driver factory. Lookups strip everything
/// up to and including the last `/`, so callers can key on a path-like
/// name (`"tournament/round_robin"`) without the registry needing to know
/// about the prefix convention.
pub struct Registry {
    factories: HashMap<&'static str, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under `name`. A second registration of an
    /// already-used name is kept as a no-op and logged — first registration
    /// wins, matching the base registry's last-write-wins-but-warn
    /// behavior inverted for determinism: tests that register a stub under
    /// a production name must not silently clobber it by import order.
    pub fn register(&mut self, name: &'static str, factory: Factory) {
        if self.factories.contains_key(name) {
            log::warn!("registry: {name} already registered, keeping the first registration");
            return;
        }
        self.factories.insert(name, factory);
    }

    /// All five drivers under their canonical names.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("round_robin", Box::new(|judge| Box::new(RoundRobin::new(judge))));
        registry.register("anchor", Box::new(|judge| Box::new(Anchor::new(judge))));
        registry.register("swiss", Box::new(|judge| Box::new(Swiss::new(judge))));
        registry.register(
            "single_elimination",
            Box::new(|judge| Box::new(SingleElimination::new(judge))),
        );
        registry.register(
            "double_elimination",
            Box::new(|judge| Box::new(DoubleElimination::new(judge))),
        );
        registry
    }

    /// Looks up `name`: if it contains `/`, only the segment before the
    /// first `/` is used as the key (so `"round_robin/v2"` resolves the
    /// same as `"round_robin"`).
    pub fn build(
        &self,
        name: &str,
        judge: Arc<dyn Judge>,
    ) -> Result<Box<dyn GroupRewardModel>, TournamentError> {
        let key = name.split('/').next().unwrap_or(name);
        let factory = self.factories.iter().find(|(k, _)| **k == key).map(|(_, f)| f);
        match factory {
            Some(factory) => Ok(factory(judge)),
            None => Err(TournamentError::UnknownModel {
                requested: name.to_string(),
                available: self.factories.keys().map(|k| k.to_string()).collect(),
            }),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
