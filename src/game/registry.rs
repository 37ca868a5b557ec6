//! Strategy registry
//!
//! Maps strategy names to constructors. The built-in strategies are
//! registered explicitly by `with_builtin`; callers may register more.
//! Lookup is case-insensitive.

use crate::game::{FirstStrategy, HumanStrategy, RandomStrategy, ScriptedStrategy, Strategy};
use crate::{Result, TideError};
use std::collections::BTreeMap;

/// Options handed to a strategy constructor
#[derive(Debug, Clone, Default)]
pub struct StrategyOptions {
    /// Seed for strategies that make random choices
    pub seed: Option<u64>,
    /// Script for the scripted strategy
    pub script: Option<String>,
}

type Factory = Box<dyn Fn(&StrategyOptions) -> Result<Box<dyn Strategy>> + Send + Sync>;

struct Entry {
    description: String,
    factory: Factory,
}

/// Name to constructor mapping for strategies
#[derive(Default)]
pub struct StrategyRegistry {
    entries: BTreeMap<String, Entry>,
}

impl StrategyRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the strategies shipped with the engine
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let builtin: [(&str, &str, Factory); 4] = [
            (
                "random",
                "uniformly random placement and move",
                Box::new(|opts: &StrategyOptions| {
                    Ok(Box::new(match opts.seed {
                        Some(seed) => RandomStrategy::with_seed(seed),
                        None => RandomStrategy::new(),
                    }) as Box<dyn Strategy>)
                }),
            ),
            (
                "first",
                "always the first entry cell and the first forced move",
                Box::new(|_: &StrategyOptions| Ok(Box::new(FirstStrategy::new()) as Box<dyn Strategy>)),
            ),
            (
                "human",
                "prompts on stdin",
                Box::new(|_: &StrategyOptions| Ok(Box::new(HumanStrategy::new()) as Box<dyn Strategy>)),
            ),
            (
                "scripted",
                "follows a fixed script of placements and moves",
                Box::new(|opts: &StrategyOptions| {
                    let script = opts.script.as_deref().unwrap_or_default();
                    Ok(Box::new(ScriptedStrategy::from_script(script)?) as Box<dyn Strategy>)
                }),
            ),
        ];
        for (name, description, factory) in builtin {
            registry.entries.insert(
                name.to_string(),
                Entry {
                    description: description.to_string(),
                    factory,
                },
            );
        }
        registry
    }

    /// Add a strategy constructor under `name`. Names must be unique.
    pub fn register<F>(&mut self, name: &str, description: &str, factory: F) -> Result<()>
    where
        F: Fn(&StrategyOptions) -> Result<Box<dyn Strategy>> + Send + Sync + 'static,
    {
        let key = name.to_lowercase();
        if self.entries.contains_key(&key) {
            return Err(TideError::DuplicateStrategy(name.to_string()));
        }
        self.entries.insert(
            key,
            Entry {
                description: description.to_string(),
                factory: Box::new(factory),
            },
        );
        Ok(())
    }

    /// Build a fresh strategy by name
    pub fn create(&self, name: &str, options: &StrategyOptions) -> Result<Box<dyn Strategy>> {
        let entry = self
            .entries
            .get(&name.to_lowercase())
            .ok_or_else(|| TideError::UnknownStrategy(name.to_string()))?;
        (entry.factory)(options)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn describe(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(|entry| entry.description.as_str())
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}
