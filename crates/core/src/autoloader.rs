//! Ordered chain of loading strategies.
//!
//! A name is offered to each strategy in registration order; the first one
//! that locates a file wins, and a miss falls through to the next strategy.

use autoloader_api::{LoadingStrategy, Resolution};
use tracing::debug;

#[derive(Default)]
pub struct Autoloader {
    strategies: Vec<Box<dyn LoadingStrategy>>,
}

impl Autoloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy to the end of the chain
    pub fn register_strategy(&mut self, strategy: Box<dyn LoadingStrategy>) {
        debug!("Registering {} strategy", strategy.name());
        self.strategies.push(strategy);
    }

    pub fn with_strategy(mut self, strategy: impl LoadingStrategy + 'static) -> Self {
        self.register_strategy(Box::new(strategy));
        self
    }

    /// Strategy names in lookup order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn resolve(&self, symbolic_name: &str) -> Option<Resolution> {
        for strategy in &self.strategies {
            if let Some(path) = strategy.resolve(symbolic_name) {
                debug!(
                    "Resolved {} via {} strategy: {}",
                    symbolic_name,
                    strategy.name(),
                    path.display()
                );
                return Some(Resolution {
                    name: symbolic_name.to_string(),
                    path,
                    strategy: strategy.name().to_string(),
                });
            }
        }

        debug!("{} not found by any strategy", symbolic_name);
        None
    }
}

impl std::fmt::Debug for Autoloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoloader")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
