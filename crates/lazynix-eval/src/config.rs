//! Evaluator configuration.

use crate::{DumpConfig, PrimopTable};

/// Evaluator configuration.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Primitive operations available to `Primop` nodes.
    pub primops: PrimopTable,
    /// Layout of the tree dump logged at trace level.
    pub dump: DumpConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            primops: PrimopTable::builtins(),
            dump: DumpConfig::default(),
        }
    }
}

impl EvalConfig {
    /// Create a new configuration with the builtin primops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the primop table.
    pub fn primops(mut self, primops: PrimopTable) -> Self {
        self.primops = primops;
        self
    }

    /// Set the dump layout.
    pub fn dump(mut self, dump: DumpConfig) -> Self {
        self.dump = dump;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvalConfig::default();
        assert!(config.primops.contains("__add"));
        assert_eq!(config.dump, DumpConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = EvalConfig::new()
            .primops(PrimopTable::new())
            .dump(DumpConfig::new().max_depth(2));
        assert!(config.primops.is_empty());
        assert_eq!(config.dump.max_depth, 2);
    }
}
