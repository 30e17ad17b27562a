//! Tracks which scenes have already fired their effects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Scene ids whose effects were applied in the current playthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedEffectsLedger(BTreeSet<String>);

impl AppliedEffectsLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scene id. Returns `false` if it was already recorded.
    pub fn record(&mut self, scene_id: impl Into<String>) -> bool {
        self.0.insert(scene_id.into())
    }

    /// Whether the scene's effects already fired.
    pub fn contains(&self, scene_id: &str) -> bool {
        self.0.contains(scene_id)
    }

    /// Number of recorded scenes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_once() {
        let mut ledger = AppliedEffectsLedger::new();
        assert!(ledger.record("start"));
        assert!(!ledger.record("start"));
        assert!(ledger.contains("start"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear() {
        let mut ledger = AppliedEffectsLedger::new();
        ledger.record("a");
        ledger.record("b");
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.contains("a"));
    }

    #[test]
    fn serializes_as_list() {
        let mut ledger = AppliedEffectsLedger::new();
        ledger.record("cave");
        ledger.record("bridge");
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            r#"["bridge","cave"]"#
        );
    }
}
