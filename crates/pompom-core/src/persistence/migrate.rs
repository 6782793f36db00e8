//! Rebuilding aggregates that older records did not store
//!
//! Both rebuilds scan the full legacy history. The caller truncates the log
//! only afterwards.

use super::sanitize::parsed;
use crate::{CareAction, EventKind, LifetimeCounters, Species};
use indexmap::IndexSet;
use serde_json::Value;
use std::fmt;

/// A migration step applied while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Migration {
    /// Lifetime counters rebuilt from history
    RebuiltCounts,
    /// Reached forms rebuilt from history
    RebuiltForms,
}

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Migration::RebuiltCounts => f.write_str("rebuilt counts"),
            Migration::RebuiltForms => f.write_str("rebuilt unlocked forms"),
        }
    }
}

/// Count every care action named in `data.action`
pub(crate) fn rebuild_counts(history: &[Value]) -> LifetimeCounters {
    LifetimeCounters::tally(history.iter().filter_map(|entry| {
        parsed(entry.get("data").and_then(|d| d.get("action")), CareAction::parse)
    }))
}

/// Every `EVOLVED.data.to`, plus the starting form and the current species
pub(crate) fn rebuild_forms(history: &[Value], current: Species) -> IndexSet<String> {
    let mut forms = IndexSet::new();
    forms.insert(Species::FlanBebe.as_str().to_string());

    for entry in history {
        let kind = entry.get("type").and_then(Value::as_str);
        if kind != Some(EventKind::Evolved.as_str()) {
            continue;
        }
        if let Some(to) = entry.get("data").and_then(|d| d.get("to")).and_then(Value::as_str) {
            forms.insert(to.to_string());
        }
    }

    forms.insert(current.as_str().to_string());
    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rebuild_counts() {
        let history = vec![
            json!({"type": "STAT_CHANGED", "tick": 1, "data": {"action": "FEED"}}),
            json!({"type": "STAT_CHANGED", "tick": 2, "data": {"action": "FEED"}}),
            json!({"type": "STAT_CHANGED", "tick": 3, "data": {"action": "PLAY"}}),
            json!({"type": "STAT_CHANGED", "tick": 4, "data": {"action": "DANCE"}}),
            json!({"type": "STAT_CHANGED", "tick": 5}),
            json!("garbage"),
        ];
        let counts = rebuild_counts(&history);
        assert_eq!(counts.feed, 2);
        assert_eq!(counts.play, 1);
        assert_eq!(counts.total_actions, 3);
    }

    #[test]
    fn test_rebuild_forms() {
        let history = vec![
            json!({"type": "EVOLVED", "tick": 100, "data": {"from": "FLAN_BEBE", "to": "FLAN_TEEN"}}),
            json!({"type": "STAT_CHANGED", "tick": 101, "data": {"to": "SCONE"}}),
            json!({"type": "EVOLVED", "tick": 300, "data": {"to": 5}}),
        ];
        let forms = rebuild_forms(&history, Species::FlanAdult);
        assert_eq!(
            forms.into_iter().collect::<Vec<_>>(),
            vec!["FLAN_BEBE", "FLAN_TEEN", "FLAN_ADULT"]
        );
    }
}
