//! Runtime-checkable store invariants
//!
//! These hold after every store operation and are used by the property
//! tests and by debug assertions in the browser binding.
//!
//! # Invariants
//!
//! 1. **Unique Ids**: no two open windows share an id
//! 2. **Active Window Validity**: the active id refers to an open, non-minimized window
//! 3. **Z-Order Consistency**: z-indices are positive and pairwise distinct

use std::collections::HashSet;

use crate::window::WindowStore;

/// An invariant violation with details
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{invariant}: {description}")]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

/// Check all store invariants.
///
/// Returns a list of violations (empty if all invariants hold).
pub fn check_all_invariants<P>(store: &WindowStore<P>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(check_unique_ids(store));
    violations.extend(check_active_window(store));
    violations.extend(check_z_order(store));

    violations
}

/// Invariant 1: no duplicate ids
fn check_unique_ids<P>(store: &WindowStore<P>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for window in store.records() {
        if !seen.insert(window.id.as_str()) {
            violations.push(InvariantViolation {
                invariant: "unique_ids",
                description: format!("Window id {:?} is registered more than once", window.id),
            });
        }
    }

    violations
}

/// Invariant 2: active pointer refers to a visible window
fn check_active_window<P>(store: &WindowStore<P>) -> Vec<InvariantViolation> {
    let Some(active) = store.active() else {
        return Vec::new();
    };

    match store.get(active) {
        None => vec![InvariantViolation {
            invariant: "active_window_validity",
            description: format!("Active window {active:?} is not in the registry"),
        }],
        Some(window) if window.is_minimized => vec![InvariantViolation {
            invariant: "active_window_validity",
            description: format!("Active window {active:?} is minimized"),
        }],
        Some(_) => Vec::new(),
    }
}

/// Invariant 3: z-indices positive and distinct
fn check_z_order<P>(store: &WindowStore<P>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for window in store.records() {
        if window.z_index <= 0 {
            violations.push(InvariantViolation {
                invariant: "z_order_consistency",
                description: format!(
                    "Window {:?} has non-positive z-index {}",
                    window.id, window.z_index
                ),
            });
        }
        if !seen.insert(window.z_index) {
            violations.push(InvariantViolation {
                invariant: "z_order_consistency",
                description: format!(
                    "Window {:?} shares z-index {} with another window",
                    window.id, window.z_index
                ),
            });
        }
    }

    violations
}

impl<P> WindowStore<P> {
    /// Check all invariants, see [`check_all_invariants`]
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        check_all_invariants(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use crate::window::WindowDescriptor;

    fn store_with(ids: &[&str]) -> WindowStore<()> {
        let mut store = WindowStore::new(Viewport::new(1200, 800));
        for id in ids {
            store.open(WindowDescriptor::new(*id, *id, *id));
        }
        store
    }

    #[test]
    fn test_fresh_store_is_consistent() {
        let store: WindowStore<()> = WindowStore::default();
        assert!(check_all_invariants(&store).is_empty());
    }

    #[test]
    fn test_operations_keep_invariants() {
        let mut store = store_with(&["finder", "terminal", "resume"]);
        store.minimize("terminal");
        store.focus("finder");
        store.toggle_maximize("resume");
        store.close("finder");
        store.focus("terminal");

        assert!(store.check_invariants().is_empty());
    }

    #[test]
    fn test_detects_duplicate_ids() {
        let mut store = store_with(&["finder"]);
        let mut copy = store.windows[0].clone();
        copy.z_index = 99;
        store.windows.push(copy);

        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].invariant, "unique_ids");
    }

    #[test]
    fn test_detects_dangling_active() {
        let mut store = store_with(&["finder"]);
        store.active = Some("ghost".to_string());

        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].invariant, "active_window_validity");
    }

    #[test]
    fn test_detects_minimized_active() {
        let mut store = store_with(&["finder"]);
        store.windows[0].is_minimized = true;

        let violations = store.check_invariants();
        assert_eq!(violations[0].invariant, "active_window_validity");
        assert!(violations[0].to_string().contains("minimized"));
    }

    #[test]
    fn test_detects_shared_z_index() {
        let mut store = store_with(&["finder", "terminal"]);
        store.windows[1].z_index = store.windows[0].z_index;

        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].invariant, "z_order_consistency");
    }
}
