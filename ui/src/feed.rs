//! Defines the mutable, reactive state for the deposit history view.

use std::collections::HashMap;

use api::deposit::Deposit;
use dioxus::prelude::*;

/// A reactive state bundle provided as a Dioxus context.
///
/// This struct holds `Signal`s for everything the view mutates: the deposit
/// list itself plus the loading and error flags. It is written only by the
/// polling task and read by the screens.
#[derive(Clone, Copy)]
pub struct DepositFeed {
    /// The last applied deposit list, in backend order.
    pub deposits: Signal<Vec<Deposit>>,
    /// True from the moment a fetch is issued until it completes.
    pub is_loading: Signal<bool>,
    /// Terminal for the session: once set, the error screen takes over and
    /// this is never cleared.
    pub error: Signal<Option<String>>,
    /// Orders fetch completions by issue time.
    pub ledger: Signal<FetchLedger>,
}

/// Hands out a sequence number per issued fetch and applies completions
/// only when nothing issued later has been applied already. A request that
/// outlives the next poll tick can no longer clobber newer data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchLedger {
    next_seq: u64,
    last_applied: Option<u64>,
}

impl FetchLedger {
    /// Registers a new fetch and returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Returns whether the completion for `seq` may be applied, and records
    /// it if so.
    pub fn try_apply(&mut self, seq: u64) -> bool {
        match self.last_applied {
            Some(applied) if seq <= applied => false,
            _ => {
                self.last_applied = Some(seq);
                true
            }
        }
    }
}

/// Flips one row's expansion state, leaving every other entry untouched.
/// Absent keys count as collapsed.
pub fn toggle_expanded(expanded: &mut HashMap<String, bool>, deposit_id: &str) {
    let entry = expanded.entry(deposit_id.to_string()).or_insert(false);
    *entry = !*entry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_in_issue_order_all_apply() {
        let mut ledger = FetchLedger::default();
        let a = ledger.begin();
        let b = ledger.begin();
        assert!(ledger.try_apply(a));
        assert!(ledger.try_apply(b));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut ledger = FetchLedger::default();
        let slow = ledger.begin();
        let fast = ledger.begin();
        // The later-issued request resolves first; the straggler loses.
        assert!(ledger.try_apply(fast));
        assert!(!ledger.try_apply(slow));
    }

    #[test]
    fn later_issue_still_applies_after_discard() {
        let mut ledger = FetchLedger::default();
        let first = ledger.begin();
        let second = ledger.begin();
        assert!(ledger.try_apply(second));
        assert!(!ledger.try_apply(first));
        let third = ledger.begin();
        assert!(ledger.try_apply(third));
    }

    #[test]
    fn expansion_flip_touches_a_single_key() {
        let mut expanded = HashMap::new();
        expanded.insert("b".to_string(), true);

        toggle_expanded(&mut expanded, "a");
        assert_eq!(expanded.get("a"), Some(&true));
        assert_eq!(expanded.get("b"), Some(&true));

        toggle_expanded(&mut expanded, "a");
        assert_eq!(expanded.get("a"), Some(&false));
        assert_eq!(expanded.get("b"), Some(&true));
    }
}
