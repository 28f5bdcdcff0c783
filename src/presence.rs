//! Enter/exit lifecycle for animated collection members.
//!
//! Each tracked element moves through `Entering -> Visible -> Exiting ->
//! removed`, driven by timed transitions the owner schedules. [`PresenceSet`]
//! reconciles the tracked set against the desired membership and reports
//! which elements just started a timed phase; [`PresenceSet::settle`]
//! advances that phase when the timer fires. An element whose membership
//! returns while it is still exiting is revived in place.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Default)]
pub struct PresenceSet<K> {
    entries: Vec<(K, Phase)>,
}

impl<K: Clone + PartialEq> PresenceSet<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Start with every key already settled, for content rendered in its
    /// final state (e.g. server-side render of the unfiltered catalog).
    pub fn from_visible(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            entries: keys.into_iter().map(|k| (k, Phase::Visible)).collect(),
        }
    }

    /// Reconcile against the desired membership.
    ///
    /// Keys missing from `desired` begin exiting, new keys begin entering,
    /// and exiting keys named again are revived. Returns every key that
    /// just started a timed phase, so the owner can schedule its settle.
    pub fn sync(&mut self, desired: &[K]) -> Vec<(K, Phase)> {
        let mut started = Vec::new();
        for (key, phase) in &mut self.entries {
            if desired.contains(key) {
                if *phase == Phase::Exiting {
                    *phase = Phase::Entering;
                    started.push((key.clone(), Phase::Entering));
                }
            } else if *phase != Phase::Exiting {
                *phase = Phase::Exiting;
                started.push((key.clone(), Phase::Exiting));
            }
        }
        for key in desired {
            if !self.entries.iter().any(|(k, _)| k == key) {
                self.entries.push((key.clone(), Phase::Entering));
                started.push((key.clone(), Phase::Entering));
            }
        }
        started
    }

    /// Advance a key's timed transition: an entering key becomes visible,
    /// an exiting key is removed. Settling an unknown or already-visible
    /// key is a no-op, so a stale timer can't corrupt the set.
    pub fn settle(&mut self, key: &K) {
        let Some(index) = self.entries.iter().position(|(k, _)| k == key) else {
            return;
        };
        match self.entries[index].1 {
            Phase::Entering => self.entries[index].1 = Phase::Visible,
            Phase::Visible => {}
            Phase::Exiting => {
                self.entries.remove(index);
            }
        }
    }

    pub fn phase_of(&self, key: &K) -> Option<Phase> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, phase)| *phase)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_members_enter_then_settle_visible() {
        let mut set = PresenceSet::new();
        let started = set.sync(&["a", "b"]);
        assert_eq!(
            started,
            vec![("a", Phase::Entering), ("b", Phase::Entering)]
        );
        set.settle(&"a");
        assert_eq!(set.phase_of(&"a"), Some(Phase::Visible));
        assert_eq!(set.phase_of(&"b"), Some(Phase::Entering));
    }

    #[test]
    fn test_dropped_members_exit_then_settle_removes() {
        let mut set = PresenceSet::from_visible(["a", "b"]);
        let started = set.sync(&["a"]);
        assert_eq!(started, vec![("b", Phase::Exiting)]);
        assert_eq!(set.phase_of(&"b"), Some(Phase::Exiting));
        set.settle(&"b");
        assert!(!set.contains(&"b"));
        assert_eq!(set.phase_of(&"a"), Some(Phase::Visible));
    }

    #[test]
    fn test_unchanged_membership_reports_nothing() {
        let mut set = PresenceSet::from_visible(["a", "b"]);
        assert!(set.sync(&["a", "b"]).is_empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_exiting_member_is_revived() {
        let mut set = PresenceSet::from_visible(["a"]);
        set.sync(&[]);
        assert_eq!(set.phase_of(&"a"), Some(Phase::Exiting));
        let started = set.sync(&["a"]);
        assert_eq!(started, vec![("a", Phase::Entering)]);
        // the stale exit timer fires after revival and must not remove it
        set.settle(&"a");
        assert_eq!(set.phase_of(&"a"), Some(Phase::Visible));
    }

    #[test]
    fn test_stale_settle_is_noop() {
        let mut set = PresenceSet::from_visible(["a"]);
        set.settle(&"gone");
        set.settle(&"a");
        assert_eq!(set.phase_of(&"a"), Some(Phase::Visible));
        assert_eq!(set.len(), 1);
    }
}
