//! Monotonic request sequencing
//!
//! Every outbound request is tagged with a ticket; a response may only be
//! applied while its ticket is still the latest one issued for its key.

use std::{collections::HashMap, fmt, hash::Hash};

use parking_lot::Mutex;

/// Sequence tag of one dispatched request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    seq: u64,
}

impl<K> Ticket<K> {
    /// Key the ticket was issued for
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Sequence number, strictly increasing per key
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Per-key monotonically increasing sequence numbers
pub struct RequestSequencer<K> {
    latest: Mutex<HashMap<K, u64>>,
}

impl<K: fmt::Debug> fmt::Debug for RequestSequencer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSequencer")
            .field("latest", &*self.latest.lock())
            .finish()
    }
}

impl<K: Eq + Hash + Clone> Default for RequestSequencer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> RequestSequencer<K> {
    /// Create a sequencer with no history
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(HashMap::new()),
        }
    }

    /// Issue the next ticket for `key`, superseding all earlier ones
    pub fn issue(&self, key: K) -> Ticket<K> {
        let mut latest = self.latest.lock();
        let seq = latest.entry(key.clone()).or_insert(0);
        *seq += 1;
        Ticket { key, seq: *seq }
    }

    /// Supersede every outstanding ticket for `key` without issuing a new one
    pub fn invalidate(&self, key: &K) {
        if let Some(seq) = self.latest.lock().get_mut(key) {
            *seq += 1;
        }
    }

    /// Whether `ticket` is the highest dispatched for its key
    pub fn is_latest(&self, ticket: &Ticket<K>) -> bool {
        self.latest.lock().get(&ticket.key) == Some(&ticket.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_ticket_supersedes_earlier() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue("route");
        assert!(sequencer.is_latest(&first));

        let second = sequencer.issue("route");
        assert!(second.seq() > first.seq());
        assert!(!sequencer.is_latest(&first));
        assert!(sequencer.is_latest(&second));
    }

    #[test]
    fn keys_are_independent() {
        let sequencer = RequestSequencer::new();
        let origin = sequencer.issue("origin");
        let _ = sequencer.issue("destination");
        assert!(sequencer.is_latest(&origin));
        assert_eq!(origin.key(), &"origin");
    }

    #[test]
    fn invalidate_discards_outstanding() {
        let sequencer = RequestSequencer::new();
        let ticket = sequencer.issue("route");
        sequencer.invalidate(&"route");
        assert!(!sequencer.is_latest(&ticket));

        // Unknown keys are a no-op
        sequencer.invalidate(&"other");
        let fresh = sequencer.issue("other");
        assert_eq!(fresh.seq(), 1);
    }
}
