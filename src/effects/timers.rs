//! Per-kind expiry timer registry.

use super::types::EffectKind;

/// A scheduled expiry for one effect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingExpiry {
    /// Clock time the timer was armed.
    pub armed_at_ms: u64,
    /// Clock time at which the effect ends.
    pub deadline_ms: u64,
}

/// At most one pending expiry per effect kind.
///
/// Arming a kind that already has a pending timer replaces it, so a stale
/// timer from an earlier activation can never end a newer one early.
#[derive(Debug, Clone, Default)]
pub struct EffectTimers {
    slots: [Option<PendingExpiry>; 4],
}

impl EffectTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to expire one full duration after `now_ms`.
    /// Returns the timer that was replaced, if any.
    pub fn arm(&mut self, kind: EffectKind, now_ms: u64) -> Option<PendingExpiry> {
        let expiry = PendingExpiry {
            armed_at_ms: now_ms,
            deadline_ms: now_ms.saturating_add(kind.duration_ms()),
        };
        self.slots[kind.index()].replace(expiry)
    }

    pub fn cancel(&mut self, kind: EffectKind) -> Option<PendingExpiry> {
        self.slots[kind.index()].take()
    }

    pub fn cancel_all(&mut self) {
        self.slots = [None; 4];
    }

    pub fn is_pending(&self, kind: EffectKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn pending(&self, kind: EffectKind) -> Option<PendingExpiry> {
        self.slots[kind.index()]
    }

    pub fn pending_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Milliseconds left before `kind` expires, or None if not pending.
    pub fn remaining_ms(&self, kind: EffectKind, now_ms: u64) -> Option<u64> {
        self.pending(kind)
            .map(|expiry| expiry.deadline_ms.saturating_sub(now_ms))
    }

    /// Earliest deadline across all kinds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots.iter().flatten().map(|e| e.deadline_ms).min()
    }

    /// Remove and return every timer whose deadline is at or before `now_ms`,
    /// earliest first. Ties resolve in [`EffectKind::ALL`] order.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<(EffectKind, PendingExpiry)> {
        let mut due: Vec<(EffectKind, PendingExpiry)> = EffectKind::ALL
            .iter()
            .filter_map(|kind| match self.slots[kind.index()] {
                Some(expiry) if expiry.deadline_ms <= now_ms => Some((*kind, expiry)),
                _ => None,
            })
            .collect();

        for (kind, _) in &due {
            self.slots[kind.index()] = None;
        }

        due.sort_by_key(|(kind, expiry)| (expiry.deadline_ms, kind.index()));
        due
    }
}
