use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AgentId;

/// Ticks a policy waits after a recorded decision before deciding again.
pub const DEFAULT_COOLDOWN_TICKS: u64 = 100;

/// Last-decision stamp stored on the agent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cooldown {
    last_decision: Option<u64>,
}

impl Cooldown {
    pub fn last_decision(&self) -> Option<u64> {
        self.last_decision
    }

    pub fn record(&mut self, tick: u64) {
        self.last_decision = Some(tick);
    }

    pub fn clear(&mut self) {
        self.last_decision = None;
    }

    /// `true` while fewer than `cooldown_ticks` ticks have passed since the last decision.
    ///
    /// A tick earlier than the stamp (host clock rewound) keeps the cooldown active.
    pub fn is_active(&self, now: u64, cooldown_ticks: u64) -> bool {
        match self.last_decision {
            Some(last) => now.saturating_sub(last) < cooldown_ticks,
            None => false,
        }
    }
}

/// Cooldown service keyed by agent, for hosts that do not keep per-agent records.
///
/// Entries must be dropped with [`CooldownTable::evict`] when the agent leaves
/// the simulation. Confine a table to the thread that evaluates its agents.
#[derive(Debug, Clone)]
pub struct CooldownTable<A: AgentId> {
    entries: BTreeMap<A, Cooldown>,
    cooldown_ticks: u64,
}

impl<A: AgentId> Default for CooldownTable<A> {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_TICKS)
    }
}

impl<A: AgentId> CooldownTable<A> {
    pub fn new(cooldown_ticks: u64) -> Self {
        Self {
            entries: BTreeMap::new(),
            cooldown_ticks,
        }
    }

    pub fn cooldown_ticks(&self) -> u64 {
        self.cooldown_ticks
    }

    pub fn get(&self, agent: A) -> Cooldown {
        self.entries.get(&agent).copied().unwrap_or_default()
    }

    pub fn record(&mut self, agent: A, tick: u64) {
        self.entries.entry(agent).or_default().record(tick);
    }

    pub fn is_active(&self, agent: A, now: u64) -> bool {
        self.entries
            .get(&agent)
            .is_some_and(|c| c.is_active(now, self.cooldown_ticks))
    }

    pub fn evict(&mut self, agent: A) -> Option<Cooldown> {
        self.entries.remove(&agent)
    }

    /// Drop every entry whose cooldown has already run out at `now`.
    pub fn evict_expired(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        let ticks = self.cooldown_ticks;
        self.entries.retain(|_, c| c.is_active(now, ticks));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
