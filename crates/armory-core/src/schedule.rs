use crate::AgentId;

/// Which ticks an agent's policy chain is evaluated on.
///
/// Hosts think at a low fixed frequency; the per-agent phase spreads agents
/// over the interval so the per-tick cost stays flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkSchedule {
    pub interval: u32,
    pub phase: u32,
}

impl Default for ThinkSchedule {
    fn default() -> Self {
        Self {
            interval: 1,
            phase: 0,
        }
    }
}

impl ThinkSchedule {
    /// Schedule with a phase derived from the agent's stable id.
    pub fn for_agent(agent: impl AgentId, interval: u32) -> Self {
        let interval = interval.max(1);
        let phase = (agent.stable_id() % u64::from(interval)) as u32;
        Self { interval, phase }
    }

    pub fn is_due(&self, tick: u64) -> bool {
        let interval = u64::from(self.interval.max(1));
        (tick + u64::from(self.phase)) % interval == 0
    }

    /// First tick at or after `tick` on which the agent is due.
    pub fn next_due(&self, tick: u64) -> u64 {
        let interval = u64::from(self.interval.max(1));
        let rem = (tick + u64::from(self.phase)) % interval;
        if rem == 0 {
            tick
        } else {
            tick + (interval - rem)
        }
    }
}
