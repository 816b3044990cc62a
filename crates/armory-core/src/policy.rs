use crate::{AgentId, AgentState, DecisionOutcome, EquipmentHost, ThinkSchedule, TickContext};

/// A decision node registered into the host's ordered policy chain.
///
/// `decide` must not mutate anything; every effect a decision carries is
/// encoded in the returned [`DecisionOutcome`] and applied by `evaluate`.
pub trait DecisionPolicy<H>
where
    H: EquipmentHost,
{
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn decide(
        &self,
        ctx: &TickContext,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> DecisionOutcome;

    fn evaluate(
        &self,
        ctx: &TickContext,
        agent: &mut AgentState<H::Agent>,
        host: &H,
    ) -> DecisionOutcome {
        let outcome = self.decide(ctx, agent, host);
        outcome.apply(agent, ctx.tick);
        outcome
    }
}

/// Ordered list of policies; the first one that wants to act wins.
pub struct PolicyChain<H>
where
    H: EquipmentHost + 'static,
{
    policies: Vec<Box<dyn DecisionPolicy<H>>>,
    think_interval: u32,
}

impl<H> Default for PolicyChain<H>
where
    H: EquipmentHost + 'static,
{
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<H> PolicyChain<H>
where
    H: EquipmentHost + 'static,
{
    pub fn new(policies: Vec<Box<dyn DecisionPolicy<H>>>) -> Self {
        Self {
            policies,
            think_interval: 1,
        }
    }

    pub fn with_think_interval(mut self, ticks: u32) -> Self {
        self.think_interval = ticks.max(1);
        self
    }

    pub fn push(&mut self, policy: Box<dyn DecisionPolicy<H>>) {
        self.policies.push(policy);
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn schedule_for(&self, agent: H::Agent) -> ThinkSchedule {
        ThinkSchedule::for_agent(agent, self.think_interval)
    }

    /// Run the chain for one agent, applying the winning outcome's effects.
    pub fn evaluate(
        &self,
        ctx: &TickContext,
        agent: &mut AgentState<H::Agent>,
        host: &H,
    ) -> DecisionOutcome {
        for policy in &self.policies {
            let outcome = policy.evaluate(ctx, agent, host);
            if outcome.is_action() {
                tracing::debug!(
                    agent = agent.id.stable_id(),
                    tick = ctx.tick,
                    policy = policy.name(),
                    ?outcome,
                    "policy chain chose outcome"
                );
                return outcome;
            }
        }
        DecisionOutcome::NoAction
    }

    /// Evaluate every agent that is due this tick, in stable id order.
    ///
    /// Agents that are not due are skipped and do not appear in the result.
    pub fn evaluate_due(
        &self,
        ctx: &TickContext,
        agents: &mut [AgentState<H::Agent>],
        host: &H,
    ) -> Vec<(H::Agent, DecisionOutcome)> {
        agents.sort_by_key(|a| a.id.stable_id());
        let mut out = Vec::new();
        for agent in agents.iter_mut() {
            if !self.schedule_for(agent.id).is_due(ctx.tick) {
                continue;
            }
            let outcome = self.evaluate(ctx, agent, host);
            out.push((agent.id, outcome));
        }
        out
    }
}
