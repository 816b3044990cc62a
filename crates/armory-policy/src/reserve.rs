use armory_core::{
    AgentId, DecisionOutcome, ItemId, JobKind, ReservationClaim, ReservationError,
    ReservationHost,
};

/// An equip job the host is about to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipJob<A: AgentId> {
    pub agent: A,
    pub target: ItemId,
}

impl<A: AgentId> EquipJob<A> {
    pub fn new(agent: A, target: ItemId) -> Self {
        Self { agent, target }
    }

    /// Job for an [`DecisionOutcome::EquipWeapon`] outcome; `None` for anything else.
    pub fn from_outcome(agent: A, outcome: DecisionOutcome) -> Option<Self> {
        match outcome {
            DecisionOutcome::EquipWeapon { target, .. } => Some(Self::new(agent, target)),
            _ => None,
        }
    }
}

/// Claims the equip target for its agent before the equip action runs.
///
/// One claimant at a time. A spawned, ingestible target is claimed one unit
/// at a time; anything else is claimed as a whole stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipReservation;

impl EquipReservation {
    pub fn claim_for<R: ReservationHost>(host: &R, target: ItemId) -> ReservationClaim {
        let single_unit = host
            .item(target)
            .is_some_and(|item| item.spawned && item.is_ingestible());
        ReservationClaim {
            max_claimants: 1,
            stack_count: single_unit.then_some(1),
        }
    }

    /// Reserve `job.target`. With `error_on_failed`, a refusal is also logged.
    pub fn try_make_pre_reservations<R: ReservationHost>(
        host: &mut R,
        job: &EquipJob<R::Agent>,
        error_on_failed: bool,
    ) -> Result<(), ReservationError> {
        let claim = Self::claim_for(host, job.target);
        let result = host.reserve(job.agent, job.target, JobKind::EquipWeapon, claim);
        match &result {
            Ok(()) => tracing::trace!(
                agent = job.agent.stable_id(),
                item = job.target.0,
                stack_count = ?claim.stack_count,
                "reserved equip target"
            ),
            Err(err) if error_on_failed => tracing::error!(
                agent = job.agent.stable_id(),
                item = job.target.0,
                error = %err,
                "could not reserve equip target"
            ),
            Err(_) => {}
        }
        result
    }
}
