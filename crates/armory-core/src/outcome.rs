use crate::{AgentId, AgentState, HostilityResponse, ItemId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host job a decision is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JobKind {
    EquipWeapon,
    DropEquipment,
    RemoveApparel,
    Wear,
}

/// Result of one policy evaluation. Exactly one is produced per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecisionOutcome {
    EquipWeapon {
        target: ItemId,
        /// Let the agent engage hostiles while walking to the weapon.
        authorize_combat_en_route: bool,
    },
    DropEquipment(ItemId),
    RemoveApparel(ItemId),
    WearApparel(ItemId),
    #[default]
    NoAction,
}

impl DecisionOutcome {
    pub fn is_action(self) -> bool {
        !matches!(self, DecisionOutcome::NoAction)
    }

    pub fn target(self) -> Option<ItemId> {
        match self {
            DecisionOutcome::EquipWeapon { target, .. }
            | DecisionOutcome::DropEquipment(target)
            | DecisionOutcome::RemoveApparel(target)
            | DecisionOutcome::WearApparel(target) => Some(target),
            DecisionOutcome::NoAction => None,
        }
    }

    pub fn job_kind(self) -> Option<JobKind> {
        match self {
            DecisionOutcome::EquipWeapon { .. } => Some(JobKind::EquipWeapon),
            DecisionOutcome::DropEquipment(_) => Some(JobKind::DropEquipment),
            DecisionOutcome::RemoveApparel(_) => Some(JobKind::RemoveApparel),
            DecisionOutcome::WearApparel(_) => Some(JobKind::Wear),
            DecisionOutcome::NoAction => None,
        }
    }

    /// Whether applying this outcome stamps the agent's decision cooldown.
    ///
    /// Only weapon pickups do; drops and utility wears leave the agent free to
    /// be re-evaluated on the next pass.
    pub fn records_cooldown(self) -> bool {
        matches!(self, DecisionOutcome::EquipWeapon { .. })
    }

    /// Apply the side effects carried by this outcome to the agent record.
    pub fn apply<A: AgentId>(self, agent: &mut AgentState<A>, tick: u64) {
        if let DecisionOutcome::EquipWeapon {
            authorize_combat_en_route: true,
            ..
        } = self
        {
            agent.hostility = HostilityResponse::Attack;
        }
        if self.records_cooldown() {
            agent.cooldown.record(tick);
        }
    }
}
