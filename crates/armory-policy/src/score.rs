use armory_core::{AgentId, AgentState, Item};

/// Ranks weapons for one agent.
///
/// Scores are small integers so that "better" means a strictly higher tier:
/// - `0`: no weapon, or a melee weapon weaker than the agent's own fists
/// - `1`: a worthwhile melee weapon
/// - `2`: any ranged weapon
/// - `3`: a building destroyer, when those are preferred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponScorer {
    prefer_building_destroyers: bool,
    min_melee_dps: f32,
}

impl WeaponScorer {
    pub fn new(prefer_building_destroyers: bool, min_melee_dps: f32) -> Self {
        Self {
            prefer_building_destroyers,
            min_melee_dps,
        }
    }

    pub fn for_agent<A: AgentId>(
        agent: &AgentState<A>,
        prefer_building_destroyers: bool,
        margin: f32,
    ) -> Self {
        Self::new(
            prefer_building_destroyers,
            min_melee_dps_threshold(agent, margin),
        )
    }

    pub fn min_melee_dps(&self) -> f32 {
        self.min_melee_dps
    }

    pub fn score(&self, weapon: Option<&Item>) -> u8 {
        let Some(weapon) = weapon else {
            return 0;
        };
        if weapon.is_melee() && weapon.melee_dps < self.min_melee_dps {
            return 0;
        }
        if self.prefer_building_destroyers && weapon.is_building_destroyer() {
            return 3;
        }
        if weapon.is_ranged() {
            2
        } else {
            1
        }
    }
}

/// Unarmed DPS of the agent's first hand-linked natural tool, plus `margin`.
///
/// Species without hand tools fall back to `margin` alone.
pub fn min_melee_dps_threshold<A: AgentId>(agent: &AgentState<A>, margin: f32) -> f32 {
    let unarmed = agent.first_hand_tool().map_or(0.0, |t| t.dps());
    unarmed + margin
}
