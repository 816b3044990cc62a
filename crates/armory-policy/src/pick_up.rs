use armory_core::{
    AgentId, AgentState, Capabilities, DecisionOutcome, DecisionPolicy, EquipmentHost, Item,
    ItemCategory, JobKind, PathEndMode, ScanRequest, TickContext,
};

use crate::{PickUpWeaponConfig, WeaponScorer};

/// Why an evaluation stopped before looking at any items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    CoolingDown,
    NoEquipmentOrApparel,
    AlreadyEquipping,
    ViolenceDisabled,
    CannotManipulate,
    Unplaced,
}

/// Decides whether an agent should arm itself with something better.
///
/// Evaluation order, first match wins:
/// 1. pick up a higher-scoring weapon, or drop one unusable under duress
/// 2. take off a shield belt that blocks the held ranged weapon
/// 3. wear nearby apparel that grants an attack, when unarmed
#[derive(Debug, Clone, Default)]
pub struct WeaponSelectionPolicy {
    config: PickUpWeaponConfig,
}

impl WeaponSelectionPolicy {
    pub fn new(config: PickUpWeaponConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PickUpWeaponConfig {
        &self.config
    }

    pub fn scorer_for<A: AgentId>(&self, agent: &AgentState<A>) -> WeaponScorer {
        WeaponScorer::for_agent(
            agent,
            self.config.prefer_building_destroyers,
            self.config.melee_dps_margin,
        )
    }

    pub fn skip_reason<A: AgentId>(
        &self,
        ctx: &TickContext,
        agent: &AgentState<A>,
    ) -> Option<SkipReason> {
        if agent.cooldown.is_active(ctx.tick, self.config.cooldown_ticks) {
            return Some(SkipReason::CoolingDown);
        }
        if !agent.has_equipment_slot && !agent.has_apparel_slot {
            return Some(SkipReason::NoEquipmentOrApparel);
        }
        if agent.current_job == Some(JobKind::EquipWeapon) {
            return Some(SkipReason::AlreadyEquipping);
        }
        if agent.is_humanlike() && agent.has(Capabilities::VIOLENCE_DISABLED) {
            return Some(SkipReason::ViolenceDisabled);
        }
        if !agent.has(Capabilities::MANIPULATION) {
            return Some(SkipReason::CannotManipulate);
        }
        if agent.region.is_none() {
            return Some(SkipReason::Unplaced);
        }
        None
    }

    fn satisfied_with_current_weapon<H: EquipmentHost>(
        &self,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> bool {
        let Some(primary) = agent.primary.as_ref() else {
            return false;
        };
        if self.config.prefer_building_destroyers {
            primary.is_building_destroyer()
        } else {
            host.is_usable_under_duress(primary)
        }
    }

    fn should_equip_weapon<H: EquipmentHost>(
        &self,
        candidate: &Item,
        current_score: u8,
        scorer: &WeaponScorer,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> bool {
        if candidate.is_ranged() && agent.has(Capabilities::SHOOTING_DISABLED) {
            return false;
        }
        host.can_equip(candidate, agent)
            && scorer.score(Some(candidate)) > current_score
            && host.is_usable_under_duress(candidate)
    }

    fn should_equip_utility_item<H: EquipmentHost>(
        &self,
        candidate: &Item,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> bool {
        candidate.category == ItemCategory::Apparel
            && candidate.picks_up_opportunistically()
            && host.can_equip(candidate, agent)
            && host.has_parts_to_wear(agent, candidate)
            && !host.would_displace_locked_item(agent, candidate)
    }

    fn wants_utility_item<A: AgentId>(&self, agent: &AgentState<A>) -> bool {
        self.config.pick_up_utility_items
            && agent.has_apparel_slot
            && agent.primary.is_none()
            && agent.first_apparel_verb().is_none()
    }

    fn weapon_request(&self) -> ScanRequest {
        ScanRequest::new(
            ItemCategory::Weapon,
            self.config.weapon_search_radius,
            PathEndMode::Touch,
        )
    }

    fn utility_request(&self) -> ScanRequest {
        ScanRequest::new(
            ItemCategory::Apparel,
            self.config.utility_search_radius,
            PathEndMode::OnCell,
        )
        .with_max_regions(self.config.utility_search_max_regions)
    }

    fn decide_weapon<H: EquipmentHost>(
        &self,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> Option<DecisionOutcome> {
        if !agent.has_equipment_slot || self.satisfied_with_current_weapon(agent, host) {
            return None;
        }

        let scorer = self.scorer_for(agent);
        let current_score = scorer.score(agent.primary.as_ref());
        let request = self.weapon_request();
        let found = host.find_closest_reachable(agent, &request, &mut |item: &Item| {
            host.can_reserve(agent, item)
                && !host.is_burning(item)
                && self.should_equip_weapon(item, current_score, &scorer, agent, host)
        });

        if let Some(weapon) = found {
            return Some(DecisionOutcome::EquipWeapon {
                target: weapon.id,
                authorize_combat_en_route: true,
            });
        }

        agent
            .primary
            .as_ref()
            .filter(|primary| !host.is_usable_under_duress(primary))
            .map(|primary| DecisionOutcome::DropEquipment(primary.id))
    }

    fn decide_shield<A: AgentId>(&self, agent: &AgentState<A>) -> Option<DecisionOutcome> {
        if !agent.has_equipment_slot
            || !agent.has_apparel_slot
            || !agent.primary.as_ref().is_some_and(Item::is_ranged)
        {
            return None;
        }
        agent
            .worn
            .iter()
            .find(|worn| worn.is_shield_belt())
            .map(|belt| DecisionOutcome::RemoveApparel(belt.id))
    }

    fn decide_utility<H: EquipmentHost>(
        &self,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> Option<DecisionOutcome> {
        if !self.wants_utility_item(agent) {
            return None;
        }
        let request = self.utility_request();
        host.find_closest_reachable(agent, &request, &mut |item: &Item| {
            host.can_reserve(agent, item)
                && !host.is_burning(item)
                && self.should_equip_utility_item(item, agent, host)
        })
        .map(|item| DecisionOutcome::WearApparel(item.id))
    }
}

impl<H> DecisionPolicy<H> for WeaponSelectionPolicy
where
    H: EquipmentHost,
{
    fn name(&self) -> &'static str {
        "pick_up_weapon"
    }

    fn decide(
        &self,
        ctx: &TickContext,
        agent: &AgentState<H::Agent>,
        host: &H,
    ) -> DecisionOutcome {
        if let Some(reason) = self.skip_reason(ctx, agent) {
            tracing::trace!(agent = agent.id.stable_id(), ?reason, "skipping weapon check");
            return DecisionOutcome::NoAction;
        }

        let outcome = self
            .decide_weapon(agent, host)
            .or_else(|| self.decide_shield(agent))
            .or_else(|| self.decide_utility(agent, host))
            .unwrap_or_default();

        if outcome.is_action() {
            tracing::debug!(
                agent = agent.id.stable_id(),
                tick = ctx.tick,
                ?outcome,
                "weapon check produced a job"
            );
        }
        outcome
    }
}
