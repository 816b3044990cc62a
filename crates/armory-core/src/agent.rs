use core::fmt::Debug;
use core::hash::Hash;

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cooldown, Item, JobKind};

/// Stable identifier for an agent.
///
/// Deterministic evaluation requires:
/// - stable ordering (`Ord`)
/// - a stable numeric ID (`stable_id`) for think offsets and logs
pub trait AgentId: Copy + Ord + Eq + Hash + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

bitflags! {
    /// What the agent is physically and socially able to do.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Capabilities: u8 {
        /// Species has human-like social rules (work tags apply).
        const HUMANLIKE = 1 << 0;
        /// Violent work is disabled for this agent.
        const VIOLENCE_DISABLED = 1 << 1;
        /// Shooting is disabled for this agent.
        const SHOOTING_DISABLED = 1 << 2;
        /// Agent can manipulate objects (hands, or an equivalent).
        const MANIPULATION = 1 << 3;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::HUMANLIKE | Capabilities::MANIPULATION
    }
}

/// How the agent reacts to nearby hostiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HostilityResponse {
    Ignore,
    #[default]
    Flee,
    Attack,
}

/// Host-defined spatial region identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyPartGroup {
    LeftHand,
    RightHand,
    Teeth,
    Head,
    Other,
}

impl BodyPartGroup {
    pub fn is_hand(self) -> bool {
        matches!(self, BodyPartGroup::LeftHand | BodyPartGroup::RightHand)
    }
}

/// A species' innate attack (fists, teeth, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NaturalTool {
    pub label: String,
    pub linked_group: BodyPartGroup,
    pub power: f32,
    pub cooldown_secs: f32,
}

impl NaturalTool {
    pub fn new(
        label: impl Into<String>,
        linked_group: BodyPartGroup,
        power: f32,
        cooldown_secs: f32,
    ) -> Self {
        Self {
            label: label.into(),
            linked_group,
            power,
            cooldown_secs,
        }
    }

    /// Damage per second of this tool; a non-positive cooldown yields 0.
    pub fn dps(&self) -> f32 {
        if self.cooldown_secs > 0.0 {
            self.power / self.cooldown_secs
        } else {
            0.0
        }
    }
}

/// Per-agent state record the host hands to decision policies.
///
/// The record owns everything a policy may read or mutate for this agent,
/// including its decision cooldown. Reservations, positions and paths stay
/// with the host.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentState<A: AgentId> {
    pub id: A,
    pub capabilities: Capabilities,
    pub hostility: HostilityResponse,
    /// `false` when the agent has no equipment tracker at all.
    pub has_equipment_slot: bool,
    /// `false` when the agent has no apparel tracker at all.
    pub has_apparel_slot: bool,
    pub primary: Option<Item>,
    pub worn: Vec<Item>,
    pub current_job: Option<JobKind>,
    /// `None` while the agent is unplaced.
    pub region: Option<RegionId>,
    pub natural_tools: Vec<NaturalTool>,
    pub cooldown: Cooldown,
}

impl<A: AgentId> AgentState<A> {
    pub fn new(id: A) -> Self {
        Self {
            id,
            capabilities: Capabilities::default(),
            hostility: HostilityResponse::default(),
            has_equipment_slot: true,
            has_apparel_slot: true,
            primary: None,
            worn: Vec::new(),
            current_job: None,
            region: Some(RegionId(0)),
            natural_tools: Vec::new(),
            cooldown: Cooldown::default(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_primary(mut self, item: Item) -> Self {
        self.primary = Some(item);
        self
    }

    pub fn with_worn(mut self, item: Item) -> Self {
        self.worn.push(item);
        self
    }

    pub fn with_natural_tools(mut self, tools: Vec<NaturalTool>) -> Self {
        self.natural_tools = tools;
        self
    }

    pub fn has(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn is_humanlike(&self) -> bool {
        self.has(Capabilities::HUMANLIKE)
    }

    /// First natural tool linked to a hand, in species order.
    pub fn first_hand_tool(&self) -> Option<&NaturalTool> {
        self.natural_tools.iter().find(|t| t.linked_group.is_hand())
    }

    /// First worn item that grants an attack of its own.
    pub fn first_apparel_verb(&self) -> Option<&Item> {
        self.worn.iter().find(|i| i.offers_attack_verb())
    }
}
