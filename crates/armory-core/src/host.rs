use crate::{AgentId, AgentState, Item, ItemCategory, ItemId, JobKind, ReservationError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the agent has to stand relative to the target for it to count as reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathEndMode {
    /// Adjacent to the target.
    Touch,
    /// On the target's cell.
    OnCell,
}

/// Traversal rules the host applies while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraverseMode {
    /// Whatever the scanning agent itself could walk through.
    #[default]
    ByAgent,
}

/// Nearest-match query handed to [`EquipmentHost::find_closest_reachable`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanRequest {
    pub category: ItemCategory,
    pub max_distance: f32,
    pub path_end: PathEndMode,
    pub traverse: TraverseMode,
    /// Upper bound on regions the host may flood through; `None` = host default.
    pub max_regions: Option<u32>,
}

impl ScanRequest {
    pub fn new(category: ItemCategory, max_distance: f32, path_end: PathEndMode) -> Self {
        Self {
            category,
            max_distance,
            path_end,
            traverse: TraverseMode::default(),
            max_regions: None,
        }
    }

    pub fn with_max_regions(mut self, max_regions: u32) -> Self {
        self.max_regions = Some(max_regions);
        self
    }
}

/// Read-only host queries a decision policy relies on.
///
/// The core crate does not own positions, paths or reservations; the host
/// answers these questions from its own spatial index and bookkeeping.
pub trait EquipmentHost {
    type Agent: AgentId;

    /// Closest item in `request.category` reachable by `agent` that satisfies `predicate`.
    fn find_closest_reachable(
        &self,
        agent: &AgentState<Self::Agent>,
        request: &ScanRequest,
        predicate: &mut dyn FnMut(&Item) -> bool,
    ) -> Option<&Item>;

    fn can_reserve(&self, agent: &AgentState<Self::Agent>, item: &Item) -> bool;

    fn can_equip(&self, item: &Item, agent: &AgentState<Self::Agent>) -> bool;

    fn is_burning(&self, item: &Item) -> bool;

    fn is_usable_under_duress(&self, item: &Item) -> bool {
        item.is_usable_under_duress()
    }

    fn has_parts_to_wear(&self, agent: &AgentState<Self::Agent>, item: &Item) -> bool;

    fn would_displace_locked_item(&self, agent: &AgentState<Self::Agent>, item: &Item) -> bool;
}

/// How much of a target a reservation claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReservationClaim {
    pub max_claimants: u32,
    /// `None` claims the whole stack.
    pub stack_count: Option<u32>,
}

impl Default for ReservationClaim {
    fn default() -> Self {
        Self {
            max_claimants: 1,
            stack_count: None,
        }
    }
}

/// Host-side reservation manager.
pub trait ReservationHost {
    type Agent: AgentId;

    fn item(&self, id: ItemId) -> Option<&Item>;

    fn reserve(
        &mut self,
        agent: Self::Agent,
        target: ItemId,
        job: JobKind,
        claim: ReservationClaim,
    ) -> Result<(), ReservationError>;
}
