#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use armory_core::{
    AgentState, BodyPartGroup, EquipmentHost, Item, ItemId, JobKind, NaturalTool,
    ReservationClaim, ReservationError, ReservationHost, ScanRequest,
};

pub type Agent = AgentState<u64>;

struct Placed {
    item: Item,
    distance: f32,
    regions: u32,
}

/// In-memory host: items at fixed distances from every agent.
#[derive(Default)]
pub struct World {
    placed: Vec<Placed>,
    pub burning: BTreeSet<ItemId>,
    pub reserved_by_others: BTreeSet<ItemId>,
    pub unequippable: BTreeSet<ItemId>,
    pub no_parts: BTreeSet<ItemId>,
    pub displaces_locked: BTreeSet<ItemId>,
    pub forbidden: BTreeSet<ItemId>,
    pub claims: BTreeMap<ItemId, (u64, ReservationClaim)>,
    pub scans: RefCell<Vec<ScanRequest>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, item: Item, distance: f32) -> ItemId {
        self.place_in_region(item, distance, 1)
    }

    pub fn place_in_region(&mut self, item: Item, distance: f32, regions: u32) -> ItemId {
        let id = item.id;
        self.placed.push(Placed {
            item,
            distance,
            regions,
        });
        self.placed.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        id
    }

    pub fn scan_count(&self) -> usize {
        self.scans.borrow().len()
    }
}

impl EquipmentHost for World {
    type Agent = u64;

    fn find_closest_reachable(
        &self,
        _agent: &Agent,
        request: &ScanRequest,
        predicate: &mut dyn FnMut(&Item) -> bool,
    ) -> Option<&Item> {
        self.scans.borrow_mut().push(*request);
        self.placed
            .iter()
            .filter(|p| p.item.category == request.category)
            .filter(|p| p.distance <= request.max_distance)
            .filter(|p| request.max_regions.map_or(true, |max| p.regions <= max))
            .map(|p| &p.item)
            .find(|item| predicate(*item))
    }

    fn can_reserve(&self, _agent: &Agent, item: &Item) -> bool {
        !self.reserved_by_others.contains(&item.id)
    }

    fn can_equip(&self, item: &Item, _agent: &Agent) -> bool {
        !self.unequippable.contains(&item.id)
    }

    fn is_burning(&self, item: &Item) -> bool {
        self.burning.contains(&item.id)
    }

    fn has_parts_to_wear(&self, _agent: &Agent, item: &Item) -> bool {
        !self.no_parts.contains(&item.id)
    }

    fn would_displace_locked_item(&self, _agent: &Agent, item: &Item) -> bool {
        self.displaces_locked.contains(&item.id)
    }
}

impl ReservationHost for World {
    type Agent = u64;

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.placed.iter().map(|p| &p.item).find(|i| i.id == id)
    }

    fn reserve(
        &mut self,
        agent: u64,
        target: ItemId,
        job: JobKind,
        claim: ReservationClaim,
    ) -> Result<(), ReservationError> {
        assert_eq!(job, JobKind::EquipWeapon);
        if self.item(target).is_none() {
            return Err(ReservationError::TargetMissing(target));
        }
        if self.forbidden.contains(&target) {
            return Err(ReservationError::Rejected {
                target,
                reason: "forbidden to colonists".to_string(),
            });
        }
        if self.reserved_by_others.contains(&target) {
            return Err(ReservationError::AlreadyReserved(target));
        }
        if let Some((holder, _)) = self.claims.get(&target) {
            if *holder != agent {
                return Err(ReservationError::AlreadyReserved(target));
            }
        }
        self.claims.insert(target, (agent, claim));
        Ok(())
    }
}

/// Fists: 8.2 power every 2 seconds, 4.1 DPS unarmed.
pub fn human_tools() -> Vec<NaturalTool> {
    vec![
        NaturalTool::new("left fist", BodyPartGroup::LeftHand, 8.2, 2.0),
        NaturalTool::new("right fist", BodyPartGroup::RightHand, 8.2, 2.0),
        NaturalTool::new("head", BodyPartGroup::Head, 5.0, 2.0),
    ]
}

/// Unarmed human colonist with an equipment and apparel slot.
pub fn colonist(id: u64) -> Agent {
    AgentState::new(id).with_natural_tools(human_tools())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
