//! Deterministic, host-agnostic equipment decision primitives.
//!
//! A host game owns pathing, reservations and job execution. This crate
//! describes what a decision policy may ask the host ([`EquipmentHost`],
//! [`ReservationHost`]), the per-agent record it reads ([`AgentState`]), and
//! the single [`DecisionOutcome`] it hands back.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod cooldown;
pub mod error;
pub mod host;
pub mod item;
pub mod outcome;
pub mod policy;
pub mod schedule;
pub mod tick;

pub use agent::{
    AgentId, AgentState, BodyPartGroup, Capabilities, HostilityResponse, NaturalTool, RegionId,
};
pub use cooldown::{Cooldown, CooldownTable, DEFAULT_COOLDOWN_TICKS};
pub use error::ReservationError;
pub use host::{
    EquipmentHost, PathEndMode, ReservationClaim, ReservationHost, ScanRequest, TraverseMode,
};
pub use item::{CombatKind, Item, ItemCategory, ItemId, ItemTraits};
pub use outcome::{DecisionOutcome, JobKind};
pub use policy::{DecisionPolicy, PolicyChain};
pub use schedule::ThinkSchedule;
pub use tick::TickContext;
