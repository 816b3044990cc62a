//! Umbrella crate that re-exports the `armory-*` crates.
//!
//! Hosts normally depend on this crate only and register
//! [`policy::WeaponSelectionPolicy`] in their think chain.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use armory_core as core;

#[cfg(feature = "policy")]
#[cfg_attr(docsrs, doc(cfg(feature = "policy")))]
pub use armory_policy as policy;

/// Everything a host needs to wire the pickup policy into its think chain.
#[cfg(feature = "policy")]
#[cfg_attr(docsrs, doc(cfg(feature = "policy")))]
pub mod prelude {
    pub use armory_core::{
        AgentId, AgentState, DecisionOutcome, DecisionPolicy, EquipmentHost, Item, ItemId,
        PolicyChain, ReservationHost, TickContext,
    };
    pub use armory_policy::{
        EquipJob, EquipReservation, PickUpWeaponConfig, WeaponSelectionPolicy,
    };
}
