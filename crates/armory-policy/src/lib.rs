//! Opportunistic weapon and utility-item selection.
//!
//! [`WeaponSelectionPolicy`] is a [`armory_core::DecisionPolicy`]: on each think
//! pass it looks around the agent and proposes at most one equipment job.
//! [`EquipReservation`] claims the chosen weapon before the host starts the job.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod pick_up;
pub mod reserve;
pub mod score;

pub use config::PickUpWeaponConfig;
pub use pick_up::{SkipReason, WeaponSelectionPolicy};
pub use reserve::{EquipJob, EquipReservation};
pub use score::{min_melee_dps_threshold, WeaponScorer};
