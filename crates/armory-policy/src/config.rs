//! Policy configuration loading.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use armory_core::DEFAULT_COOLDOWN_TICKS;
use serde::{Deserialize, Serialize};

/// Tuning for [`crate::WeaponSelectionPolicy`], usually loaded from the host's
/// think-tree definition as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickUpWeaponConfig {
    /// Rank weapons that can break structures above everything else.
    pub prefer_building_destroyers: bool,

    /// Let unarmed agents grab nearby apparel that grants an attack.
    pub pick_up_utility_items: bool,

    /// Ticks between two weapon pickups for the same agent.
    #[serde(default = "default_cooldown_ticks")]
    pub cooldown_ticks: u64,

    /// Search radius for weapons.
    #[serde(default = "default_weapon_search_radius")]
    pub weapon_search_radius: f32,

    /// Search radius for utility apparel.
    #[serde(default = "default_utility_search_radius")]
    pub utility_search_radius: f32,

    /// Regions the utility apparel scan may flood through.
    #[serde(default = "default_utility_search_max_regions")]
    pub utility_search_max_regions: u32,

    /// Added on top of the species' unarmed DPS to get the minimum useful melee DPS.
    #[serde(default = "default_melee_dps_margin")]
    pub melee_dps_margin: f32,
}

fn default_cooldown_ticks() -> u64 {
    DEFAULT_COOLDOWN_TICKS
}
fn default_weapon_search_radius() -> f32 {
    500.0
}
fn default_utility_search_radius() -> f32 {
    8.0
}
fn default_utility_search_max_regions() -> u32 {
    15
}
fn default_melee_dps_margin() -> f32 {
    2.0
}

impl Default for PickUpWeaponConfig {
    fn default() -> Self {
        Self {
            prefer_building_destroyers: false,
            pick_up_utility_items: false,
            cooldown_ticks: default_cooldown_ticks(),
            weapon_search_radius: default_weapon_search_radius(),
            utility_search_radius: default_utility_search_radius(),
            utility_search_max_regions: default_utility_search_max_regions(),
            melee_dps_margin: default_melee_dps_margin(),
        }
    }
}

impl PickUpWeaponConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy config from {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid policy config in {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).context("Failed to parse policy config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.weapon_search_radius > 0.0,
            "weapon_search_radius must be positive, got {}",
            self.weapon_search_radius
        );
        ensure!(
            self.utility_search_radius > 0.0,
            "utility_search_radius must be positive, got {}",
            self.utility_search_radius
        );
        ensure!(
            self.utility_search_max_regions > 0,
            "utility_search_max_regions must be at least 1"
        );
        ensure!(
            self.melee_dps_margin.is_finite() && self.melee_dps_margin >= 0.0,
            "melee_dps_margin must be a non-negative number, got {}",
            self.melee_dps_margin
        );
        Ok(())
    }
}
