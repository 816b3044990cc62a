use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host-assigned item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemId(pub u64);

/// Scan group an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemCategory {
    Weapon,
    Apparel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CombatKind {
    Melee,
    Ranged,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ItemTraits: u8 {
        /// Primary attack is suited to destroying structures.
        const BUILDING_DESTROYER = 1 << 0;
        /// Still usable while the wielder is captive or rebelling.
        const USABLE_UNDER_DURESS = 1 << 1;
        /// Apparel worth grabbing on the way past.
        const PICK_UP_OPPORTUNISTICALLY = 1 << 2;
        /// Personal shield that blocks outgoing ranged fire.
        const SHIELD_BELT = 1 << 3;
        /// Apparel that grants its own attack.
        const ATTACK_VERB = 1 << 4;
        const INGESTIBLE = 1 << 5;
    }
}

impl Default for ItemTraits {
    fn default() -> Self {
        ItemTraits::empty()
    }
}

/// An item as seen by decision policies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub category: ItemCategory,
    /// `None` for apparel and other non-weapons.
    pub combat: Option<CombatKind>,
    /// Average melee damage per second; only meaningful for melee weapons.
    pub melee_dps: f32,
    pub traits: ItemTraits,
    /// Lying on the map, as opposed to carried or worn.
    pub spawned: bool,
}

impl Item {
    pub fn melee_weapon(id: u64, melee_dps: f32) -> Self {
        Self {
            id: ItemId(id),
            category: ItemCategory::Weapon,
            combat: Some(CombatKind::Melee),
            melee_dps,
            traits: ItemTraits::USABLE_UNDER_DURESS,
            spawned: true,
        }
    }

    pub fn ranged_weapon(id: u64) -> Self {
        Self {
            id: ItemId(id),
            category: ItemCategory::Weapon,
            combat: Some(CombatKind::Ranged),
            melee_dps: 0.0,
            traits: ItemTraits::USABLE_UNDER_DURESS,
            spawned: true,
        }
    }

    pub fn apparel(id: u64) -> Self {
        Self {
            id: ItemId(id),
            category: ItemCategory::Apparel,
            combat: None,
            melee_dps: 0.0,
            traits: ItemTraits::empty(),
            spawned: true,
        }
    }

    pub fn with_traits(mut self, traits: ItemTraits) -> Self {
        self.traits |= traits;
        self
    }

    pub fn without_traits(mut self, traits: ItemTraits) -> Self {
        self.traits.remove(traits);
        self
    }

    pub fn is_melee(&self) -> bool {
        self.combat == Some(CombatKind::Melee)
    }

    pub fn is_ranged(&self) -> bool {
        self.combat == Some(CombatKind::Ranged)
    }

    pub fn is_building_destroyer(&self) -> bool {
        self.traits.contains(ItemTraits::BUILDING_DESTROYER)
    }

    pub fn is_usable_under_duress(&self) -> bool {
        self.traits.contains(ItemTraits::USABLE_UNDER_DURESS)
    }

    pub fn picks_up_opportunistically(&self) -> bool {
        self.traits.contains(ItemTraits::PICK_UP_OPPORTUNISTICALLY)
    }

    pub fn is_shield_belt(&self) -> bool {
        self.traits.contains(ItemTraits::SHIELD_BELT)
    }

    pub fn offers_attack_verb(&self) -> bool {
        self.traits.contains(ItemTraits::ATTACK_VERB)
    }

    pub fn is_ingestible(&self) -> bool {
        self.traits.contains(ItemTraits::INGESTIBLE)
    }
}
