mod common;

use armory_core::{AgentState, BodyPartGroup, Item, ItemTraits, NaturalTool};
use armory_policy::{min_melee_dps_threshold, WeaponScorer};

use common::colonist;

#[test]
fn threshold_uses_first_hand_tool_plus_margin() {
    let agent = colonist(1);
    let threshold = min_melee_dps_threshold(&agent, 2.0);
    assert!((threshold - 6.1).abs() < 1e-4, "threshold = {threshold}");
}

#[test]
fn scorer_for_agent_carries_the_threshold() {
    let scorer = WeaponScorer::for_agent(&colonist(1), false, 2.0);
    assert!((scorer.min_melee_dps() - 6.1).abs() < 1e-4);
    assert_eq!(scorer.score(Some(&Item::melee_weapon(1, 6.0))), 0);
    assert_eq!(scorer.score(Some(&Item::melee_weapon(2, 6.2))), 1);
}

#[test]
fn threshold_skips_tools_not_linked_to_hands() {
    let agent = AgentState::new(1u64).with_natural_tools(vec![
        NaturalTool::new("teeth", BodyPartGroup::Teeth, 20.0, 1.0),
        NaturalTool::new("right fist", BodyPartGroup::RightHand, 3.0, 1.5),
    ]);
    let threshold = min_melee_dps_threshold(&agent, 2.0);
    assert!((threshold - 4.0).abs() < 1e-4, "threshold = {threshold}");
}

#[test]
fn threshold_without_hands_is_the_margin() {
    let snake = AgentState::new(1u64).with_natural_tools(vec![NaturalTool::new(
        "fangs",
        BodyPartGroup::Teeth,
        15.0,
        1.2,
    )]);
    assert_eq!(min_melee_dps_threshold(&snake, 2.0), 2.0);
    assert_eq!(min_melee_dps_threshold(&AgentState::new(2u64), 2.0), 2.0);
}

#[test]
fn zero_cooldown_tool_contributes_nothing() {
    let agent = AgentState::new(1u64).with_natural_tools(vec![NaturalTool::new(
        "odd fist",
        BodyPartGroup::LeftHand,
        10.0,
        0.0,
    )]);
    assert_eq!(min_melee_dps_threshold(&agent, 2.0), 2.0);
}

#[test]
fn score_tiers() {
    let scorer = WeaponScorer::new(false, 6.0);
    assert_eq!(scorer.score(None), 0);
    assert_eq!(scorer.score(Some(&Item::melee_weapon(1, 5.9))), 0);
    assert_eq!(scorer.score(Some(&Item::melee_weapon(2, 6.0))), 1);
    assert_eq!(scorer.score(Some(&Item::ranged_weapon(3))), 2);

    // Destroyers only rank higher when preferred.
    let destroyer = Item::ranged_weapon(4).with_traits(ItemTraits::BUILDING_DESTROYER);
    assert_eq!(scorer.score(Some(&destroyer)), 2);
    assert_eq!(WeaponScorer::new(true, 6.0).score(Some(&destroyer)), 3);
}

#[test]
fn weak_melee_destroyer_still_scores_zero() {
    let scorer = WeaponScorer::new(true, 6.0);
    let club = Item::melee_weapon(1, 3.0).with_traits(ItemTraits::BUILDING_DESTROYER);
    assert_eq!(scorer.score(Some(&club)), 0);
}

#[test]
fn destroyer_outranks_every_other_tier() {
    let scorer = WeaponScorer::new(true, 0.0);
    let destroyer = scorer.score(Some(
        &Item::melee_weapon(1, 1.0).with_traits(ItemTraits::BUILDING_DESTROYER),
    ));
    let ranged = scorer.score(Some(&Item::ranged_weapon(2)));
    let melee = scorer.score(Some(&Item::melee_weapon(3, 30.0)));
    assert!(destroyer > ranged && ranged > melee);
}
