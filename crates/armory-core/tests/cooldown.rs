use armory_core::{Cooldown, CooldownTable, DEFAULT_COOLDOWN_TICKS};

#[test]
fn fresh_cooldown_is_inactive() {
    let cooldown = Cooldown::default();
    assert_eq!(cooldown.last_decision(), None);
    assert!(!cooldown.is_active(0, DEFAULT_COOLDOWN_TICKS));
}

#[test]
fn decision_at_1000_blocks_until_1100() {
    let mut cooldown = Cooldown::default();
    cooldown.record(1_000);

    assert!(cooldown.is_active(1_000, 100));
    assert!(cooldown.is_active(1_050, 100));
    assert!(cooldown.is_active(1_099, 100));
    assert!(!cooldown.is_active(1_100, 100));

    cooldown.clear();
    assert!(!cooldown.is_active(1_050, 100));
}

#[test]
fn rewound_clock_keeps_cooldown_active() {
    let mut cooldown = Cooldown::default();
    cooldown.record(500);
    assert!(cooldown.is_active(10, 100));
}

#[test]
fn table_tracks_agents_independently() {
    let mut table = CooldownTable::<u64>::default();
    assert_eq!(table.cooldown_ticks(), DEFAULT_COOLDOWN_TICKS);
    assert!(table.is_empty());

    table.record(1, 1_000);
    table.record(2, 1_080);

    assert!(table.is_active(1, 1_050));
    assert!(!table.is_active(1, 1_150));
    assert!(table.is_active(2, 1_150));
    assert!(!table.is_active(3, 1_150));
    assert_eq!(table.get(3), Cooldown::default());
    assert_eq!(table.len(), 2);
}

#[test]
fn table_evicts_removed_and_expired_agents() {
    let mut table = CooldownTable::<u32>::new(50);
    table.record(1, 0);
    table.record(2, 40);
    table.record(3, 80);

    assert_eq!(table.evict(3).and_then(|c| c.last_decision()), Some(80));
    assert_eq!(table.evict(3), None);

    // At tick 60 agent 1 has expired, agent 2 has not.
    assert_eq!(table.evict_expired(60), 1);
    assert_eq!(table.len(), 1);
    assert!(table.is_active(2, 60));
}
