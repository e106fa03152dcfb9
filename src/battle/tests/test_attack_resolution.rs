#[cfg(test)]
mod tests {
    use crate::battle::attack::{Attack, OutcomeKind};
    use crate::battle::effects::StatusEffect;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::tests::common::{
        assert_ok, hit_no_crit, no_rolls, special_strike, strike, TestCreatureBuilder,
    };
    use crate::errors::BattleError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{CreatureType, StatusKind};

    #[test]
    fn test_water_attack_is_neutral_against_grass() {
        let mut attacker = TestCreatureBuilder::new("Tidepup", CreatureType::Water, 100)
            .with_attack(strike("Hydro Blast", CreatureType::Water, 100))
            .build();
        let mut defender = TestCreatureBuilder::new("Sproutle", CreatureType::Grass, 100).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Hydro Blast", &mut hit_no_crit()));

        assert_eq!(outcome.kind, OutcomeKind::Hit);
        assert_eq!(outcome.effectiveness, 1.0);
        assert_eq!(outcome.damage, 100);
        assert_eq!(defender.health(), 0);
        assert!(defender.is_fainted());
    }

    #[test]
    fn test_electric_attack_from_water_creature_is_strong_against_grass() {
        let mut attacker = TestCreatureBuilder::new("Tidepup", CreatureType::Water, 100)
            .with_attack(strike("Thunder Shock", CreatureType::Electric, 50))
            .build();
        let mut defender = TestCreatureBuilder::new("Sproutle", CreatureType::Grass, 100).build();

        let outcome = assert_ok(attacker.attack(&mut defender, 0usize, &mut hit_no_crit()));

        assert_eq!(outcome.effectiveness, 2.0);
        assert_eq!(outcome.damage, 100);
        assert_eq!(defender.health(), 0);
    }

    #[rstest]
    #[case("neutral", CreatureType::Normal, CreatureType::Normal, 45, 45)]
    #[case("strong", CreatureType::Fire, CreatureType::Grass, 45, 90)]
    #[case("weak rounds down", CreatureType::Fire, CreatureType::Water, 45, 22)]
    #[case("immune", CreatureType::Normal, CreatureType::Ghost, 45, 0)]
    fn test_damage_is_floored_type_adjusted_base(
        #[case] desc: &str,
        #[case] attack_type: CreatureType,
        #[case] defender_type: CreatureType,
        #[case] base_damage: u32,
        #[case] expected: u32,
    ) {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Move", attack_type, base_damage))
            .build();
        let mut defender = TestCreatureBuilder::new("D", defender_type, 200).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Move", &mut hit_no_crit()));

        assert_eq!(outcome.damage, expected, "{}", desc);
        assert_eq!(defender.health(), 200 - expected, "{}", desc);
    }

    #[test]
    fn test_failed_precision_roll_misses_without_damage() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(Attack::new("Wild Swing", 80, CreatureType::Normal, 60).unwrap())
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();
        // 61 > 60 precision: miss, and no crit roll follows.
        let mut rng = ScriptedRng::new(vec![61]);

        let outcome = assert_ok(attacker.attack(&mut defender, "Wild Swing", &mut rng));

        assert_eq!(outcome.kind, OutcomeKind::Miss);
        assert!(!outcome.landed());
        assert_eq!(defender.health(), 100);
        assert_eq!(rng.remaining(), 0);
        assert!(!attacker.attacks()[0].is_available(), "a miss still starts the cooldown");
    }

    #[test]
    fn test_miss_ticks_attackers_own_effect() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(Attack::new("Wild Swing", 80, CreatureType::Normal, 60).unwrap())
            .with_effect(StatusEffect::poison())
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Wild Swing", &mut ScriptedRng::new(vec![99])));

        assert_eq!(outcome.kind, OutcomeKind::Miss);
        assert_eq!(attacker.health(), 95);
        assert_eq!(defender.health(), 100);
    }

    #[test]
    fn test_hit_does_not_tick_attackers_effect() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Tackle", CreatureType::Normal, 10))
            .with_effect(StatusEffect::poison())
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();

        assert_ok(attacker.attack(&mut defender, "Tackle", &mut hit_no_crit()));

        assert_eq!(attacker.health(), 100);
    }

    #[test]
    fn test_sleeping_attacker_is_blocked_without_rolling() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Tackle", CreatureType::Normal, 10))
            .with_effect(StatusEffect::sleep(2))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();
        let mut rng = no_rolls();
        attacker.update_effect(&mut rng);
        assert!(!attacker.can_attack());

        let outcome = assert_ok(attacker.attack(&mut defender, "Tackle", &mut rng));

        assert_eq!(outcome.kind, OutcomeKind::Blocked);
        assert_eq!(outcome.total_damage(), 0);
        assert_eq!(defender.health(), 100);
        assert!(!attacker.attacks()[0].is_available());
    }

    #[test]
    fn test_critical_hit_adds_a_fifth_reported_separately() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Slam", CreatureType::Normal, 50))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();
        // Hit, then a crit roll at exactly the 10% threshold.
        let mut rng = ScriptedRng::new(vec![1, 10]);

        let outcome = assert_ok(attacker.attack(&mut defender, "Slam", &mut rng));

        assert_eq!(outcome.kind, OutcomeKind::CriticalHit);
        assert!(outcome.critical);
        assert_eq!(outcome.damage, 50);
        assert_eq!(outcome.critical_damage, 10);
        assert_eq!(outcome.total_damage(), 60);
        assert_eq!(defender.health(), 40);
    }

    #[rstest]
    #[case("neutral keeps every unit", CreatureType::Normal, CreatureType::Normal, 16_777_217, 16_777_217)]
    #[case("weak halves exactly", CreatureType::Fire, CreatureType::Water, 16_777_217, 8_388_608)]
    #[case("strong saturates", CreatureType::Fire, CreatureType::Grass, u32::MAX, u32::MAX)]
    #[case("immune stays zero", CreatureType::Normal, CreatureType::Ghost, u32::MAX, 0)]
    fn test_large_base_damage_is_exact(
        #[case] desc: &str,
        #[case] attack_type: CreatureType,
        #[case] defender_type: CreatureType,
        #[case] base_damage: u32,
        #[case] expected: u32,
    ) {
        let attack = assert_ok(Attack::new("Huge", base_damage, attack_type, 100));
        let (damage, _) = attack.damage_against(defender_type);
        assert_eq!(damage, expected, "{}", desc);
    }

    #[test]
    fn test_critical_bonus_on_large_hit_does_not_overflow() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Meteor", CreatureType::Normal, 300_000_000))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, u32::MAX).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Meteor", &mut ScriptedRng::new(vec![1, 1])));

        assert_eq!(outcome.kind, OutcomeKind::CriticalHit);
        assert_eq!(outcome.damage, 300_000_000);
        assert_eq!(outcome.critical_damage, 60_000_000);
        assert_eq!(defender.health(), u32::MAX - 360_000_000);
    }

    #[test]
    fn test_special_attack_installs_effect_on_clean_target() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Ghost, 100)
            .with_attack(special_strike("Hypnotic Gaze", CreatureType::Ghost, 0, StatusKind::Sleep))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Psychic, 100).build();
        // Hit, no crit, then the sleep duration draw.
        let mut rng = ScriptedRng::new(vec![1, 100, 3]);

        let outcome = assert_ok(attacker.attack(&mut defender, "Hypnotic Gaze", &mut rng));

        assert_eq!(outcome.kind, OutcomeKind::EffectApplied);
        assert_eq!(outcome.effect_applied, Some(StatusKind::Sleep));
        assert_eq!(defender.active_status(), Some(StatusKind::Sleep));
        assert_eq!(
            defender.active_effect().map(|e| e.state()),
            Some(crate::battle::effects::EffectState::Sleep { turns_remaining: 3 })
        );
    }

    #[test]
    fn test_effect_tag_overrides_critical_but_damage_still_applies() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Fire, 100)
            .with_attack(special_strike("Ember", CreatureType::Fire, 30, StatusKind::Burn))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Ember", &mut ScriptedRng::new(vec![1, 5])));

        assert_eq!(outcome.kind, OutcomeKind::EffectApplied);
        assert!(outcome.critical);
        assert_eq!(outcome.total_damage(), 36);
        assert_eq!(defender.health(), 64);
        assert_eq!(defender.active_status(), Some(StatusKind::Burn));
    }

    #[test]
    fn test_special_attack_does_not_overwrite_existing_effect() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Poison, 100)
            .with_attack(special_strike("Poison Fang", CreatureType::Poison, 20, StatusKind::Poison))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100)
            .with_effect(StatusEffect::burn())
            .build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Poison Fang", &mut hit_no_crit()));

        assert_eq!(outcome.kind, OutcomeKind::Hit);
        assert_eq!(outcome.effect_applied, None);
        assert_eq!(defender.active_status(), Some(StatusKind::Burn));
        assert_eq!(defender.health(), 80);
    }

    #[test]
    fn test_missed_special_attack_applies_nothing() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Electric, 100)
            .with_attack(Attack::special("Static Jolt", 20, CreatureType::Electric, 90, StatusKind::Paralysis).unwrap())
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Water, 100).build();

        let outcome = assert_ok(attacker.attack(&mut defender, "Static Jolt", &mut ScriptedRng::new(vec![95])));

        assert_eq!(outcome.kind, OutcomeKind::Miss);
        assert_eq!(defender.active_effect(), None);
    }

    #[test]
    fn test_attack_lookup_errors() {
        let mut attacker = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_attack(strike("Tackle", CreatureType::Normal, 10))
            .build();
        let mut defender = TestCreatureBuilder::new("D", CreatureType::Normal, 100).build();

        assert!(matches!(
            attacker.attack(&mut defender, "Hyper Beam", &mut no_rolls()),
            Err(BattleError::NotFound(_))
        ));
        assert!(matches!(
            attacker.attack(&mut defender, 4usize, &mut no_rolls()),
            Err(BattleError::OutOfRange(_))
        ));
        // Names match regardless of case.
        assert_ok(attacker.attack(&mut defender, "tackle", &mut hit_no_crit()));
    }

    #[test]
    fn test_fainted_creatures_cannot_trade_blows() {
        let mut fainted = TestCreatureBuilder::new("A", CreatureType::Normal, 100)
            .with_health(0)
            .build();
        let mut healthy = dummy_with_tackle();

        assert!(matches!(
            fainted.attack(&mut healthy, "Tackle", &mut no_rolls()),
            Err(BattleError::InvalidOperation(_))
        ));
        assert!(matches!(
            healthy.attack(&mut fainted, "Tackle", &mut no_rolls()),
            Err(BattleError::InvalidOperation(_))
        ));
    }

    fn dummy_with_tackle() -> crate::battle::creature::Creature {
        TestCreatureBuilder::new("B", CreatureType::Normal, 100)
            .with_attack(strike("Tackle", CreatureType::Normal, 10))
            .build()
    }
}
