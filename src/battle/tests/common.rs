use crate::battle::attack::Attack;
use crate::battle::creature::Creature;
use crate::battle::effects::StatusEffect;
use crate::battle::items::Item;
use crate::battle::party::Party;
use crate::battle::rng::ScriptedRng;
use crate::errors::BattleResult;
use schema::{CreatureType, ItemKind, StatusKind};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Tidepup", CreatureType::Water, 100)
///     .with_attack(strike("Splash", CreatureType::Water, 40))
///     .with_health(50)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    creature_type: CreatureType,
    max_health: u32,
    attacks: Vec<Attack>,
    health: Option<u32>,
    effect: Option<StatusEffect>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str, creature_type: CreatureType, max_health: u32) -> Self {
        Self {
            name: name.to_string(),
            creature_type,
            max_health,
            attacks: Vec::new(),
            health: None,
            effect: None,
        }
    }

    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    /// Sets the current health. If not set, health will be max.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Builds the `Creature`. Creatures without attacks get a plain Tackle.
    pub fn build(self) -> Creature {
        let attacks = if self.attacks.is_empty() {
            vec![strike("Tackle", CreatureType::Normal, 10)]
        } else {
            self.attacks
        };
        let mut creature = match Creature::new(self.name, self.creature_type, self.max_health, attacks) {
            Ok(creature) => creature,
            Err(err) => panic!("Failed to build test creature: {}", err),
        };
        if let Some(health) = self.health {
            let missing = creature.max_health() - health;
            assert_ok(creature.damage(missing as i32));
        }
        if let Some(effect) = self.effect {
            assert_ok(creature.apply_effect(effect));
        }
        creature
    }
}

/// A normal attack with perfect precision.
pub fn strike(name: &str, attack_type: CreatureType, base_damage: u32) -> Attack {
    assert_ok(Attack::new(name, base_damage, attack_type, 100))
}

/// A special attack with perfect precision carrying `effect`.
pub fn special_strike(name: &str, attack_type: CreatureType, base_damage: u32, effect: StatusKind) -> Attack {
    assert_ok(Attack::special(name, base_damage, attack_type, 100, effect))
}

/// A plain 100 HP Normal-type creature.
pub fn dummy(name: &str) -> Creature {
    TestCreatureBuilder::new(name, CreatureType::Normal, 100).build()
}

pub fn create_test_party(name: &str, creatures: Vec<Creature>, items: Vec<ItemKind>) -> Party {
    let items = items.into_iter().map(Item::of_kind).collect();
    assert_ok(Party::new(name, creatures, items))
}

/// One precision roll that hits, one crit roll that misses.
pub fn hit_no_crit() -> ScriptedRng {
    ScriptedRng::new(vec![1, 100])
}

/// A script with no rolls. Any draw panics, proving nothing was rolled.
pub fn no_rolls() -> ScriptedRng {
    ScriptedRng::new(vec![])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
