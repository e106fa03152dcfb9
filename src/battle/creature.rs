use crate::battle::attack::{Attack, AttackOutcome, OutcomeKind};
use crate::battle::effects::{EffectTick, StatusEffect};
use crate::battle::rng::RandomSource;
use crate::battle::Selector;
use crate::errors::{BattleError, BattleResult};
use schema::{CreatureType, StatusKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A creature knows between one and four attacks.
pub const MAX_ATTACKS: usize = 4;

/// A live battle creature.
///
/// Health is always within `0..=max_health`, and at most one status effect
/// is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    name: String,
    creature_type: CreatureType,
    max_health: u32,
    health: u32,
    attacks: Vec<Attack>,
    active_effect: Option<StatusEffect>,
    can_attack: bool,
}

/// What happened to a creature at the end of its turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TurnUpkeep {
    pub effect: Option<EffectTick>,
    /// Attacks that came off cooldown this turn.
    pub recovered: Vec<String>,
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        creature_type: CreatureType,
        max_health: u32,
        attacks: Vec<Attack>,
    ) -> BattleResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::invalid_argument("creature name must not be empty"));
        }
        if max_health == 0 {
            return Err(BattleError::invalid_argument(format!(
                "max health of '{}' must be at least 1",
                name
            )));
        }
        if attacks.is_empty() || attacks.len() > MAX_ATTACKS {
            return Err(BattleError::invalid_argument(format!(
                "'{}' must know between 1 and {} attacks, got {}",
                name,
                MAX_ATTACKS,
                attacks.len()
            )));
        }
        Ok(Self {
            name,
            creature_type,
            max_health,
            health: max_health,
            attacks,
            active_effect: None,
            can_attack: true,
        })
    }

    /// Deep copy as a brand new battle entity: full health, no effect, able
    /// to act, and every attack with a clean cooldown.
    pub fn fresh_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            creature_type: self.creature_type,
            max_health: self.max_health,
            health: self.max_health,
            attacks: self.attacks.iter().map(Attack::fresh_copy).collect(),
            active_effect: None,
            can_attack: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creature_type(&self) -> CreatureType {
        self.creature_type
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub(crate) fn set_can_attack(&mut self, can_attack: bool) {
        self.can_attack = can_attack;
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// Attacks currently off cooldown, in their original order.
    pub fn available_attacks(&self) -> Vec<&Attack> {
        self.attacks.iter().filter(|a| a.is_available()).collect()
    }

    pub fn active_effect(&self) -> Option<&StatusEffect> {
        self.active_effect.as_ref()
    }

    pub fn active_status(&self) -> Option<StatusKind> {
        self.active_effect.map(|e| e.kind())
    }

    /// Resolve a selector to an attack slot.
    pub fn find_attack(&self, selector: Selector<'_>) -> BattleResult<usize> {
        match selector {
            Selector::Index(index) => {
                if index < self.attacks.len() {
                    Ok(index)
                } else {
                    Err(BattleError::out_of_range(format!(
                        "attack index {} on '{}' (has {})",
                        index,
                        self.name,
                        self.attacks.len()
                    )))
                }
            }
            Selector::Name(name) => self
                .attacks
                .iter()
                .position(|a| a.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    BattleError::not_found(format!("attack '{}' on '{}'", name, self.name))
                }),
        }
    }

    /// Use one of this creature's attacks on `target`.
    ///
    /// A miss ticks this creature's own status effect forward right away.
    pub fn attack<'a>(
        &mut self,
        target: &mut Creature,
        attack: impl Into<Selector<'a>>,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<AttackOutcome> {
        let slot = self.find_attack(attack.into())?;
        if self.is_fainted() {
            return Err(BattleError::invalid_operation(format!(
                "'{}' has fainted and cannot attack",
                self.name
            )));
        }
        if target.is_fainted() {
            return Err(BattleError::invalid_operation(format!(
                "'{}' has already fainted",
                target.name
            )));
        }
        if !self.attacks[slot].is_available() {
            return Err(BattleError::invalid_operation(format!(
                "'{}' is cooling down",
                self.attacks[slot].name()
            )));
        }

        let can_attack = self.can_attack;
        let outcome = self.attacks[slot].use_on(can_attack, target, rng);
        if outcome.kind == OutcomeKind::Miss {
            self.update_effect(rng);
        }
        Ok(outcome)
    }

    /// Restore health, saturating at max. Returns the amount actually gained.
    pub fn heal(&mut self, amount: i32) -> BattleResult<u32> {
        let amount = non_negative(amount, "heal")?;
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        Ok(self.health - before)
    }

    /// Remove health, saturating at zero. Returns the amount actually lost.
    pub fn damage(&mut self, amount: i32) -> BattleResult<u32> {
        let amount = non_negative(amount, "damage")?;
        Ok(self.apply_damage(amount))
    }

    pub(crate) fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        if self.health == 0 && lost > 0 {
            debug!(creature = %self.name, "fainted");
        }
        lost
    }

    /// Install a status effect. Fails if one is already active; the active
    /// one is left untouched.
    pub fn apply_effect(&mut self, effect: StatusEffect) -> BattleResult<()> {
        if let Some(active) = &self.active_effect {
            return Err(BattleError::invalid_operation(format!(
                "'{}' is already affected by {}",
                self.name,
                active.kind()
            )));
        }
        debug!(creature = %self.name, effect = %effect.kind(), "status effect applied");
        self.active_effect = Some(effect);
        Ok(())
    }

    /// Tick the active effect once, clearing it if it expired.
    pub fn update_effect(&mut self, rng: &mut dyn RandomSource) -> Option<EffectTick> {
        let mut effect = self.active_effect.take()?;
        let tick = effect.update(self, rng);
        // An expiring effect already ran its own removal inside `update`.
        if !effect.is_expired() {
            self.active_effect = Some(effect);
        }
        Some(tick)
    }

    /// Force off any active effect. No-op when none is active.
    pub fn remove_effect(&mut self) -> Option<StatusKind> {
        let mut effect = self.active_effect.take()?;
        effect.remove(self);
        Some(effect.kind())
    }

    /// End-of-turn bookkeeping: age the status effect, then every attack's
    /// cooldown.
    pub fn end_turn(&mut self, rng: &mut dyn RandomSource) -> TurnUpkeep {
        let effect = self.update_effect(rng);
        let recovered = self
            .attacks
            .iter_mut()
            .filter_map(|a| a.advance_turn().then(|| a.name().to_string()))
            .collect();
        TurnUpkeep { effect, recovered }
    }
}

fn non_negative(amount: i32, what: &str) -> BattleResult<u32> {
    u32::try_from(amount).map_err(|_| {
        BattleError::invalid_argument(format!("{} amount must not be negative, got {}", what, amount))
    })
}
