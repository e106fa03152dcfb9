use crate::battle::creature::Creature;
use crate::battle::effects::StatusEffect;
use crate::battle::rng::RandomSource;
use crate::battle::percent_of;
use crate::battle::type_chart;
use crate::errors::{BattleError, BattleResult};
use schema::{CreatureType, StatusKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One in ten hits is critical.
pub const CRITICAL_CHANCE: u8 = 10;
/// A critical hit adds this percent of the base hit on top.
pub const CRITICAL_BONUS_PERCENT: u32 = 20;
/// An attack comes back once it has sat unused past this many turn ends.
pub const COOLDOWN_TURNS: u8 = 2;

/// Normal attacks only deal damage; special attacks also carry a status
/// payload installed on a clean hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Normal,
    Special { effect: StatusKind },
}

/// A move plus its per-instance cooldown state.
///
/// Each creature owns its own `Attack` values, so cooldowns never leak
/// between creatures or battles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    name: String,
    base_damage: u32,
    attack_type: CreatureType,
    precision: u8,
    kind: AttackKind,
    available: bool,
    turns_unavailable: u8,
}

/// How an attack attempt resolved, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The attacker could not act (paralysis or sleep).
    Blocked,
    /// The precision roll failed.
    Miss,
    Hit,
    CriticalHit,
    /// A special attack installed its effect. Takes precedence over the
    /// hit/critical tags; the damage still applied.
    EffectApplied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attack: String,
    pub kind: OutcomeKind,
    /// Type-adjusted base damage, before clamping at zero health.
    pub damage: u32,
    /// Extra damage from a critical hit, reported apart from `damage`.
    pub critical_damage: u32,
    pub critical: bool,
    pub effectiveness: f32,
    pub effect_applied: Option<StatusKind>,
}

impl AttackOutcome {
    fn without_damage(attack: &str, kind: OutcomeKind) -> Self {
        Self {
            attack: attack.to_string(),
            kind,
            damage: 0,
            critical_damage: 0,
            critical: false,
            effectiveness: 0.0,
            effect_applied: None,
        }
    }

    pub fn landed(&self) -> bool {
        !matches!(self.kind, OutcomeKind::Blocked | OutcomeKind::Miss)
    }

    pub fn total_damage(&self) -> u32 {
        self.damage.saturating_add(self.critical_damage)
    }
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        base_damage: u32,
        attack_type: CreatureType,
        precision: u8,
    ) -> BattleResult<Self> {
        Self::with_kind(name, base_damage, attack_type, precision, AttackKind::Normal)
    }

    pub fn special(
        name: impl Into<String>,
        base_damage: u32,
        attack_type: CreatureType,
        precision: u8,
        effect: StatusKind,
    ) -> BattleResult<Self> {
        Self::with_kind(
            name,
            base_damage,
            attack_type,
            precision,
            AttackKind::Special { effect },
        )
    }

    pub fn with_kind(
        name: impl Into<String>,
        base_damage: u32,
        attack_type: CreatureType,
        precision: u8,
        kind: AttackKind,
    ) -> BattleResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::invalid_argument("attack name must not be empty"));
        }
        if !(1..=100).contains(&precision) {
            return Err(BattleError::invalid_argument(format!(
                "precision of '{}' must be within 1..=100, got {}",
                name, precision
            )));
        }
        Ok(Self {
            name,
            base_damage,
            attack_type,
            precision,
            kind,
            available: true,
            turns_unavailable: 0,
        })
    }

    /// Copy with the same definition and a clean cooldown.
    pub fn fresh_copy(&self) -> Self {
        Self {
            available: true,
            turns_unavailable: 0,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn attack_type(&self) -> CreatureType {
        self.attack_type
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    pub fn effect(&self) -> Option<StatusKind> {
        match self.kind {
            AttackKind::Normal => None,
            AttackKind::Special { effect } => Some(effect),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn turns_unavailable(&self) -> u8 {
        self.turns_unavailable
    }

    /// Damage this attack deals to a defender of the given type on a plain hit.
    pub fn damage_against(&self, defending: CreatureType) -> (u32, f32) {
        let effectiveness = type_chart::classify(self.attack_type, defending);
        (effectiveness.scale(self.base_damage), effectiveness.multiplier())
    }

    /// Resolve one use of this attack against `target`.
    ///
    /// `attacker_can_attack` is the user's current ability to act. The
    /// attack goes on cooldown whatever the outcome.
    pub fn use_on(
        &mut self,
        attacker_can_attack: bool,
        target: &mut Creature,
        rng: &mut dyn RandomSource,
    ) -> AttackOutcome {
        let outcome = self.resolve(attacker_can_attack, target, rng);
        self.available = false;
        self.turns_unavailable = 0;
        outcome
    }

    fn resolve(
        &self,
        attacker_can_attack: bool,
        target: &mut Creature,
        rng: &mut dyn RandomSource,
    ) -> AttackOutcome {
        if !attacker_can_attack {
            debug!(attack = %self.name, "attacker cannot act");
            return AttackOutcome::without_damage(&self.name, OutcomeKind::Blocked);
        }

        if !rng.chance(self.precision) {
            debug!(attack = %self.name, target = target.name(), "attack missed");
            return AttackOutcome::without_damage(&self.name, OutcomeKind::Miss);
        }

        let (damage, effectiveness) = self.damage_against(target.creature_type());
        target.apply_damage(damage);

        let critical = rng.chance(CRITICAL_CHANCE);
        let critical_damage = if critical {
            let bonus = percent_of(damage, CRITICAL_BONUS_PERCENT);
            target.apply_damage(bonus);
            bonus
        } else {
            0
        };

        let mut kind = if critical {
            OutcomeKind::CriticalHit
        } else {
            OutcomeKind::Hit
        };

        let mut effect_applied = None;
        if let AttackKind::Special { effect } = self.kind {
            if target.active_effect().is_none() {
                let instance = StatusEffect::from_kind(effect, rng);
                if target.apply_effect(instance).is_ok() {
                    effect_applied = Some(effect);
                    kind = OutcomeKind::EffectApplied;
                }
            }
        }

        info!(
            attack = %self.name,
            target = target.name(),
            damage,
            critical_damage,
            effectiveness,
            ?kind,
            remaining_health = target.health(),
            "attack landed"
        );

        AttackOutcome {
            attack: self.name.clone(),
            kind,
            damage,
            critical_damage,
            critical,
            effectiveness,
            effect_applied,
        }
    }

    /// End-of-turn cooldown bookkeeping. Returns true on the turn the attack
    /// becomes usable again.
    pub fn advance_turn(&mut self) -> bool {
        if self.available {
            return false;
        }
        self.turns_unavailable += 1;
        if self.turns_unavailable > COOLDOWN_TURNS {
            self.available = true;
            self.turns_unavailable = 0;
            debug!(attack = %self.name, "attack off cooldown");
            return true;
        }
        false
    }
}
