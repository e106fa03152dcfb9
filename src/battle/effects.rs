use crate::battle::creature::Creature;
use crate::battle::percent_of;
use crate::battle::rng::RandomSource;
use schema::StatusKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Percent of max health lost each turn while poisoned.
pub const POISON_PERCENT: u32 = 5;
/// Percent of max health lost each turn while burned.
pub const BURN_PERCENT: u32 = 10;
/// Chance a paralysed creature is able to act on a given turn.
pub const PARALYSIS_ACT_CHANCE: u8 = 50;
/// Sleep drawn at random lasts between 1 and 4 turns (half-open upper bound).
pub const SLEEP_TURNS_LOW: i32 = 1;
pub const SLEEP_TURNS_HIGH: i32 = 5;

/// Per-variant state carried by an active effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectState {
    Poison,
    Burn,
    Paralysis,
    Sleep { turns_remaining: u8 },
}

/// A status condition afflicting one creature.
///
/// Lifecycle is one-way: Active -> Expired. Poison and Burn never expire on
/// their own; they last until something removes them. Sleep removes itself
/// once its counter runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    state: EffectState,
    expired: bool,
}

/// What a single `update` did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTick {
    pub kind: StatusKind,
    pub damage: u32,
    pub can_attack: bool,
    pub expired: bool,
}

impl StatusEffect {
    fn active(state: EffectState) -> Self {
        Self {
            state,
            expired: false,
        }
    }

    pub fn poison() -> Self {
        Self::active(EffectState::Poison)
    }

    pub fn burn() -> Self {
        Self::active(EffectState::Burn)
    }

    pub fn paralysis() -> Self {
        Self::active(EffectState::Paralysis)
    }

    pub fn sleep(turns: u8) -> Self {
        Self::active(EffectState::Sleep {
            turns_remaining: turns,
        })
    }

    /// Sleep with a duration drawn once, uniformly from 1..=4 turns.
    pub fn sleep_random(rng: &mut dyn RandomSource) -> Self {
        let turns = rng.number(SLEEP_TURNS_LOW, SLEEP_TURNS_HIGH);
        Self::sleep(turns as u8)
    }

    /// Fresh instance of the given kind. Sleep draws its duration here.
    pub fn from_kind(kind: StatusKind, rng: &mut dyn RandomSource) -> Self {
        match kind {
            StatusKind::Poison => Self::poison(),
            StatusKind::Burn => Self::burn(),
            StatusKind::Paralysis => Self::paralysis(),
            StatusKind::Sleep => Self::sleep_random(rng),
        }
    }

    pub fn kind(&self) -> StatusKind {
        match self.state {
            EffectState::Poison => StatusKind::Poison,
            EffectState::Burn => StatusKind::Burn,
            EffectState::Paralysis => StatusKind::Paralysis,
            EffectState::Sleep { .. } => StatusKind::Sleep,
        }
    }

    pub fn state(&self) -> EffectState {
        self.state
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Apply one turn of this effect to `target`.
    pub fn update(&mut self, target: &mut Creature, rng: &mut dyn RandomSource) -> EffectTick {
        let mut damage = 0;
        let mut slept_off = false;
        if !self.expired {
            match &mut self.state {
                EffectState::Poison => {
                    damage = percent_of(target.max_health(), POISON_PERCENT);
                    target.apply_damage(damage);
                }
                EffectState::Burn => {
                    damage = percent_of(target.max_health(), BURN_PERCENT);
                    target.apply_damage(damage);
                }
                EffectState::Paralysis => {
                    let can_act = rng.chance(PARALYSIS_ACT_CHANCE);
                    target.set_can_attack(can_act);
                }
                EffectState::Sleep { turns_remaining } => {
                    if *turns_remaining > 0 {
                        *turns_remaining -= 1;
                        target.set_can_attack(false);
                    } else {
                        slept_off = true;
                    }
                }
            }
        }
        if slept_off {
            self.remove(target);
        }

        let tick = EffectTick {
            kind: self.kind(),
            damage,
            can_attack: target.can_attack(),
            expired: self.expired,
        };
        debug!(
            creature = target.name(),
            effect = %tick.kind,
            damage = tick.damage,
            can_attack = tick.can_attack,
            expired = tick.expired,
            "status effect ticked"
        );
        tick
    }

    /// Mark the effect expired and undo anything it holds over the target.
    /// Only the first call has any effect.
    pub fn remove(&mut self, target: &mut Creature) {
        if self.expired {
            return;
        }
        self.expired = true;
        match self.state {
            EffectState::Paralysis | EffectState::Sleep { .. } => target.set_can_attack(true),
            EffectState::Poison | EffectState::Burn => {}
        }
        debug!(creature = target.name(), effect = %self.kind(), "status effect removed");
    }
}
