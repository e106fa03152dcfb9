use crate::battle::creature::Creature;
use crate::errors::{BattleError, BattleResult};
use schema::{ItemKind, StatusKind};
use serde::{Deserialize, Serialize};

/// A single-use consumable held in a party's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// An item named after its kind, e.g. "Super Potion".
    pub fn of_kind(kind: ItemKind) -> Self {
        Self::new(kind.to_string(), kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Healed { amount: u32 },
    Revived { health: u32 },
    Cured { status: StatusKind },
}

/// Result of a successful item use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    pub item: Item,
    pub target: String,
    pub effect: ItemEffect,
}

/// Apply an item's effect to `target`.
///
/// Fails without touching the creature when the item has nothing to do:
/// potions on a fainted creature, Revive on a living one, or a cure with no
/// matching effect active.
pub fn apply_item(kind: ItemKind, target: &mut Creature) -> BattleResult<ItemEffect> {
    match kind {
        ItemKind::Potion | ItemKind::SuperPotion | ItemKind::HyperPotion | ItemKind::MaxPotion => {
            if target.is_fainted() {
                return Err(BattleError::invalid_operation(format!(
                    "{} cannot heal fainted '{}'",
                    kind,
                    target.name()
                )));
            }
            let amount = kind.heal_amount().unwrap_or(target.max_health());
            let healed = target.heal(clamp_to_i32(amount))?;
            Ok(ItemEffect::Healed { amount: healed })
        }
        ItemKind::Revive => {
            if !target.is_fainted() {
                return Err(BattleError::invalid_operation(format!(
                    "'{}' has not fainted",
                    target.name()
                )));
            }
            target.heal(clamp_to_i32(target.max_health() / 2))?;
            Ok(ItemEffect::Revived {
                health: target.health(),
            })
        }
        ItemKind::Antidote
        | ItemKind::BurnHeal
        | ItemKind::ParalyzeHeal
        | ItemKind::Awakening
        | ItemKind::FullHeal => {
            let active = target.active_status().ok_or_else(|| {
                BattleError::invalid_operation(format!("'{}' has no status to cure", target.name()))
            })?;
            let cures = kind.cures_any() || kind.cures() == Some(active);
            if !cures {
                return Err(BattleError::invalid_operation(format!(
                    "{} does not cure {} on '{}'",
                    kind,
                    active,
                    target.name()
                )));
            }
            target.remove_effect();
            Ok(ItemEffect::Cured { status: active })
        }
    }
}

fn clamp_to_i32(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}
