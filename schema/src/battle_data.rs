use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which status condition an effect instance (or a special attack's payload) is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusKind {
    Poison,
    Burn,
    Paralysis,
    Sleep,
}

/// Consumable item kinds. Each item is single use.
///
/// `Display` gives the in-game name ("Super Potion"); parsing accepts
/// either that or the variant name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ItemKind {
    Potion,
    #[strum(to_string = "Super Potion", serialize = "SuperPotion")]
    SuperPotion,
    #[strum(to_string = "Hyper Potion", serialize = "HyperPotion")]
    HyperPotion,
    #[strum(to_string = "Max Potion", serialize = "MaxPotion")]
    MaxPotion,
    Revive,
    Antidote,
    #[strum(to_string = "Burn Heal", serialize = "BurnHeal")]
    BurnHeal,
    #[strum(to_string = "Paralyze Heal", serialize = "ParalyzeHeal")]
    ParalyzeHeal,
    Awakening,
    #[strum(to_string = "Full Heal", serialize = "FullHeal")]
    FullHeal,
}

impl ItemKind {
    /// Flat heal amount for potions. `MaxPotion` restores to full and has no
    /// fixed amount.
    pub fn heal_amount(&self) -> Option<u32> {
        match self {
            ItemKind::Potion => Some(20),
            ItemKind::SuperPotion => Some(50),
            ItemKind::HyperPotion => Some(200),
            _ => None,
        }
    }

    /// The status this item cures. `None` for `FullHeal` means "any", so
    /// check [`ItemKind::cures_any`] first.
    pub fn cures(&self) -> Option<StatusKind> {
        match self {
            ItemKind::Antidote => Some(StatusKind::Poison),
            ItemKind::BurnHeal => Some(StatusKind::Burn),
            ItemKind::ParalyzeHeal => Some(StatusKind::Paralysis),
            ItemKind::Awakening => Some(StatusKind::Sleep),
            _ => None,
        }
    }

    pub fn cures_any(&self) -> bool {
        matches!(self, ItemKind::FullHeal)
    }
}
