//! Creature Battle Engine
//!
//! Rules for turn-based creature battles: precision-gated attacks, an
//! attacker-centric type chart, status effects, attack cooldowns and a
//! party-level standing score. Front ends, menus and turn prompting live
//! outside this crate; everything here returns structured outcomes.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod registry;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CreatureType, ItemKind, StatusKind};

// --- From this crate's modules (`src/`) ---
pub use battle::attack::{Attack, AttackKind, AttackOutcome, OutcomeKind};
pub use battle::creature::{Creature, TurnUpkeep};
pub use battle::effects::{EffectTick, StatusEffect};
pub use battle::engine::{ActionReport, Battle, BattleAction};
pub use battle::items::{Item, ItemEffect, ItemUse};
pub use battle::party::{Party, SwitchOutcome};
pub use battle::rng::{EngineRng, RandomSource, ScriptedRng};
pub use battle::type_chart::{effectiveness, effectiveness_by_name, Effectiveness};
pub use battle::Selector;
pub use registry::Registry;

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult};
