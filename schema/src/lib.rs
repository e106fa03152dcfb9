// Creature Battle Schema - Shared type definitions
// The closed enumerations used by both the engine and its template files.

pub use battle_data::*;
pub use creature_types::*;

pub mod battle_data;
pub mod creature_types;
