use crate::errors::{BattleError, BattleResult};
use schema::CreatureType;
use std::str::FromStr;

/// How an attacking type fares against a defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Immune,
    Weak,
    Neutral,
    Strong,
}

impl Effectiveness {
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Weak => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Strong => 2.0,
        }
    }

    /// `floor(amount * multiplier)` in integer math, saturating at `u32::MAX`.
    pub fn scale(self, amount: u32) -> u32 {
        match self {
            Effectiveness::Immune => 0,
            Effectiveness::Weak => amount / 2,
            Effectiveness::Neutral => amount,
            Effectiveness::Strong => amount.saturating_mul(2),
        }
    }
}

/// The defending types an attacking type is strong against, weak against,
/// or cannot touch. Anything not listed is neutral.
#[derive(Debug, Clone, Copy)]
pub struct ChartEntry {
    pub strong: &'static [CreatureType],
    pub weak: &'static [CreatureType],
    pub immune: &'static [CreatureType],
}

/// Chart row for an attacking type.
///
/// Rows are attacker-centric and are not mirrored: Electric is strong
/// against Grass, but Grass is neutral against Electric.
pub fn chart_entry(attacking: CreatureType) -> ChartEntry {
    use CreatureType::*;

    match attacking {
        Normal => row(&[], &[Rock], &[Ghost]),
        Fighting => row(&[Normal, Rock, Ice], &[Flying, Poison, Psychic, Bug], &[Ghost]),
        Flying => row(&[Fighting, Bug, Grass], &[Rock, Electric], &[]),
        Poison => row(&[Grass, Bug], &[Poison, Ground, Rock, Ghost], &[]),
        Ground => row(&[Fire, Electric, Poison, Rock], &[Grass, Bug], &[Flying]),
        Rock => row(&[Fire, Ice, Flying, Bug], &[Fighting, Ground], &[]),
        Bug => row(&[Grass, Psychic, Poison], &[Fire, Fighting, Flying, Ghost], &[]),
        Ghost => row(&[Ghost, Psychic], &[], &[Normal]),
        Fire => row(&[Grass, Ice, Bug], &[Fire, Water, Rock, Dragon], &[]),
        Water => row(&[Fire, Ground, Rock], &[Water, Dragon], &[]),
        Grass => row(&[Water, Ground, Rock], &[Fire, Grass, Poison, Flying, Bug, Dragon], &[]),
        Electric => row(&[Water, Flying, Grass], &[Electric, Dragon], &[Ground]),
        Psychic => row(&[Fighting, Poison], &[Psychic], &[]),
        Ice => row(&[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice], &[]),
        Dragon => row(&[Dragon], &[], &[]),
    }
}

fn row(
    strong: &'static [CreatureType],
    weak: &'static [CreatureType],
    immune: &'static [CreatureType],
) -> ChartEntry {
    ChartEntry {
        strong,
        weak,
        immune,
    }
}

/// Classify an attacking type against a defending type.
pub fn classify(attacking: CreatureType, defending: CreatureType) -> Effectiveness {
    let entry = chart_entry(attacking);
    if entry.immune.contains(&defending) {
        Effectiveness::Immune
    } else if entry.strong.contains(&defending) {
        Effectiveness::Strong
    } else if entry.weak.contains(&defending) {
        Effectiveness::Weak
    } else {
        Effectiveness::Neutral
    }
}

/// Damage multiplier for attacking type vs defending type.
/// Returns: 2.0 = Strong, 1.0 = Neutral, 0.5 = Weak, 0.0 = Immune
pub fn effectiveness(attacking: CreatureType, defending: CreatureType) -> f32 {
    classify(attacking, defending).multiplier()
}

/// Same as [`effectiveness`], for type names coming from outside the engine.
/// Fails with `InvalidType` when either name is not one of the fifteen types.
pub fn effectiveness_by_name(attacking: &str, defending: &str) -> BattleResult<f32> {
    let attacking = parse_type(attacking)?;
    let defending = parse_type(defending)?;
    Ok(effectiveness(attacking, defending))
}

pub fn parse_type(name: &str) -> BattleResult<CreatureType> {
    CreatureType::from_str(name.trim()).map_err(|_| BattleError::InvalidType(name.to_string()))
}
