use crate::battle::attack::AttackOutcome;
use crate::battle::creature::TurnUpkeep;
use crate::battle::items::ItemUse;
use crate::battle::party::{Party, SwitchOutcome};
use crate::battle::rng::RandomSource;
use crate::errors::{BattleError, BattleResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One action a side can take on its turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleAction {
    /// Use the named attack of the active creature.
    Attack { attack: String },
    /// The index refers to the creature's position (0-5) in the party.
    Switch { to: usize },
    /// The index refers to the creature receiving the item.
    UseItem { target: usize, item: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionReport {
    Attacked(AttackOutcome),
    Switched(SwitchOutcome),
    ItemUsed(ItemUse),
}

/// Two parties and the randomness they fight with.
///
/// This is the thin driver between a front end and the rules: it routes
/// actions to the right party and keeps the turn counter. Deciding whose
/// turn it is and prompting for choices stays with the caller.
#[derive(Debug)]
pub struct Battle<R: RandomSource> {
    parties: [Party; 2],
    rng: R,
    turn_number: u32,
}

impl<R: RandomSource> Battle<R> {
    pub fn new(first: Party, second: Party, rng: R) -> Self {
        Self {
            parties: [first, second],
            rng,
            turn_number: 1,
        }
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn party(&self, side: usize) -> BattleResult<&Party> {
        self.parties.get(side).ok_or_else(|| invalid_side(side))
    }

    pub fn party_mut(&mut self, side: usize) -> BattleResult<&mut Party> {
        self.parties.get_mut(side).ok_or_else(|| invalid_side(side))
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Perform `action` for `side` against the other side.
    pub fn act(&mut self, side: usize, action: &BattleAction) -> BattleResult<ActionReport> {
        if side > 1 {
            return Err(invalid_side(side));
        }
        let [first, second] = &mut self.parties;
        let (own, other) = if side == 0 { (first, second) } else { (second, first) };

        let report = match action {
            BattleAction::Attack { attack } => {
                ActionReport::Attacked(own.attack(other, attack, &mut self.rng)?)
            }
            BattleAction::Switch { to } => ActionReport::Switched(own.switch_active(*to)?),
            BattleAction::UseItem { target, item } => {
                ActionReport::ItemUsed(own.use_item(*target, item)?)
            }
        };
        Ok(report)
    }

    /// End-of-turn bookkeeping for `side`. The turn counter moves on after
    /// the second side finishes.
    pub fn end_turn(&mut self, side: usize) -> BattleResult<Vec<TurnUpkeep>> {
        let party = self.parties.get_mut(side).ok_or_else(|| invalid_side(side))?;
        let upkeep = party.end_turn(&mut self.rng);
        if side == 1 {
            self.turn_number += 1;
        }
        Ok(upkeep)
    }

    /// The side whose opponent has no creature left standing.
    pub fn winner(&self) -> Option<usize> {
        match (self.parties[0].all_fainted(), self.parties[1].all_fainted()) {
            (false, true) => Some(0),
            (true, false) => Some(1),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.parties.iter().any(Party::all_fainted)
    }

    /// Log both sides' advisory standing.
    pub fn log_standings(&self) {
        for party in &self.parties {
            info!(
                turn = self.turn_number,
                party = party.name(),
                win_likelihood = party.win_likelihood(),
                "standing"
            );
        }
    }
}

fn invalid_side(side: usize) -> BattleError {
    BattleError::invalid_argument(format!("battle side must be 0 or 1, got {}", side))
}
