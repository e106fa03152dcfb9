use crate::battle::attack::AttackOutcome;
use crate::battle::creature::{Creature, TurnUpkeep};
use crate::battle::items::{apply_item, Item, ItemUse};
use crate::battle::rng::RandomSource;
use crate::battle::Selector;
use crate::errors::{BattleError, BattleResult};
use tracing::{debug, info};

/// A party fields between one and six creatures.
pub const MAX_PARTY_SIZE: usize = 6;

/// Result of asking a party to change its active creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Changed,
    /// The requested creature was already active.
    Unchanged,
    /// The requested creature has fainted; the switch was refused.
    TargetFainted,
}

/// One side of a battle: its roster, which creature is out, and its items.
#[derive(Debug, Clone)]
pub struct Party {
    name: String,
    creatures: Vec<Creature>,
    active_index: usize,
    items: Vec<Item>,
    initial_item_count: usize,
}

impl Party {
    pub fn new(name: impl Into<String>, creatures: Vec<Creature>, items: Vec<Item>) -> BattleResult<Self> {
        let name = name.into();
        if creatures.is_empty() || creatures.len() > MAX_PARTY_SIZE {
            return Err(BattleError::invalid_argument(format!(
                "party '{}' must have between 1 and {} creatures, got {}",
                name,
                MAX_PARTY_SIZE,
                creatures.len()
            )));
        }
        let initial_item_count = items.len();
        Ok(Self {
            name,
            creatures,
            active_index: 0,
            items,
            initial_item_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creature(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.creatures.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &Creature {
        &self.creatures[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut Creature {
        &mut self.creatures[self.active_index]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn initial_item_count(&self) -> usize {
        self.initial_item_count
    }

    fn find_creature(&self, selector: Selector<'_>) -> BattleResult<usize> {
        match selector {
            Selector::Index(index) if index < self.creatures.len() => Ok(index),
            Selector::Index(index) => Err(BattleError::out_of_range(format!(
                "creature index {} in party '{}' (has {})",
                index,
                self.name,
                self.creatures.len()
            ))),
            Selector::Name(name) => self
                .creatures
                .iter()
                .position(|c| c.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    BattleError::not_found(format!("creature '{}' in party '{}'", name, self.name))
                }),
        }
    }

    /// Our active creature attacks the other party's active creature.
    pub fn attack<'a>(
        &mut self,
        other: &mut Party,
        attack: impl Into<Selector<'a>>,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<AttackOutcome> {
        let target = other.active_mut();
        let attacker = &mut self.creatures[self.active_index];
        attacker.attack(target, attack, rng)
    }

    pub fn switch_active<'a>(&mut self, to: impl Into<Selector<'a>>) -> BattleResult<SwitchOutcome> {
        let index = self.find_creature(to.into())?;
        if index == self.active_index {
            return Ok(SwitchOutcome::Unchanged);
        }
        if self.creatures[index].is_fainted() {
            debug!(party = %self.name, creature = self.creatures[index].name(), "switch refused, creature fainted");
            return Ok(SwitchOutcome::TargetFainted);
        }
        info!(
            party = %self.name,
            from = self.creatures[self.active_index].name(),
            to = self.creatures[index].name(),
            "switched active creature"
        );
        self.active_index = index;
        Ok(SwitchOutcome::Changed)
    }

    /// Use one unit of the named item on one of this party's creatures.
    ///
    /// The item is only consumed when its effect applies.
    pub fn use_item<'a>(&mut self, target: impl Into<Selector<'a>>, item_name: &str) -> BattleResult<ItemUse> {
        let target = target.into();
        let index = self.find_creature(target).map_err(|_| {
            BattleError::invalid_operation(format!(
                "{:?} is not a member of party '{}'",
                target, self.name
            ))
        })?;
        let slot = self
            .items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(item_name))
            .ok_or_else(|| BattleError::not_found(format!("item '{}' in party '{}'", item_name, self.name)))?;

        let creature = &mut self.creatures[index];
        let effect = apply_item(self.items[slot].kind, creature)?;
        let item = self.items.remove(slot);
        info!(party = %self.name, item = %item.name, creature = creature.name(), ?effect, "item used");
        Ok(ItemUse {
            item,
            target: creature.name().to_string(),
            effect,
        })
    }

    pub fn all_fainted(&self) -> bool {
        self.creatures.iter().all(Creature::is_fainted)
    }

    /// Advisory standing score in `0..=100`.
    ///
    /// Up to 10 points per creature for its health fraction, up to 30 for
    /// items left, and a flat 10 while no creature carries a status effect.
    pub fn win_likelihood(&self) -> u32 {
        let health_points: u32 = self
            .creatures
            .iter()
            .map(|c| (10 * u64::from(c.health()) / u64::from(c.max_health())) as u32)
            .sum();

        let item_points = if self.initial_item_count == 0 {
            0
        } else {
            (30 * self.items.len() / self.initial_item_count) as u32
        };

        let clean_bonus = if self.creatures.iter().any(|c| c.active_effect().is_some()) {
            0
        } else {
            10
        };

        (health_points + item_points + clean_bonus).min(100)
    }

    pub fn end_turn(&mut self, rng: &mut dyn RandomSource) -> Vec<TurnUpkeep> {
        self.creatures.iter_mut().map(|c| c.end_turn(rng)).collect()
    }
}
