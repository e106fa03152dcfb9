use crate::battle::attack::{Attack, AttackKind};
use crate::battle::creature::Creature;
use crate::battle::items::Item;
use crate::battle::party::Party;
use crate::errors::{BattleError, BattleResult};
use schema::{CreatureType, ItemKind, StatusKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

// Bundled template data
const BUNDLED_TEMPLATES: &str = include_str!("../data/templates.ron");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackTemplate {
    pub name: String,
    pub base_damage: u32,
    pub attack_type: CreatureType,
    pub precision: u8,
    #[serde(default)]
    pub effect: Option<StatusKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub creature_type: CreatureType,
    pub max_health: u32,
    pub attacks: Vec<String>, // attack names, resolved at load time
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyTemplate {
    pub name: String,
    pub creatures: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemKind>,
}

/// The on-disk shape of a template document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFile {
    pub attacks: Vec<AttackTemplate>,
    pub creatures: Vec<CreatureTemplate>,
    #[serde(default)]
    pub parties: Vec<PartyTemplate>,
}

/// Immutable prototypes handed out as fresh deep copies.
///
/// Built once and passed to whoever needs to create battle entities; no
/// global state. Names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    attacks: HashMap<String, Attack>,
    creatures: HashMap<String, Creature>,
    parties: HashMap<String, PartyTemplate>,
}

fn key(name: &str) -> String {
    name.trim().to_uppercase()
}

impl Registry {
    /// The templates shipped with the crate.
    pub fn bundled() -> BattleResult<Self> {
        Self::from_ron_str(BUNDLED_TEMPLATES)
    }

    /// Load templates from a RON file on disk.
    pub fn load(path: &Path) -> BattleResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> BattleResult<Self> {
        let file: TemplateFile = ron::from_str(content)?;
        Self::from_templates(file)
    }

    /// Validate and index a template document.
    pub fn from_templates(file: TemplateFile) -> BattleResult<Self> {
        let mut registry = Registry::default();

        for template in file.attacks {
            let kind = match template.effect {
                Some(effect) => AttackKind::Special { effect },
                None => AttackKind::Normal,
            };
            let attack = Attack::with_kind(
                template.name,
                template.base_damage,
                template.attack_type,
                template.precision,
                kind,
            )?;
            insert_unique(&mut registry.attacks, attack.name(), attack.clone(), "attack")?;
        }

        for template in file.creatures {
            let attacks = template
                .attacks
                .iter()
                .map(|name| registry.get_attack(name))
                .collect::<BattleResult<Vec<_>>>()?;
            let creature = Creature::new(
                template.name,
                template.creature_type,
                template.max_health,
                attacks,
            )?;
            insert_unique(&mut registry.creatures, creature.name(), creature.clone(), "creature")?;
        }

        for template in file.parties {
            // Build once so a broken party template fails at load time.
            registry.build_party(&template)?;
            let name = template.name.clone();
            insert_unique(&mut registry.parties, &name, template, "party")?;
        }

        info!(
            attacks = registry.attacks.len(),
            creatures = registry.creatures.len(),
            parties = registry.parties.len(),
            "templates loaded"
        );
        Ok(registry)
    }

    /// Fresh copy of a registered attack, with a clean cooldown.
    pub fn get_attack(&self, name: &str) -> BattleResult<Attack> {
        self.attacks
            .get(&key(name))
            .map(Attack::fresh_copy)
            .ok_or_else(|| BattleError::not_found(format!("attack template '{}'", name)))
    }

    /// Fresh copy of a registered creature: full health, no effect, and its
    /// own attack instances.
    pub fn get_creature(&self, name: &str) -> BattleResult<Creature> {
        self.creatures
            .get(&key(name))
            .map(Creature::fresh_copy)
            .ok_or_else(|| BattleError::not_found(format!("creature template '{}'", name)))
    }

    /// A prefab party built from fresh creature copies.
    pub fn get_party(&self, name: &str) -> BattleResult<Party> {
        let template = self
            .parties
            .get(&key(name))
            .ok_or_else(|| BattleError::not_found(format!("party template '{}'", name)))?;
        self.build_party(template)
    }

    fn build_party(&self, template: &PartyTemplate) -> BattleResult<Party> {
        let creatures = template
            .creatures
            .iter()
            .map(|name| self.get_creature(name))
            .collect::<BattleResult<Vec<_>>>()?;
        let items = template.items.iter().copied().map(Item::of_kind).collect();
        Party::new(template.name.clone(), creatures, items)
    }

    pub fn creature_names(&self) -> Vec<&str> {
        sorted_names(self.creatures.values().map(Creature::name))
    }

    pub fn attack_names(&self) -> Vec<&str> {
        sorted_names(self.attacks.values().map(Attack::name))
    }

    pub fn party_names(&self) -> Vec<&str> {
        sorted_names(self.parties.values().map(|p| p.name.as_str()))
    }
}

fn insert_unique<T>(map: &mut HashMap<String, T>, name: &str, value: T, what: &str) -> BattleResult<()> {
    if map.insert(key(name), value).is_some() {
        return Err(BattleError::invalid_argument(format!(
            "duplicate {} template '{}'",
            what, name
        )));
    }
    Ok(())
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.collect();
    names.sort_unstable();
    names
}
