use creature_battle::{
    ActionReport, Battle, BattleAction, BattleResult, EngineRng, Party, RandomSource, Registry,
};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Stop runaway simulations.
const MAX_TURNS: u32 = 200;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let template_path = args.next();
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    if let Err(e) = run(template_path.as_deref(), seed) {
        error!("battle aborted: {}", e);
        std::process::exit(1);
    }
}

fn run(template_path: Option<&str>, seed: Option<u64>) -> BattleResult<()> {
    let registry = match template_path {
        Some(path) => Registry::load(Path::new(path))?,
        None => Registry::bundled()?,
    };

    let party_names = registry.party_names();
    let (first, second) = match party_names.as_slice() {
        [a, b, ..] => (registry.get_party(a)?, registry.get_party(b)?),
        _ => {
            warn!("need at least two party templates to simulate a battle");
            return Ok(());
        }
    };

    let rng = match seed {
        Some(seed) => EngineRng::from_seed(seed),
        None => EngineRng::from_entropy(),
    };
    let mut battle = Battle::new(first, second, rng);

    while !battle.is_over() && battle.turn_number() <= MAX_TURNS {
        for side in 0..2 {
            if battle.is_over() {
                break;
            }
            let roll = battle.rng_mut().number(0, 1000) as usize;
            let action = choose_action(battle.party(side)?, battle.party(1 - side)?, roll);
            if let Some(action) = action {
                match battle.act(side, &action) {
                    Ok(report) => log_report(side, &report),
                    Err(e) => warn!(side, ?action, "action rejected: {}", e),
                }
            }
            battle.end_turn(side)?;
        }
        battle.log_standings();
    }

    match battle.winner() {
        Some(side) => println!("{} wins on turn {}", battle.party(side)?.name(), battle.turn_number()),
        None => println!("No winner after {} turns", battle.turn_number() - 1),
    }
    Ok(())
}

/// A simple NPC policy: replace a fainted creature, patch up a badly hurt
/// one if a potion is left, otherwise use any attack that is ready.
fn choose_action(own: &Party, foe: &Party, roll: usize) -> Option<BattleAction> {
    let active = own.active();
    if active.is_fainted() {
        return own
            .creatures()
            .iter()
            .position(|c| !c.is_fainted())
            .map(|to| BattleAction::Switch { to });
    }

    if active.health() * 4 < active.max_health() {
        if let Some(potion) = own.items().iter().find(|i| i.kind.heal_amount().is_some()) {
            return Some(BattleAction::UseItem {
                target: own.active_index(),
                item: potion.name.clone(),
            });
        }
    }

    if foe.active().is_fainted() {
        return None;
    }

    let ready = active.available_attacks();
    if ready.is_empty() {
        return None;
    }
    let attack = ready[roll % ready.len()].name().to_string();
    Some(BattleAction::Attack { attack })
}

fn log_report(side: usize, report: &ActionReport) {
    match report {
        ActionReport::Attacked(outcome) => info!(
            side,
            attack = %outcome.attack,
            kind = ?outcome.kind,
            damage = outcome.total_damage(),
            "attack"
        ),
        ActionReport::Switched(outcome) => info!(side, ?outcome, "switch"),
        ActionReport::ItemUsed(item_use) => info!(
            side,
            item = %item_use.item.name,
            target = %item_use.target,
            effect = ?item_use.effect,
            "item"
        ),
    }
}
