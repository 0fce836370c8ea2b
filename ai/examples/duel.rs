//! Duel Example
//!
//! Pits two AI profiles against each other over a scripted battle. Damage
//! is a crude stand-in for a real engine: move power scaled by the type
//! chart.
//!
//! Usage: cargo run --example duel -- [p1 profile] [p2 profile] [seed]
//! Set RUST_LOG=kazam_ai=debug to see every branch taken.

use anyhow::{Context, Result, bail};
use kazam_ai::{Ai, Decision, Profile, Strategy};
use kazam_battle::{
    BattleState, BattleView, Combatant, CombatantId, Condition, Inventory, ItemKind, Move, Player,
    StandardChart, Stat, Stats, Team, Type, TypeChart,
};

const MAX_TURNS: u32 = 30;

fn roster(player: Player, trainer: &str, lead: Type, backup: Type) -> Team {
    let moves = |primary: Type| {
        vec![
            Move::damage(1, format!("{primary} Strike"), primary, 80, 95, 10),
            Move::damage(2, "Tackle", Type::Normal, 40, 100, 35),
            Move::status(3, "Growl", Type::Normal, Condition::StatDrop(Stat::Atk), 100, 40),
            Move::damage(4, "Protect", Type::Normal, 0, 100, 10),
        ]
    };

    Team::new(player, trainer)
        .with_member(
            Combatant::new(CombatantId(1), format!("{lead} lead"), lead, 140, Stats::new(70, 60, 60, 70))
                .with_moves(moves(lead)),
        )
        .with_member(
            Combatant::new(CombatantId(2), format!("{backup} backup"), backup, 120, Stats::new(60, 80, 80, 50))
                .with_moves(moves(backup)),
        )
        .with_active(CombatantId(1))
}

fn supplies() -> Inventory {
    Inventory::new()
        .with(ItemKind::Potion, 2)
        .with(ItemKind::SuperPotion, 1)
        .with(ItemKind::HyperPotion, 1)
        .with(ItemKind::Revive, 1)
}

fn heal_amount(item: ItemKind) -> u32 {
    match item {
        ItemKind::Potion => 20,
        ItemKind::SuperPotion => 60,
        ItemKind::HyperPotion => 120,
        ItemKind::MegaPotion => u32::MAX,
        ItemKind::Revive | ItemKind::StatusGuard => 0,
    }
}

fn opponent_of(player: Player) -> Player {
    if player == Player::P1 { Player::P2 } else { Player::P1 }
}

/// Apply one decision to the battle
fn apply(battle: &mut BattleState, inventory: &mut Inventory, decision: Decision) -> Result<()> {
    let player = decision.player();
    match decision {
        Decision::Attack { combatant, slot, .. } => {
            let team = battle.team_mut(player).context("acting team missing")?;
            let attacker = team.get_mut(combatant).context("attacker missing")?;
            if attacker.fainted {
                return Ok(());
            }
            let mv = attacker.moves.get_mut(slot).context("move slot missing")?;
            mv.pp = mv.pp.saturating_sub(1);
            let (power, move_type, name) = (mv.power, mv.move_type, mv.name.clone());

            let defender = battle
                .team_mut(opponent_of(player))
                .and_then(Team::active_mut)
                .context("defender missing")?;
            let multiplier = StandardChart.multiplier(move_type, defender.species_type)?;
            let damage = (f64::from(power) * f64::from(multiplier) * 0.5).round() as u32;
            defender.hp_current = defender.hp_current.saturating_sub(damage);
            if defender.hp_current == 0 {
                defender.faint();
            }
            println!("  {player} uses {name} for {damage} damage");
        }
        Decision::Switch { target, .. } => {
            let team = battle.team_mut(player).context("acting team missing")?;
            if !team.set_active(target) {
                bail!("{player} cannot switch to {target}");
            }
            println!("  {player} switches to {target}");
        }
        Decision::UseItem { target, item, .. } => {
            if !inventory.take(item) {
                bail!("{player} has no {item} left");
            }
            let team = battle.team_mut(player).context("acting team missing")?;
            let combatant = team.get_mut(target).context("item target missing")?;
            if item == ItemKind::Revive {
                combatant.fainted = false;
                combatant.hp_current = combatant.hp_max / 2;
            } else if !combatant.fainted {
                combatant.hp_current = combatant.hp_current.saturating_add(heal_amount(item)).min(combatant.hp_max);
            }
            println!("  {player} uses {item} on {target}");
        }
    }
    Ok(())
}

/// Bring in a conscious teammate when the active one is down and no revive is left
fn force_switch(battle: &mut BattleState, player: Player, inventory: &Inventory) {
    let Some(team) = battle.team_mut(player) else {
        return;
    };
    let down = team.active().is_none_or(|c| c.fainted);
    if !down || inventory.has(ItemKind::Revive) {
        return;
    }
    if let Some(next) = team.members.iter().find(|c| !c.fainted).map(|c| c.id) {
        team.set_active(next);
        println!("  {player} sends out {next}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let p1_profile: Profile = args.next().as_deref().unwrap_or("cautious").parse()?;
    let p2_profile: Profile = args.next().as_deref().unwrap_or("optimizing").parse()?;
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(42);

    let mut battle = BattleState::new(vec![
        roster(Player::P1, "Red", Type::Fire, Type::Water),
        roster(Player::P2, "Blue", Type::Grass, Type::Electric),
    ]);
    let mut sides: Vec<(Ai, Inventory)> = vec![
        (p1_profile.build(Player::P1, Some(seed)), supplies()),
        (p2_profile.build(Player::P2, Some(seed.wrapping_add(1))), supplies()),
    ];

    println!("{} ({p1_profile}) vs {} ({p2_profile}), seed {seed}", Player::P1, Player::P2);

    while !battle.is_over() && battle.turn < MAX_TURNS {
        battle.turn += 1;
        println!("Turn {}", battle.turn);

        for (ai, inventory) in &mut sides {
            let player = ai.player();
            force_switch(&mut battle, player, inventory);
            if battle.is_over() {
                break;
            }

            let decision = ai.decide(&battle, inventory)?;
            tracing::info!(%decision, "chosen");
            apply(&mut battle, inventory, decision)?;
        }
    }

    for team in battle.teams() {
        let standing: Vec<String> = team
            .members
            .iter()
            .map(|c| format!("{} {}/{}", c.name, c.hp_current, c.hp_max))
            .collect();
        println!("{} ({}): {}", team.player, team.trainer, standing.join(", "));
    }

    Ok(())
}
