//! Feed Replay Example
//!
//! Replays a canned battle log through BattleState and prints the
//! accumulated snapshot at each turn boundary, the way a presenter would
//! consume it. Stat lookups are answered inline from a fixed table so the
//! example runs offline.

use ringside_battle::{BattleState, Side, StatQuery};

/// A short Gen 1 exchange: Alakazam vs Snorlax
const FEED: &[&str] = &[
    "|start",
    "|switch|p1a: Alakazam|Alakazam, L100|100/100",
    "|switch|p2a: Snorlax|Snorlax, L100|100/100",
    "|turn|1",
    "|move|p1a: Alakazam|Psychic",
    "|-damage|p2a: Snorlax|61/100",
    "|-unboost|p2a: Snorlax|spd|1",
    "|move|p2a: Snorlax|Body Slam",
    "|-damage|p1a: Alakazam|55/100",
    "|-status|p1a: Alakazam|par",
    "|turn|2",
    "|move|p1a: Alakazam|Psychic",
    "|-crit|p2a: Snorlax",
    "|-damage|p2a: Snorlax|8/100",
    "|cant|p1a: Alakazam|par",
    "|turn|3",
    "|move|p2a: Snorlax|Body Slam",
    "|-damage|p1a: Alakazam|0 fnt",
    "|faint|p1a: Alakazam",
    "|win|Blue",
];

/// Level 100 max HP per species, as the lookup collaborator would return
fn answer_lookup(query: &StatQuery) -> Option<u32> {
    match query.species.as_str() {
        "Alakazam" => Some(314),
        "Snorlax" => Some(524),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut battle = BattleState::new();

    for line in FEED {
        battle.process(line);

        // In a live client the queries go to the async collaborator and the
        // completions come back through the event loop; here we answer them
        // immediately from the fixed table.
        for query in battle.take_stat_queries() {
            if let Some(max_hp) = answer_lookup(&query) {
                battle.apply_stat_lookup(query.side, &query.species, max_hp);
            }
        }

        if line.starts_with("|turn|") || line.starts_with("|win|") {
            println!("\n{}", "=".repeat(60));
            println!("{}", battle.state_display());
        }
    }

    if battle.ended {
        match &battle.winner {
            Some(winner) => println!("{} won the battle!", winner),
            None => println!("The battle ended in a tie."),
        }
    }

    let enemy_damage = battle.flags(Side::Enemy).damage_dealt;
    println!("Final attributed hit on Alakazam: {} HP", enemy_damage);
}
