//! Typed battle feed events and the line classifier
//!
//! One event per feed line. Tags the tracker does not consume are returned
//! as [`FeedEvent::Raw`] so the caller can still apply free-text fallbacks.

use anyhow::Result;
use serde_json::Value;

use crate::ParseError;
use crate::fields::{Actor, Details, HpStatus, Stat, parse_actor, parse_details, parse_hp_status};
use crate::request::TeamRequest;

/// A single decoded line from the battle feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// |move|ACTOR|MOVE
    Move { actor: Actor, move_name: String },
    /// |-crit|TARGET — the named combatant suffered the critical hit
    Crit(Actor),
    /// |-miss|ATTACKER
    Miss(Actor),
    /// |-damage|TARGET|HP STATUS with optional [from] annotation
    Damage {
        target: Actor,
        hp: Option<HpStatus>,
        from: Option<String>,
    },
    /// |-heal|TARGET|HP STATUS
    Heal { target: Actor, hp: Option<HpStatus> },
    /// |-status|TARGET|STATUS
    Status { target: Actor, status: String },
    /// |-curestatus|TARGET|STATUS
    CureStatus { target: Actor, status: String },
    /// |cant|ACTOR|REASON
    Cant { actor: Actor, reason: String },
    /// |-activate|ACTOR|EFFECT
    Activate { actor: Actor, effect: String },
    /// |-end|ACTOR|EFFECT
    VolatileEnd { actor: Actor, effect: String },
    /// |-boost|TARGET|STAT|STAGES
    Boost {
        target: Actor,
        stat: Stat,
        stages: u8,
    },
    /// |-unboost|TARGET|STAT|STAGES
    Unboost {
        target: Actor,
        stat: Stat,
        stages: u8,
    },
    /// |turn|NUMBER
    Turn(u32),
    /// |switch|ACTOR|DETAILS|HP STATUS
    Switch {
        actor: Actor,
        details: Details,
        hp: Option<HpStatus>,
    },
    /// |drag|ACTOR|DETAILS|HP STATUS (forced switch)
    Drag {
        actor: Actor,
        details: Details,
        hp: Option<HpStatus>,
    },
    /// |request|JSON — exact team/condition payload for the owning side
    Request(TeamRequest),
    /// |faint|ACTOR
    Faint(Actor),
    /// |start — battle begins
    BattleStart,
    /// |win|USER
    Win(String),
    /// |tie
    Tie,
    /// Anything not recognized above, kept verbatim
    Raw(String),
}

/// Parse a single feed line into a [`FeedEvent`].
///
/// Unrecognized tags and non-pipe lines become [`FeedEvent::Raw`]; an error
/// means a recognized tag was missing a field it cannot do without.
pub fn parse_event(line: &str) -> Result<FeedEvent> {
    let line = line.trim();

    if line.is_empty() {
        return Err(ParseError::EmptyLine.into());
    }

    if !line.starts_with('|') {
        return Ok(FeedEvent::Raw(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Ok(FeedEvent::Raw(line.to_string()));
    }

    match parts[1] {
        "move" => parse_move(&parts),
        "-crit" => parse_crit(&parts),
        "-miss" => parse_miss(&parts),
        "-damage" => parse_damage(&parts),
        "-heal" => parse_heal(&parts),
        "-status" => parse_status(&parts),
        "-curestatus" => parse_curestatus(&parts),
        "cant" => parse_cant(&parts),
        "-activate" => parse_activate(&parts),
        "-end" => parse_end(&parts),
        "-boost" => parse_boost(&parts),
        "-unboost" => parse_unboost(&parts),
        "turn" => parse_turn(&parts),
        "switch" => parse_switch(&parts),
        "drag" => parse_drag(&parts),
        "request" => parse_request(&parts),
        "faint" => parse_faint(&parts),
        "start" => Ok(FeedEvent::BattleStart),
        "win" => parse_win(&parts),
        "tie" => Ok(FeedEvent::Tie),
        _ => Ok(FeedEvent::Raw(line.to_string())),
    }
}

/// Parse |move|ACTOR|MOVE|TARGET
fn parse_move(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let move_name = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::Move { actor, move_name })
}

/// Parse |-crit|TARGET
fn parse_crit(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    Ok(FeedEvent::Crit(target))
}

/// Parse |-miss|SOURCE|TARGET
fn parse_miss(parts: &[&str]) -> Result<FeedEvent> {
    let attacker = parse_actor(parts, 2)?;
    Ok(FeedEvent::Miss(attacker))
}

/// Parse |-damage|TARGET|HP STATUS with optional [from] annotation
fn parse_damage(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let hp = parse_hp_status(parts, 3);
    let from = parts
        .iter()
        .find_map(|p| p.strip_prefix("[from] ").map(|s| s.to_string()));

    Ok(FeedEvent::Damage { target, hp, from })
}

/// Parse |-heal|TARGET|HP STATUS
fn parse_heal(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let hp = parse_hp_status(parts, 3);

    Ok(FeedEvent::Heal { target, hp })
}

/// Parse |-status|TARGET|STATUS
fn parse_status(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::Status { target, status })
}

/// Parse |-curestatus|TARGET|STATUS
fn parse_curestatus(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::CureStatus { target, status })
}

/// Parse |cant|ACTOR|REASON or |cant|ACTOR|REASON|MOVE
fn parse_cant(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let reason = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::Cant { actor, reason })
}

/// Parse |-activate|ACTOR|EFFECT
fn parse_activate(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let effect = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::Activate { actor, effect })
}

/// Parse |-end|ACTOR|EFFECT
fn parse_end(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let effect = parts.get(3).unwrap_or(&"").to_string();

    Ok(FeedEvent::VolatileEnd { actor, effect })
}

/// Parse |-boost|TARGET|STAT|STAGES
fn parse_boost(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let stat = parts
        .get(3)
        .and_then(|s| Stat::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing stat"))?;
    let stages = parts
        .get(4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing stage count"))?;

    Ok(FeedEvent::Boost {
        target,
        stat,
        stages,
    })
}

/// Parse |-unboost|TARGET|STAT|STAGES
fn parse_unboost(parts: &[&str]) -> Result<FeedEvent> {
    let target = parse_actor(parts, 2)?;
    let stat = parts
        .get(3)
        .and_then(|s| Stat::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing stat"))?;
    let stages = parts
        .get(4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing stage count"))?;

    Ok(FeedEvent::Unboost {
        target,
        stat,
        stages,
    })
}

/// Parse |turn|NUMBER
fn parse_turn(parts: &[&str]) -> Result<FeedEvent> {
    let turn = parts
        .get(2)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing turn number"))?;

    Ok(FeedEvent::Turn(turn))
}

/// Parse |switch|ACTOR|DETAILS|HP STATUS
fn parse_switch(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(FeedEvent::Switch { actor, details, hp })
}

/// Parse |drag|ACTOR|DETAILS|HP STATUS
fn parse_drag(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(FeedEvent::Drag { actor, details, hp })
}

/// Parse |request|REQUEST (JSON)
///
/// The payload can itself contain pipes inside strings, so everything after
/// the tag is rejoined before decoding.
fn parse_request(parts: &[&str]) -> Result<FeedEvent> {
    let json_str = parts[2..].join("|");
    if json_str.is_empty() {
        return Err(ParseError::MissingField("request payload".to_string()).into());
    }

    let value: Value = serde_json::from_str(&json_str)?;
    let request = TeamRequest::parse(&value)
        .ok_or_else(|| ParseError::InvalidFormat("request payload".to_string()))?;

    Ok(FeedEvent::Request(request))
}

/// Parse |faint|ACTOR
fn parse_faint(parts: &[&str]) -> Result<FeedEvent> {
    let actor = parse_actor(parts, 2)?;
    Ok(FeedEvent::Faint(actor))
}

/// Parse |win|USER
fn parse_win(parts: &[&str]) -> Result<FeedEvent> {
    let user = parts.get(2).unwrap_or(&"").to_string();
    Ok(FeedEvent::Win(user))
}
