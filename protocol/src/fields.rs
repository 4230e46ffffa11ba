//! Shared field types for battle feed messages

use crate::ParseError;

/// One of the two competing sides in the battle.
///
/// The feed identifies sides with tokens like "p1a" or "p2a"; the first
/// two characters decide ownership. Everything downstream of parsing uses
/// this enum, never the raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// Parse a side from a token like "p1a", "p2a: Snorlax", or "p1".
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with("p1") {
            Some(Side::Player)
        } else if s.starts_with("p2") {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "p1",
            Side::Enemy => "p2",
        }
    }

    /// The other side.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Array index for per-side storage (Player = 0, Enemy = 1).
    pub fn index(&self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Combatant identifier in the form "POSITION: NAME" (e.g., "p1a: Alakazam")
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Side that owns this combatant
    pub side: Side,
    /// Position letter (a, b, c), if present
    pub position: Option<char>,
    /// Combatant's name/nickname
    pub name: String,
}

impl Actor {
    /// Parse an identifier string like "p1a: Alakazam" or "p2: Snorlax"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let side = Side::parse(pos_part)?;
        let position = pos_part.chars().nth(2);

        Some(Actor {
            side,
            position,
            name: name.to_string(),
        })
    }
}

/// Combatant details string (species, level, shiny)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Details {
    pub species: String,
    pub level: Option<u8>,
    pub shiny: bool,
}

impl Details {
    /// Parse a details string like "Alakazam, L100" or "Pikachu, L88, shiny"
    pub fn parse(s: &str) -> Self {
        let mut details = Details::default();
        let parts: Vec<&str> = s.split(", ").collect();

        if let Some(species) = parts.first() {
            details.species = species.to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "shiny" {
                details.shiny = true;
            }
        }

        details
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq)]
pub struct HpStatus {
    /// Current HP (raw value or percentage depending on the max)
    pub current: u32,
    /// Max HP, if the feed reported a fraction
    pub max: Option<u32>,
    /// Status condition token (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.is_empty() {
            return None;
        }

        let hp_part = parts[0];
        let status = parts.get(1).map(|s| s.to_string());

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                status,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                status,
            })
        }
    }

    /// Whether this condition reports a faint ("0 fnt")
    pub fn is_faint(&self) -> bool {
        self.status.as_deref() == Some("fnt")
    }
}

/// Stat abbreviation as it appears in boost/unboost messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// Helper to parse an Actor from message parts
pub fn parse_actor(parts: &[&str], index: usize) -> Result<Actor, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| Actor::parse(s))
        .ok_or_else(|| ParseError::MissingField("actor".to_string()).into())
}

/// Helper to parse Details from message parts
pub fn parse_details(parts: &[&str], index: usize) -> Details {
    parts
        .get(index)
        .map(|s| Details::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from message parts
pub fn parse_hp_status(parts: &[&str], index: usize) -> Option<HpStatus> {
    parts.get(index).and_then(|s| HpStatus::parse(s))
}
