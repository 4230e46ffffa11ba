//! Team request types
//!
//! These types represent the JSON structure of |request| messages, reduced
//! to the fields the state tracker consumes: which side the payload belongs
//! to and the exact condition strings of its combatants.

use serde::Deserialize;

use crate::fields::Side;

/// A decision request carrying authoritative team data for one side
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    /// Request ID for synchronization
    pub rqid: Option<u64>,

    /// Information about the owning side's team
    pub side: Option<RequestSide>,

    /// Whether we're waiting for the opponent
    #[serde(default)]
    pub wait: bool,
}

impl TeamRequest {
    /// Parse a request from decoded JSON
    pub fn parse(json: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(json.clone()).ok()
    }

    /// The active combatant's entry, if the payload carries one
    pub fn active_mon(&self) -> Option<&RequestMon> {
        self.side
            .as_ref()
            .and_then(|s| s.pokemon.iter().find(|p| p.active))
    }
}

/// The owning side's team info
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSide {
    /// Side owner's display name
    pub name: String,

    /// Side ID (p1, p2)
    pub id: String,

    /// Combatants on this side
    #[serde(default)]
    pub pokemon: Vec<RequestMon>,
}

impl RequestSide {
    /// The side this payload belongs to
    pub fn side(&self) -> Option<Side> {
        Side::parse(&self.id)
    }
}

/// One combatant in the request payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMon {
    /// Identifier (e.g., "p1: Alakazam")
    pub ident: String,

    /// Details string (species, level)
    #[serde(default)]
    pub details: String,

    /// Current condition ("270/323", "120/323 par", "0 fnt")
    pub condition: String,

    /// Whether this combatant is currently active
    #[serde(default)]
    pub active: bool,
}

impl RequestMon {
    /// Exact HP fraction from the condition string, if present
    pub fn hp(&self) -> Option<(u32, u32)> {
        let hp_part = self.condition.split_whitespace().next()?;
        let (current, max) = hp_part.split_once('/')?;
        Some((current.parse().ok()?, max.parse().ok()?))
    }

    /// Status token from the condition string, if any
    pub fn status(&self) -> Option<&str> {
        self.condition.split_whitespace().nth(1)
    }

    /// Whether the condition reports a faint
    pub fn is_fainted(&self) -> bool {
        self.condition == "0 fnt" || self.condition.ends_with(" fnt")
    }
}
