//! Battle state reconstruction for Gen 1 spectator feeds.
//!
//! This crate turns the one-directional, line-oriented feed of a two-player
//! battle into reconciled numeric state: exact health where it can be known,
//! power-point counts, turn order, and per-turn status flags.
//!
//! # Overview
//!
//! `ringside-battle` sits between `ringside-protocol` (wire format) and the
//! consumers of tracked state:
//!
//! ```text
//! ringside-protocol (wire format)
//!        │
//!        ▼
//! ringside-battle (tracking core) ← THIS CRATE
//!        │
//!        ├─> presenters (read-only snapshots)
//!        └─> ringside-lookup (async max-HP refinement)
//! ```
//!
//! # Main Types
//!
//! - [`BattleState`] - the aggregate all trackers mutate; its
//!   [`process`](BattleState::process) method is the single entry point
//! - [`Catalog`] - static Gen 1 move/species/type reference tables
//! - [`Combatant`], [`MoveSlot`] - per-side roster state
//! - [`HpRecord`], [`ExactHp`] - best-known health reconciliation
//! - [`TurnFlags`], [`PersistentFlags`] - per-window and deferred-clear flags
//! - [`StatQuery`] - background lookup request issued on percentage-only
//!   switch-ins
//!
//! # Example Usage
//!
//! ```
//! use ringside_battle::BattleState;
//!
//! let mut battle = BattleState::new();
//!
//! battle.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");
//! battle.process("|move|p1a: Alakazam|Psychic");
//!
//! // Forward queued lookups to the stat collaborator...
//! for query in battle.take_stat_queries() {
//!     let _ = query;
//! }
//!
//! // ...and route completions back through the same single writer.
//! battle.apply_stat_lookup(ringside_battle::Side::Player, "Alakazam", 314);
//!
//! println!("{}", battle.state_display());
//! ```

use thiserror::Error;

pub mod catalog;
pub mod tracking;
pub mod types;

pub use catalog::{Catalog, MoveData, normalize_name};
pub use tracking::{BattleState, StatQuery};
pub use types::{Combatant, ExactHp, HpRecord, MoveSlot, PersistentFlags, TurnFlags};

// Re-export commonly used protocol types
pub use ringside_protocol::{FeedEvent, Side};

/// Faults raised while applying a classified line. All are recoverable; the
/// router reports them and moves on to the next line.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("unparsable hp condition: {0}")]
    BadCondition(String),
}
