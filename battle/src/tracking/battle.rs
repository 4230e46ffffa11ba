//! BattleState - the aggregate snapshot all trackers mutate

use std::fmt::Write as _;

use ringside_protocol::Side;

use crate::catalog::Catalog;
use crate::types::{Combatant, HpRecord, PersistentFlags, TurnFlags};

/// A request for the asynchronous stat-lookup collaborator, issued when a
/// combatant switches in with only a percentage display.
///
/// The species name tags the request so a completion arriving after a later
/// switch can be recognized as stale and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatQuery {
    pub side: Side,
    pub species: String,
    pub level: u8,
}

/// Authoritative battle state reconstructed from the spectator feed.
///
/// All mutation is synchronous and happens one line at a time through
/// [`BattleState::process`]; completed stat lookups re-enter through
/// [`BattleState::apply_stat_lookup`] on the same single writer. Presenters
/// receive clones, never references into live state.
#[derive(Debug, Clone)]
pub struct BattleState {
    /// Current turn number (0 = not started)
    pub turn: u32,

    /// Which side acted first in the current window (speed tie/priority
    /// resolution; defaults to Player until observed)
    pub acted_first: Side,

    /// Active combatants, indexed by [`Side::index`]
    pub combatants: [Combatant; 2],

    /// Health reconciliation records, indexed by side
    pub hp: [HpRecord; 2],

    /// Turn-scoped flags, indexed by side
    pub turn_flags: [TurnFlags; 2],

    /// Deferred-clear flags, indexed by side
    pub persistent: [PersistentFlags; 2],

    /// Whether the battle has ended
    pub ended: bool,

    /// Winner's username (if ended and not a tie)
    pub winner: Option<String>,

    /// Actors that have acted since the last turn boundary
    pub(crate) turn_window: Vec<Side>,

    /// Armed at a boundary where persistent flags were visible; the next
    /// boundary clears them
    pub(crate) clear_persistent_next: bool,

    /// Stat lookups requested but not yet handed to the collaborator
    pub(crate) stat_queries: Vec<StatQuery>,

    pub(crate) catalog: Catalog,
}

impl BattleState {
    /// Create an empty battle state
    pub fn new() -> Self {
        Self {
            turn: 0,
            acted_first: Side::Player,
            combatants: [Combatant::default(), Combatant::default()],
            hp: [HpRecord::default(), HpRecord::default()],
            turn_flags: [TurnFlags::default(), TurnFlags::default()],
            persistent: [PersistentFlags::default(), PersistentFlags::default()],
            ended: false,
            winner: None,
            turn_window: Vec::new(),
            clear_persistent_next: false,
            stat_queries: Vec::new(),
            catalog: Catalog::new(),
        }
    }

    /// Reset everything for a new battle, keeping the catalog
    pub fn reset(&mut self) {
        self.turn = 0;
        self.acted_first = Side::Player;
        self.combatants = [Combatant::default(), Combatant::default()];
        self.hp = [HpRecord::default(), HpRecord::default()];
        self.turn_flags = [TurnFlags::default(), TurnFlags::default()];
        self.persistent = [PersistentFlags::default(), PersistentFlags::default()];
        self.ended = false;
        self.winner = None;
        self.turn_window.clear();
        self.clear_persistent_next = false;
        self.stat_queries.clear();
    }

    /// Get a side's combatant
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Get a side's combatant mutably
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// Get a side's health record
    pub fn hp_record(&self, side: Side) -> &HpRecord {
        &self.hp[side.index()]
    }

    /// Get a side's turn flags
    pub fn flags(&self, side: Side) -> &TurnFlags {
        &self.turn_flags[side.index()]
    }

    /// Get a side's persistent flags
    pub fn persistent_flags(&self, side: Side) -> &PersistentFlags {
        &self.persistent[side.index()]
    }

    /// Drain the stat lookups queued since the last call.
    ///
    /// The embedding loop forwards these to the lookup collaborator and
    /// later routes completions back through [`BattleState::apply_stat_lookup`].
    pub fn take_stat_queries(&mut self) -> Vec<StatQuery> {
        std::mem::take(&mut self.stat_queries)
    }

    /// Human-readable multi-line dump of the full state for display
    pub fn state_display(&self) -> String {
        let mut out = String::new();

        writeln!(out, "=== COMBATANT DATA ===").ok();
        for side in [Side::Player, Side::Enemy] {
            let combatant = self.combatant(side);
            let moves: Vec<&str> = combatant
                .known_moves()
                .map(|slot| slot.name.as_str())
                .collect();
            let pp: Vec<u16> = combatant.known_moves().map(|slot| slot.pp).collect();

            writeln!(
                out,
                "{}: {} (L{})",
                side.to_string().to_uppercase(),
                combatant.species_name,
                combatant.level
            )
            .ok();
            writeln!(out, "HP: {}/{}", combatant.current_hp, combatant.max_hp).ok();
            writeln!(out, "Moves: {}", moves.join(", ")).ok();
            writeln!(out, "Move PP: {:?}", pp).ok();
            writeln!(out).ok();
        }

        writeln!(out, "=== BATTLE STATE (Last Turn Results) ===").ok();
        writeln!(out, "Turn: {}", self.turn).ok();
        writeln!(out, "Acted First: {}", self.acted_first).ok();

        for side in [Side::Player, Side::Enemy] {
            let flags = self.flags(side);
            let persistent = self.persistent_flags(side);

            writeln!(out).ok();
            writeln!(out, "{}:", side.to_string().to_uppercase()).ok();
            writeln!(out, "Move Used: {}", flags.move_used).ok();
            writeln!(out, "Damage: {} (dealt to opponent)", flags.damage_dealt).ok();
            writeln!(out, "Crit: {}", flags.crit).ok();
            writeln!(out, "Move Miss: {}", flags.missed).ok();
            writeln!(out, "Stat Down Effect: {}", flags.caused_stat_drop).ok();
            writeln!(out, "Fully Paralyzed: {}", flags.fully_paralyzed).ok();
            writeln!(out, "Hit by Confusion: {}", flags.hit_self_confused).ok();
            writeln!(out, "Statused: {}", flags.inflicted_status).ok();
            writeln!(out, "Fainted: {}", flags.fainted).ok();
            writeln!(out, "Woke Up: {}", persistent.woke_up).ok();
            writeln!(out, "Snapped Out: {}", persistent.snapped_out_of_confusion).ok();
        }

        out
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}
