//! Turn window tracking: boundaries, first-action resets, deferred clears

use ringside_protocol::Side;
use tracing::{debug, info};

use super::battle::BattleState;

impl BattleState {
    /// Record that a side took a turn action (move, forced inaction, or
    /// status cure).
    ///
    /// The first action of a window resets both sides' turn flags and
    /// decides which side acted first, which stands in for speed-tie and
    /// priority resolution.
    pub(crate) fn note_action(&mut self, side: Side) {
        self.turn_window.push(side);

        if self.turn_window.len() == 1 {
            for flags in &mut self.turn_flags {
                flags.reset();
            }
            self.acted_first = side;
            info!(%side, "acted first this turn (won speed tie or faster)");
        }
    }

    /// Handle a |turn| boundary: summarize the ended window, advance the
    /// counter, and apply the deferred clear of persistent flags.
    pub(crate) fn handle_turn(&mut self, number: u32) {
        info!(turn = number, "=== TURN {} ===", number);

        if !self.turn_window.is_empty() {
            self.log_window_summary();
        }

        self.turn = number;
        self.turn_window.clear();

        // A flag set during turn N stays visible through the boundary that
        // ends turn N and clears at the one after it.
        if self.clear_persistent_next {
            for persistent in &mut self.persistent {
                persistent.clear();
            }
            self.clear_persistent_next = false;
            debug!("cleared persistent status flags from previous turn");
        }

        if self.persistent.iter().any(|p| p.any()) {
            self.clear_persistent_next = true;
        }
    }

    fn log_window_summary(&self) {
        info!("=== PREVIOUS TURN SUMMARY ===");
        for side in [Side::Player, Side::Enemy] {
            let flags = self.flags(side);
            info!(
                %side,
                move_used = %flags.move_used,
                damage_dealt = flags.damage_dealt,
                caused_stat_drop = flags.caused_stat_drop,
                "window results"
            );
            if flags.fainted {
                info!(%side, "combatant fainted this turn");
            }
        }
    }
}
