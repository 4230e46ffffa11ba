//! Moveset tracking: the four-slot roster and its PP bookkeeping

use ringside_protocol::Side;
use tracing::info;

use super::battle::BattleState;
use crate::types::MoveSlot;

impl BattleState {
    /// Record a move use for one side.
    ///
    /// Known moves have their slot's PP decremented (floored at zero); a new
    /// move takes the first empty slot with `floor(base_pp * 1.6) - 1` PP
    /// remaining. Returns the slot index, or `None` when the move is not in
    /// the catalog or the roster is full (narrative log only, no mutation).
    pub fn record_move_used(&mut self, side: Side, move_name: &str) -> Option<usize> {
        let data = self.catalog.move_data(move_name)?;
        let slots = &mut self.combatants[side.index()].moves;

        if let Some(i) = slots.iter().position(|slot| slot.id == data.id) {
            slots[i].pp = slots[i].pp.saturating_sub(1);
            return Some(i);
        }

        let i = slots.iter().position(|slot| slot.is_empty())?;
        let initial_pp = data.base_pp * 8 / 5;
        slots[i] = MoveSlot {
            id: data.id,
            pp: initial_pp - 1,
            name: move_name.to_string(),
        };
        Some(i)
    }

    /// Handle a |move| event: a turn action plus roster bookkeeping.
    pub(crate) fn handle_move(&mut self, side: Side, move_name: &str) {
        self.note_action(side);

        if move_name.is_empty() {
            return;
        }

        self.turn_flags[side.index()].move_used = move_name.to_string();

        match self.record_move_used(side, move_name) {
            Some(slot) => {
                let pp = self.combatants[side.index()].moves[slot].pp;
                info!(%side, move_name, slot = slot + 1, pp_remaining = pp, "used move");
            }
            None => {
                info!(%side, move_name, "used move (not in catalog or no free slot)");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_inserts_with_initial_pp_minus_one() {
        let mut state = BattleState::new();

        // Thunderbolt: base 15, initial pool floor(15 * 1.6) = 24
        let slot = state.record_move_used(Side::Player, "Thunderbolt").unwrap();
        assert_eq!(slot, 0);

        let recorded = &state.combatant(Side::Player).moves[0];
        assert_eq!(recorded.id, 0x55);
        assert_eq!(recorded.pp, 23);
        assert_eq!(recorded.name, "Thunderbolt");
    }

    #[test]
    fn test_repeat_use_decrements_same_slot() {
        let mut state = BattleState::new();

        state.record_move_used(Side::Player, "Thunderbolt");
        let slot = state.record_move_used(Side::Player, "Thunderbolt").unwrap();

        assert_eq!(slot, 0);
        assert_eq!(state.combatant(Side::Player).moves[0].pp, 22);
        // Still only one slot occupied
        assert_eq!(state.combatant(Side::Player).known_moves().count(), 1);
    }

    #[test]
    fn test_pp_never_goes_below_zero() {
        let mut state = BattleState::new();

        // Struggle: base 1, initial pool 1, first use leaves 0
        state.record_move_used(Side::Enemy, "Struggle");
        assert_eq!(state.combatant(Side::Enemy).moves[0].pp, 0);

        for _ in 0..5 {
            state.record_move_used(Side::Enemy, "Struggle");
        }
        assert_eq!(state.combatant(Side::Enemy).moves[0].pp, 0);
    }

    #[test]
    fn test_unknown_move_returns_none() {
        let mut state = BattleState::new();

        assert!(state.record_move_used(Side::Player, "Dark Pulse").is_none());
        assert_eq!(state.combatant(Side::Player).known_moves().count(), 0);
    }

    #[test]
    fn test_full_roster_returns_none() {
        let mut state = BattleState::new();

        for name in ["Psychic", "Recover", "Thunder Wave", "Seismic Toss"] {
            assert!(state.record_move_used(Side::Player, name).is_some());
        }

        assert!(state.record_move_used(Side::Player, "Reflect").is_none());
        assert_eq!(state.combatant(Side::Player).known_moves().count(), 4);
    }

    #[test]
    fn test_handle_move_sets_move_used_and_counts_as_action() {
        let mut state = BattleState::new();

        state.handle_move(Side::Enemy, "Body Slam");

        assert_eq!(state.flags(Side::Enemy).move_used, "Body Slam");
        assert_eq!(state.acted_first, Side::Enemy);
        assert_eq!(state.turn_window.len(), 1);
    }
}
