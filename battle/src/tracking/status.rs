//! Status flag tracking: crits, misses, status conditions, forced inaction,
//! confusion, stat drops, and faints

use ringside_protocol::Side;
use tracing::info;

use super::battle::BattleState;

impl BattleState {
    /// The named side suffered the crit; the attacker scored it.
    pub(crate) fn handle_crit(&mut self, target: Side) {
        let attacker = target.opposite();
        self.turn_flags[attacker.index()].crit = true;
        info!(%attacker, "scored a critical hit");
    }

    pub(crate) fn handle_miss(&mut self, attacker: Side) {
        self.turn_flags[attacker.index()].missed = true;
        info!(%attacker, "move missed");
    }

    /// Status inflicted on the target credits the opposite side.
    pub(crate) fn handle_status(&mut self, target: Side, status: &str) {
        let attacker = target.opposite();
        self.turn_flags[attacker.index()].inflicted_status = true;
        info!(%attacker, status, "inflicted status on opponent");
    }

    /// A status cure counts as a turn action; waking from sleep sets the
    /// persistent flag.
    pub(crate) fn handle_cure_status(&mut self, target: Side, status: &str) {
        self.note_action(target);

        if status == "slp" {
            self.persistent[target.index()].woke_up = true;
            info!(%target, "woke up from sleep");
        }
    }

    /// Forced inaction counts as a turn action; paralysis sets its flag,
    /// sleep is narrative only.
    pub(crate) fn handle_cant(&mut self, actor: Side, reason: &str) {
        self.note_action(actor);

        match reason {
            "par" => {
                self.turn_flags[actor.index()].fully_paralyzed = true;
                info!(%actor, "fully paralyzed");
            }
            "slp" => {
                info!(%actor, "asleep and can't move");
            }
            _ => {
                info!(%actor, reason, "can't move");
            }
        }
    }

    /// Idempotent confusion self-hit: any of the three triggers (activate
    /// tag, damage annotation, free text) lands on the same flag.
    pub(crate) fn mark_confusion_hit(&mut self, side: Side, trigger: &str) {
        let flags = &mut self.turn_flags[side.index()];
        if !flags.hit_self_confused {
            flags.hit_self_confused = true;
            info!(%side, trigger, "hit by confusion");
        }
    }

    pub(crate) fn handle_confusion_end(&mut self, side: Side) {
        self.persistent[side.index()].snapped_out_of_confusion = true;
        info!(%side, "snapped out of confusion");
    }

    /// A lowered stat on the target credits the opposite side's move.
    pub(crate) fn handle_unboost(&mut self, target: Side, stat: &str, stages: u8) {
        let mover = target.opposite();
        self.turn_flags[mover.index()].caused_stat_drop = true;
        info!(%mover, %target, stat, stages, "move lowered opponent's stat");
    }

    /// Stat increases are narrative only.
    pub(crate) fn handle_boost(&mut self, target: Side, stat: &str, stages: u8) {
        info!(%target, stat, stages, "stat rose");
    }

    /// The faint tag sets the flag; the HP zeroing happens via the damage
    /// event that accompanies it.
    pub(crate) fn handle_faint_tag(&mut self, side: Side) {
        self.turn_flags[side.index()].fainted = true;
        info!(%side, "combatant fainted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_credits_the_attacker() {
        let mut state = BattleState::new();

        state.handle_crit(Side::Enemy);
        assert!(state.flags(Side::Player).crit);
        assert!(!state.flags(Side::Enemy).crit);
    }

    #[test]
    fn test_miss_marks_the_attacker() {
        let mut state = BattleState::new();

        state.handle_miss(Side::Player);
        assert!(state.flags(Side::Player).missed);
        assert!(!state.flags(Side::Enemy).missed);
    }

    #[test]
    fn test_status_credits_the_inflicter() {
        let mut state = BattleState::new();

        state.handle_status(Side::Enemy, "par");
        assert!(state.flags(Side::Player).inflicted_status);
    }

    #[test]
    fn test_cure_sleep_sets_persistent_flag_and_counts_as_action() {
        let mut state = BattleState::new();

        state.handle_cure_status(Side::Player, "slp");
        assert!(state.persistent_flags(Side::Player).woke_up);
        assert_eq!(state.turn_window.len(), 1);
        assert_eq!(state.acted_first, Side::Player);
    }

    #[test]
    fn test_cure_other_status_is_action_only() {
        let mut state = BattleState::new();

        state.handle_cure_status(Side::Enemy, "par");
        assert!(!state.persistent_flags(Side::Enemy).woke_up);
        assert_eq!(state.turn_window.len(), 1);
    }

    #[test]
    fn test_cant_paralysis_sets_flag() {
        let mut state = BattleState::new();

        state.handle_cant(Side::Enemy, "par");
        assert!(state.flags(Side::Enemy).fully_paralyzed);
        assert_eq!(state.turn_window.len(), 1);
    }

    #[test]
    fn test_cant_sleep_sets_no_flag() {
        let mut state = BattleState::new();

        state.handle_cant(Side::Player, "slp");
        assert!(!state.flags(Side::Player).fully_paralyzed);
        // Still a turn action
        assert_eq!(state.turn_window.len(), 1);
    }

    #[test]
    fn test_confusion_hit_is_idempotent() {
        let mut state = BattleState::new();

        state.mark_confusion_hit(Side::Player, "activate tag");
        state.mark_confusion_hit(Side::Player, "damage annotation");
        state.mark_confusion_hit(Side::Player, "free text");
        assert!(state.flags(Side::Player).hit_self_confused);
    }

    #[test]
    fn test_unboost_credits_the_mover() {
        let mut state = BattleState::new();

        state.handle_unboost(Side::Enemy, "def", 1);
        assert!(state.flags(Side::Player).caused_stat_drop);
        assert!(!state.flags(Side::Enemy).caused_stat_drop);
    }

    #[test]
    fn test_boost_sets_no_flag() {
        let mut state = BattleState::new();

        state.handle_boost(Side::Player, "atk", 2);
        assert!(!state.flags(Side::Player).caused_stat_drop);
        assert!(!state.flags(Side::Enemy).caused_stat_drop);
    }

    #[test]
    fn test_faint_tag_sets_flag() {
        let mut state = BattleState::new();

        state.handle_faint_tag(Side::Enemy);
        assert!(state.flags(Side::Enemy).fainted);
    }
}
