//! Event routing: the single entry point that classifies feed lines and
//! dispatches them to the owning trackers
//!
//! Structured tags are matched first by the protocol parser; free-text
//! confusion phrasings are only consulted for lines nothing else claimed.
//! No line, however malformed, aborts the stream.

use ringside_protocol::{FeedEvent, Side, parse_event};
use tracing::{debug, error, info};

use super::battle::BattleState;
use crate::TrackError;

impl BattleState {
    /// Process one feed line.
    ///
    /// Malformed lines are ignored without touching state; a fault inside a
    /// handler is reported and processing resumes with the next line.
    pub fn process(&mut self, line: &str) {
        let event = match parse_event(line) {
            Ok(event) => event,
            Err(err) => {
                debug!(line, %err, "ignoring unparsable line");
                return;
            }
        };

        if let Err(err) = self.apply(event) {
            error!(line, %err, "handler fault, line skipped");
        }
    }

    /// Apply a decoded event to the state.
    pub fn apply(&mut self, event: FeedEvent) -> Result<(), TrackError> {
        match event {
            FeedEvent::Move { actor, move_name } => {
                self.handle_move(actor.side, &move_name);
            }

            FeedEvent::Crit(target) => {
                self.handle_crit(target.side);
            }

            FeedEvent::Miss(attacker) => {
                self.handle_miss(attacker.side);
            }

            FeedEvent::Damage { target, hp, from } => {
                let Some(hp) = hp else {
                    debug!("damage event without hp info ignored");
                    return Ok(());
                };
                let from_confusion = from
                    .as_deref()
                    .is_some_and(|f| f.eq_ignore_ascii_case("confusion"));

                if hp.is_faint() {
                    self.apply_damage_or_heal(target.side, 0, 100, from_confusion, true);
                } else if let Some(max) = hp.max {
                    self.apply_damage_or_heal(target.side, hp.current, max, from_confusion, false);
                } else {
                    debug!("damage event without hp fraction ignored");
                }
            }

            FeedEvent::Heal { target, hp } => {
                if let Some(hp) = hp
                    && let Some(max) = hp.max
                {
                    self.apply_damage_or_heal(target.side, hp.current, max, false, false);
                } else {
                    debug!("heal event without hp fraction ignored");
                }
            }

            FeedEvent::Status { target, status } => {
                self.handle_status(target.side, &status);
            }

            FeedEvent::CureStatus { target, status } => {
                self.handle_cure_status(target.side, &status);
            }

            FeedEvent::Cant { actor, reason } => {
                self.handle_cant(actor.side, &reason);
            }

            FeedEvent::Activate { actor, effect } => {
                if effect.to_lowercase().contains("confusion") {
                    self.mark_confusion_hit(actor.side, "activate tag");
                }
            }

            FeedEvent::VolatileEnd { actor, effect } => {
                if effect.to_lowercase().contains("confusion") {
                    self.handle_confusion_end(actor.side);
                }
            }

            FeedEvent::Boost {
                target,
                stat,
                stages,
            } => {
                self.handle_boost(target.side, stat.as_str(), stages);
            }

            FeedEvent::Unboost {
                target,
                stat,
                stages,
            } => {
                self.handle_unboost(target.side, stat.as_str(), stages);
            }

            FeedEvent::Turn(number) => {
                self.handle_turn(number);
            }

            FeedEvent::Switch { actor, details, hp } | FeedEvent::Drag { actor, details, hp } => {
                if let Some(hp) = hp
                    && let Some(max) = hp.max
                {
                    self.apply_switch(actor.side, &actor.name, &details, hp.current, max);
                } else {
                    debug!("switch event without hp fraction ignored");
                }
            }

            FeedEvent::Request(request) => {
                self.handle_request(&request)?;
            }

            FeedEvent::Faint(actor) => {
                self.handle_faint_tag(actor.side);
            }

            FeedEvent::BattleStart => {
                info!("battle started, state reset");
                self.reset();
            }

            FeedEvent::Win(winner) => {
                info!(winner = %winner, "battle ended");
                self.ended = true;
                self.winner = Some(winner);
            }

            FeedEvent::Tie => {
                self.ended = true;
                info!("battle ended in a tie");
            }

            FeedEvent::Raw(text) => {
                self.handle_free_text(&text);
            }
        }

        Ok(())
    }

    /// Free-text fallback for confusion self-damage phrasings that arrive
    /// without any structured tag.
    fn handle_free_text(&mut self, text: &str) {
        let lower = text.to_lowercase();
        if !lower.contains("hurt itself in its confusion") && !lower.contains("[from] confusion") {
            return;
        }

        if let Some(side) = side_mentioned(text) {
            self.mark_confusion_hit(side, "free text");
        }
    }
}

/// Which side a free-text line talks about, by its embedded side token.
fn side_mentioned(text: &str) -> Option<Side> {
    if text.contains("p1a") {
        Some(Side::Player)
    } else if text.contains("p2a") {
        Some(Side::Enemy)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_opening_sequence() {
        let mut state = BattleState::new();

        state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");
        state.process("|move|p1a: Alakazam|Psychic");
        state.process("|-damage|p2a: Snorlax|40/100");
        state.process("|turn|2");

        let player = state.combatant(Side::Player);
        assert_eq!(player.species_name, "Alakazam");
        assert_eq!(player.species_id, 0x95);

        // Psychic: base 10, floor(10 * 1.6) - 1 = 15 remaining
        assert_eq!(player.moves[0].name, "Psychic");
        assert_eq!(player.moves[0].pp, 15);

        // Enemy real max unknown: the 60% delta is logged, not attributed
        assert_eq!(state.flags(Side::Player).damage_dealt, 0);
        assert_eq!(state.hp_record(Side::Enemy).displayed, 40);
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn test_confusion_triggers_all_set_the_same_flag() {
        let lines: [&str; 3] = [
            "|-activate|p1a: Alakazam|confusion",
            "|-damage|p1a: Alakazam|88/100|[from] confusion",
            "p1a: Alakazam hurt itself in its confusion!",
        ];

        for first in lines {
            let mut state = BattleState::new();
            state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");

            state.process(first);
            assert!(
                state.flags(Side::Player).hit_self_confused,
                "trigger failed: {first}"
            );

            // Firing the other phrasings for the same event changes nothing
            for other in lines {
                state.process(other);
            }
            assert!(state.flags(Side::Player).hit_self_confused);
            assert_eq!(state.flags(Side::Enemy).damage_dealt, 0);
        }
    }

    #[test]
    fn test_reset_happens_once_per_window() {
        let mut state = BattleState::new();

        state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");
        state.process("|switch|p2a: Snorlax|Snorlax, L100|100/100");

        state.process("|move|p1a: Alakazam|Psychic");
        assert_eq!(state.flags(Side::Player).move_used, "Psychic");

        // A second action must not wipe the first action's record
        state.process("|move|p2a: Snorlax|Body Slam");
        assert_eq!(state.flags(Side::Player).move_used, "Psychic");
        assert_eq!(state.flags(Side::Enemy).move_used, "Body Slam");
        assert_eq!(state.acted_first, Side::Player);

        // Next window: the first action resets both sides
        state.process("|turn|2");
        state.process("|move|p2a: Snorlax|Body Slam");
        assert_eq!(state.flags(Side::Player).move_used, "");
        assert_eq!(state.acted_first, Side::Enemy);
    }

    #[test]
    fn test_switch_resets_full_roster() {
        let mut state = BattleState::new();
        state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");

        for name in ["Psychic", "Recover", "Thunder Wave", "Seismic Toss"] {
            state.process(&format!("|move|p1a: Alakazam|{name}"));
        }
        assert_eq!(state.combatant(Side::Player).known_moves().count(), 4);

        state.process("|switch|p1a: Starmie|Starmie, L100|100/100");
        assert_eq!(state.combatant(Side::Player).known_moves().count(), 0);
        assert_eq!(state.combatant(Side::Player).species_name, "Starmie");
    }

    #[test]
    fn test_faint_pairing_of_damage_and_tag() {
        let mut state = BattleState::new();
        state.process("|switch|p1a: Alakazam|Alakazam, L100|270/323");
        state.process("|-damage|p1a: Alakazam|42/323");
        assert_eq!(state.flags(Side::Enemy).damage_dealt, 228);

        state.process("|-damage|p1a: Alakazam|0 fnt");
        state.process("|faint|p1a: Alakazam");

        assert_eq!(state.flags(Side::Enemy).damage_dealt, 42);
        assert!(state.flags(Side::Player).fainted);
        assert_eq!(state.combatant(Side::Player).current_hp, 0);
    }

    #[test]
    fn test_request_payload_updates_owning_side() {
        let mut state = BattleState::new();
        state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");
        state.process(
            r#"|request|{"rqid":1,"side":{"name":"Red","id":"p1","pokemon":[{"ident":"p1: Alakazam","details":"Alakazam, L100","condition":"270/323","active":true}]}}"#,
        );

        assert_eq!(state.hp_record(Side::Player).real_max, 323);

        state.process(
            r#"|request|{"rqid":2,"side":{"name":"Red","id":"p1","pokemon":[{"ident":"p1: Alakazam","details":"Alakazam, L100","condition":"173/323","active":true}]}}"#,
        );

        assert_eq!(state.flags(Side::Enemy).damage_dealt, 97);
    }

    #[test]
    fn test_malformed_lines_never_mutate_state() {
        let mut state = BattleState::new();
        state.process("|switch|p1a: Alakazam|Alakazam, L100|100/100");
        let before = state.clone();

        state.process("|move|");
        state.process("|-damage|p1a: Alakazam|garbage");
        state.process("|turn|not-a-number");
        state.process("|request|{broken json");
        state.process("");

        assert_eq!(state.turn, before.turn);
        assert_eq!(state.turn_window.len(), before.turn_window.len());
        assert_eq!(state.hp_record(Side::Player), before.hp_record(Side::Player));
        assert_eq!(state.flags(Side::Player), before.flags(Side::Player));
    }

    #[test]
    fn test_battle_start_resets_state() {
        let mut state = BattleState::new();
        state.process("|switch|p1a: Alakazam|Alakazam, L100|270/323");
        state.process("|turn|5");
        assert_eq!(state.turn, 5);

        state.process("|start");
        assert_eq!(state.turn, 0);
        assert_eq!(state.combatant(Side::Player).species_name, "");
    }

    #[test]
    fn test_win_marks_battle_ended() {
        let mut state = BattleState::new();

        state.process("|win|Red");
        assert!(state.ended);
        assert_eq!(state.winner.as_deref(), Some("Red"));
    }

    #[test]
    fn test_wake_up_counts_as_action_and_defers_clear() {
        let mut state = BattleState::new();
        state.process("|switch|p2a: Snorlax|Snorlax, L100|100/100");

        state.process("|-curestatus|p2a: Snorlax|slp");
        assert!(state.persistent_flags(Side::Enemy).woke_up);
        assert_eq!(state.acted_first, Side::Enemy);

        state.process("|turn|2");
        assert!(state.persistent_flags(Side::Enemy).woke_up);

        state.process("|turn|3");
        assert!(!state.persistent_flags(Side::Enemy).woke_up);
    }

    #[test]
    fn test_drag_behaves_like_switch() {
        let mut state = BattleState::new();

        state.process("|drag|p2a: Snorlax|Snorlax, L100|85/100");
        assert_eq!(state.combatant(Side::Enemy).species_name, "Snorlax");
        assert_eq!(state.hp_record(Side::Enemy).displayed, 85);
        assert_eq!(state.take_stat_queries().len(), 1);
    }
}
