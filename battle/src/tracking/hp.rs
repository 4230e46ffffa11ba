//! Health ledger: reconciling percentage displays, exact fractions, and
//! authoritative request payloads into best-known numeric state

use ringside_protocol::{Details, Side, TeamRequest};
use tracing::{debug, info};

use super::battle::{BattleState, StatQuery};
use crate::TrackError;
use crate::catalog::normalize_name;
use crate::types::{Combatant, ExactHp};

impl BattleState {
    /// Apply a damage or heal report for one side.
    ///
    /// `displayed_max == 100` means `displayed_current` is a percentage; any
    /// other max is an exact fraction and becomes the side's known real max.
    /// A positive delta is attributed to the opponent's damage counter, or to
    /// the side's own confusion self-hit flag when the event carried a
    /// confusion annotation. Negative deltas (heals) only update bookkeeping.
    pub fn apply_damage_or_heal(
        &mut self,
        side: Side,
        displayed_current: u32,
        displayed_max: u32,
        is_confusion_self_damage: bool,
        is_faint: bool,
    ) {
        if is_confusion_self_damage {
            self.mark_confusion_hit(side, "damage annotation");
        }

        if is_faint {
            self.resolve_faint(side, is_confusion_self_damage);
            return;
        }

        let i = side.index();
        let delta = self.hp[i].displayed as i64 - displayed_current as i64;

        self.combatants[i].current_hp = displayed_current;
        if displayed_max != 100 {
            self.combatants[i].max_hp = displayed_max;
        }

        if displayed_max != 100 {
            // Exact fraction: adopt it as the authoritative pair.
            self.hp[i].exact = Some(ExactHp {
                current: displayed_current,
                max: displayed_max,
            });
            self.hp[i].real_max = displayed_max;
        } else if self.hp[i].real_max > 0 {
            // Percentage display with a known real max: refine the estimate.
            let real_max = self.hp[i].real_max;
            self.hp[i].exact = Some(ExactHp {
                current: displayed_current * real_max / 100,
                max: real_max,
            });
        }

        if delta > 0 {
            if displayed_max == 100 {
                let real_max = self.hp[i].real_max;
                if real_max > 0 {
                    let amount = delta as u32 * real_max / 100;
                    self.attribute_damage(side, amount, is_confusion_self_damage);
                } else {
                    // No numeric attribution until the real max is known.
                    info!(
                        %side,
                        percent = delta,
                        "took percentage damage (awaiting real max HP)"
                    );
                }
            } else {
                self.attribute_damage(side, delta as u32, is_confusion_self_damage);
            }
        }

        self.hp[i].displayed = displayed_current;
    }

    /// Replace a side's combatant on a switch or drag event.
    ///
    /// An exact fraction is adopted immediately; a percentage-only report
    /// queues a background stat lookup and clears the outgoing combatant's
    /// exact numbers so they can never be attributed to the incoming one.
    pub fn apply_switch(
        &mut self,
        side: Side,
        nickname: &str,
        details: &Details,
        displayed_current: u32,
        displayed_max: u32,
    ) {
        let i = side.index();
        let level = details.level.unwrap_or(100);
        let species_id = self.catalog.species_id(&details.species);
        if species_id.is_none() {
            debug!(species = %details.species, "species not in catalog");
        }

        let combatant = &mut self.combatants[i];
        *combatant = Combatant::default();
        combatant.nickname = nickname.to_string();
        combatant.species_name = details.species.clone();
        combatant.species_id = species_id.unwrap_or(0);
        combatant.level = level;
        combatant.current_hp = displayed_current;
        combatant.max_hp = displayed_max;

        self.hp[i].displayed = displayed_current;

        if displayed_max != 100 {
            self.hp[i].exact = Some(ExactHp {
                current: displayed_current,
                max: displayed_max,
            });
            self.hp[i].real_max = displayed_max;
            info!(
                %side,
                species = %details.species,
                current = displayed_current,
                max = displayed_max,
                "switched in with exact hp"
            );
        } else {
            self.hp[i].exact = None;
            self.hp[i].real_max = 0;
            self.stat_queries.push(StatQuery {
                side,
                species: details.species.clone(),
                level,
            });
            info!(
                %side,
                species = %details.species,
                percent = displayed_current,
                "switched in, real max HP pending lookup"
            );
        }
    }

    /// Apply an authoritative exact fraction from a request payload.
    ///
    /// Always wins over percentage and heuristic estimates. A positive delta
    /// against the previous exact value is attributed to the opponent.
    pub fn apply_exact(&mut self, side: Side, current: u32, max: u32) {
        let i = side.index();

        if let Some(prev) = self.hp[i].exact
            && prev.current > 0
        {
            let delta = prev.current as i64 - current as i64;
            if delta > 0 {
                let attacker = side.opposite();
                self.turn_flags[attacker.index()].damage_dealt = delta as u32;
                info!(
                    %attacker,
                    amount = delta,
                    current,
                    max,
                    "damage confirmed by exact payload"
                );
            }
        }

        self.hp[i].exact = Some(ExactHp { current, max });
        self.hp[i].real_max = max;
    }

    /// Apply a completed background stat lookup.
    ///
    /// Discarded unless the side is still occupied by the species the lookup
    /// was issued for; a switch that happened while the query was in flight
    /// makes the result stale.
    pub fn apply_stat_lookup(&mut self, side: Side, species: &str, max_hp: u32) {
        let i = side.index();
        let occupant = &self.combatants[i].species_name;

        if normalize_name(occupant) != normalize_name(species) {
            debug!(
                %side,
                species,
                occupant = %occupant,
                "discarding stale stat lookup result"
            );
            return;
        }

        let estimated = self.hp[i].displayed * max_hp / 100;
        self.hp[i].real_max = max_hp;
        self.hp[i].exact = Some(ExactHp {
            current: estimated,
            max: max_hp,
        });
        info!(
            %side,
            species,
            max_hp,
            estimated_current = estimated,
            "refined real max HP from lookup"
        );
    }

    /// Handle a request payload: exact-fraction update for the owning side's
    /// active combatant only.
    pub(crate) fn handle_request(&mut self, request: &TeamRequest) -> Result<(), TrackError> {
        let Some(side_info) = &request.side else {
            return Ok(());
        };
        let Some(side) = side_info.side() else {
            return Ok(());
        };
        let Some(mon) = request.active_mon() else {
            return Ok(());
        };

        // Fainted conditions ("0 fnt") carry no fraction and are resolved by
        // the damage event instead.
        if !mon.condition.contains('/') {
            return Ok(());
        }

        let (current, max) = mon
            .hp()
            .ok_or_else(|| TrackError::BadCondition(mon.condition.clone()))?;
        self.apply_exact(side, current, max);
        Ok(())
    }

    /// Resolve a faint report ("0 fnt"): the damage dealt is the previous
    /// known health, chosen by source priority.
    fn resolve_faint(&mut self, side: Side, is_confusion_self_damage: bool) {
        let i = side.index();
        let amount = self.faint_damage(side);

        if amount > 0 {
            self.attribute_damage(side, amount, is_confusion_self_damage);
            info!(%side, amount, "combatant fainted");
        } else {
            info!(%side, "combatant fainted, damage unattributable");
        }

        self.combatants[i].current_hp = 0;
        self.hp[i].displayed = 0;
        if let Some(exact) = &mut self.hp[i].exact {
            exact.current = 0;
        }
    }

    /// Previous known health for faint attribution, by priority: live exact
    /// value, then percentage converted through the real max, then the
    /// combatant record, else zero.
    fn faint_damage(&self, side: Side) -> u32 {
        let i = side.index();
        let record = &self.hp[i];

        // A full-health exact pair is likely a stale placeholder; skip it.
        if let Some(exact) = record.exact
            && exact.current > 0
            && exact.current != exact.max
        {
            return exact.current;
        }

        if record.displayed > 0 && record.real_max > 0 {
            return if record.displayed <= 100 {
                record.displayed * record.real_max / 100
            } else {
                record.displayed
            };
        }

        if self.combatants[i].current_hp > 0 {
            return self.combatants[i].current_hp;
        }

        0
    }

    /// Route a computed damage amount: confusion self-damage stays on the
    /// victim's side, anything else credits the opponent.
    fn attribute_damage(&mut self, side: Side, amount: u32, is_confusion_self_damage: bool) {
        if amount == 0 {
            return;
        }

        if is_confusion_self_damage {
            info!(%side, amount, "hit itself in confusion");
        } else {
            let attacker = side.opposite();
            self.turn_flags[attacker.index()].damage_dealt = amount;
            info!(%attacker, amount, "damage dealt");
        }
    }
}
