//! Per-turn and persistent status flags

/// Flags scoped to one turn window, reset at the first action of each window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnFlags {
    /// This side scored a critical hit
    pub crit: bool,

    /// This side's move missed
    pub missed: bool,

    /// This side was fully paralyzed and lost its action
    pub fully_paralyzed: bool,

    /// This side hit itself in confusion
    pub hit_self_confused: bool,

    /// This side inflicted a status condition on the opponent
    pub inflicted_status: bool,

    /// Exact damage this side dealt to the opponent (0 = none or unknown)
    pub damage_dealt: u32,

    /// This side's move lowered an opponent stat
    pub caused_stat_drop: bool,

    /// Name of the move this side used this window
    pub move_used: String,

    /// This side's combatant fainted
    pub fainted: bool,
}

impl TurnFlags {
    /// Reset everything for a new turn window
    pub fn reset(&mut self) {
        *self = TurnFlags::default();
    }
}

/// Flags that stay visible through the turn they were set in and clear at
/// the following turn boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistentFlags {
    /// This side's combatant woke up from sleep
    pub woke_up: bool,

    /// This side's combatant snapped out of confusion
    pub snapped_out_of_confusion: bool,
}

impl PersistentFlags {
    pub fn any(&self) -> bool {
        self.woke_up || self.snapped_out_of_confusion
    }

    pub fn clear(&mut self) {
        *self = PersistentFlags::default();
    }
}
