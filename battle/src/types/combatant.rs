//! Combatant state types

/// One of the four fixed move slots on a combatant.
///
/// Empty slots carry id 0 and an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSlot {
    /// Internal move id (0 = empty slot)
    pub id: u16,
    /// Remaining power points
    pub pp: u16,
    /// Display name of the move
    pub name: String,
}

impl MoveSlot {
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

/// One side's active combatant, replaced wholesale on switch events
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    /// Nickname as it appears in the feed
    pub nickname: String,

    /// Internal species id (0 = not in catalog)
    pub species_id: u16,

    /// Species display name
    pub species_name: String,

    /// Level (1-100)
    pub level: u8,

    /// Current HP as last reported (percentage or real, per the feed)
    pub current_hp: u32,

    /// Max HP as last reported (100 while only percentages are known)
    pub max_hp: u32,

    /// Primary type id
    pub type1: u8,

    /// Secondary type id (same as type1 for mono-typed species)
    pub type2: u8,

    /// The four move slots
    pub moves: [MoveSlot; 4],
}

impl Combatant {
    /// Moves revealed so far, in slot order
    pub fn known_moves(&self) -> impl Iterator<Item = &MoveSlot> {
        self.moves.iter().filter(|slot| !slot.is_empty())
    }

    /// Reset all four slots to empty
    pub fn clear_moves(&mut self) {
        self.moves = Default::default();
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            species_id: 0,
            species_name: String::new(),
            level: 100,
            current_hp: 0,
            max_hp: 0,
            type1: 0,
            type2: 0,
            moves: Default::default(),
        }
    }
}
