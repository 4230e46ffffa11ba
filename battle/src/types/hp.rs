//! Health bookkeeping records

/// An authoritative numerator/denominator health pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactHp {
    pub current: u32,
    pub max: u32,
}

/// Best-known health for one side, reconciled from every source the feed
/// offers: percentage displays, exact fractions, and request payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HpRecord {
    /// Last displayed current HP (0-100 percentage, or a real value if the
    /// feed reported an exact fraction)
    pub displayed: u32,

    /// Known real max HP (0 = unknown)
    pub real_max: u32,

    /// Exact health pair, once any authoritative source provided one
    pub exact: Option<ExactHp>,
}

impl HpRecord {
    /// Forget everything (new combatant, new battle)
    pub fn reset(&mut self) {
        *self = HpRecord::default();
    }
}
