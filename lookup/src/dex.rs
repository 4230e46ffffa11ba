//! Gen 1 stat math

/// Max IV in Gen 1
const MAX_IV: u32 = 15;

/// EV contribution at the theoretical max: floor(ceil(sqrt(65535)) / 4)
const EV_TERM: u32 = 64;

/// Gen 1 max-HP formula at max IV/EV:
/// `floor(((base + IV) * 2 + EV term) * level / 100) + level + 10`
pub fn gen1_max_hp(base_hp: u32, level: u32) -> u32 {
    ((base_hp + MAX_IV) * 2 + EV_TERM) * level / 100 + level + 10
}

/// Base HP from a decoded pokedex entry, defaulting like the dex itself
/// would for a malformed record.
pub(crate) fn base_hp_of(entry: &serde_json::Value) -> u32 {
    entry
        .get("baseStats")
        .and_then(|stats| stats.get("hp"))
        .and_then(|hp| hp.as_u64())
        .unwrap_or(50) as u32
}
