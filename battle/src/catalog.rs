//! Static Gen 1 reference tables
//!
//! Move, species, and type data as they appear in the Gen 1 data structures.
//! The catalog has no logic of its own; the trackers query it synchronously.

use std::collections::HashMap;

/// Catalog entry for a move: internal id and base PP pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveData {
    pub id: u16,
    pub base_pp: u16,
}

/// Name normalization shared by catalog lookups and staleness checks:
/// lowercase with spaces, hyphens, apostrophes, and periods removed.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '\'' | '.'))
        .collect::<String>()
        .to_lowercase()
}

/// Immutable lookup tables for Gen 1 moves, species, and types
#[derive(Debug, Clone)]
pub struct Catalog {
    moves: HashMap<&'static str, MoveData>,
    species: HashMap<&'static str, u16>,
    types: HashMap<&'static str, u8>,
}

impl Catalog {
    /// Build the lookup maps from the static tables
    pub fn new() -> Self {
        let moves = MOVES
            .iter()
            .map(|&(name, id, base_pp)| (name, MoveData { id, base_pp }))
            .collect();
        let species = SPECIES.iter().map(|&(id, name)| (name, id)).collect();
        let types = TYPES.iter().copied().collect();

        Self {
            moves,
            species,
            types,
        }
    }

    /// Look up a move by its display name
    pub fn move_data(&self, name: &str) -> Option<MoveData> {
        self.moves.get(name).copied()
    }

    /// Look up a species' internal id by name
    pub fn species_id(&self, name: &str) -> Option<u16> {
        self.species.get(name).copied()
    }

    /// Look up a type's internal id by name
    pub fn type_id(&self, name: &str) -> Option<u8> {
        self.types.get(name).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Gen 1 move table: (name, internal id, base PP)
const MOVES: &[(&str, u16, u16)] = &[
    ("Pound", 0x01, 35),
    ("Karate Chop", 0x02, 25),
    ("Double Slap", 0x03, 10),
    ("Comet Punch", 0x04, 15),
    ("Mega Punch", 0x05, 20),
    ("Pay Day", 0x06, 20),
    ("Fire Punch", 0x07, 15),
    ("Ice Punch", 0x08, 15),
    ("ThunderPunch", 0x09, 15),
    ("Scratch", 0x0A, 35),
    ("ViceGrip", 0x0B, 30),
    ("Guillotine", 0x0C, 5),
    ("Razor Wind", 0x0D, 10),
    ("Swords Dance", 0x0E, 30),
    ("Cut", 0x0F, 30),
    ("Gust", 0x10, 35),
    ("Wing Attack", 0x11, 35),
    ("Whirlwind", 0x12, 20),
    ("Fly", 0x13, 15),
    ("Bind", 0x14, 20),
    ("Slam", 0x15, 20),
    ("Vine Whip", 0x16, 25),
    ("Stomp", 0x17, 20),
    ("Double Kick", 0x18, 30),
    ("Mega Kick", 0x19, 5),
    ("Jump Kick", 0x1A, 10),
    ("Rolling Kick", 0x1B, 15),
    ("Sand-Attack", 0x1C, 15),
    ("Headbutt", 0x1D, 15),
    ("Horn Attack", 0x1E, 25),
    ("Fury Attack", 0x1F, 20),
    ("Horn Drill", 0x20, 5),
    ("Tackle", 0x21, 35),
    ("Body Slam", 0x22, 15),
    ("Wrap", 0x23, 20),
    ("Take Down", 0x24, 20),
    ("Thrash", 0x25, 10),
    ("Double-Edge", 0x26, 15),
    ("Tail Whip", 0x27, 30),
    ("Poison Sting", 0x28, 35),
    ("Twineedle", 0x29, 20),
    ("Pin Missile", 0x2A, 20),
    ("Leer", 0x2B, 30),
    ("Bite", 0x2C, 25),
    ("Growl", 0x2D, 40),
    ("Roar", 0x2E, 20),
    ("Sing", 0x2F, 15),
    ("Supersonic", 0x30, 20),
    ("SonicBoom", 0x31, 20),
    ("Disable", 0x32, 20),
    ("Acid", 0x33, 30),
    ("Ember", 0x34, 25),
    ("Flamethrower", 0x35, 15),
    ("Mist", 0x36, 30),
    ("Water Gun", 0x37, 25),
    ("Hydro Pump", 0x38, 5),
    ("Surf", 0x39, 15),
    ("Ice Beam", 0x3A, 10),
    ("Blizzard", 0x3B, 5),
    ("Psybeam", 0x3C, 20),
    ("BubbleBeam", 0x3D, 20),
    ("Aurora Beam", 0x3E, 20),
    ("Hyper Beam", 0x3F, 5),
    ("Peck", 0x40, 35),
    ("Drill Peck", 0x41, 20),
    ("Submission", 0x42, 25),
    ("Low Kick", 0x43, 20),
    ("Counter", 0x44, 20),
    ("Seismic Toss", 0x45, 20),
    ("Strength", 0x46, 15),
    ("Absorb", 0x47, 25),
    ("Mega Drain", 0x48, 15),
    ("Leech Seed", 0x49, 10),
    ("Growth", 0x4A, 20),
    ("Razor Leaf", 0x4B, 25),
    ("SolarBeam", 0x4C, 10),
    ("PoisonPowder", 0x4D, 35),
    ("Stun Spore", 0x4E, 30),
    ("Sleep Powder", 0x4F, 15),
    ("Petal Dance", 0x50, 10),
    ("String Shot", 0x51, 40),
    ("Dragon Rage", 0x52, 10),
    ("Fire Spin", 0x53, 15),
    ("ThunderShock", 0x54, 30),
    ("Thunderbolt", 0x55, 15),
    ("Thunder Wave", 0x56, 20),
    ("Thunder", 0x57, 10),
    ("Rock Throw", 0x58, 15),
    ("Earthquake", 0x59, 10),
    ("Fissure", 0x5A, 5),
    ("Dig", 0x5B, 10),
    ("Toxic", 0x5C, 10),
    ("Confusion", 0x5D, 25),
    ("Psychic", 0x5E, 10),
    ("Hypnosis", 0x5F, 20),
    ("Meditate", 0x60, 40),
    ("Agility", 0x61, 30),
    ("Quick Attack", 0x62, 30),
    ("Rage", 0x63, 20),
    ("Teleport", 0x64, 20),
    ("Night Shade", 0x65, 15),
    ("Mimic", 0x66, 10),
    ("Screech", 0x67, 40),
    ("Double Team", 0x68, 15),
    ("Recover", 0x69, 20),
    ("Harden", 0x6A, 30),
    ("Minimize", 0x6B, 10),
    ("SmokeScreen", 0x6C, 20),
    ("Confuse Ray", 0x6D, 10),
    ("Withdraw", 0x6E, 40),
    ("Defense Curl", 0x6F, 40),
    ("Barrier", 0x70, 20),
    ("Light Screen", 0x71, 30),
    ("Haze", 0x72, 30),
    ("Reflect", 0x73, 20),
    ("Focus Energy", 0x74, 30),
    ("Bide", 0x75, 10),
    ("Metronome", 0x76, 10),
    ("Mirror Move", 0x77, 20),
    ("Selfdestruct", 0x78, 5),
    ("Egg Bomb", 0x79, 10),
    ("Lick", 0x7A, 30),
    ("Smog", 0x7B, 20),
    ("Sludge", 0x7C, 20),
    ("Bone Club", 0x7D, 20),
    ("Fire Blast", 0x7E, 5),
    ("Waterfall", 0x7F, 15),
    ("Clamp", 0x80, 15),
    ("Swift", 0x81, 20),
    ("Skull Bash", 0x82, 10),
    ("Spike Cannon", 0x83, 15),
    ("Constrict", 0x84, 35),
    ("Amnesia", 0x85, 20),
    ("Kinesis", 0x86, 15),
    ("Softboiled", 0x87, 10),
    ("Hi Jump Kick", 0x88, 10),
    ("Glare", 0x89, 30),
    ("Dream Eater", 0x8A, 15),
    ("Poison Gas", 0x8B, 40),
    ("Barrage", 0x8C, 20),
    ("Leech Life", 0x8D, 10),
    ("Lovely Kiss", 0x8E, 10),
    ("Sky Attack", 0x8F, 5),
    ("Transform", 0x90, 10),
    ("Bubble", 0x91, 30),
    ("Dizzy Punch", 0x92, 10),
    ("Spore", 0x93, 15),
    ("Flash", 0x94, 20),
    ("Psywave", 0x95, 15),
    ("Splash", 0x96, 40),
    ("Acid Armor", 0x97, 20),
    ("Crabhammer", 0x98, 10),
    ("Explosion", 0x99, 5),
    ("Fury Swipes", 0x9A, 15),
    ("Bonemerang", 0x9B, 10),
    ("Rest", 0x9C, 10),
    ("Rock Slide", 0x9D, 10),
    ("Hyper Fang", 0x9E, 15),
    ("Sharpen", 0x9F, 30),
    ("Conversion", 0xA0, 30),
    ("Tri Attack", 0xA1, 10),
    ("Super Fang", 0xA2, 10),
    ("Slash", 0xA3, 20),
    ("Substitute", 0xA4, 10),
    ("Struggle", 0xA5, 1),
];

/// Gen 1 species table: (internal id, name)
const SPECIES: &[(u16, &str)] = &[
    (0x01, "Rhydon"),
    (0x02, "Kangaskhan"),
    (0x03, "Nidoran♂"),
    (0x04, "Clefairy"),
    (0x05, "Spearow"),
    (0x06, "Voltorb"),
    (0x07, "Nidoking"),
    (0x08, "Slowbro"),
    (0x09, "Ivysaur"),
    (0x0A, "Exeggutor"),
    (0x0B, "Lickitung"),
    (0x0C, "Exeggcute"),
    (0x0D, "Grimer"),
    (0x0E, "Gengar"),
    (0x0F, "Nidoran♀"),
    (0x10, "Nidoqueen"),
    (0x11, "Cubone"),
    (0x12, "Rhyhorn"),
    (0x13, "Lapras"),
    (0x14, "Arcanine"),
    (0x15, "Mew"),
    (0x16, "Gyarados"),
    (0x17, "Shellder"),
    (0x18, "Tentacool"),
    (0x19, "Gastly"),
    (0x1A, "Scyther"),
    (0x1B, "Staryu"),
    (0x1C, "Blastoise"),
    (0x1D, "Pinsir"),
    (0x1E, "Tangela"),
    (0x21, "Growlithe"),
    (0x22, "Onix"),
    (0x23, "Fearow"),
    (0x24, "Pidgey"),
    (0x25, "Slowpoke"),
    (0x26, "Kadabra"),
    (0x27, "Graveler"),
    (0x28, "Chansey"),
    (0x29, "Machoke"),
    (0x2A, "Mr. Mime"),
    (0x2B, "Hitmonlee"),
    (0x2C, "Hitmonchan"),
    (0x2D, "Arbok"),
    (0x2E, "Parasect"),
    (0x2F, "Psyduck"),
    (0x30, "Drowzee"),
    (0x31, "Golem"),
    (0x33, "Magmar"),
    (0x35, "Electabuzz"),
    (0x36, "Magneton"),
    (0x37, "Koffing"),
    (0x39, "Mankey"),
    (0x3A, "Seel"),
    (0x3B, "Diglett"),
    (0x3C, "Tauros"),
    (0x40, "Farfetch'd"),
    (0x41, "Venonat"),
    (0x42, "Dragonite"),
    (0x46, "Doduo"),
    (0x47, "Poliwag"),
    (0x48, "Jynx"),
    (0x49, "Moltres"),
    (0x4A, "Articuno"),
    (0x4B, "Zapdos"),
    (0x4C, "Ditto"),
    (0x4D, "Meowth"),
    (0x4E, "Krabby"),
    (0x52, "Vulpix"),
    (0x53, "Ninetales"),
    (0x54, "Pikachu"),
    (0x55, "Raichu"),
    (0x58, "Dratini"),
    (0x59, "Dragonair"),
    (0x5A, "Kabuto"),
    (0x5B, "Kabutops"),
    (0x5C, "Horsea"),
    (0x5D, "Seadra"),
    (0x60, "Sandshrew"),
    (0x61, "Sandslash"),
    (0x62, "Omanyte"),
    (0x63, "Omastar"),
    (0x64, "Jigglypuff"),
    (0x65, "Wigglytuff"),
    (0x66, "Eevee"),
    (0x67, "Flareon"),
    (0x68, "Jolteon"),
    (0x69, "Vaporeon"),
    (0x6A, "Machop"),
    (0x6B, "Zubat"),
    (0x6C, "Ekans"),
    (0x6D, "Paras"),
    (0x6E, "Poliwhirl"),
    (0x6F, "Poliwrath"),
    (0x70, "Weedle"),
    (0x71, "Kakuna"),
    (0x72, "Beedrill"),
    (0x74, "Dodrio"),
    (0x75, "Primeape"),
    (0x76, "Dugtrio"),
    (0x77, "Venomoth"),
    (0x78, "Dewgong"),
    (0x7B, "Caterpie"),
    (0x7C, "Metapod"),
    (0x7D, "Butterfree"),
    (0x7E, "Machamp"),
    (0x80, "Golduck"),
    (0x81, "Hypno"),
    (0x82, "Golbat"),
    (0x83, "Mewtwo"),
    (0x84, "Snorlax"),
    (0x85, "Magikarp"),
    (0x88, "Muk"),
    (0x8A, "Kingler"),
    (0x8B, "Cloyster"),
    (0x8D, "Electrode"),
    (0x8E, "Clefable"),
    (0x8F, "Weezing"),
    (0x90, "Persian"),
    (0x91, "Marowak"),
    (0x93, "Haunter"),
    (0x94, "Abra"),
    (0x95, "Alakazam"),
    (0x96, "Pidgeotto"),
    (0x97, "Pidgeot"),
    (0x98, "Starmie"),
    (0x99, "Bulbasaur"),
    (0x9A, "Venusaur"),
    (0x9B, "Tentacruel"),
    (0x9D, "Goldeen"),
    (0x9E, "Seaking"),
    (0xA3, "Ponyta"),
    (0xA4, "Rapidash"),
    (0xA5, "Rattata"),
    (0xA6, "Raticate"),
    (0xA7, "Nidorino"),
    (0xA8, "Nidorina"),
    (0xA9, "Geodude"),
    (0xAA, "Porygon"),
    (0xAB, "Aerodactyl"),
    (0xAD, "Magnemite"),
    (0xB0, "Charmander"),
    (0xB1, "Squirtle"),
    (0xB2, "Charmeleon"),
    (0xB3, "Wartortle"),
    (0xB4, "Charizard"),
    (0xB9, "Oddish"),
    (0xBA, "Gloom"),
    (0xBB, "Vileplume"),
    (0xBC, "Bellsprout"),
    (0xBD, "Weepinbell"),
    (0xBE, "Victreebel"),
];

/// Gen 1 type table: (name, internal id)
const TYPES: &[(&str, u8)] = &[
    ("Normal", 0x00),
    ("Fighting", 0x01),
    ("Flying", 0x02),
    ("Poison", 0x03),
    ("Ground", 0x04),
    ("Rock", 0x05),
    ("Bird", 0x06),
    ("Bug", 0x07),
    ("Ghost", 0x08),
    ("Fire", 0x14),
    ("Water", 0x15),
    ("Grass", 0x16),
    ("Electric", 0x17),
    ("Psychic", 0x18),
    ("Ice", 0x19),
    ("Dragon", 0x1A),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_lookup() {
        let catalog = Catalog::new();

        let thunderbolt = catalog.move_data("Thunderbolt").unwrap();
        assert_eq!(thunderbolt.id, 0x55);
        assert_eq!(thunderbolt.base_pp, 15);

        let psychic = catalog.move_data("Psychic").unwrap();
        assert_eq!(psychic.id, 0x5E);
        assert_eq!(psychic.base_pp, 10);

        assert!(catalog.move_data("Flamethrower").is_some());
        assert!(catalog.move_data("Dark Pulse").is_none());
    }

    #[test]
    fn test_species_lookup() {
        let catalog = Catalog::new();

        assert_eq!(catalog.species_id("Alakazam"), Some(0x95));
        assert_eq!(catalog.species_id("Snorlax"), Some(0x84));
        assert_eq!(catalog.species_id("Mewtwo"), Some(0x83));
        assert_eq!(catalog.species_id("Lucario"), None);
    }

    #[test]
    fn test_type_lookup() {
        let catalog = Catalog::new();

        assert_eq!(catalog.type_id("Normal"), Some(0x00));
        assert_eq!(catalog.type_id("Psychic"), Some(0x18));
        assert_eq!(catalog.type_id("Dragon"), Some(0x1A));
        assert_eq!(catalog.type_id("Fairy"), None);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Alakazam"), "alakazam");
        assert_eq!(normalize_name("Mr. Mime"), "mrmime");
        assert_eq!(normalize_name("Farfetch'd"), "farfetchd");
        assert_eq!(normalize_name("Sand-Attack"), "sandattack");
    }
}
