//! Room graphs for each act. Every act is a line of rooms running east.

use vg_core::{Character, Description, Direction, Fact, Map, Room, RoomId, ScriptId};

use super::content;
use crate::error::FictionResult;

/// Entry room of the Eridani act.
pub const CRASH_SITE: &str = "Crash Site";
/// Entry room of the Velyra act.
pub const REBEL_BASE: &str = "Rebel Base";
/// Where the Velyra ambush waits.
pub const CIVIL_QUARTER: &str = "Civil Quarter";
/// Entry room of the Aurelion act.
pub const GOLDEN_DISTRICT: &str = "Golden District";
/// Where the Aurelion ambush waits.
pub const HOLOGRAM_QUARTER: &str = "Hologram Quarter";
/// Where the illusion engine runs.
pub const THE_NODE: &str = "The Node";
/// Guarded by the White Guardians.
pub const PALACE: &str = "Palace of Light";
/// Seren Taal's hall.
pub const THRONE_ROOM: &str = "Throne Room";

/// Link rooms in order, each one east of the previous.
fn chain(map: &mut Map, rooms: &[RoomId]) -> FictionResult<()> {
    for pair in rooms.windows(2) {
        map.connect(pair[0], Direction::East, pair[1])?;
    }
    Ok(())
}

/// Eridani Prime: the crash site and Vorn's fortress.
pub fn eridani() -> FictionResult<(Map, RoomId)> {
    let mut map = Map::new();

    let crash = map.add(
        Room::new(
            CRASH_SITE,
            Description::new(
                "Black glass and smoking debris. Your ship lies split open on the plain.",
            ),
        )
        .with_character(Character::scripted(
            "Ralen",
            "A wiry scout in patched leathers, watching the horizon.",
            ScriptId::Ralen,
        ))
        .with_item(content::medical_kit()),
    );

    let outpost = map.add(
        Room::new(
            "Mining Outpost",
            Description::new("Rusted drills and prefab huts. Vorn's patrols pass through often."),
        )
        .with_character(Character::scripted(
            "Malek",
            "The outpost engineer, grease to the elbows.",
            ScriptId::Malek,
        ))
        .with_enemy(content::vorn_patroller()),
    );

    let market = map.add(
        Room::new(
            "Labyrinth Market",
            Description::new("Stalls stacked three high under tarps. Everything has a price."),
        )
        .with_character(Character::scripted(
            "Merchant",
            "A smiling trader with a crystal on display and cold eyes.",
            ScriptId::Merchant,
        ))
        .with_character(Character::scripted(
            "Yara",
            "A hooded woman who watches more than she buys.",
            ScriptId::YaraEridani,
        )),
    );

    let fortress = map.add(
        Room::new(
            "Fortress City",
            Description::new("Walls of fused stone ring Vorn's spaceport.")
                .when(Fact::VornDefeated, "The fortress is quiet. Vorn's banners burn."),
        )
        .with_enemy(content::captain_vorn()),
    );

    chain(&mut map, &[crash, outpost, market, fortress])?;
    Ok((map, crash))
}

/// Velyra IX: the rebellion against Governor Karn.
pub fn velyra() -> FictionResult<(Map, RoomId)> {
    let mut map = Map::new();

    let base = map.add(
        Room::new(
            REBEL_BASE,
            Description::new("A hangar dug into the cliffs, full of mismatched fighters."),
        )
        .with_character(Character::scripted(
            "Yara",
            "Leader of the Velyra rebellion. Scarred, sharp and tired.",
            ScriptId::YaraVelyra,
        )),
    );

    let quarter = map.add(
        Room::new(
            CIVIL_QUARTER,
            Description::new("Shuttered homes under Karn's surveillance towers.")
                .when(Fact::KarnDefeated, "People are in the streets again, cautiously."),
        )
        .with_character(Character::cyclic(
            "Tzenn",
            "An old sage sitting on a doorstep.",
            [
                "I have seen empires rise, die... and repeat.",
                "Calculation without empathy leads to tyranny.",
                "Every choice costs someone something, Captain.",
            ],
        )),
    );

    let warehouses = map.add(
        Room::new(
            "Civil Warehouses",
            Description::new("Grain silos and ration crates under lock.")
                .when(
                    Fact::CiviliansRobbed,
                    "Broken locks and empty crates. Families queue for nothing.",
                )
                .when(
                    Fact::GeneralCorrupted,
                    "Karn's soldiers guard the stores, paid to look the other way.",
                ),
        )
        .with_character(Character::scripted(
            "Nommera",
            "Keeper of the warehouses and their ledgers.",
            ScriptId::Nommera,
        ))
        .with_item(content::combat_stim()),
    );

    let prison = map.add(
        Room::new(
            "Central Prison",
            Description::new("Cell blocks stacked around a central watchtower.")
                .when(
                    Fact::MissilesObtained,
                    "Missile craters gape in the outer wall. The cells stand open.",
                )
                .when(
                    Fact::PrisonLiberated,
                    "The gates hang open. Freed prisoners arm themselves.",
                ),
        )
        .with_character(Character::scripted(
            "Narek",
            "A rebel officer, gaunt from months in the cells.",
            ScriptId::Narek,
        ))
        .with_enemy(content::sentinel_drone()),
    );

    let citadel = map.add(
        Room::new(
            "Karn's Citadel",
            Description::new("A black spire humming with shield generators."),
        )
        .with_enemy(content::governor_karn()),
    );

    chain(&mut map, &[base, quarter, warehouses, prison, citadel])?;
    Ok((map, base))
}

/// Aurelion Prime: the city of light and Seren Taal.
pub fn aurelion() -> FictionResult<(Map, RoomId)> {
    let mut map = Map::new();

    let district = map.add(
        Room::new(
            GOLDEN_DISTRICT,
            Description::new("Gilded towers and perfect avenues. Too perfect.")
                .when(
                    Fact::ChoseInfiltrate,
                    "You walk the gilded avenues in a borrowed citizen's coat. No one looks twice.",
                )
                .when(
                    Fact::ChoseReveal,
                    "Citizens whisper your name as you pass. Patrol drones track every step.",
                ),
        )
        .with_character(Character::scripted(
            "Gilded Citizen",
            "A citizen in spotless white, smiling a fixed smile.",
            ScriptId::GildedCitizen,
        )),
    );

    let holo = map.add(
        Room::new(
            HOLOGRAM_QUARTER,
            Description::new("Streets of light projected over bare concrete."),
        )
        .with_character(Character::scripted(
            "Glitched Resident",
            "A resident whose projected face keeps slipping.",
            ScriptId::GlitchedResident,
        ))
        .with_character(Character::cyclic(
            "Zekh",
            "A street poet painting over the projections.",
            [
                "They sell us light so we forget the dark.",
                "Look at the walls, not the pictures on them.",
            ],
        )),
    );

    let node = map.add(
        Room::new(
            THE_NODE,
            Description::new("The illusion engine: a cathedral of humming prisms.")
                .when(
                    Fact::IllusionsShattered,
                    "The prisms are dark. Through the windows, the real city stares back.",
                )
                .when(
                    Fact::IllusionsPreserved,
                    "The prisms hum on. Outside, the golden lie holds.",
                ),
        ),
    );

    let palace = map.add(
        Room::new(
            PALACE,
            Description::new("Halls of mirrored light leading to a sealed door.")
                .when(Fact::GuardiansCleared, "The guardians are gone. The great door stands open."),
        )
        .with_enemy(content::white_guardian())
        .with_enemy(content::white_guardian()),
    );

    let throne = map.add(
        Room::new(
            THRONE_ROOM,
            Description::new("A throne of light above a city of shadows."),
        )
        .with_enemy(content::seren_taal()),
    );

    chain(&mut map, &[district, holo, node, palace, throne])?;
    Ok((map, district))
}
