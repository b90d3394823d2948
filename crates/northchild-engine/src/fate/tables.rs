use super::domain::{Animal, Axis};

/// An axis draws full weight from its primary animal and partial weight from
/// its secondary animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDef {
    pub axis: Axis,
    pub primary: Animal,
    pub secondary: Animal,
}

/// A fate scored from two axes. `id` doubles as the final tie-break and the
/// asset file key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FateDef {
    pub id: u8,
    pub axis_a: Axis,
    pub axis_b: Axis,
    pub base_name: &'static str,
    pub highflame_name: &'static str,
    pub gravesong_name: &'static str,
}

const fn axis(axis: Axis, primary: Animal, secondary: Animal) -> AxisDef {
    AxisDef {
        axis,
        primary,
        secondary,
    }
}

const fn fate(id: u8, axis_a: Axis, axis_b: Axis, names: [&'static str; 3]) -> FateDef {
    FateDef {
        id,
        axis_a,
        axis_b,
        base_name: names[0],
        highflame_name: names[1],
        gravesong_name: names[2],
    }
}

/// Declaration order is the tie order when raw axis scores are equal.
pub static AXES: [AxisDef; 16] = [
    axis(Axis::Kinship, Animal::Wolf, Animal::Orca),
    axis(Axis::Power, Animal::Wolf, Animal::Bear),
    axis(Axis::Endurance, Animal::Elk, Animal::Owl),
    axis(Axis::Honor, Animal::Elk, Animal::Eagle),
    axis(Axis::Insight, Animal::Owl, Animal::Serpent),
    axis(Axis::Silence, Animal::Owl, Animal::Raven),
    axis(Axis::Voyage, Animal::Orca, Animal::Wolf),
    axis(Axis::Trade, Animal::Orca, Animal::Raven),
    axis(Axis::Strength, Animal::Bear, Animal::Serpent),
    axis(Axis::Hearth, Animal::Bear, Animal::Elk),
    axis(Axis::Cunning, Animal::Raven, Animal::Eagle),
    axis(Axis::Omen, Animal::Raven, Animal::Owl),
    axis(Axis::Glory, Animal::Eagle, Animal::Bear),
    axis(Axis::Law, Animal::Eagle, Animal::Wolf),
    axis(Axis::Craft, Animal::Serpent, Animal::Raven),
    axis(Axis::Shadow, Animal::Serpent, Animal::Orca),
];

pub static FATES: [FateDef; 30] = [
    fate(1, Axis::Craft, Axis::Glory, ["Lore-Carver", "Stone-Canon", "Grudge-Carver"]),
    fate(2, Axis::Cunning, Axis::Kinship, ["First-Sister", "Ring-Mother", "Poison-Needle"]),
    fate(3, Axis::Silence, Axis::Kinship, ["Stone-Abbess", "The Still Mother", "The Oubliette"]),
    fate(4, Axis::Glory, Axis::Voyage, ["Storm-Chaser", "Storm-Bride", "Storm-Widow"]),
    fate(5, Axis::Law, Axis::Craft, ["Runespeaker", "The Long Memory", "The Short Knife"]),
    fate(6, Axis::Honor, Axis::Kinship, ["Way-Bearer", "Road-Warden", "Way-Taker"]),
    fate(7, Axis::Omen, Axis::Strength, ["Sun-Vowed", "The North-Called", "The Sun-Scorned"]),
    fate(8, Axis::Trade, Axis::Hearth, ["Grain-Mother", "Harvest-Queen", "Faminekeeper"]),
    fate(9, Axis::Craft, Axis::Endurance, ["Forge-Daughter", "The Iron-Wife", "The Rust-Wife"]),
    fate(10, Axis::Voyage, Axis::Insight, ["Tide-Broker", "Wave-Reader", "Tide-Usurer"]),
    fate(
        11,
        Axis::Hearth,
        Axis::Voyage,
        ["Harbor-Matron", "The Harbor-Saint", "The Harbor-Scourge"],
    ),
    fate(12, Axis::Honor, Axis::Trade, ["Crown-Keeper", "The Uncrowned", "The Final Say"]),
    fate(13, Axis::Kinship, Axis::Insight, ["Hall-Singer", "Hearth-Voice", "Song-Thief"]),
    fate(14, Axis::Strength, Axis::Endurance, ["Stone-Matron", "Stone-Crown", "Stone-Ruin"]),
    fate(15, Axis::Silence, Axis::Honor, ["Wind-Wife", "Sky-Mother", "Wind-Hag"]),
    fate(16, Axis::Glory, Axis::Kinship, ["Wolf-Fang", "Hunt-Mistress", "Red-Fang"]),
    fate(17, Axis::Trade, Axis::Cunning, ["Salt-Raven", "Sea Queen", "The Black Keel"]),
    fate(18, Axis::Voyage, Axis::Cunning, ["Winter Broker", "Cold Steward", "Hunger-Wife"]),
    fate(19, Axis::Honor, Axis::Shadow, ["Grave-Speaker", "Cairn-Speaker", "Grave-Witch"]),
    fate(20, Axis::Shadow, Axis::Insight, ["Silent-Wing", "Night-Warden", "The Hollow Flight"]),
    fate(21, Axis::Strength, Axis::Glory, ["Wild Huntress", "The Wild-Queen", "The Blood Hunt"]),
    fate(22, Axis::Law, Axis::Honor, ["Scale-Bearer", "The White Balance", "The Iron Scale"]),
    fate(23, Axis::Insight, Axis::Silence, ["Storm-Seeker", "The Ice-Oracle", "The Rime-Sighted"]),
    fate(24, Axis::Power, Axis::Law, ["Winter-Regent", "Ice Queen", "The Cold-Tyrant"]),
    fate(25, Axis::Law, Axis::Cunning, ["The Half-Law", "The Whole Law", "The Broken Law"]),
    fate(26, Axis::Omen, Axis::Insight, ["Frost-Augur", "The Deep-Watcher", "The Ill-Prophet"]),
    fate(27, Axis::Silence, Axis::Omen, ["Grove-Keeper", "The Grove-Singer", "The Grove-Blight"]),
    fate(28, Axis::Endurance, Axis::Hearth, ["Life-Binder", "Winter-Mother", "Hearth-Fallen"]),
    fate(29, Axis::Strength, Axis::Shadow, ["Thorn-Sister", "Thorn-Mother", "Cut-Wife"]),
    fate(30, Axis::Power, Axis::Strength, ["Shield-Breaker", "First-Spear", "War-Fury"]),
];

pub fn axis_def(axis: Axis) -> &'static AxisDef {
    // Axis discriminants follow the AXES declaration order.
    &AXES[axis as usize]
}

pub fn fate_def(id: u8) -> Option<&'static FateDef> {
    FATES.iter().find(|def| def.id == id)
}
