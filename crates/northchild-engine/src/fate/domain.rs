use serde::{Deserialize, Serialize};
use std::fmt;

/// Points that must be placed across the eight animals.
pub const TOTAL_POINTS: i32 = 15;
/// Per-animal allocation cap.
pub const MAX_POINTS_PER_ANIMAL: i32 = 4;
/// Augment stack height; a full stack selects its naming variant.
pub const MAX_AUGMENTS: u8 = 5;

/// The eight allocatable point pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animal {
    Wolf,
    Orca,
    Serpent,
    Raven,
    Owl,
    Eagle,
    Elk,
    Bear,
}

impl Animal {
    pub const ALL: [Animal; 8] = [
        Animal::Wolf,
        Animal::Orca,
        Animal::Serpent,
        Animal::Raven,
        Animal::Owl,
        Animal::Eagle,
        Animal::Elk,
        Animal::Bear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Animal::Wolf => "wolf",
            Animal::Orca => "orca",
            Animal::Serpent => "serpent",
            Animal::Raven => "raven",
            Animal::Owl => "owl",
            Animal::Eagle => "eagle",
            Animal::Elk => "elk",
            Animal::Bear => "bear",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A point allocation snapshot. Absent keys deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalPoints {
    pub wolf: i32,
    pub orca: i32,
    pub serpent: i32,
    pub raven: i32,
    pub owl: i32,
    pub eagle: i32,
    pub elk: i32,
    pub bear: i32,
}

impl AnimalPoints {
    pub fn get(&self, animal: Animal) -> i32 {
        match animal {
            Animal::Wolf => self.wolf,
            Animal::Orca => self.orca,
            Animal::Serpent => self.serpent,
            Animal::Raven => self.raven,
            Animal::Owl => self.owl,
            Animal::Eagle => self.eagle,
            Animal::Elk => self.elk,
            Animal::Bear => self.bear,
        }
    }

    pub fn set(&mut self, animal: Animal, points: i32) {
        let slot = match animal {
            Animal::Wolf => &mut self.wolf,
            Animal::Orca => &mut self.orca,
            Animal::Serpent => &mut self.serpent,
            Animal::Raven => &mut self.raven,
            Animal::Owl => &mut self.owl,
            Animal::Eagle => &mut self.eagle,
            Animal::Elk => &mut self.elk,
            Animal::Bear => &mut self.bear,
        };
        *slot = points;
    }

    pub fn with(mut self, animal: Animal, points: i32) -> Self {
        self.set(animal, points);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Animal, i32)> + '_ {
        Animal::ALL.into_iter().map(move |animal| (animal, self.get(animal)))
    }

    /// Sum of every animal's points, widened so out-of-range counts cannot
    /// overflow.
    pub fn total(&self) -> i64 {
        self.iter().map(|(_, points)| i64::from(points)).sum()
    }
}

/// The two augment stacks placed beside the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentKind {
    Highflame,
    Gravesong,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Augments {
    pub highflame: u8,
    pub gravesong: u8,
}

impl Augments {
    pub fn new(highflame: u8, gravesong: u8) -> Self {
        Self {
            highflame,
            gravesong,
        }
    }

    pub fn get(&self, kind: AugmentKind) -> u8 {
        match kind {
            AugmentKind::Highflame => self.highflame,
            AugmentKind::Gravesong => self.gravesong,
        }
    }

    pub(crate) fn slot_mut(&mut self, kind: AugmentKind) -> &mut u8 {
        match kind {
            AugmentKind::Highflame => &mut self.highflame,
            AugmentKind::Gravesong => &mut self.gravesong,
        }
    }
}

/// Naming variant selected by a full augment stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FateVariant {
    #[default]
    Base,
    Highflame,
    Gravesong,
}

impl FateVariant {
    pub const ALL: [FateVariant; 3] = [
        FateVariant::Base,
        FateVariant::Highflame,
        FateVariant::Gravesong,
    ];

    /// A full highflame stack wins over a full gravesong stack.
    pub fn from_augments(augments: Augments) -> Self {
        if augments.highflame == MAX_AUGMENTS {
            FateVariant::Highflame
        } else if augments.gravesong == MAX_AUGMENTS {
            FateVariant::Gravesong
        } else {
            FateVariant::Base
        }
    }

    pub fn folder(self) -> &'static str {
        match self {
            FateVariant::Base => "base",
            FateVariant::Highflame => "highflame",
            FateVariant::Gravesong => "gravesong",
        }
    }
}

impl fmt::Display for FateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

/// Sixteen derived scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    Kinship,
    Power,
    Endurance,
    Honor,
    Insight,
    Silence,
    Voyage,
    Trade,
    Strength,
    Hearth,
    Cunning,
    Omen,
    Glory,
    Law,
    Craft,
    Shadow,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
