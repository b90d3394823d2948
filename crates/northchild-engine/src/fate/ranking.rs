use super::axes::round3;
use super::domain::{AnimalPoints, Axis, FateVariant};
use super::tables::{axis_def, FateDef};
use serde::Serialize;
use std::collections::BTreeMap;

pub(crate) const INVALID_BUILD: &str = "INVALID BUILD";

/// One fate's position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FateStanding {
    pub id: u8,
    pub base_name: &'static str,
    pub score: f64,
    pub primary_max_points: i32,
    pub composite: f64,
    #[serde(skip)]
    pub(crate) def: &'static FateDef,
}

impl FateStanding {
    pub fn display_name(&self, variant: FateVariant) -> &'static str {
        display_name(self.def, variant)
    }
}

/// Winner or runner-up as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FateSummary {
    pub id: u8,
    pub base_name: String,
    pub display_name: String,
    pub score: f64,
    pub composite: f64,
}

impl FateSummary {
    pub(crate) fn from_standing(standing: Option<&FateStanding>, variant: FateVariant) -> Self {
        match standing {
            Some(standing) => Self {
                id: standing.id,
                base_name: standing.base_name.to_string(),
                display_name: standing.display_name(variant).to_string(),
                score: standing.score,
                composite: standing.composite,
            },
            None => Self {
                id: 0,
                base_name: INVALID_BUILD.to_string(),
                display_name: INVALID_BUILD.to_string(),
                score: 0.0,
                composite: 0.0,
            },
        }
    }
}

/// Variant-specific title, falling back to the base name when blank.
pub fn display_name(def: &FateDef, variant: FateVariant) -> &str {
    let name = match variant {
        FateVariant::Base => return def.base_name,
        FateVariant::Highflame => def.highflame_name.trim(),
        FateVariant::Gravesong => def.gravesong_name.trim(),
    };
    if name.is_empty() {
        def.base_name
    } else {
        name
    }
}

/// Scores every fate and sorts by composite key, highest first.
///
/// The composite packs three keys into one number: the fate score scaled by
/// 1000, the heavier primary investment scaled by 10, and `(31 - id) / 1000`
/// so lower ids win full ties. Ids are unique, so no two composites are equal.
pub(crate) fn rank_fates(
    fates: &'static [FateDef],
    points: &AnimalPoints,
    adjusted: &BTreeMap<Axis, f64>,
) -> Vec<FateStanding> {
    let mut standings: Vec<FateStanding> = fates
        .iter()
        .map(|def| {
            let score = round3(axis_score(adjusted, def.axis_a) + axis_score(adjusted, def.axis_b));
            let primary_max_points = points
                .get(axis_def(def.axis_a).primary)
                .max(points.get(axis_def(def.axis_b).primary));
            let composite = round3(
                score * 1000.0
                    + f64::from(primary_max_points) * 10.0
                    + (31.0 - f64::from(def.id)) / 1000.0,
            );

            FateStanding {
                id: def.id,
                base_name: def.base_name,
                score,
                primary_max_points,
                composite,
                def,
            }
        })
        .collect();

    standings.sort_by(|a, b| b.composite.total_cmp(&a.composite));
    standings
}

fn axis_score(adjusted: &BTreeMap<Axis, f64>, axis: Axis) -> f64 {
    adjusted.get(&axis).copied().unwrap_or(0.0)
}
