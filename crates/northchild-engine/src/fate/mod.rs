//! Fate scoring: validation, axis scoring with proximity dampening, and
//! composite-key ranking of the thirty fates.
//!
//! Every entry point is a pure function of the allocation snapshot. The only
//! shared data are the static axis and fate tables.

mod assets;
mod axes;
pub mod batch;
pub mod domain;
mod ranking;
pub mod session;
pub mod tables;
mod validation;

#[cfg(test)]
mod tests;

pub use assets::{result_asset_path, AssetLayout};
pub use axes::{round3, AxisScore, Softcap};
pub use batch::{BatchEntry, BatchImportError, BatchImporter};
pub use domain::{
    Animal, AnimalPoints, AugmentKind, Augments, Axis, FateVariant, MAX_AUGMENTS,
    MAX_POINTS_PER_ANIMAL, TOTAL_POINTS,
};
pub use ranking::{display_name, FateStanding, FateSummary};
pub use session::{AllocationSession, SessionError};
pub use validation::{validate, ValidationError};

use serde::Serialize;
use std::collections::BTreeMap;
use tables::{FateDef, FATES};
use tracing::debug;

/// Everything derived from one allocation snapshot.
///
/// Scores are computed even when `is_valid` is false; callers must check
/// validity before presenting the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FateReading {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub axis_scores: BTreeMap<Axis, f64>,
    pub adjusted_axis_scores: BTreeMap<Axis, f64>,
    pub top_axes_raw: Vec<AxisScore>,
    pub top_raw: f64,
    pub second_raw: f64,
    pub closeness: f64,
    pub damp_factor: f64,
    pub variant: FateVariant,
    pub winner: FateSummary,
    pub runner_up: FateSummary,
    pub standings: Vec<FateStanding>,
}

impl FateReading {
    pub fn softcap(&self) -> Softcap {
        Softcap {
            top_raw: self.top_raw,
            second_raw: self.second_raw,
            closeness: self.closeness,
            damp_factor: self.damp_factor,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Computes a reading from raw augment counters.
///
/// Counters outside `0..=5` are accepted; only an exact stack of five selects
/// a variant.
pub fn compute(points: &AnimalPoints, highflame: u8, gravesong: u8) -> FateReading {
    evaluate(points, Augments::new(highflame, gravesong), &FATES)
}

pub(crate) fn evaluate(
    points: &AnimalPoints,
    augments: Augments,
    fates: &'static [FateDef],
) -> FateReading {
    let errors = validate(points);
    let variant = FateVariant::from_augments(augments);

    let report = axes::score_axes(points);
    let standings = ranking::rank_fates(fates, points, &report.adjusted);

    let winner = FateSummary::from_standing(standings.first(), variant);
    let runner_up = FateSummary::from_standing(standings.get(1), variant);

    debug!(
        valid = errors.is_empty(),
        %variant,
        top_raw = report.softcap.top_raw,
        closeness = report.softcap.closeness,
        damp_factor = report.softcap.damp_factor,
        winner = winner.id,
        runner_up = runner_up.id,
        "fate reading computed"
    );

    FateReading {
        is_valid: errors.is_empty(),
        errors,
        axis_scores: report.raw,
        adjusted_axis_scores: report.adjusted,
        top_axes_raw: report.ranked,
        top_raw: report.softcap.top_raw,
        second_raw: report.softcap.second_raw,
        closeness: report.softcap.closeness,
        damp_factor: report.softcap.damp_factor,
        variant,
        winner,
        runner_up,
        standings,
    }
}

/// Stateless reader that pairs readings with the configured asset layout.
pub struct FateEngine {
    assets: AssetLayout,
}

impl FateEngine {
    pub fn new(assets: AssetLayout) -> Self {
        Self { assets }
    }

    pub fn read(&self, points: &AnimalPoints, augments: Augments) -> FateReading {
        evaluate(points, augments, &FATES)
    }

    pub fn winner_asset(&self, reading: &FateReading) -> String {
        self.assets.path_for(reading.winner.id, reading.variant)
    }

    pub fn assets(&self) -> &AssetLayout {
        &self.assets
    }
}

impl Default for FateEngine {
    fn default() -> Self {
        Self::new(AssetLayout::default())
    }
}
