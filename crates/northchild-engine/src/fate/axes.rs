use super::domain::{AnimalPoints, Axis};
use super::tables::AXES;
use serde::Serialize;
use std::collections::BTreeMap;

pub(crate) const SECONDARY_WEIGHT: f64 = 0.5;
pub(crate) const SOFTCAP_BETA: f64 = 0.23;
pub(crate) const SOFTCAP_THRESHOLD: f64 = 0.75;

/// Rounds half away from zero to three decimals. Applied after every formula.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub score: f64,
}

/// Proximity dampening applied to the leading axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Softcap {
    pub top_raw: f64,
    pub second_raw: f64,
    pub closeness: f64,
    pub damp_factor: f64,
}

impl Softcap {
    pub fn is_engaged(&self) -> bool {
        self.damp_factor < 1.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisReport {
    pub raw: BTreeMap<Axis, f64>,
    pub adjusted: BTreeMap<Axis, f64>,
    pub ranked: Vec<AxisScore>,
    pub softcap: Softcap,
}

pub(crate) fn score_axes(points: &AnimalPoints) -> AxisReport {
    let mut ranked: Vec<AxisScore> = AXES
        .iter()
        .map(|def| AxisScore {
            axis: def.axis,
            score: round3(
                f64::from(points.get(def.primary))
                    + f64::from(points.get(def.secondary)) * SECONDARY_WEIGHT,
            ),
        })
        .collect();
    let raw: BTreeMap<Axis, f64> = ranked.iter().map(|entry| (entry.axis, entry.score)).collect();

    // Stable: equal scores keep table order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let top_raw = ranked.first().map(|entry| entry.score).unwrap_or(0.0);
    let second_raw = ranked.get(1).map(|entry| entry.score).unwrap_or(0.0);

    let closeness = if top_raw == 0.0 {
        0.0
    } else {
        second_raw / top_raw
    };
    let damp_factor = if closeness >= SOFTCAP_THRESHOLD {
        1.0 - SOFTCAP_BETA * closeness
    } else {
        1.0
    };

    let adjusted = ranked
        .iter()
        .map(|entry| {
            let score = if entry.score == top_raw {
                entry.score * damp_factor
            } else {
                entry.score
            };
            (entry.axis, round3(score))
        })
        .collect();

    AxisReport {
        raw,
        adjusted,
        ranked,
        softcap: Softcap {
            top_raw,
            second_raw,
            closeness: round3(closeness),
            damp_factor: round3(damp_factor),
        },
    }
}
