use super::common::*;
use crate::fate::axes::{score_axes, SOFTCAP_BETA, SOFTCAP_THRESHOLD};
use crate::fate::domain::{AnimalPoints, Axis};
use crate::fate::tables::AXES;
use crate::fate::{compute, round3};

#[test]
fn raw_axes_follow_primary_plus_half_secondary() {
    for points in [shieldwall(), open_hand(), law_spike()] {
        let reading = compute(&points, 0, 0);
        for def in AXES.iter() {
            let expected = round3(
                f64::from(points.get(def.primary)) + 0.5 * f64::from(points.get(def.secondary)),
            );
            assert_eq!(reading.axis_scores[&def.axis], expected, "{:?}", def.axis);
        }
    }
}

#[test]
fn shieldwall_axes_tie_at_six_and_are_damped() {
    let reading = compute(&shieldwall(), 0, 0);

    assert_eq!(reading.axis_scores[&Axis::Kinship], 6.0);
    assert_eq!(reading.axis_scores[&Axis::Voyage], 6.0);
    assert_eq!(reading.axis_scores[&Axis::Trade], 5.5);
    assert_eq!(reading.top_raw, 6.0);
    assert_eq!(reading.second_raw, 6.0);
    assert_eq!(reading.closeness, 1.0);
    assert_eq!(reading.damp_factor, 0.77);

    assert_eq!(reading.adjusted_axis_scores[&Axis::Kinship], 4.62);
    assert_eq!(reading.adjusted_axis_scores[&Axis::Voyage], 4.62);
    assert_eq!(reading.adjusted_axis_scores[&Axis::Trade], 5.5);
}

#[test]
fn equal_raw_scores_keep_table_order() {
    let reading = compute(&shieldwall(), 0, 0);

    let leaders: Vec<Axis> = reading
        .top_axes_raw
        .iter()
        .take(3)
        .map(|entry| entry.axis)
        .collect();
    assert_eq!(leaders, vec![Axis::Kinship, Axis::Voyage, Axis::Trade]);

    let fours: Vec<Axis> = reading
        .top_axes_raw
        .iter()
        .filter(|entry| entry.score == 4.0)
        .map(|entry| entry.axis)
        .collect();
    assert_eq!(fours, vec![Axis::Power, Axis::Endurance, Axis::Honor]);
}

#[test]
fn ranked_axes_are_sorted_descending() {
    let reading = compute(&law_spike(), 0, 0);

    assert_eq!(reading.top_axes_raw.len(), 16);
    assert!(reading
        .top_axes_raw
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn softcap_stays_off_below_threshold() {
    let reading = compute(&open_hand(), 0, 0);

    assert_eq!(reading.top_raw, 6.0);
    assert_eq!(reading.second_raw, 4.0);
    assert_eq!(reading.closeness, 0.667);
    assert_eq!(reading.damp_factor, 1.0);
    assert!(!reading.softcap().is_engaged());
    assert_eq!(reading.adjusted_axis_scores, reading.axis_scores);
}

#[test]
fn softcap_damps_only_the_leading_axis() {
    let points = law_spike();
    let report = score_axes(&points);

    assert_eq!(report.softcap.top_raw, 6.0);
    assert_eq!(report.softcap.second_raw, 5.5);
    assert!(report.softcap.is_engaged());

    let closeness = 5.5 / 6.0;
    assert_eq!(report.softcap.closeness, round3(closeness));
    assert_eq!(
        report.adjusted[&Axis::Law],
        round3(6.0 * (1.0 - SOFTCAP_BETA * closeness))
    );
    for (axis, raw) in &report.raw {
        if *axis != Axis::Law {
            assert_eq!(report.adjusted[axis], *raw, "{axis:?} must be untouched");
        }
    }
}

#[test]
fn softcap_property_holds_for_every_valid_allocation() {
    for points in all_valid_allocations() {
        let report = score_axes(&points);
        let top = report.softcap.top_raw;
        let closeness = if top == 0.0 {
            0.0
        } else {
            report.softcap.second_raw / top
        };

        for (axis, raw) in &report.raw {
            let adjusted = report.adjusted[axis];
            if closeness < SOFTCAP_THRESHOLD || *raw != top {
                assert_eq!(adjusted, *raw, "{points:?} {axis:?}");
            } else {
                assert_eq!(
                    adjusted,
                    round3(raw * (1.0 - SOFTCAP_BETA * closeness)),
                    "{points:?} {axis:?}"
                );
            }
        }
    }
}

#[test]
fn empty_allocation_has_zero_closeness() {
    let report = score_axes(&AnimalPoints::default());

    assert_eq!(report.softcap.top_raw, 0.0);
    assert_eq!(report.softcap.closeness, 0.0);
    assert_eq!(report.softcap.damp_factor, 1.0);
}

#[test]
fn round3_rounds_half_up_for_positive_values() {
    assert_eq!(round3(0.0625), 0.063);
    assert_eq!(round3(0.6666), 0.667);
    assert_eq!(round3(2.0), 2.0);
}
