//! Property-based tests for pipeline invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - Feature bounds for arbitrary, mistyped and missing payload fields
//!   - Projection ranges for any in-bounds feature vector
//!   - Risk score bounds, bucket thresholds and re-scoring idempotence

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use iunoia_core::domain::mission::MAX_MISSION_DAY;
use iunoia_core::domain::risk::{RiskBucket, RiskScorer};
use iunoia_core::{
    attach_risk_breakdown, build_features, predict_features, predict_raw, FeatureVector,
    RawPayload,
};

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

/// Any JSON scalar a client might send for a field, well-formed or not.
fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-zA-Z0-9 .+-]{0,12}".prop_map(Value::String),
        prop::sample::select(vec![
            "low", "medium", "high", "earth", "mg", "micro", "none", "mild", "moderate",
            "severe", "some", "insomnia", "circadian", "other", "yes", "no", "42", " 7 ",
        ])
        .prop_map(Value::from),
        Just(json!([1, 2])),
        Just(json!({ "nested": true })),
    ]
}

/// A section object where each known field is independently present or absent.
fn section(fields: &'static [&'static str]) -> impl Strategy<Value = Value> {
    prop::collection::vec(prop::option::of(field_value()), fields.len()).prop_map(move |values| {
        let mut map = Map::new();
        for (name, value) in fields.iter().zip(values) {
            if let Some(value) = value {
                map.insert((*name).to_string(), value);
            }
        }
        Value::Object(map)
    })
}

fn raw_payload() -> impl Strategy<Value = RawPayload> {
    const MISSION: &[&str] = &[
        "mission_day",
        "gravity",
        "radiation_level",
        "isolation_level",
        "stress_level",
        "sleep_hours_last_72h",
    ];
    const HISTORY: &[&str] = &[
        "cycle_irregularity_history",
        "bone_density_concerns",
        "sleep_disorders",
        "prior_pcos_or_endometriosis",
    ];

    (
        prop::option::of(section(MISSION)),
        prop::option::of(section(HISTORY)),
    )
        .prop_map(|(mission, history)| {
            let mut root = Map::new();
            if let Some(mission) = mission {
                root.insert("mission".to_string(), mission);
            }
            if let Some(history) = history {
                root.insert("history".to_string(), history);
            }
            RawPayload::new(Value::Object(root))
        })
}

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

/// Feature vectors inside the declared bounds, interactions left independent.
fn bounded_features() -> impl Strategy<Value = FeatureVector> {
    (
        (0.0f64..=MAX_MISSION_DAY as f64, unit(), unit(), unit(), unit(), unit(), unit()),
        (unit(), unit(), unit(), unit(), unit(), unit()),
    )
        .prop_map(|((day, grav, rad, iso, stress, sleep, cycle), (bone, dis, pcos, sxs, rxg, ixs))| {
            FeatureVector {
                mission_day: day,
                gravity_factor: grav,
                radiation_factor: rad,
                isolation_factor: iso,
                stress_score: stress,
                sleep_deficit: sleep,
                cycle_irregularity_history: cycle,
                bone_density_concerns: bone,
                sleep_disorders: dis,
                pcos_or_endometriosis_flag: pcos,
                stress_x_sleep: sxs,
                rad_x_grav: rxg,
                iso_x_stress: ixs,
            }
        })
}

// ═══════════════════════════════════════════════════════════════════
// Feature Builder Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Every built feature lies within its declared range.
    #[test]
    fn prop_features_always_bounded(payload in raw_payload()) {
        let features = build_features(&payload);
        for (name, value, min, max) in features.bounded_values() {
            prop_assert!(
                (min..=max).contains(&value),
                "{} = {} outside [{}, {}]", name, value, min, max
            );
        }
        prop_assert!(features.check_bounds().is_ok());
    }

    /// Mission day is always a whole number.
    #[test]
    fn prop_feature_mission_day_is_integral(payload in raw_payload()) {
        let features = build_features(&payload);
        prop_assert_eq!(features.mission_day.fract(), 0.0);
    }

    /// Arbitrary non-object payloads behave like the empty payload.
    #[test]
    fn prop_non_object_payload_uses_defaults(value in field_value()) {
        prop_assume!(!value.is_object());
        prop_assert_eq!(
            build_features(&RawPayload::new(value)),
            build_features(&RawPayload::empty())
        );
    }

    /// Numeric stress levels clamp to the unit interval.
    #[test]
    fn prop_stress_level_clamped(stress in -1.0e9f64..1.0e9) {
        let payload = RawPayload::new(json!({ "mission": { "stress_level": stress } }));
        let score = build_features(&payload).stress_score;
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Simulator And Scorer Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Projections stay inside their declared output ranges.
    #[test]
    fn prop_projection_ranges(features in bounded_features()) {
        let outputs = predict_features(&features);
        let projection = &outputs.projection;

        prop_assert!((0.0..=100.0).contains(&projection.cortisol_load));
        prop_assert!((0.5..=10.0).contains(&projection.cycle_variability_days));
        prop_assert!((0.2..=2.2).contains(&projection.bone_loss_pct_per_month));
        prop_assert_eq!(projection.mission_day, features.mission_day.trunc() as i64);
    }

    /// Composite and per-axis scores stay in [0, 1].
    #[test]
    fn prop_risk_scores_bounded(features in bounded_features()) {
        let outputs = predict_features(&features);

        prop_assert!((0.0..=1.0).contains(&outputs.risk_score));
        for (axis, sub) in outputs.risk_breakdown.iter() {
            prop_assert!((0.0..=1.0).contains(&sub.score), "{} score {}", axis, sub.score);
        }
    }

    /// The overall bucket follows the fixed thresholds on the unrounded composite.
    #[test]
    fn prop_overall_bucket_matches_thresholds(features in bounded_features()) {
        let outputs = predict_features(&features);
        let composite = RiskScorer::overall_risk(&outputs.projection).value();

        let expected = if composite < 0.35 {
            RiskBucket::Low
        } else if composite < 0.70 {
            RiskBucket::Moderate
        } else {
            RiskBucket::High
        };
        prop_assert_eq!(outputs.risk_overall, expected);
        prop_assert!((outputs.risk_score - composite).abs() <= 0.005 + 1e-9);
    }

    /// Re-scoring an already scored output changes nothing.
    #[test]
    fn prop_attach_risk_is_idempotent(features in bounded_features()) {
        let outputs = predict_features(&features);
        prop_assert_eq!(attach_risk_breakdown(&outputs), outputs.clone());
        prop_assert_eq!(outputs.reattach_risk(), outputs);
    }

    /// The full pipeline is deterministic for any payload.
    #[test]
    fn prop_predict_raw_deterministic(payload in raw_payload()) {
        let first = predict_raw(&payload);
        let second = predict_raw(&payload);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
