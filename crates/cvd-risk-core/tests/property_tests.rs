//! Property tests for conversion, normalization, evaluation and ranking.

use proptest::prelude::*;

use cvd_risk_core::calculators::calculate_ascvd_risk;
use cvd_risk_core::models::{RaceEthnicity, Sex, SmokingStatus, YesNo};
use cvd_risk_core::units::{mgdl_to_mmoll, mmoll_to_mgdl};
use cvd_risk_core::{
    evaluate_risks, rank_top3, NormalizedPatient, PatientNormalizer, RawInput, RiskCandidate,
    RiskLevel,
};

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn race() -> impl Strategy<Value = RaceEthnicity> {
    prop_oneof![
        Just(RaceEthnicity::White),
        Just(RaceEthnicity::Black),
        Just(RaceEthnicity::Hispanic),
        Just(RaceEthnicity::Asian),
    ]
}

fn raw_input() -> impl Strategy<Value = RawInput> {
    (
        20..=79i32,
        sex(),
        50..=300i32,
        any::<bool>(),
        any::<bool>(),
        100..=400u32,
        10..=100u32,
        prop::option::of(140..=200u32),
    )
        .prop_map(|(age, sex, sbp, on_meds, labs, tc, hdl, height)| RawInput {
            age: age.to_string(),
            sex_at_birth: sex.as_str().to_string(),
            systolic_bp: sbp.to_string(),
            on_bp_meds: if on_meds { "yes" } else { "no" }.to_string(),
            has_lab_results: labs,
            total_cholesterol: tc.to_string(),
            hdl_cholesterol: hdl.to_string(),
            has_diabetes: "no".to_string(),
            smoking_status: "former".to_string(),
            height_cm: height.map(|h| h.to_string()).unwrap_or_default(),
            weight_kg: "80".to_string(),
            ..Default::default()
        })
}

fn lipid_patient(
    age: i32,
    sex: Sex,
    race: RaceEthnicity,
    sbp: i32,
    on_meds: bool,
    smoker: bool,
) -> NormalizedPatient {
    let mut p = NormalizedPatient::new(age, sex, sbp);
    p.race_ethnicity = Some(race);
    p.on_bp_meds = if on_meds { YesNo::Yes } else { YesNo::No };
    p.smoking_status = if smoker {
        SmokingStatus::Current
    } else {
        SmokingStatus::Never
    };
    p.has_lab_results = true;
    p.total_cholesterol = Some(210.0);
    p.hdl_cholesterol = Some(48.0);
    p
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(raw in raw_input()) {
        let normalizer = PatientNormalizer::new();
        let first = normalizer.normalize(&raw).unwrap();
        let second = normalizer.normalize(&raw).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unit_round_trip_drift_bounded(mg_dl in 0.0f64..1000.0) {
        let back = mmoll_to_mgdl(mgdl_to_mmoll(mg_dl));
        prop_assert!((back - mg_dl).abs() <= 1.0, "{} -> {}", mg_dl, back);
    }

    #[test]
    fn prop_ascvd_monotonic_in_systolic(
        age in 40..=79i32,
        sex in sex(),
        race in race(),
        on_meds in any::<bool>(),
        smoker in any::<bool>(),
        sbp in 60..=250i32,
        delta in 1..=50i32,
    ) {
        let lower = calculate_ascvd_risk(&lipid_patient(age, sex, race, sbp, on_meds, smoker))
            .and_then(|c| c.risk_percent())
            .unwrap();
        let higher = calculate_ascvd_risk(&lipid_patient(age, sex, race, sbp + delta, on_meds, smoker))
            .and_then(|c| c.risk_percent())
            .unwrap();
        prop_assert!(higher >= lower, "SBP {} -> {}: {} -> {}", sbp, sbp + delta, lower, higher);
    }

    #[test]
    fn prop_under_forty_has_exactly_one_of_ascvd_or_relative(
        age in 20..40i32,
        sex in sex(),
        sbp in 90..=200i32,
        labs in any::<bool>(),
    ) {
        let mut patient = NormalizedPatient::new(age, sex, sbp);
        patient.has_lab_results = labs;
        patient.total_cholesterol = Some(200.0);
        patient.hdl_cholesterol = Some(50.0);

        let candidates = evaluate_risks(&patient);
        let count = candidates
            .iter()
            .filter(|c| c.id == "ascvd_10yr" || c.id == "relative_risk")
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn prop_rank_is_sorted_prefix(scores in prop::collection::vec(0.0f64..1.0, 0..10)) {
        let candidates: Vec<RiskCandidate> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| RiskCandidate::new(&i.to_string(), "t", RiskLevel::Low, *s))
            .collect();

        let ranked = rank_top3(&candidates);
        prop_assert_eq!(ranked.len(), candidates.len().min(3));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            // Equal scores keep evaluation order
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].id.parse().unwrap();
                let b: usize = pair[1].id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn prop_scores_and_percents_in_range(
        age in 20..=79i32,
        sex in sex(),
        race in race(),
        sbp in 50..=300i32,
        on_meds in any::<bool>(),
        smoker in any::<bool>(),
    ) {
        let patient = lipid_patient(age, sex, race, sbp, on_meds, smoker);
        for candidate in evaluate_risks(&patient) {
            prop_assert!((0.0..=1.0).contains(&candidate.score), "{} score {}", candidate.id, candidate.score);
            if let Some(percent) = candidate.risk_percent() {
                prop_assert!((0.0..=99.0).contains(&percent), "{} percent {}", candidate.id, percent);
            }
        }
    }
}

#[test]
fn test_rank_stability_example() {
    let candidates = vec![
        RiskCandidate::new("A", "A", RiskLevel::Intermediate, 0.5),
        RiskCandidate::new("B", "B", RiskLevel::High, 0.8),
        RiskCandidate::new("C", "C", RiskLevel::Intermediate, 0.5),
    ];
    let ids: Vec<String> = rank_top3(&candidates).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["B", "A", "C"]);
}
