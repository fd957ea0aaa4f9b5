//! Property tests for the softmax distribution.

use proptest::prelude::*;
use tempviz::prelude::*;

fn entries_strategy() -> impl Strategy<Value = Vec<ScoreEntry>> {
    prop::collection::vec(-50.0f64..50.0, 1..12).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| ScoreEntry::new(format!("tok{i}"), s))
            .collect()
    })
}

fn temperature_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.001f64..0.1, 0.1f64..2.0, 2.0f64..1000.0]
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(entries in entries_strategy(), t in temperature_strategy()) {
        let d = compute_distribution(&entries, t).unwrap();
        prop_assert!((d.total() - 1.0).abs() <= 1e-9, "total = {}", d.total());
    }

    #[test]
    fn probabilities_are_in_unit_interval(entries in entries_strategy(), t in temperature_strategy()) {
        let d = compute_distribution(&entries, t).unwrap();
        for p in &d {
            prop_assert!(p.probability.is_finite());
            prop_assert!((0.0..=1.0).contains(&p.probability));
        }
    }

    #[test]
    fn output_order_matches_input(entries in entries_strategy(), t in temperature_strategy()) {
        let d = compute_distribution(&entries, t).unwrap();
        prop_assert_eq!(d.len(), entries.len());
        for (e, p) in entries.iter().zip(d.iter()) {
            prop_assert_eq!(e.label(), p.label.as_str());
        }
    }

    #[test]
    fn higher_score_never_gets_less_mass(entries in entries_strategy(), t in temperature_strategy()) {
        let d = compute_distribution(&entries, t).unwrap();
        let probs = d.probabilities();
        for i in 0..entries.len() {
            for j in 0..entries.len() {
                if entries[i].score() > entries[j].score() {
                    prop_assert!(probs[i] >= probs[j]);
                }
            }
        }
    }

    #[test]
    fn non_positive_temperature_is_rejected(entries in entries_strategy(), t in -100.0f64..=0.0) {
        prop_assert!(matches!(
            compute_distribution(&entries, t),
            Err(InvalidInput::NonPositiveTemperature(_))
        ));
    }
}

#[test]
fn cold_temperature_concentrates_on_the_max() {
    let table = ScoreTable::sampling_demo();
    let d = table.distribution(0.05).unwrap();
    let top = d.get("deterministic").unwrap();
    assert!(top > 0.999);
    for p in d.iter().skip(1) {
        assert!(p.probability < 1e-3);
    }
}

#[test]
fn hot_temperature_approaches_uniform() {
    let table = ScoreTable::sampling_demo();
    let d = table.distribution(100.0).unwrap();
    let uniform = 1.0 / table.len() as f64;
    for p in &d {
        assert!((p.probability - uniform).abs() < 0.01, "{}: {}", p.label, p.probability);
    }
}

#[test]
fn empty_table_and_zero_temperature_fail() {
    assert_eq!(compute_distribution(&[], 1.0), Err(InvalidInput::EmptyEntries));
    let entries = ScoreTable::sampling_demo().entries().to_vec();
    assert_eq!(
        compute_distribution(&entries, 0.0),
        Err(InvalidInput::NonPositiveTemperature(0.0))
    );
}

#[test]
fn every_slider_stop_yields_a_valid_distribution() {
    let table = ScoreTable::sampling_demo();
    let slider = TemperatureSlider::default();
    for t in slider.positions() {
        let d = table.distribution(t).unwrap();
        assert!((d.total() - 1.0).abs() <= 1e-9);
        assert_eq!(d.most_likely().unwrap().label, "deterministic");
    }
}
