use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

fn one_to_nine() -> Vec<f64> {
    (1..=9).map(f64::from).collect()
}

fn with_outlier() -> Vec<f64> {
    let mut data = one_to_nine();
    data.push(100.0);
    data
}

fn sample_datasets() -> Vec<Vec<f64>> {
    vec![
        vec![42.0],
        vec![3.0, 3.0, 3.0, 3.0],
        vec![10.0, 0.0],
        one_to_nine(),
        with_outlier(),
        vec![-7.5, 0.25, 0.25, 1.0, 2.0, 2.5, 3.0, 60.0, -40.0],
        (0..250).map(|i| f64::from(i % 37) * 1.5 - 10.0).collect(),
        vec![1.0, 5.0, 5.0, 5.0, 5.0, 9.0],
    ]
}

#[test]
fn empty_dataset_is_invalid_input() {
    let err = analyze(&[], false).unwrap_err();
    assert_eq!(err.error_type(), "InvalidInput");
}

#[test]
fn non_finite_values_are_invalid_input() {
    assert!(analyze(&[1.0, f64::NAN], false).is_err());
    assert!(analyze(&[f64::INFINITY, 2.0], true).is_err());
}

#[test]
fn regression_fixture_unconstrained() {
    let analysis = analyze(&one_to_nine(), false).unwrap();
    let stats = analysis.summary.stats;
    assert!(approx(stats.q1, 3.0));
    assert!(approx(stats.q2, 5.0));
    assert!(approx(stats.q3, 7.0));
    assert!(approx(stats.iqr, 4.0));
    assert!(approx(stats.upper_fence, 13.0));
    assert!(approx(stats.lower_fence, 1.0));
    assert_eq!(analysis.summary.plotted, one_to_nine());
    assert_eq!(analysis.summary.count, 9);
}

#[test]
fn input_is_not_reordered() {
    let data = vec![9.0, 1.0, 5.0, 3.0];
    let _ = analyze(&data, true).unwrap();
    assert_eq!(data, vec![9.0, 1.0, 5.0, 3.0]);
}

#[test]
fn repeated_analysis_is_identical() {
    let data = vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0, 108.0];
    for constrain in [false, true] {
        let first = analyze(&data, constrain).unwrap();
        let second = analyze(&data, constrain).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn constrain_without_outliers_matches_unconstrained() {
    let data = one_to_nine();
    let free = analyze(&data, false).unwrap();
    let constrained = analyze(&data, true).unwrap();

    assert_eq!(constrained.summary.plotted, data);
    assert_eq!(constrained.summary.filtered, data);
    assert_eq!(constrained.summary.stats, free.summary.stats);
    assert_eq!(constrained.histogram, free.histogram);
    assert!(constrained.summary.constrained);
    assert!(!free.summary.constrained);
}

#[test]
fn unconstrained_plots_every_value() {
    let analysis = analyze(&with_outlier(), false).unwrap();
    assert_eq!(analysis.summary.plotted.len(), 10);
    assert_eq!(analysis.summary.filtered, one_to_nine());
    assert_eq!(analysis.summary.outlier_count(), 1);
    assert!(approx(analysis.summary.stats.q3, 7.75));
}

#[test]
fn constrain_refines_statistics_on_filtered_values() {
    let analysis = analyze(&with_outlier(), true).unwrap();
    let stats = analysis.summary.stats;

    assert_eq!(analysis.summary.plotted, one_to_nine());
    assert!(approx(stats.q1, 3.0));
    assert!(approx(stats.q3, 7.0));
    assert!(approx(stats.upper_fence, 13.0));
    assert_eq!(analysis.summary.max, 100.0);
    assert_eq!(analysis.histogram.total(), 9);
}

#[test]
fn constrained_filtered_is_subset_of_plotted() {
    for data in sample_datasets() {
        let summary = analyze(&data, true).unwrap().summary;
        assert!(
            summary
                .filtered
                .iter()
                .all(|value| summary.plotted.contains(value))
        );
    }
}

#[test]
fn quartiles_are_ordered() {
    for data in sample_datasets() {
        for constrain in [false, true] {
            let stats = analyze(&data, constrain).unwrap().summary.stats;
            assert!(stats.q1 <= stats.q2, "{data:?}");
            assert!(stats.q2 <= stats.q3, "{data:?}");
        }
    }
}

#[test]
fn fences_enclose_the_box() {
    for data in sample_datasets() {
        for constrain in [false, true] {
            let stats = analyze(&data, constrain).unwrap().summary.stats;
            assert!(stats.lower_fence <= stats.q1, "{data:?}");
            assert!(stats.upper_fence >= stats.q3, "{data:?}");
        }
    }
}

#[test]
fn histogram_counts_sum_to_plotted() {
    for data in sample_datasets() {
        for constrain in [false, true] {
            let analysis = analyze(&data, constrain).unwrap();
            assert_eq!(analysis.histogram.total(), analysis.summary.plotted.len());
        }
    }
}

#[test]
fn bin_count_respects_cap_and_distinct_values() {
    for data in sample_datasets() {
        let analysis = analyze(&data, false).unwrap();
        let distinct = count_distinct(&analysis.summary.plotted);
        assert!(analysis.histogram.len() <= MAX_BINS);
        if distinct < MAX_BINS {
            assert_eq!(analysis.histogram.len(), distinct);
        }
    }
}

#[test]
fn plotted_is_never_empty() {
    for data in sample_datasets() {
        for constrain in [false, true] {
            let summary = analyze(&data, constrain).unwrap().summary;
            assert!(!summary.plotted.is_empty(), "{data:?}");
            assert!(!summary.filtered.is_empty(), "{data:?}");
        }
    }
}

#[test]
fn extreme_finite_values_keep_fences_ordered() {
    let analysis = analyze(&[-1e308, 1e308], false).unwrap();
    let stats = &analysis.summary.stats;
    for value in [stats.q1, stats.q2, stats.q3, stats.lower_fence] {
        assert!(value.is_finite());
    }
    assert!(!stats.iqr.is_nan());
    assert!(!stats.upper_fence.is_nan());
    assert!(stats.lower_fence <= stats.q1);
    assert_eq!(analysis.summary.filtered.len(), 2);
}
