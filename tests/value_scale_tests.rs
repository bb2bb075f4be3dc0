use approx::assert_relative_eq;
use compare_chart::core::{PlotArea, ValueScale};
use compare_chart::error::ChartError;
use proptest::prelude::*;

fn plot() -> PlotArea {
    PlotArea::new(64.0, 40.0, 720.0, 332.0)
}

#[test]
fn positive_data_anchors_domain_at_zero() {
    let scale = ValueScale::including_zero([80.0, 12.0]).expect("scale");
    assert_eq!(scale.domain(), (0.0, 80.0));
}

#[test]
fn all_negative_data_keeps_zero_as_upper_bound() {
    let scale = ValueScale::including_zero([-35.0, -5.0]).expect("scale");
    assert_eq!(scale.domain(), (-35.0, 0.0));
}

#[test]
fn all_zero_data_still_yields_a_drawable_domain() {
    let scale = ValueScale::including_zero([0.0, 0.0]).expect("scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn non_finite_samples_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = ValueScale::including_zero([80.0, bad]).expect_err("must reject");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn degenerate_explicit_domain_is_rejected() {
    let err = ValueScale::new(5.0, 5.0).expect_err("empty domain must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn domain_bounds_map_to_plot_edges() {
    let scale = ValueScale::new(0.0, 80.0).expect("scale");

    let bottom = scale.value_to_y(0.0, plot()).expect("map zero");
    let top = scale.value_to_y(80.0, plot()).expect("map max");

    assert_relative_eq!(bottom, plot().bottom(), epsilon = 1e-9);
    assert_relative_eq!(top, plot().top, epsilon = 1e-9);
}

#[test]
fn mapping_rejects_non_finite_values() {
    let scale = ValueScale::new(0.0, 80.0).expect("scale");
    let err = scale
        .value_to_y(f64::NAN, plot())
        .expect_err("must reject NaN");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

proptest! {
    #[test]
    fn domain_always_contains_zero_and_every_sample(
        values in prop::collection::vec(-1.0e6_f64..1.0e6, 1..24)
    ) {
        let scale = ValueScale::including_zero(values.iter().copied())
            .expect("finite input");
        let (min, max) = scale.domain();

        prop_assert!(min <= 0.0);
        prop_assert!(max >= 0.0);
        prop_assert!(min < max);
        for &value in &values {
            prop_assert!(min <= value && value <= max);
        }
    }

    #[test]
    fn mapping_is_monotonic_decreasing(
        (low, high) in (-1.0e6_f64..1.0e6)
            .prop_flat_map(|a| ((Just(a)), (a + 1.0)..1.0e6 + 2.0))
    ) {
        let scale = ValueScale::including_zero([low, high]).expect("scale");
        let y_low = scale.value_to_y(low, plot()).expect("map low");
        let y_high = scale.value_to_y(high, plot()).expect("map high");
        prop_assert!(y_high < y_low);
    }
}
