use approx::assert_relative_eq;
use compare_chart::api::{CompareChartData, CompareChartStyle, build_compare_frame};
use compare_chart::core::Viewport;
use compare_chart::error::ChartError;
use compare_chart::render::{RectPrimitive, RenderFrame};

const VIEWPORT: Viewport = Viewport {
    width: 800,
    height: 400,
};

fn scenario_a_data() -> CompareChartData {
    CompareChartData::new()
        .with_labels(vec!["Popularity".to_owned(), "Followers (M)".to_owned()])
        .with_series1(vec![80.0, 12.0])
        .with_series2(vec![65.0, 30.0])
}

// Bars are the only rects inside the plot body; the background starts at the
// origin and legend swatches sit in the top margin.
fn bar_rects(frame: &RenderFrame) -> Vec<&RectPrimitive> {
    frame.rects.iter().filter(|rect| rect.y >= 30.0).collect()
}

fn has_text(frame: &RenderFrame, wanted: &str) -> bool {
    frame.texts.iter().any(|text| text.text == wanted)
}

#[test]
fn two_series_produce_two_bars_per_category() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    let bars = bar_rects(&frame);
    assert_eq!(bars.len(), 4);
}

#[test]
fn every_bar_keeps_the_fixed_outline_weight() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    for bar in bar_rects(&frame) {
        assert_eq!(bar.border_width, 1.0);
    }
}

#[test]
fn positive_bars_rest_on_the_zero_line() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    // With an all-positive domain the zero line is the plot bottom, shared by
    // every bar.
    let bars = bar_rects(&frame);
    let baseline = bars[0].y + bars[0].height;
    for bar in &bars {
        assert_relative_eq!(bar.y + bar.height, baseline, epsilon = 1e-9);
    }
}

#[test]
fn negative_bars_hang_below_the_zero_line() {
    let data = CompareChartData::new()
        .with_labels(vec!["Net".to_owned()])
        .with_series1(vec![-10.0])
        .with_series2(vec![5.0]);

    let frame = build_compare_frame(&data, &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    let bars = bar_rects(&frame);
    assert_eq!(bars.len(), 2);
    // Series order is stable: the negative bar's top is the positive bar's
    // bottom, both sitting on the zero line.
    assert_relative_eq!(bars[0].y, bars[1].y + bars[1].height, epsilon = 1e-9);
}

#[test]
fn category_labels_match_input_order() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert!(has_text(&frame, "Popularity"));
    assert!(has_text(&frame, "Followers (M)"));
}

#[test]
fn empty_category_label_is_skipped_but_bars_remain() {
    let data = scenario_a_data().with_labels(vec!["Popularity".to_owned(), String::new()]);

    let frame = build_compare_frame(&data, &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert!(has_text(&frame, "Popularity"));
    assert_eq!(bar_rects(&frame).len(), 4);
}

#[test]
fn value_axis_is_titled_and_zero_anchored() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert!(has_text(&frame, "Value"));
    assert!(has_text(&frame, "0"));
}

#[test]
fn legend_uses_placeholder_names_when_absent() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert!(has_text(&frame, "Artist 1"));
    assert!(has_text(&frame, "Artist 2"));
}

#[test]
fn legend_uses_provided_names() {
    let data = scenario_a_data()
        .with_series1_name("Mitski")
        .with_series2_name("Grimes");

    let frame = build_compare_frame(&data, &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert!(has_text(&frame, "Mitski"));
    assert!(has_text(&frame, "Grimes"));
    assert!(!has_text(&frame, "Artist 1"));
}

#[test]
fn shorter_series_leaves_a_gap_instead_of_failing() {
    let data = scenario_a_data().with_series2(vec![65.0]);

    let frame = build_compare_frame(&data, &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");

    assert_eq!(bar_rects(&frame).len(), 3);
}

#[test]
fn frame_passes_its_own_validation() {
    let frame = build_compare_frame(&scenario_a_data(), &CompareChartStyle::default(), VIEWPORT)
        .expect("build frame");
    frame.validate().expect("frame must be valid");
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let err = build_compare_frame(
        &scenario_a_data(),
        &CompareChartStyle::default(),
        Viewport::new(0, 400),
    )
    .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn viewport_smaller_than_margins_is_rejected() {
    let err = build_compare_frame(
        &scenario_a_data(),
        &CompareChartStyle::default(),
        Viewport::new(40, 30),
    )
    .expect_err("no room for the plot body");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
