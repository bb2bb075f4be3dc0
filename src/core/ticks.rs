pub(crate) const VALUE_AXIS_TARGET_SPACING_PX: f64 = 40.0;

const VALUE_AXIS_MIN_TICKS: usize = 2;
const VALUE_AXIS_MAX_TICKS: usize = 11;

fn tick_target_count(axis_span_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return VALUE_AXIS_MIN_TICKS;
    }

    let raw = (axis_span_px / VALUE_AXIS_TARGET_SPACING_PX).floor() as usize + 1;
    raw.clamp(VALUE_AXIS_MIN_TICKS, VALUE_AXIS_MAX_TICKS)
}

/// Rounds `span / target_steps` up to the nearest 1/2/5 x 10^k step.
pub fn nice_step(span: f64, target_steps: usize) -> f64 {
    let raw_step = span / target_steps.max(1) as f64;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Tick positions for a zero-anchored value axis.
///
/// Ticks sit on multiples of the nice step and cover the full domain, so the
/// first tick is <= `domain.0` and the last is >= `domain.1`. A domain that
/// contains zero therefore always gets a tick exactly at zero.
pub fn value_axis_ticks(domain: (f64, f64), axis_span_px: f64) -> Vec<f64> {
    let (min, max) = domain;
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let target = tick_target_count(axis_span_px);
    let step = nice_step(span, target - 1);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (min / step).floor() as i64;
    let last = (max / step).ceil() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
