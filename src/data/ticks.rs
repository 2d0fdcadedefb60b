/// Headroom above the highest reading, as a factor of it.
pub const DEFAULT_TICK_HEADROOM: f64 = 1.1;
/// Above this many intervals the step is widened to a whole number that
/// brings the count back under it.
pub const MAX_TICKS: usize = 1000;

// ---------------------------------------------------------------------------
// Y-axis tick generation
// ---------------------------------------------------------------------------

/// Tick spacing for a series: 0.5 when its span is under 2 absorbance
/// units, 1 otherwise.
pub fn tick_step(absorbances: &[f64]) -> f64 {
    let (min, max) = min_max(absorbances);
    if max - min < 2.0 {
        0.5
    } else {
        1.0
    }
}

/// Evenly spaced ticks from 0 up to and including the first tick at or above
/// `max(absorbances) * headroom`. The last tick doubles as the axis top.
///
/// Always contains at least `0.0`; a non-finite top gives only that.
pub fn generate_ticks(absorbances: &[f64], headroom: f64) -> Vec<f64> {
    if absorbances.is_empty() {
        return vec![0.0];
    }
    let (_, max) = min_max(absorbances);
    let limit = max * headroom;
    if !limit.is_finite() {
        log::warn!("Tick limit {limit} is not finite, only the zero tick is drawn");
        return vec![0.0];
    }
    let mut step = tick_step(absorbances);
    if limit / step > MAX_TICKS as f64 {
        step = (limit / MAX_TICKS as f64).ceil();
    }

    let mut ticks = vec![0.0];
    let mut current = 0.0;
    while current < limit {
        current += step;
        ticks.push(current);
    }
    ticks
}

/// Spacing of a tick list from [`generate_ticks`]; 1 when it has a single tick.
pub fn tick_spacing(ticks: &[f64]) -> f64 {
    match ticks {
        [first, second, ..] => second - first,
        _ => 1.0,
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_range_uses_half_steps() {
        let ticks = generate_ticks(&[0.1, 1.8], DEFAULT_TICK_HEADROOM);
        assert_eq!(ticks, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(*ticks.last().unwrap() > 1.8 * 1.1);
    }

    #[test]
    fn wide_range_uses_unit_steps() {
        let ticks = generate_ticks(&[0.2, 2.5], DEFAULT_TICK_HEADROOM);
        assert_eq!(tick_step(&[0.2, 2.5]), 1.0);
        assert_eq!(ticks, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn range_of_exactly_two_uses_unit_steps() {
        assert_eq!(tick_step(&[0.0, 2.0]), 1.0);
    }

    #[test]
    fn non_positive_data_only_has_zero() {
        assert_eq!(generate_ticks(&[-0.4, -0.1], DEFAULT_TICK_HEADROOM), vec![0.0]);
        assert_eq!(generate_ticks(&[], DEFAULT_TICK_HEADROOM), vec![0.0]);
    }

    #[test]
    fn huge_reading_caps_the_tick_count() {
        let ticks = generate_ticks(&[0.1, 1e12], DEFAULT_TICK_HEADROOM);
        let limit = 1e12 * DEFAULT_TICK_HEADROOM;
        assert!(ticks.len() <= MAX_TICKS + 1);
        assert!(*ticks.last().unwrap() >= limit);
        assert_eq!(tick_spacing(&ticks), (limit / MAX_TICKS as f64).ceil());
    }

    #[test]
    fn non_finite_top_only_has_zero() {
        assert_eq!(generate_ticks(&[0.1, f64::INFINITY], DEFAULT_TICK_HEADROOM), vec![0.0]);
        assert_eq!(generate_ticks(&[0.1, f64::MAX], DEFAULT_TICK_HEADROOM), vec![0.0]);
        assert_eq!(generate_ticks(&[0.1, 1.0], f64::NAN), vec![0.0]);
    }

    #[test]
    fn spacing_of_tick_lists() {
        assert_eq!(tick_spacing(&generate_ticks(&[0.1, 1.8], DEFAULT_TICK_HEADROOM)), 0.5);
        assert_eq!(tick_spacing(&[0.0]), 1.0);
    }

    #[test]
    fn headroom_is_configurable() {
        assert_eq!(generate_ticks(&[0.0, 1.0], 1.0), vec![0.0, 0.5, 1.0]);
        assert_eq!(generate_ticks(&[0.0, 1.0], 1.6), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }
}
