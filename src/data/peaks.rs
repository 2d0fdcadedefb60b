use super::model::Peak;

/// Consecutive rises a climb needs before the next drop counts as a peak.
pub const DEFAULT_RISING_RUN_THRESHOLD: u32 = 5;

// ---------------------------------------------------------------------------
// Run-length peak detection
// ---------------------------------------------------------------------------

/// Find absorbance maxima reached after a sustained climb.
///
/// Walks the series once, counting strictly increasing steps. When the
/// series turns down and more than `rising_run_threshold` rises have been
/// counted, the point before the drop is reported and the count restarts.
/// Flat steps (and NaN comparisons) neither extend nor break a run, and a
/// drop after a short run leaves the count as it is.
///
/// Peaks come out in ascending wavelength order.
pub fn detect_peaks(wavelengths: &[i64], absorbances: &[f64], rising_run_threshold: u32) -> Vec<Peak> {
    let n = wavelengths.len().min(absorbances.len());
    let mut peaks = Vec::new();
    let mut rising_run: u32 = 0;

    for i in 1..n {
        let diff = absorbances[i] - absorbances[i - 1];
        if diff > 0.0 {
            rising_run += 1;
        } else if diff < 0.0 && rising_run > rising_run_threshold {
            peaks.push(Peak::new(wavelengths[i - 1], absorbances[i - 1]));
            rising_run = 0;
        }
    }

    log::debug!("Detected {} peaks over {n} points", peaks.len());
    peaks
}

/// Remove the peak at `index`. Out-of-range indices leave the list as is.
pub fn remove_peak(mut peaks: Vec<Peak>, index: usize) -> Vec<Peak> {
    if index < peaks.len() {
        let removed = peaks.remove(index);
        log::info!("Removed peak at {} nm", removed.wavelength);
    } else {
        log::warn!("No peak at index {index} (have {})", peaks.len());
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(n: usize) -> Vec<i64> {
        (0..n as i64).map(|i| 400 + i).collect()
    }

    /// `rises` strictly increasing steps from 0.0, then one drop.
    fn climb_then_drop(rises: usize) -> Vec<f64> {
        let mut a: Vec<f64> = (0..=rises).map(|i| i as f64 * 0.1).collect();
        a.push(0.0);
        a
    }

    #[test]
    fn empty_and_single_point() {
        assert!(detect_peaks(&[], &[], 5).is_empty());
        assert!(detect_peaks(&[400], &[1.0], 5).is_empty());
    }

    #[test]
    fn threshold_boundary() {
        let exact = climb_then_drop(5);
        assert!(detect_peaks(&axis(exact.len()), &exact, 5).is_empty());

        let over = climb_then_drop(6);
        let peaks = detect_peaks(&axis(over.len()), &over, 5);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].wavelength, 406);
        assert!((peaks[0].absorbance - 0.6).abs() < 1e-12);
    }

    #[test]
    fn monotonic_series_has_no_peak() {
        let a: Vec<f64> = (0..50).map(|i| (i / 3) as f64).collect();
        assert!(detect_peaks(&axis(a.len()), &a, 5).is_empty());
    }

    #[test]
    fn plateau_does_not_break_run() {
        // 3 rises, flat, 3 rises, drop: 6 rises in total
        let a = [0.0, 0.1, 0.2, 0.3, 0.3, 0.4, 0.5, 0.6, 0.2];
        let peaks = detect_peaks(&axis(a.len()), &a, 5);
        assert_eq!(peaks, vec![Peak::new(407, 0.6)]);
    }

    #[test]
    fn short_dips_do_not_reset_run() {
        // rises: 3, dip, 3 more, then the real drop
        let a = [0.0, 0.1, 0.2, 0.3, 0.25, 0.35, 0.45, 0.55, 0.1];
        let peaks = detect_peaks(&axis(a.len()), &a, 5);
        assert_eq!(peaks, vec![Peak::new(407, 0.55)]);
    }

    #[test]
    fn two_separate_bands() {
        let mut a = climb_then_drop(8);
        a.extend(climb_then_drop(7));
        let peaks = detect_peaks(&axis(a.len()), &a, 5);
        assert_eq!(peaks.len(), 2);
        assert!(peaks[0].wavelength < peaks[1].wavelength);
    }

    #[test]
    fn custom_threshold() {
        let a = climb_then_drop(2);
        assert_eq!(detect_peaks(&axis(a.len()), &a, 1).len(), 1);
        assert!(detect_peaks(&axis(a.len()), &a, 2).is_empty());
    }

    #[test]
    fn remove_by_index() {
        let peaks = vec![Peak::new(400, 1.0), Peak::new(450, 2.0), Peak::new(500, 0.5)];
        let peaks = remove_peak(peaks, 1);
        assert_eq!(peaks, vec![Peak::new(400, 1.0), Peak::new(500, 0.5)]);
        let peaks = remove_peak(peaks, 7);
        assert_eq!(peaks.len(), 2);
    }
}
