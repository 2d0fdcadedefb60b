use anyhow::{Context, Result};

use uv_vis_dsp_viewer::data::dsp::render_dsp;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_absorbances(
    wavelengths: &[i64],
    bands: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&wl| {
            let signal: f64 = bands
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(wl as f64, mu, sigma, amp))
                .sum();
            // Instrument output carries four decimals.
            ((signal + rng.gauss(0.0, noise_level)) * 1e4).round() / 1e4
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthetic scan: output file, scan range and absorption bands
/// `(centre nm, width nm, height)`.
struct SampleScan {
    filename: &'static str,
    start: i64,
    end: i64,
    step: i64,
    bands: &'static [(f64, f64, f64)],
}

const SCANS: &[SampleScan] = &[
    SampleScan {
        filename: "sample_uv.dsp",
        start: 200,
        end: 400,
        step: 1,
        bands: &[(225.0, 12.0, 1.4), (268.0, 9.0, 0.85), (330.0, 18.0, 0.4)],
    },
    SampleScan {
        filename: "sample_vis.dsp",
        start: 400,
        end: 800,
        step: 2,
        bands: &[(512.0, 30.0, 0.62), (664.0, 22.0, 1.1)],
    },
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    for scan in SCANS {
        let wavelengths: Vec<i64> = (scan.start..=scan.end).step_by(scan.step as usize).collect();
        let absorbances = generate_absorbances(&wavelengths, scan.bands, 0.002, &mut rng);
        let text = render_dsp(scan.filename, scan.start, scan.end, scan.step, &absorbances);
        std::fs::write(scan.filename, text)
            .with_context(|| format!("writing {}", scan.filename))?;

        println!(
            "Wrote {} readings ({}-{} nm, step {}) to {}",
            absorbances.len(),
            scan.start,
            scan.end,
            scan.step,
            scan.filename
        );
    }
    Ok(())
}
