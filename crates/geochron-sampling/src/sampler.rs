//! Rejection sampling from a [`DensityCurve`]
//!
//! Each draw proposes `rx ~ U(0, m - 1)` and `ry ~ U(0, max)` and accepts
//! when the curve's piecewise-linear density at `rx` exceeds `ry`. Accepted
//! draws are reported as `rx / (m - 1)`, so every value lies in `[0, 1]`.
//!
//! The free functions retry until acceptance with no trial cap. On a
//! degenerate curve (see [`DensityCurve::is_degenerate`]) they never return;
//! guard with that check, or use a [`RejectionSampler`] configured with
//! [`RejectionSampler::with_max_trials`].

use crate::DensityCurve;
use geochron_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Draws per independently seeded chunk in [`RejectionSampler::draw_parallel`]
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 4096;

/// Draw `n` values in `[0, 1]` distributed according to `curve`
///
/// # Examples
///
/// ```rust
/// use geochron_sampling::{draw_from_distribution, DensityCurve};
/// use rand::SeedableRng;
///
/// let values = [0.0, 1.0, 0.0];
/// let curve = DensityCurve::new(&values).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let draws = draw_from_distribution(&curve, 1000, &mut rng);
/// assert_eq!(draws.len(), 1000);
/// assert!(draws.iter().all(|&x| (0.0..=1.0).contains(&x)));
/// ```
pub fn draw_from_distribution<R: Rng + ?Sized>(
    curve: &DensityCurve<'_>,
    n: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut out = vec![0.0; n];
    fill_from_distribution(curve, &mut out, rng);
    out
}

/// Overwrite every element of `out` with a draw from `curve`
pub fn fill_from_distribution<R: Rng + ?Sized>(
    curve: &DensityCurve<'_>,
    out: &mut [f64],
    rng: &mut R,
) {
    let mut total_trials = 0u64;
    for slot in out.iter_mut() {
        let mut trials = 0u64;
        *slot = loop {
            trials += 1;
            if let Some(x) = propose(curve, rng) {
                break x;
            }
        };
        total_trials += trials;
    }
    debug!(draws = out.len(), total_trials, "filled from distribution");
}

/// One proposal: `Some(accepted value)` or `None` on rejection
#[inline]
fn propose<R: Rng + ?Sized>(curve: &DensityCurve<'_>, rng: &mut R) -> Option<f64> {
    let x_max = curve.x_max();
    let rx = x_max * rng.gen::<f64>();
    let y = curve.value_at(rx);
    let ry = curve.max() * rng.gen::<f64>();
    (y > ry).then(|| rx / x_max)
}

/// Configurable rejection sampler
///
/// By default the sampler is seeded from the thread-local generator and
/// retries without limit, matching [`draw_from_distribution`]. A fixed seed
/// makes the stream reproducible; a trial cap turns a non-terminating draw
/// into [`Error::TrialLimitExceeded`].
///
/// # Examples
///
/// ```rust
/// use geochron_sampling::{DensityCurve, RejectionSampler};
///
/// let values = [0.0, 0.0, 0.0];
/// let curve = DensityCurve::new(&values).unwrap();
/// let sampler = RejectionSampler::new().with_seed(1).with_max_trials(100);
///
/// assert!(sampler.draw(&curve, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionSampler {
    seed: Option<u64>,
    max_trials: Option<u64>,
}

impl RejectionSampler {
    /// Create a sampler with an entropy seed and no trial cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Give up on a single draw after `max_trials` rejected proposals
    ///
    /// A cap of zero is rejected with [`Error::InvalidParameter`] when the
    /// sampler is used.
    pub fn with_max_trials(mut self, max_trials: u64) -> Self {
        self.max_trials = Some(max_trials);
        self
    }

    /// The configured seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The configured per-draw trial cap, if any
    pub fn max_trials(&self) -> Option<u64> {
        self.max_trials
    }

    fn validate(&self) -> Result<()> {
        if self.max_trials == Some(0) {
            return Err(Error::InvalidParameter(
                "trial cap must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| thread_rng().gen())
    }

    /// Draw `n` values from `curve`
    pub fn draw(&self, curve: &DensityCurve<'_>, n: usize) -> Result<Vec<f64>> {
        let mut out = vec![0.0; n];
        self.fill(curve, &mut out)?;
        Ok(out)
    }

    /// Overwrite every element of `out` with a draw from `curve`
    #[instrument(skip(self, curve, out), fields(len = out.len(), m = curve.len()))]
    pub fn fill(&self, curve: &DensityCurve<'_>, out: &mut [f64]) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.resolve_seed());
        self.fill_with(curve, out, &mut rng)
    }

    /// Like [`RejectionSampler::fill`], drawing from a caller-supplied generator
    ///
    /// The configured seed is ignored.
    pub fn fill_with<R: Rng + ?Sized>(
        &self,
        curve: &DensityCurve<'_>,
        out: &mut [f64],
        rng: &mut R,
    ) -> Result<()> {
        self.validate()?;
        let Some(max_trials) = self.max_trials else {
            fill_from_distribution(curve, out, rng);
            return Ok(());
        };

        for (i, slot) in out.iter_mut().enumerate() {
            let mut trials = 0u64;
            *slot = loop {
                if trials == max_trials {
                    debug!(draw = i, trials, "trial limit exceeded");
                    return Err(Error::TrialLimitExceeded { trials });
                }
                trials += 1;
                if let Some(x) = propose(curve, rng) {
                    break x;
                }
            };
            trace!(draw = i, trials, "accepted");
        }
        Ok(())
    }

    /// Draw `n` values using all rayon worker threads
    ///
    /// Output is split into fixed-size chunks; chunk `i` draws from its own
    /// generator seeded with `seed + i`, so a seeded sampler yields the same
    /// values regardless of thread count.
    #[cfg(feature = "parallel")]
    #[instrument(skip(self, curve), fields(m = curve.len()))]
    pub fn draw_parallel(&self, curve: &DensityCurve<'_>, n: usize) -> Result<Vec<f64>> {
        self.validate()?;
        let seed = self.resolve_seed();
        let mut out = vec![0.0; n];
        out.par_chunks_mut(PARALLEL_CHUNK)
            .enumerate()
            .try_for_each(|(i, chunk)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.fill_with(curve, chunk, &mut rng)
            })?;
        debug!(draws = n, "parallel draw completed");
        Ok(out)
    }
}
