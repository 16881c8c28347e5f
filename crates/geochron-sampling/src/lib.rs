//! Monte-Carlo sampling from empirically specified distributions
//!
//! A distribution is given only as a discretized density: a
//! [`DensityCurve`] of non-negative values at integer indices `0..m`,
//! linearly interpolated in between. Draws come from rejection sampling
//! under the curve's own maximum and are reported normalized to `[0, 1]`
//! across the index range; map them back onto a physical axis as needed.
//!
//! # Examples
//!
//! ```rust
//! use geochron_sampling::{DensityCurve, RejectionSampler};
//!
//! // A triangular density peaking in the middle of its range
//! let values = [0.0, 1.0, 0.0];
//! let curve = DensityCurve::new(&values).unwrap();
//! assert!(!curve.is_degenerate());
//!
//! let draws = RejectionSampler::new().with_seed(42).draw(&curve, 10_000).unwrap();
//! let mean = draws.iter().sum::<f64>() / draws.len() as f64;
//! assert!((mean - 0.5).abs() < 0.02);
//! ```
//!
//! # Termination
//!
//! The expected number of proposals per accepted draw is
//! `(m - 1) * max / integral`. A curve with (almost) no density never
//! accepts; unbounded sampling then runs forever. Check
//! [`DensityCurve::is_degenerate`] or cap trials with
//! [`RejectionSampler::with_max_trials`].
//!
//! # Concurrency
//!
//! Draws share no state besides the generator passed in. With the
//! `parallel` feature, [`RejectionSampler::draw_parallel`] gives each rayon
//! chunk its own seeded generator.

mod curve;
mod sampler;

pub use curve::DensityCurve;
pub use sampler::{draw_from_distribution, fill_from_distribution, RejectionSampler};
