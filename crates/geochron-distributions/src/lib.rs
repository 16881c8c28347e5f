//! Parametric densities and log-likelihoods for age distributions
//!
//! This crate provides:
//!
//! - **Bilinear-exponential density**: an asymmetric unimodal density with
//!   independent exponential decay on each side of its mode, see
//!   [`BilinearExponential`]
//! - **Batched log-density**: one parameter set per sample, evaluated at one
//!   value per sample, see [`BilinearTable`]
//! - **Interpolated log-likelihood**: each sample scored against its own
//!   tabulated log-density curve, see [`interpolate_ll`]
//!
//! # Examples
//!
//! ```rust
//! use geochron_distributions::{bilinear_exponential_ll, BilinearParams, BilinearTable};
//!
//! let table = BilinearTable::from_params(&[
//!     BilinearParams::new(1.0, 250.0, 0.5, 1.0, 1.2),
//!     BilinearParams::new(1.0, 251.0, 0.8, 1.0, 0.9),
//! ]);
//! let ll = bilinear_exponential_ll(&[250.1, 250.7], &table).unwrap();
//! assert_eq!(ll.len(), 2);
//! assert!(ll.iter().all(|v| v.is_finite()));
//! ```
//!
//! # Parallelism
//!
//! With the `parallel` feature, [`BilinearTable::ln_pdf`] evaluates samples
//! on the rayon thread pool. Samples are independent, so results are
//! identical to the sequential path.

mod bilinear;
mod likelihood;
mod table;

pub use bilinear::{bilinear_exponential, BilinearExponential, BilinearParams};
pub use likelihood::{interpolate_ll, interpolate_ll_total};
pub use table::{bilinear_exponential_ll, BilinearTable};
