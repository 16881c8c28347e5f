//! Per-sample bilinear-exponential parameters for batched evaluation

use crate::bilinear::{exponent, BilinearParams};
use geochron_core::{Error, Result};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Five parallel parameter columns, one entry per sample
///
/// Sample `i` is described by `(scale[i], mode[i], width[i], sharpness[i],
/// skew[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearTable {
    scale: Vec<f64>,
    mode: Vec<f64>,
    width: Vec<f64>,
    sharpness: Vec<f64>,
    skew: Vec<f64>,
}

impl BilinearTable {
    /// Build from five equal-length columns
    pub fn from_columns(
        scale: Vec<f64>,
        mode: Vec<f64>,
        width: Vec<f64>,
        sharpness: Vec<f64>,
        skew: Vec<f64>,
    ) -> Result<Self> {
        let n = scale.len();
        for (name, col) in [
            ("mode", &mode),
            ("width", &width),
            ("sharpness", &sharpness),
            ("skew", &skew),
        ] {
            if col.len() != n {
                return Err(Error::size_mismatch(n, col.len(), name));
            }
        }
        Ok(Self {
            scale,
            mode,
            width,
            sharpness,
            skew,
        })
    }

    /// Build from a 5 × n matrix whose rows are scale, mode, width,
    /// sharpness and skew
    pub fn from_matrix(p: &DMatrix<f64>) -> Result<Self> {
        if p.nrows() != 5 {
            return Err(Error::InvalidInput(format!(
                "bilinear parameter matrix must have 5 rows, got {}",
                p.nrows()
            )));
        }
        let row = |r: usize| p.row(r).iter().copied().collect::<Vec<f64>>();
        Self::from_columns(row(0), row(1), row(2), row(3), row(4))
    }

    /// Build by stacking one parameter set per sample
    pub fn from_params(params: &[BilinearParams]) -> Self {
        Self {
            scale: params.iter().map(|p| p.scale).collect(),
            mode: params.iter().map(|p| p.mode).collect(),
            width: params.iter().map(|p| p.width).collect(),
            sharpness: params.iter().map(|p| p.sharpness).collect(),
            skew: params.iter().map(|p| p.skew).collect(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.scale.len()
    }

    /// True if the table holds no samples
    pub fn is_empty(&self) -> bool {
        self.scale.is_empty()
    }

    /// Parameters of sample `i`
    pub fn get(&self, i: usize) -> Option<BilinearParams> {
        (i < self.len()).then(|| {
            BilinearParams::new(
                self.scale[i],
                self.mode[i],
                self.width[i],
                self.sharpness[i],
                self.skew[i],
            )
        })
    }

    #[inline]
    fn ln_pdf_at(&self, i: usize, x: f64) -> f64 {
        self.scale[i].ln()
            + exponent(
                x,
                self.mode[i],
                self.width[i],
                self.sharpness[i],
                self.skew[i],
            )
    }

    /// Log density of sample `i` at `x[i]`, for every sample
    #[instrument(skip(self, x), fields(n = self.len()))]
    pub fn ln_pdf(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.len() {
            return Err(Error::size_mismatch(self.len(), x.len(), "bilinear log-likelihood"));
        }

        #[cfg(feature = "parallel")]
        let ll: Vec<f64> = x
            .par_iter()
            .enumerate()
            .map(|(i, &xi)| self.ln_pdf_at(i, xi))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let ll: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, &xi)| self.ln_pdf_at(i, xi))
            .collect();

        debug!(samples = ll.len(), "evaluated bilinear log-density");
        Ok(ll)
    }
}

/// Log density of each sample's own bilinear-exponential at `x[i]`
pub fn bilinear_exponential_ll(x: &[f64], table: &BilinearTable) -> Result<Vec<f64>> {
    table.ln_pdf(x)
}
