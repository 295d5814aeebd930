//! Interpolation over irregular `(x, y)` samples.
//!
//! Both interpolants accept strictly increasing, possibly unevenly spaced
//! abscissae, which is what a [`Signal`](crate::Signal)'s timestamps guarantee.

use crate::error::{Result, SignalError};

/// Interpolation mode used when rebuilding a signal on a new time base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Piecewise-linear between bracketing points, constant beyond the ends
    #[default]
    Linear,
    /// Natural cubic spline, extrapolated with the end segments' polynomials
    Cubic,
}

impl InterpolationMode {
    /// Evaluates the chosen interpolant of `(xs, ys)` at every point of `at`.
    pub fn apply(self, xs: &[f64], ys: &[f64], at: &[f64]) -> Result<Vec<f64>> {
        match self {
            InterpolationMode::Linear => linear(xs, ys, at),
            InterpolationMode::Cubic => {
                let spline = CubicSpline::new(xs, ys)?;
                Ok(at.iter().map(|&x| spline.evaluate(x)).collect())
            }
        }
    }
}

fn check_points(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.is_empty() {
        return Err(SignalError::EmptySignal);
    }
    if xs.len() != ys.len() {
        return Err(SignalError::invalid(
            "ys",
            format!("expected {} values, got {}", xs.len(), ys.len()),
        ));
    }
    Ok(())
}

/// Piecewise-linear interpolation with constant extrapolation.
///
/// Points left of `xs[0]` take `ys[0]`, points right of the last abscissa take
/// the last value.
///
/// # Examples
///
/// ```
/// use samplekit::processing::linear;
///
/// let out = linear(&[0.0, 1.0, 2.0], &[0.0, 10.0, 0.0], &[-1.0, 0.5, 1.5, 9.0]).unwrap();
/// assert_eq!(out, vec![0.0, 5.0, 5.0, 0.0]);
/// ```
pub fn linear(xs: &[f64], ys: &[f64], at: &[f64]) -> Result<Vec<f64>> {
    check_points(xs, ys)?;
    let last = xs.len() - 1;
    Ok(at
        .iter()
        .map(|&x| {
            if x <= xs[0] {
                return ys[0];
            }
            if x >= xs[last] {
                return ys[last];
            }
            // First index with xs[i] > x; 1..=last because of the checks above
            let i = xs.partition_point(|&v| v <= x);
            let (x0, x1) = (xs[i - 1], xs[i]);
            let (y0, y1) = (ys[i - 1], ys[i]);
            y0 + (x - x0) * (y1 - y0) / (x1 - x0)
        })
        .collect())
}

/// A natural cubic spline through `(x, y)` points.
///
/// Second derivatives vanish at both ends. Evaluation outside the data range
/// continues the first or last segment's cubic.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot
    curvature: Vec<f64>,
}

impl CubicSpline {
    /// Fits a spline through the given points.
    ///
    /// A single point gives a constant, two points a straight line.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        check_points(xs, ys)?;
        let n = xs.len();
        let mut curvature = vec![0.0; n];

        if n > 2 {
            // Thomas algorithm over the interior knots 1..n-1
            let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
            let m = n - 2;
            let mut diag = vec![0.0; m];
            let mut upper = vec![0.0; m];
            let mut rhs = vec![0.0; m];
            for k in 0..m {
                let i = k + 1;
                diag[k] = 2.0 * (h[i - 1] + h[i]);
                upper[k] = h[i];
                rhs[k] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            }
            for k in 1..m {
                let lower = h[k];
                let factor = lower / diag[k - 1];
                diag[k] -= factor * upper[k - 1];
                rhs[k] -= factor * rhs[k - 1];
            }
            curvature[m] = rhs[m - 1] / diag[m - 1];
            for k in (0..m - 1).rev() {
                curvature[k + 1] = (rhs[k] - upper[k] * curvature[k + 2]) / diag[k];
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            curvature,
        })
    }

    /// Evaluates the spline at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 1 {
            return self.ys[0];
        }
        let i = self
            .xs
            .partition_point(|&v| v <= x)
            .saturating_sub(1)
            .min(n - 2);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.curvature[i], self.curvature[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;

        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}
