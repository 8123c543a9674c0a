//! # Cubic Polynomials
//!
//! Empirical property curves in the database are cubics in one variable:
//!
//! ```text
//! y(x) = c0 + c1·x + c2·x² + c3·x³
//! ```
//!
//! Breaking load and cost per length are cubics in diameter (m); connection
//! cost is a cubic in design load (N); buoy cost a cubic in displaced volume
//! (m³). Any of the coefficients may be zero, in which case the curve
//! degrades to a lower-order polynomial and root finding follows suit.
//!
//! ## Root finding
//!
//! Real roots are found in closed form (linear, stable quadratic, Cardano /
//! trigonometric cubic) and then polished with Newton steps on the original
//! coefficients. Roots closer than [`ROOT_MERGE_TOLERANCE`] (relative) are
//! merged so that a repeated root is reported once.

use serde::{Deserialize, Serialize};

/// Relative tolerance used to merge near-identical roots
pub const ROOT_MERGE_TOLERANCE: f64 = 1e-9;

/// Newton polishing iterations applied to every closed-form root
const POLISH_ITERATIONS: usize = 8;

/// Cubic curve `c0 + c1·x + c2·x² + c3·x³`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cubic {
    #[serde(default)]
    pub c0: f64,
    #[serde(default)]
    pub c1: f64,
    #[serde(default)]
    pub c2: f64,
    #[serde(default)]
    pub c3: f64,
}

impl Cubic {
    pub fn new(c0: f64, c1: f64, c2: f64, c3: f64) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// Evaluate y(x) using Horner's scheme
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.c3 * x + self.c2) * x + self.c1) * x + self.c0
    }

    /// Evaluate dy/dx
    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        (3.0 * self.c3 * x + 2.0 * self.c2) * x + self.c1
    }

    /// Highest power with a non-zero coefficient (0 for a constant)
    pub fn degree(&self) -> usize {
        if self.c3 != 0.0 {
            3
        } else if self.c2 != 0.0 {
            2
        } else if self.c1 != 0.0 {
            1
        } else {
            0
        }
    }

    /// Curve shifted down by `target`, i.e. `y(x) - target`
    pub fn shifted(&self, target: f64) -> Self {
        Self {
            c0: self.c0 - target,
            ..*self
        }
    }

    /// All distinct real roots of y(x) = 0, ascending.
    ///
    /// A constant polynomial has no isolated roots and yields an empty list,
    /// even when it is identically zero.
    pub fn real_roots(&self) -> Vec<f64> {
        let mut roots = match self.degree() {
            3 => cubic_roots(self.c3, self.c2, self.c1, self.c0),
            2 => quadratic_roots(self.c2, self.c1, self.c0),
            1 => vec![-self.c0 / self.c1],
            _ => Vec::new(),
        };

        for root in roots.iter_mut() {
            *root = self.polish(*root);
        }

        roots.retain(|r| r.is_finite());
        roots.sort_by(|a, b| a.total_cmp(b));
        roots.dedup_by(|a, b| {
            (*a - *b).abs() <= ROOT_MERGE_TOLERANCE * (1.0 + a.abs().max(b.abs()))
        });
        roots
    }

    /// Newton refinement; keeps the best estimate seen.
    fn polish(&self, x0: f64) -> f64 {
        let mut best = x0;
        let mut best_residual = self.eval(x0).abs();
        let mut x = x0;

        for _ in 0..POLISH_ITERATIONS {
            let slope = self.derivative(x);
            if slope == 0.0 || !slope.is_finite() {
                break;
            }
            x -= self.eval(x) / slope;
            let residual = self.eval(x).abs();
            if residual < best_residual {
                best = x;
                best_residual = residual;
            }
            if best_residual == 0.0 {
                break;
            }
        }
        best
    }
}

/// Real roots of a·x² + b·x + c (a ≠ 0), numerically stable form.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        Vec::new()
    } else if disc == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        // signum(0.0) is 1.0, so q is never zero here
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        vec![q / a, c / q]
    }
}

/// Real roots of a·x³ + b·x² + c·x + d (a ≠ 0).
///
/// Reduces to the depressed cubic t³ + p·t + q = 0 with x = t − b/(3a).
fn cubic_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let (b, c, d) = (b / a, c / a, d / a);
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p * third_p * third_p;

    if disc > 0.0 {
        // One real root (Cardano)
        let s = disc.sqrt();
        let t = (-half_q + s).cbrt() + (-half_q - s).cbrt();
        vec![t - shift]
    } else if third_p == 0.0 {
        // p = q = 0: triple root
        vec![-shift]
    } else {
        // Three real roots (trigonometric form)
        let m = -third_p;
        let r = 2.0 * m.sqrt();
        let phi = (-half_q / m.powf(1.5)).clamp(-1.0, 1.0).acos() / 3.0;
        (0..3)
            .map(|k| r * (phi - 2.0 * std::f64::consts::PI * k as f64 / 3.0).cos() - shift)
            .collect()
    }
}
