use crate::error::CircuitError;
use crate::scale::Scale;
use ndarray::Array1;
use std::f64::consts::PI;

/// Upper bound on sweep length, keeping memory and per-curve work bounded.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// An ordered frequency sweep. Points are stored in Hz.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    pts: Array1<f64>,
}

impl Frequency {
    /// Arithmetic progression `[start, start+step, ..., <stop)` in Hz.
    ///
    /// The upper bound is excluded. The window must span at least one full
    /// step; degenerate windows fail with `EmptySweep`.
    pub fn lin_range(start: f64, stop: f64, step: f64) -> Result<Frequency, CircuitError> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(CircuitError::InvalidParameter(format!(
                "sweep bounds must be finite, got [{}, {})",
                start, stop
            )));
        }
        if !(step > 0.0) || !step.is_finite() {
            return Err(CircuitError::InvalidParameter(format!(
                "step must be > 0 and finite, got {}",
                step
            )));
        }
        let span = (stop - start) / step;
        if span < 1.0 {
            return Err(CircuitError::EmptySweep(format!(
                "window [{}, {}) spans less than one step of {}",
                start, stop, step
            )));
        }
        let n = span.ceil() as usize;
        if n > MAX_SWEEP_POINTS {
            return Err(CircuitError::SweepTooLong(format!(
                "{} points requested, limit is {}",
                n, MAX_SWEEP_POINTS
            )));
        }

        Ok(Frequency {
            pts: Array1::from_shape_fn(n, |i| start + (i as f64) * step),
        })
    }

    /// Linearly spaced window `[center - span, center + span]` with `npts`
    /// points, both endpoints included.
    pub fn centered(center: f64, span: f64, npts: usize) -> Result<Frequency, CircuitError> {
        if !center.is_finite() || !span.is_finite() || span < 0.0 {
            return Err(CircuitError::InvalidParameter(format!(
                "center {} and span {} must be finite, span non-negative",
                center, span
            )));
        }
        if npts == 0 {
            return Err(CircuitError::EmptySweep(
                "centered sweep needs at least one point".to_string(),
            ));
        }
        if npts > MAX_SWEEP_POINTS {
            return Err(CircuitError::SweepTooLong(format!(
                "{} points requested, limit is {}",
                npts, MAX_SWEEP_POINTS
            )));
        }
        if npts == 1 {
            return Ok(Frequency {
                pts: Array1::from_elem(1, center),
            });
        }

        let start = center - span;
        let step = 2.0 * span / ((npts - 1) as f64);
        Ok(Frequency {
            pts: Array1::from_shape_fn(npts, |i| start + (i as f64) * step),
        })
    }

    pub fn from_row(f: Array1<f64>, scale: Scale) -> Frequency {
        Frequency {
            pts: scale.unscale_array(&f),
        }
    }

    pub fn from_vec(f: Vec<f64>, scale: Scale) -> Frequency {
        Frequency::from_row(Array1::from_vec(f), scale)
    }

    /// Sweep points in Hz.
    pub fn freq(&self) -> &Array1<f64> {
        &self.pts
    }

    pub fn freq_at(&self, pt: usize) -> f64 {
        self.pts[pt]
    }

    /// Angular frequencies, `2π·f` element-wise, same length and order.
    pub fn w(&self) -> Array1<f64> {
        &self.pts * (2.0 * PI)
    }

    pub fn w_at(&self, pt: usize) -> f64 {
        2.0 * PI * self.pts[pt]
    }

    pub fn hz(&self) -> Array1<f64> {
        self.pts.clone()
    }

    pub fn ghz(&self) -> Array1<f64> {
        self.scaled(Scale::Giga)
    }

    pub fn scaled(&self, scale: Scale) -> Array1<f64> {
        scale.scale_array(&self.pts)
    }

    pub fn npts(&self) -> usize {
        self.pts.len()
    }

    /// Grid stride in Hz, taken from the first two points. Zero for a
    /// single-point sweep.
    pub fn step(&self) -> f64 {
        if self.pts.len() < 2 {
            0.0
        } else {
            self.pts[1] - self.pts[0]
        }
    }

    pub fn idx_at(&self, freq: f64, scale: Scale) -> Option<usize> {
        self.pts.iter().position(|&x| x == scale.unscale(freq))
    }
}
