use crate::circuit::Resonator;
use crate::error::CircuitError;
use crate::frequency::Frequency;
use ndarray::Array1;
use num::complex::Complex64;

/// Convergence threshold of the refinement loop, in Hz.
pub const DEFAULT_MIN_STEP_HZ: f64 = 1.0;

/// Target number of points per refinement window.
const REFINE_POINTS: f64 = 1000.0;

/// Hard bound on refinement passes; the step shrinks by orders of magnitude
/// per pass, so a miss here means a misconfigured threshold.
const MAX_REFINE_DEPTH: usize = 32;

/// Hard bound on capacitance-search interval halvings.
const MAX_SEARCH_ITERS: usize = 100;

/// Sweep point at which |dS11/df| peaks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteepnessResult {
    /// Frequency of the steepest point in Hz.
    pub frequency: f64,
    /// Slope magnitude |ΔS11|/Δf at that point, in 1/Hz.
    pub derivative: f64,
}

/// Outcome of the ideal-capacitance search.
#[derive(Clone, Debug)]
pub struct CapacitanceResult {
    /// Capacitance in farads at the steepest endpoint found.
    pub capacitance: f64,
    pub steepness: SteepnessResult,
    pub iters: usize,
    pub converged: bool,
}

/// Discrete slope magnitudes of a reflection curve.
///
/// `d[i] = |s11[i+1] - s11[i]| / step`; the final value is duplicated so the
/// output is index-aligned with the input. Curves shorter than two points
/// have no slope and yield zeros.
pub fn slopes(s11: &Array1<Complex64>, step: f64) -> Array1<f64> {
    let n = s11.len();
    if n < 2 {
        return Array1::zeros(n);
    }
    Array1::from_shape_fn(n, |i| {
        let j = if i + 1 < n { i } else { i - 1 };
        (s11[j + 1] - s11[j]).norm() / step
    })
}

fn argmax(d: &Array1<f64>) -> usize {
    let mut idx = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in d.iter().enumerate() {
        if v > max {
            max = v;
            idx = i;
        }
    }
    idx
}

/// Single-pass steepest point of a reflection curve over its sweep. No
/// refinement; pair with [`find_steepest`] for the zoomed estimate.
pub fn steepest_point(
    sweep: &Frequency,
    s11: &Array1<Complex64>,
) -> Result<SteepnessResult, CircuitError> {
    if sweep.npts() == 0 {
        return Err(CircuitError::EmptySweep(
            "cannot search an empty sweep".to_string(),
        ));
    }
    if sweep.npts() != s11.len() {
        return Err(CircuitError::InvalidParameter(format!(
            "sweep has {} points but S11 curve has {}",
            sweep.npts(),
            s11.len()
        )));
    }

    let d = slopes(s11, sweep.step());
    let i = argmax(&d);
    Ok(SteepnessResult {
        frequency: sweep.freq_at(i),
        derivative: d[i],
    })
}

/// Frequency of maximum sensitivity of a resonator, refined to
/// [`DEFAULT_MIN_STEP_HZ`].
pub fn find_steepest(res: &Resonator) -> Result<SteepnessResult, CircuitError> {
    find_steepest_with(res, DEFAULT_MIN_STEP_HZ)
}

/// Frequency of maximum sensitivity of a resonator.
///
/// Runs the full coarse sweep, then zooms: each pass re-sweeps a window of
/// one coarse step around the running maximum with a finer stride, until the
/// stride reaches `min_step`. This is a local hill-climb around the coarse
/// maximum; a comparable peak outside the refinement window is not found.
pub fn find_steepest_with(
    res: &Resonator,
    min_step: f64,
) -> Result<SteepnessResult, CircuitError> {
    if !(min_step > 0.0) || !min_step.is_finite() {
        return Err(CircuitError::InvalidParameter(format!(
            "min_step must be > 0 and finite, got {}",
            min_step
        )));
    }

    let sweep = res.sweep()?;
    let gamma = res.s11(&res.impedance(&sweep)?);
    let mut best = steepest_point(&sweep, &gamma)?;

    let (f_lower, f_upper) = res.bounds();
    let mut step = res.step();
    let mut depth = 0;

    while step > min_step && depth < MAX_REFINE_DEPTH {
        let lo = (best.frequency - step).max(f_lower);
        let hi = (best.frequency + step).min(f_upper);
        let width = hi - lo;
        if width <= min_step {
            break;
        }
        let sub_step = (width / REFINE_POINTS).max(min_step);

        let sub = Frequency::lin_range(lo, hi, sub_step)?;
        let gamma = res.s11(&res.impedance(&sub)?);
        best = steepest_point(&sub, &gamma)?;

        step = sub_step;
        depth += 1;
    }

    Ok(best)
}

/// Interval-halving search for the capacitance that maximizes the refined
/// steepness metric, holding every other circuit parameter fixed.
///
/// Compares the steepness at the interval endpoints and keeps the half owned
/// by the steeper one, until the interval closes below `tol` farads. Assumes
/// the steepness is unimodal over the interval.
pub fn find_ideal_capacitance(
    res: &Resonator,
    c_lower: f64,
    c_upper: f64,
    tol: f64,
) -> Result<CapacitanceResult, CircuitError> {
    if !(c_lower > 0.0) || !c_lower.is_finite() || !c_upper.is_finite() {
        return Err(CircuitError::InvalidParameter(format!(
            "capacitance interval must be positive and finite, got [{}, {}]",
            c_lower, c_upper
        )));
    }
    if c_lower >= c_upper {
        return Err(CircuitError::InvalidParameter(format!(
            "capacitance interval is inverted: [{}, {}]",
            c_lower, c_upper
        )));
    }
    if !(tol > 0.0) || !tol.is_finite() {
        return Err(CircuitError::InvalidParameter(format!(
            "tolerance must be > 0 and finite, got {}",
            tol
        )));
    }

    let steep_at = |c: f64| -> Result<SteepnessResult, CircuitError> {
        find_steepest(&res.with_capacitance(c)?)
    };

    let mut lo = c_lower;
    let mut hi = c_upper;
    let mut steep_lo = steep_at(lo)?;
    let mut steep_hi = steep_at(hi)?;
    let mut iters = 0;

    while (hi - lo) > tol && iters < MAX_SEARCH_ITERS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            // Interval exhausted at f64 resolution.
            break;
        }
        let steep_mid = steep_at(mid)?;
        if steep_lo.derivative > steep_hi.derivative {
            hi = mid;
            steep_hi = steep_mid;
        } else {
            lo = mid;
            steep_lo = steep_mid;
        }
        iters += 1;
    }

    let converged = (hi - lo) <= tol;
    let (capacitance, steepness) = if steep_lo.derivative >= steep_hi.derivative {
        (lo, steep_lo)
    } else {
        (hi, steep_hi)
    };

    Ok(CapacitanceResult {
        capacitance,
        steepness,
        iters,
        converged,
    })
}
