//! Physical constants used by the circuit and SQUID models.
//!
//! Values are CODATA 2018 SI values.

/// Elementary charge (C).
pub const E_CHARGE: f64 = 1.602_176_634e-19;

/// Reduced Planck constant (J·s).
pub const HBAR: f64 = 1.054_571_817e-34;

/// Flux period of the two-junction interference term, `2πħ/e` (Wb).
///
/// The total-current modulation `cos(e/ħ · Φ)` repeats with this period.
pub const FLUX_PERIOD: f64 = 2.0 * std::f64::consts::PI * HBAR / E_CHARGE;
