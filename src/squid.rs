use crate::consts;
use crate::error::CircuitError;
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, UnitValBuilder};
use ndarray::Array1;
use std::f64::consts::FRAC_PI_2;

/// Two-junction SQUID with identical junctions and a fixed junction phase.
///
/// The screening current of the loop is neglected, so the total current is
/// the bare interference term
/// `I(Φ) = 2·I_c·sin(φ)·cos(e/ħ · Φ)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Squid {
    id: String,
    critical_current: UnitVal,
    junction_phase: f64,
}

impl Squid {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Junction critical current in amperes.
    pub fn critical_current(&self) -> f64 {
        self.critical_current.val()
    }

    /// Shared junction phase in radians.
    pub fn junction_phase(&self) -> f64 {
        self.junction_phase
    }

    /// Total current (A) through the loop for an applied external flux (Wb).
    pub fn total_current(&self, flux: f64) -> f64 {
        2.0 * self.critical_current.val()
            * self.junction_phase.sin()
            * (consts::E_CHARGE / consts::HBAR * flux).cos()
    }

    /// Total-current samples for a flux axis, index-aligned with it.
    pub fn current_axis(&self, flux: &Array1<f64>) -> Array1<f64> {
        flux.mapv(|phi| self.total_current(phi))
    }

    /// Linearly spaced flux setpoints (Wb), endpoints included.
    pub fn flux_axis(start: f64, stop: f64, npts: usize) -> Result<Array1<f64>, CircuitError> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(CircuitError::InvalidParameter(format!(
                "flux axis bounds must be finite, got [{}, {}]",
                start, stop
            )));
        }
        if npts == 0 {
            return Err(CircuitError::EmptySweep(
                "flux axis needs at least one point".to_string(),
            ));
        }
        if npts == 1 {
            return Ok(Array1::from_elem(1, start));
        }

        let step = (stop - start) / ((npts - 1) as f64);
        Ok(Array1::from_shape_fn(npts, |i| start + (i as f64) * step))
    }
}

impl Default for Squid {
    fn default() -> Self {
        Self {
            id: "SQ0".to_string(),
            critical_current: UnitValBuilder::new().val(1.0).unit(Unit::Ampere).build(),
            junction_phase: FRAC_PI_2,
        }
    }
}

/// Builder design pattern for Squid.
#[derive(Clone)]
pub struct SquidBuilder {
    id: String,
    critical_current: UnitVal,
    junction_phase: f64,
}

impl SquidBuilder {
    pub fn new() -> Self {
        SquidBuilder::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Critical current in amperes.
    pub fn critical_current(mut self, amps: f64) -> Self {
        self.critical_current = UnitValBuilder::new()
            .val(amps)
            .scale(self.critical_current.scale())
            .unit(Unit::Ampere)
            .build();
        self
    }

    pub fn critical_current_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.critical_current = UnitValBuilder::new()
            .val_scaled(val, scale)
            .unit(Unit::Ampere)
            .build();
        self
    }

    /// Junction phase in radians.
    pub fn junction_phase(mut self, rad: f64) -> Self {
        self.junction_phase = rad;
        self
    }

    pub fn build(self) -> Result<Squid, CircuitError> {
        if !self.critical_current.val().is_finite() || self.critical_current.val() <= 0.0 {
            return Err(CircuitError::InvalidParameter(format!(
                "critical current must be > 0 and finite, got {}",
                self.critical_current.val()
            )));
        }
        if !self.junction_phase.is_finite() {
            return Err(CircuitError::InvalidParameter(format!(
                "junction phase must be finite, got {}",
                self.junction_phase
            )));
        }

        Ok(Squid {
            id: self.id,
            critical_current: self.critical_current,
            junction_phase: self.junction_phase,
        })
    }
}

impl Default for SquidBuilder {
    fn default() -> Self {
        Self {
            id: "SQ0".to_string(),
            critical_current: UnitValBuilder::new().val(1.0).unit(Unit::Ampere).build(),
            junction_phase: FRAC_PI_2,
        }
    }
}
