use crate::scale::Scale;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Descriptor of unit
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Unit {
    #[default]
    None, // No Unit
    Hz,     // Frequency in Hz
    Radian, // Angle in radians
    Farad,  // Capacitance in farads
    Henry,  // Inductance in henries
    Ohm,    // Resistance in ohms
    Ampere, // Current in amperes
    Weber,  // Magnetic flux in webers
}

impl Unit {
    pub fn to_long_string(&self) -> String {
        match self {
            Unit::None => "".to_string(),
            Unit::Hz => "hertz".to_string(),
            Unit::Radian => "radian".to_string(),
            Unit::Farad => "farad".to_string(),
            Unit::Henry => "henry".to_string(),
            Unit::Ohm => "ohm".to_string(),
            Unit::Ampere => "ampere".to_string(),
            Unit::Weber => "weber".to_string(),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Hz => "Hz",
            Unit::Radian => "rad",
            Unit::Farad => "F",
            Unit::Henry => "H",
            Unit::Ohm => "Ω",
            Unit::Ampere => "A",
            Unit::Weber => "Wb",
        }
    }
}

impl FromStr for Unit {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HZ" | "Hz" | "hz" => Ok(Unit::Hz),
            "Radian" | "radian" | "rad" => Ok(Unit::Radian),
            "Farad" | "farad" | "F" => Ok(Unit::Farad),
            "Henry" | "henry" | "H" => Ok(Unit::Henry),
            "Ohm" | "ohm" | "Ω" => Ok(Unit::Ohm),
            "Ampere" | "ampere" | "amp" | "A" => Ok(Unit::Ampere),
            "Weber" | "weber" | "Wb" => Ok(Unit::Weber),
            _ => Ok(Unit::None),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Read access to a scaled unit value carried by a component.
pub trait Unitized {
    fn val_scaled(&self) -> f64;
    fn unitval(&self) -> UnitVal;
    fn scale(&self) -> Scale;
    fn unit(&self) -> Unit;
}

/// Encapsulation of a value with scale. Value is stored unscaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UnitVal {
    val: f64,
    scale: Scale,
    unit: Unit,
}

impl UnitVal {
    pub fn new(val: f64, scale: Scale, unit: Unit) -> Self {
        UnitVal { val, scale, unit }
    }

    pub fn new_scaled(val: f64, scale: Scale, unit: Unit) -> Self {
        UnitVal {
            val: scale.unscale(val),
            scale,
            unit,
        }
    }

    /// Retrieve value unscaled
    pub fn val(&self) -> f64 {
        self.val
    }

    /// Retrieve value in scaled scale
    pub fn val_scaled(&self) -> f64 {
        self.scale.scale(self.val)
    }

    /// Retrieve scale
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Retrieve unit
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl Default for UnitVal {
    fn default() -> Self {
        UnitVal {
            val: 0.0,
            scale: Scale::Base,
            unit: Unit::None,
        }
    }
}

impl fmt::Display for UnitVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.val_scaled(), self.scale, self.unit)
    }
}

/// Builder design pattern for UnitVal.
///
/// ## Example
/// ```
/// use resokit::unit::{Unit, UnitValBuilder};
/// use resokit::scale::Scale;
///
/// let cap = UnitValBuilder::new()
///     .val_scaled(24.925, Scale::Femto)
///     .unit(Unit::Farad)
///     .build();
/// assert_eq!(cap.unit(), Unit::Farad);
/// assert_eq!(cap.scale(), Scale::Femto);
/// ```
#[derive(Default)]
pub struct UnitValBuilder {
    val: f64,
    scale: Scale,
    unit: Unit,
}

impl UnitValBuilder {
    pub fn new() -> Self {
        UnitValBuilder::default()
    }

    /// Set value unscaled
    pub fn val(mut self, val: f64) -> Self {
        self.val = val;
        self
    }

    /// Set value in the given scale
    pub fn val_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.scale = scale;
        self.val = scale.unscale(val);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn build(self) -> UnitVal {
        UnitVal {
            val: self.val,
            scale: self.scale,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    #[test]
    fn test_parse_unit() {
        assert_eq!(Unit::Hz, Unit::from_str("Hz").unwrap());
        assert_eq!(Unit::Farad, Unit::from_str("F").unwrap());
        assert_eq!(Unit::Henry, Unit::from_str("henry").unwrap());
        assert_eq!(Unit::Ohm, Unit::from_str("Ω").unwrap());
        assert_eq!(Unit::Ampere, Unit::from_str("A").unwrap());
        assert_eq!(Unit::Weber, Unit::from_str("Wb").unwrap());
        assert_eq!(Unit::None, Unit::from_str("parsec").unwrap());
    }

    #[test]
    fn unitval_stores_unscaled() {
        let ind = UnitValBuilder::new()
            .val_scaled(20.0, Scale::Nano)
            .unit(Unit::Henry)
            .build();

        comp_f64(
            &20.0e-9,
            &ind.val(),
            F64Margin::default(),
            "unitval.val()",
            "0",
        );
        comp_f64(
            &20.0,
            &ind.val_scaled(),
            F64Margin::default(),
            "unitval.val_scaled()",
            "0",
        );
        assert_eq!(Scale::Nano, ind.scale());
        assert_eq!(Unit::Henry, ind.unit());
    }

    #[test]
    fn unitval_new_scaled_matches_builder() {
        let exemplar = UnitVal::new_scaled(50.0, Scale::Base, Unit::Ohm);
        let calc = UnitValBuilder::new()
            .val_scaled(50.0, Scale::Base)
            .unit(Unit::Ohm)
            .build();
        assert_eq!(exemplar, calc);
    }

    #[test]
    fn unitval_display() {
        let z0 = UnitVal::new_scaled(50.0, Scale::Base, Unit::Ohm);
        assert_eq!("50Ω", format!("{}", z0));
    }
}
