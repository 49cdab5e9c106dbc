use crate::element::{Elem, ElemType, Lumped};
use crate::error::CircuitError;
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, UnitValBuilder, Unitized};
use num::complex::{Complex64, c64};

/// Ideal lumped capacitor, `Z(ω) = 1/(jωC) = -j/(ωC)`.
///
/// Singular at `ω = 0`; evaluating there is an error so the caller can
/// apply its own zero-frequency policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Capacitor {
    id: String,
    cap: UnitVal,
}

impl Capacitor {
    pub fn new(id: String, cap: UnitVal) -> Capacitor {
        Capacitor { id, cap }
    }
}

impl Default for Capacitor {
    fn default() -> Self {
        Self {
            id: "C0".to_string(),
            cap: UnitValBuilder::new()
                .val_scaled(24.925, Scale::Femto)
                .unit(Unit::Farad)
                .build(),
        }
    }
}

impl Elem for Capacitor {
    fn id(&self) -> &str {
        &self.id
    }

    fn elem(&self) -> ElemType {
        ElemType::Capacitor
    }

    fn z(&self, w: f64) -> Result<Complex64, CircuitError> {
        if w == 0.0 {
            return Err(CircuitError::DivisionByZero(format!(
                "capacitor {} reactance diverges at zero frequency",
                self.id
            )));
        }
        Ok(c64(0.0, -1.0 / (w * self.cap.val())))
    }
}

impl Lumped for Capacitor {
    fn val(&self) -> f64 {
        self.cap.val()
    }
}

impl Unitized for Capacitor {
    fn val_scaled(&self) -> f64 {
        self.cap.val_scaled()
    }

    fn unitval(&self) -> UnitVal {
        self.cap
    }

    fn scale(&self) -> Scale {
        self.cap.scale()
    }

    fn unit(&self) -> Unit {
        self.cap.unit()
    }
}

pub struct CapacitorBuilder {
    id: String,
    cap: UnitVal,
}

impl CapacitorBuilder {
    pub fn new() -> Self {
        CapacitorBuilder::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn cap(mut self, cap: UnitVal) -> Self {
        self.cap = cap;
        self
    }

    /// Capacitance in farads.
    pub fn val(mut self, cap: f64) -> Self {
        self.cap = UnitValBuilder::new()
            .val(cap)
            .scale(self.cap.scale())
            .unit(Unit::Farad)
            .build();
        self
    }

    pub fn val_scaled(mut self, cap: f64, scale: Scale) -> Self {
        self.cap = UnitValBuilder::new()
            .val_scaled(cap, scale)
            .unit(Unit::Farad)
            .build();
        self
    }

    pub fn build(self) -> Capacitor {
        Capacitor {
            id: self.id,
            cap: self.cap,
        }
    }
}

impl Default for CapacitorBuilder {
    fn default() -> Self {
        Self {
            id: "C0".to_string(),
            cap: UnitValBuilder::new().unit(Unit::Farad).build(),
        }
    }
}

#[cfg(test)]
mod element_capacitor_tests {
    use super::*;
    use crate::util::comp_c64;
    use float_cmp::F64Margin;
    use std::f64::consts::PI;

    #[test]
    fn element_capacitor() {
        let val_scaled = 1.0;
        let scale = Scale::Pico;
        let exemplar = Capacitor {
            id: "C1".to_string(),
            cap: UnitValBuilder::new()
                .val_scaled(val_scaled, scale)
                .unit(Unit::Farad)
                .build(),
        };
        let calc = CapacitorBuilder::new()
            .val_scaled(val_scaled, scale)
            .id("C1")
            .build();

        assert_eq!(exemplar.id(), calc.id());
        assert_eq!(exemplar.scale(), calc.scale());
        assert_eq!(Unit::Farad, calc.unit());
        assert_eq!(ElemType::Capacitor, calc.elem());

        let w = 2.0 * PI * 1.0e9;
        let exemplar_z = (Complex64::I * w * calc.val()).inv();
        comp_c64(
            &exemplar_z,
            &calc.z(w).unwrap(),
            F64Margin {
                epsilon: 1e-6,
                ulps: 10,
            },
            "calc.z()",
            "0",
        );
    }

    #[test]
    fn reactance_is_negative_below_infinite_frequency() {
        let cap = CapacitorBuilder::new().val_scaled(1.0, Scale::Micro).build();
        let z = cap.z(1.0e3).unwrap();
        assert_eq!(0.0, z.re);
        assert!(z.im < 0.0);
    }

    #[test]
    fn zero_frequency_is_singular() {
        let cap = CapacitorBuilder::new().val_scaled(1.0, Scale::Pico).build();
        match cap.z(0.0) {
            Err(CircuitError::DivisionByZero(_)) => (),
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }
}
