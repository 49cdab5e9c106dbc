use crate::element::{Elem, ElemType, Lumped};
use crate::error::CircuitError;
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, UnitValBuilder, Unitized};
use num::complex::{Complex64, c64};

/// Ideal lumped inductor, `Z(ω) = jωL`.
#[derive(Clone, Debug, PartialEq)]
pub struct Inductor {
    id: String,
    ind: UnitVal,
}

impl Inductor {
    pub fn new(id: String, ind: UnitVal) -> Inductor {
        Inductor { id, ind }
    }
}

impl Default for Inductor {
    fn default() -> Self {
        Self {
            id: "L0".to_string(),
            ind: UnitValBuilder::new()
                .val_scaled(20.0, Scale::Nano)
                .unit(Unit::Henry)
                .build(),
        }
    }
}

impl Elem for Inductor {
    fn id(&self) -> &str {
        &self.id
    }

    fn elem(&self) -> ElemType {
        ElemType::Inductor
    }

    fn z(&self, w: f64) -> Result<Complex64, CircuitError> {
        Ok(c64(0.0, w * self.ind.val()))
    }
}

impl Lumped for Inductor {
    fn val(&self) -> f64 {
        self.ind.val()
    }
}

impl Unitized for Inductor {
    fn val_scaled(&self) -> f64 {
        self.ind.val_scaled()
    }

    fn unitval(&self) -> UnitVal {
        self.ind
    }

    fn scale(&self) -> Scale {
        self.ind.scale()
    }

    fn unit(&self) -> Unit {
        self.ind.unit()
    }
}

#[derive(Clone)]
pub struct InductorBuilder {
    id: String,
    ind: UnitVal,
}

impl InductorBuilder {
    pub fn new() -> Self {
        InductorBuilder::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn ind(mut self, ind: UnitVal) -> Self {
        self.ind = ind;
        self
    }

    /// Inductance in henries.
    pub fn val(mut self, ind: f64) -> Self {
        self.ind = UnitValBuilder::new()
            .val(ind)
            .scale(self.ind.scale())
            .unit(Unit::Henry)
            .build();
        self
    }

    pub fn val_scaled(mut self, ind: f64, scale: Scale) -> Self {
        self.ind = UnitValBuilder::new()
            .val_scaled(ind, scale)
            .unit(Unit::Henry)
            .build();
        self
    }

    pub fn build(self) -> Inductor {
        Inductor {
            id: self.id,
            ind: self.ind,
        }
    }
}

impl Default for InductorBuilder {
    fn default() -> Self {
        Self {
            id: "L0".to_string(),
            ind: UnitValBuilder::new().unit(Unit::Henry).build(),
        }
    }
}
