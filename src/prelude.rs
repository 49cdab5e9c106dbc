//! resokit prelude.
//!
//! This module contains the most used types, traits, and functions that you
//! can import easily as a group.
//!
//! ```
//! use resokit::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::circuit::{Resonator, ResonatorBuilder, Topology, ZeroFreqPolicy};

#[doc(no_inline)]
pub use crate::element::capacitor::{Capacitor, CapacitorBuilder};
#[doc(no_inline)]
pub use crate::element::inductor::{Inductor, InductorBuilder};
#[doc(no_inline)]
pub use crate::element::{Elem, ElemType, Lumped};

#[doc(no_inline)]
pub use crate::error::{CircuitError, OutOfBoundsWarning};

#[doc(no_inline)]
pub use crate::frequency::Frequency;

#[doc(no_inline)]
pub use crate::scale::Scale;

#[doc(no_inline)]
pub use crate::sensitivity::{
    CapacitanceResult, SteepnessResult, find_ideal_capacitance, find_steepest,
    find_steepest_with, slopes, steepest_point,
};

#[doc(no_inline)]
pub use crate::squid::{Squid, SquidBuilder};

#[doc(no_inline)]
pub use crate::unit::{Unit, UnitVal, UnitValBuilder, Unitized};
