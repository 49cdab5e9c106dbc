use crate::element::capacitor::{Capacitor, CapacitorBuilder};
use crate::element::inductor::{Inductor, InductorBuilder};
use crate::element::{Elem, Lumped};
use crate::error::{CircuitError, OutOfBoundsWarning};
use crate::frequency::Frequency;
use crate::scale::Scale;
use ndarray::Array1;
use num::complex::{Complex64, c64};
use serde::Serialize;
use std::f64::consts::PI;

/// Arrangement of the inductor and capacitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Topology {
    #[default]
    Series,
    Parallel,
}

/// What to do when a sweep point lands on ω = 0, where the capacitive
/// reactance diverges.
///
/// `Error` propagates `DivisionByZero` to the caller. `Epsilon` substitutes
/// the given angular frequency (rad/s) and logs the substitution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum ZeroFreqPolicy {
    #[default]
    Error,
    Epsilon(f64),
}

/// Angular frequency substituted by `ZeroFreqPolicy::Epsilon` by default.
pub const DEFAULT_ZERO_FREQ_EPSILON: f64 = 1e-12;

/// An LC resonator measured against a reference port impedance over a
/// configured frequency window.
///
/// The resonator is immutable once built; sweeps and curves are derived on
/// demand and owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Resonator {
    id: String,
    topology: Topology,
    ind: Inductor,
    cap: Capacitor,
    z0: Complex64,
    f_lower: f64,
    f_upper: f64,
    step: f64,
    zero_freq: ZeroFreqPolicy,
}

impl Resonator {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Inductance in henries.
    pub fn inductance(&self) -> f64 {
        self.ind.val()
    }

    /// Capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.cap.val()
    }

    pub fn z0(&self) -> Complex64 {
        self.z0
    }

    /// Sweep window `[lower, upper)` in Hz.
    pub fn bounds(&self) -> (f64, f64) {
        (self.f_lower, self.f_upper)
    }

    /// Sweep stride in Hz.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn zero_freq_policy(&self) -> ZeroFreqPolicy {
        self.zero_freq
    }

    /// Resonant frequency `1/(2π√(LC))` in Hz.
    pub fn res_freq(&self) -> f64 {
        1.0 / (2.0 * PI * (self.ind.val() * self.cap.val()).sqrt())
    }

    /// Reports the resonant frequency falling outside the sweep window.
    /// Informational only; all computations remain valid.
    pub fn resonance_warning(&self) -> Option<OutOfBoundsWarning> {
        let fr = self.res_freq();
        if fr < self.f_lower || fr >= self.f_upper {
            Some(OutOfBoundsWarning {
                res_freq: fr,
                f_lower: self.f_lower,
                f_upper: self.f_upper,
            })
        } else {
            None
        }
    }

    /// Frequency sweep over the configured window. Derived, deterministic;
    /// the same resonator always yields an identical sweep.
    pub fn sweep(&self) -> Result<Frequency, CircuitError> {
        Frequency::lin_range(self.f_lower, self.f_upper, self.step)
    }

    fn effective_omega(&self, w: f64) -> Result<f64, CircuitError> {
        if w != 0.0 {
            return Ok(w);
        }
        match self.zero_freq {
            ZeroFreqPolicy::Error => Err(CircuitError::DivisionByZero(format!(
                "sweep of {} crosses zero frequency; reactance diverges",
                self.id
            ))),
            ZeroFreqPolicy::Epsilon(eps) => {
                log::info!(
                    "{}: zero frequency is singular, substituting {:e} rad/s",
                    self.id,
                    eps
                );
                Ok(eps)
            }
        }
    }

    /// Impedance at angular frequency `w` (rad/s).
    ///
    /// Series: `Z = j(ωL - 1/(ωC))`. Parallel: `Z = -j(L/C)/(ωL - 1/(ωC))`;
    /// at the parallel pole (`ωL = 1/(ωC)`) the sample is an infinite
    /// reactance, not an error.
    pub fn impedance_at(&self, w: f64) -> Result<Complex64, CircuitError> {
        let w = self.effective_omega(w)?;
        let zl = self.ind.z(w)?;
        let zc = self.cap.z(w)?;

        match self.topology {
            Topology::Series => Ok(zl + zc),
            Topology::Parallel => {
                let x = zl.im + zc.im;
                Ok(c64(0.0, -(self.ind.val() / self.cap.val()) / x))
            }
        }
    }

    /// Impedance curve over a sweep; output index-aligned with the sweep.
    pub fn impedance(&self, freq: &Frequency) -> Result<Array1<Complex64>, CircuitError> {
        let mut out = Array1::from_elem(freq.npts(), Complex64::ZERO);
        for (i, &f) in freq.freq().iter().enumerate() {
            out[i] = self.impedance_at(2.0 * PI * f)?;
        }
        Ok(out)
    }

    /// Bare LC impedance combined in parallel with an external "black box"
    /// impedance, `Z_tot = Z·Z_ext / (Z + Z_ext)`.
    pub fn loaded_impedance(
        &self,
        freq: &Frequency,
        z_ext: Complex64,
    ) -> Result<Array1<Complex64>, CircuitError> {
        if !z_ext.is_finite() || z_ext == Complex64::ZERO {
            return Err(CircuitError::InvalidParameter(format!(
                "external impedance must be finite and nonzero, got {}",
                z_ext
            )));
        }
        let bare = self.impedance(freq)?;
        Ok(bare.mapv(|z| {
            if z.is_finite() {
                (z * z_ext) / (z + z_ext)
            } else {
                // An infinite branch in parallel leaves the load alone.
                z_ext
            }
        }))
    }

    /// Reflection coefficient of a single impedance sample against the port,
    /// `Γ = (Z - Z0)/(Z + Z0)`. An infinite sample reflects fully.
    pub fn s11_at(&self, z: Complex64) -> Complex64 {
        if !z.is_finite() {
            return c64(1.0, 0.0);
        }
        (z - self.z0) / (z + self.z0)
    }

    /// Reflection-coefficient curve, index-aligned with the impedance curve.
    pub fn s11(&self, impedance: &Array1<Complex64>) -> Array1<Complex64> {
        impedance.mapv(|z| self.s11_at(z))
    }

    /// A copy of this resonator with a different capacitance. Used by the
    /// capacitance search; does not re-log bound warnings.
    pub fn with_capacitance(&self, cap_farads: f64) -> Result<Resonator, CircuitError> {
        validate_positive("capacitance", cap_farads)?;
        let mut out = self.clone();
        out.cap = CapacitorBuilder::new().id(self.cap.id()).val(cap_farads).build();
        Ok(out)
    }
}

fn validate_positive(name: &str, val: f64) -> Result<(), CircuitError> {
    if !val.is_finite() || val <= 0.0 {
        return Err(CircuitError::InvalidParameter(format!(
            "{} must be > 0 and finite, got {}",
            name, val
        )));
    }
    Ok(())
}

/// Builder design pattern for Resonator. Defaults mirror the bench setup
/// this model was written for: 20 nH / 24.925 fF series tank against 50 Ω,
/// swept over [4 GHz, 15 GHz) at 1 MHz.
#[derive(Clone)]
pub struct ResonatorBuilder {
    id: String,
    topology: Topology,
    ind: Inductor,
    cap: Capacitor,
    z0: Complex64,
    f_lower: f64,
    f_upper: f64,
    step: f64,
    zero_freq: ZeroFreqPolicy,
}

impl ResonatorBuilder {
    pub fn new() -> Self {
        ResonatorBuilder::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn inductor(mut self, ind: Inductor) -> Self {
        self.ind = ind;
        self
    }

    pub fn capacitor(mut self, cap: Capacitor) -> Self {
        self.cap = cap;
        self
    }

    /// Inductance in henries.
    pub fn inductance(mut self, henries: f64) -> Self {
        self.ind = InductorBuilder::new().id(self.ind.id()).val(henries).build();
        self
    }

    pub fn inductance_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.ind = InductorBuilder::new()
            .id(self.ind.id())
            .val_scaled(val, scale)
            .build();
        self
    }

    /// Capacitance in farads.
    pub fn capacitance(mut self, farads: f64) -> Self {
        self.cap = CapacitorBuilder::new().id(self.cap.id()).val(farads).build();
        self
    }

    pub fn capacitance_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.cap = CapacitorBuilder::new()
            .id(self.cap.id())
            .val_scaled(val, scale)
            .build();
        self
    }

    pub fn z0(mut self, z0: Complex64) -> Self {
        self.z0 = z0;
        self
    }

    /// Sweep window `[lower, upper)` in Hz.
    pub fn sweep_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.f_lower = lower;
        self.f_upper = upper;
        self
    }

    pub fn sweep_bounds_scaled(mut self, lower: f64, upper: f64, scale: Scale) -> Self {
        self.f_lower = scale.unscale(lower);
        self.f_upper = scale.unscale(upper);
        self
    }

    /// Sweep stride in Hz.
    pub fn step(mut self, hz: f64) -> Self {
        self.step = hz;
        self
    }

    pub fn zero_freq(mut self, policy: ZeroFreqPolicy) -> Self {
        self.zero_freq = policy;
        self
    }

    /// Validates the configuration. On success the resonant frequency is
    /// checked against the sweep window; a miss is logged as a warning and
    /// retained on the resonator, never an error.
    pub fn build(self) -> Result<Resonator, CircuitError> {
        validate_positive("inductance", self.ind.val())?;
        validate_positive("capacitance", self.cap.val())?;
        validate_positive("step", self.step)?;
        if !self.f_lower.is_finite() || !self.f_upper.is_finite() {
            return Err(CircuitError::InvalidParameter(format!(
                "sweep bounds must be finite, got [{}, {})",
                self.f_lower, self.f_upper
            )));
        }
        if self.f_lower >= self.f_upper {
            return Err(CircuitError::InvalidParameter(format!(
                "sweep lower bound {} must be below upper bound {}",
                self.f_lower, self.f_upper
            )));
        }
        if !self.z0.is_finite() || self.z0 == Complex64::ZERO {
            return Err(CircuitError::InvalidParameter(format!(
                "port impedance must be finite and nonzero, got {}",
                self.z0
            )));
        }
        if let ZeroFreqPolicy::Epsilon(eps) = self.zero_freq {
            validate_positive("zero-frequency epsilon", eps)?;
        }

        let res = Resonator {
            id: self.id,
            topology: self.topology,
            ind: self.ind,
            cap: self.cap,
            z0: self.z0,
            f_lower: self.f_lower,
            f_upper: self.f_upper,
            step: self.step,
            zero_freq: self.zero_freq,
        };

        if let Some(warn) = res.resonance_warning() {
            log::warn!("{}: {}", res.id, warn);
        }

        Ok(res)
    }
}

impl Default for ResonatorBuilder {
    fn default() -> Self {
        Self {
            id: "RES0".to_string(),
            topology: Topology::Series,
            ind: InductorBuilder::new().val_scaled(20.0, Scale::Nano).build(),
            cap: CapacitorBuilder::new()
                .val_scaled(24.925, Scale::Femto)
                .build(),
            z0: c64(50.0, 0.0),
            f_lower: 4.0e9,
            f_upper: 15.0e9,
            step: 1.0e6,
            zero_freq: ZeroFreqPolicy::Error,
        }
    }
}

#[cfg(test)]
mod circuit_tests {
    use super::*;
    use crate::util::{comp_c64, comp_f64};
    use float_cmp::F64Margin;

    fn bench_resonator() -> Resonator {
        ResonatorBuilder::new()
            .id("RES1")
            .topology(Topology::Series)
            .inductance(20.0e-9)
            .capacitance(24.925e-15)
            .z0(c64(50.0, 0.0))
            .sweep_bounds(4.0e9, 15.0e9)
            .step(1.0e6)
            .build()
            .unwrap()
    }

    #[test]
    fn resonant_frequency_matches_lc() {
        let res = bench_resonator();

        // 1/(2π√(20n·24.925f)) ≈ 7.1283 GHz, inside [4, 15) GHz.
        comp_f64(
            &7.1283e9,
            &res.res_freq(),
            F64Margin {
                epsilon: 1.0e6,
                ulps: 4,
            },
            "res_freq",
            "0",
        );
        assert!(res.resonance_warning().is_none());
    }

    #[test]
    fn resonance_outside_window_warns_but_builds() {
        let res = ResonatorBuilder::new()
            .sweep_bounds(8.0e9, 15.0e9)
            .build()
            .unwrap();

        let warn = res.resonance_warning().unwrap();
        assert!(warn.res_freq < warn.f_lower);
        comp_f64(
            &8.0e9,
            &warn.f_lower,
            F64Margin::default(),
            "warn.f_lower",
            "0",
        );
    }

    #[test]
    fn negative_inductance_is_rejected() {
        match ResonatorBuilder::new().inductance(-1.0e-9).build() {
            Err(CircuitError::InvalidParameter(msg)) => assert!(msg.contains("inductance")),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        match ResonatorBuilder::new().sweep_bounds(8.0e9, 4.0e9).build() {
            Err(CircuitError::InvalidParameter(msg)) => assert!(msg.contains("bound")),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn zero_step_is_rejected() {
        match ResonatorBuilder::new().step(0.0).build() {
            Err(CircuitError::InvalidParameter(msg)) => assert!(msg.contains("step")),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn series_reactance_cancels_at_resonance() {
        let res = bench_resonator();
        let w_r = 2.0 * PI * res.res_freq();

        let z = res.impedance_at(w_r).unwrap();
        assert_eq!(0.0, z.re);
        assert!(z.im.abs() < 1.0e-6);
    }

    #[test]
    fn series_impedance_preserves_reactance_sign() {
        let res = bench_resonator();
        let w_r = 2.0 * PI * res.res_freq();

        // Capacitive below resonance, inductive above.
        assert!(res.impedance_at(0.5 * w_r).unwrap().im < 0.0);
        assert!(res.impedance_at(2.0 * w_r).unwrap().im > 0.0);
    }

    #[test]
    fn parallel_impedance_matches_product_over_sum() {
        let res = ResonatorBuilder::new()
            .topology(Topology::Parallel)
            .inductance(20.0e-9)
            .capacitance(24.925e-15)
            .build()
            .unwrap();
        let w = 2.0 * PI * 5.0e9;

        let zl = c64(0.0, w * res.inductance());
        let zc = c64(0.0, -1.0 / (w * res.capacitance()));
        let exemplar = (zl * zc) / (zl + zc);

        comp_c64(
            &exemplar,
            &res.impedance_at(w).unwrap(),
            F64Margin {
                epsilon: 1.0e-6,
                ulps: 10,
            },
            "parallel z",
            "0",
        );
    }

    #[test]
    fn parallel_pole_reflects_fully() {
        let res = ResonatorBuilder::new()
            .topology(Topology::Parallel)
            .build()
            .unwrap();
        let w_r = 2.0 * PI * res.res_freq();

        // At the pole the ideal parallel tank is an open; S11 pins to +1.
        let z = res.impedance_at(w_r).unwrap();
        if !z.is_finite() {
            assert_eq!(c64(1.0, 0.0), res.s11_at(z));
        } else {
            // Rounding may keep the sample finite but enormous.
            assert!(z.norm() > 1.0e6);
        }
    }

    #[test]
    fn curves_align_with_sweep() {
        let res = bench_resonator();
        let sweep = res.sweep().unwrap();
        let z = res.impedance(&sweep).unwrap();
        let gamma = res.s11(&z);

        assert_eq!(sweep.npts(), z.len());
        assert_eq!(sweep.npts(), gamma.len());
    }

    #[test]
    fn sweep_is_idempotent() {
        let res = bench_resonator();
        assert_eq!(res.sweep().unwrap(), res.sweep().unwrap());
    }

    #[test]
    fn reflection_is_passive_for_reactive_loads() {
        let res = bench_resonator();
        let sweep = res.sweep().unwrap();
        let gamma = res.s11(&res.impedance(&sweep).unwrap());

        // Re(Z) = 0 and real Z0 keep |Γ| on the unit circle.
        for g in gamma.iter() {
            assert!(g.norm() <= 1.0 + 1.0e-12);
        }
    }

    #[test]
    fn reflection_bound_holds_across_parameter_grid() {
        // Passive-network bound: Re(Z) >= 0 and real positive Z0 keep
        // |Γ| <= 1 for any L/C/port combination.
        for &l in &[1.0e-9, 20.0e-9, 100.0e-9] {
            for &c in &[1.0e-15, 24.925e-15, 2.61e-12] {
                for &z0 in &[25.0, 50.0, 100.0] {
                    for &topology in &[Topology::Series, Topology::Parallel] {
                        let res = ResonatorBuilder::new()
                            .topology(topology)
                            .inductance(l)
                            .capacitance(c)
                            .z0(c64(z0, 0.0))
                            .sweep_bounds(1.0e9, 20.0e9)
                            .step(1.0e8)
                            .build()
                            .unwrap();
                        let sweep = res.sweep().unwrap();
                        let gamma = res.s11(&res.impedance(&sweep).unwrap());

                        for g in gamma.iter() {
                            assert!(
                                g.norm() <= 1.0 + 1.0e-12,
                                "|gamma| > 1 for L={} C={} z0={}",
                                l,
                                c,
                                z0
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn reflection_of_matched_load_vanishes() {
        let res = bench_resonator();
        let gamma = res.s11_at(c64(50.0, 0.0));
        comp_c64(
            &Complex64::ZERO,
            &gamma,
            F64Margin::default(),
            "matched gamma",
            "0",
        );
    }

    #[test]
    fn zero_frequency_errors_by_default() {
        let res = ResonatorBuilder::new()
            .sweep_bounds(0.0, 10.0)
            .step(1.0)
            .build()
            .unwrap();
        let sweep = res.sweep().unwrap();

        match res.impedance(&sweep) {
            Err(CircuitError::DivisionByZero(_)) => (),
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn zero_frequency_epsilon_policy_substitutes() {
        let res = ResonatorBuilder::new()
            .sweep_bounds(0.0, 10.0)
            .step(1.0)
            .zero_freq(ZeroFreqPolicy::Epsilon(DEFAULT_ZERO_FREQ_EPSILON))
            .build()
            .unwrap();
        let sweep = res.sweep().unwrap();

        let z = res.impedance(&sweep).unwrap();
        assert_eq!(sweep.npts(), z.len());
        // The substituted point is deep in the capacitive branch.
        assert!(z[0].im < 0.0);
    }

    #[test]
    fn loaded_impedance_halves_equal_loads() {
        let res = ResonatorBuilder::new()
            .topology(Topology::Parallel)
            .build()
            .unwrap();
        let sweep = Frequency::from_vec(vec![5.0e9], Scale::Base);

        let bare = res.impedance(&sweep).unwrap()[0];
        let loaded = res.loaded_impedance(&sweep, bare).unwrap()[0];

        comp_c64(
            &(bare / 2.0),
            &loaded,
            F64Margin {
                epsilon: 1.0e-9,
                ulps: 10,
            },
            "loaded z",
            "0",
        );
    }

    #[test]
    fn with_capacitance_rebuilds_only_the_capacitor() {
        let res = bench_resonator();
        let probe = res.with_capacitance(30.0e-15).unwrap();

        assert_eq!(res.inductance(), probe.inductance());
        assert_eq!(30.0e-15, probe.capacitance());
        assert!(probe.res_freq() < res.res_freq());

        match res.with_capacitance(-1.0e-15) {
            Err(CircuitError::InvalidParameter(_)) => (),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}
