use num::complex::c64;
use resokit::prelude::*;

fn main() -> Result<(), CircuitError> {
    let tank = ResonatorBuilder::new()
        .id("TANK")
        .topology(Topology::Series)
        .inductance_scaled(20.0, Scale::Nano)
        .capacitance_scaled(24.925, Scale::Femto)
        .z0(c64(50.0, 0.0))
        .sweep_bounds_scaled(4.0, 15.0, Scale::Giga)
        .step(1.0e6)
        .build()?;

    println!(
        "{} resonates at {:.4} GHz",
        tank.id(),
        Scale::Giga.scale(tank.res_freq())
    );
    if let Some(warn) = tank.resonance_warning() {
        println!("  note: {}", warn);
    }

    let sweep = tank.sweep()?;
    let z = tank.impedance(&sweep)?;
    let gamma = tank.s11(&z);

    let coarse = steepest_point(&sweep, &gamma)?;
    println!(
        "coarse steepest point: {:.4} GHz (|dS11/df| = {:.3e} /Hz)",
        Scale::Giga.scale(coarse.frequency),
        coarse.derivative
    );

    let refined = find_steepest(&tank)?;
    println!(
        "refined steepest point: {:.6} GHz (|dS11/df| = {:.3e} /Hz)",
        Scale::Giga.scale(refined.frequency),
        refined.derivative
    );

    let ideal = find_ideal_capacitance(&tank, 20.0e-15, 30.0e-15, 1.0e-16)?;
    println!(
        "steepest capacitance in [20 fF, 30 fF]: {:.4} fF after {} halvings (converged: {})",
        Scale::Femto.scale(ideal.capacitance),
        ideal.iters,
        ideal.converged
    );

    let squid = SquidBuilder::new()
        .id("SID")
        .critical_current_scaled(40.0, Scale::Milli)
        .build()?;
    let flux = Squid::flux_axis(0.0, resokit::consts::FLUX_PERIOD, 9)?;
    println!("{} modulation over one flux period:", squid.id());
    for (phi, i) in flux.iter().zip(squid.current_axis(&flux).iter()) {
        println!("  {:+.3e} Wb -> {:+.3e} A", phi, i);
    }

    Ok(())
}
