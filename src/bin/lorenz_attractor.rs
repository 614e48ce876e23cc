//! Lorenz Attractor: Static Trajectory Export
//!
//! Integrates the canonical Lorenz configuration once, reports the
//! geometry of the resulting attractor, and writes the curve as CSV
//! columns for external 3D plotting.
//!
//! A second, minutely perturbed run demonstrates sensitive dependence on
//! initial conditions: two orbits starting 1e-8 apart end up macroscopic
//! distances away from each other.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use lorenz_dynamics::{
    simulate, CsvExport, LorenzParams, State, Trajectory, TrajectoryView,
};

const OUTPUT_PATH: &str = "lorenz_trajectory.csv";

/// Per-axis (min, max) extents of the recorded orbit
fn axis_extents(trajectory: &Trajectory) -> [(f64, f64); 3] {
    let mut extents = [(f64::INFINITY, f64::NEG_INFINITY); 3];
    for state in trajectory {
        for (extent, value) in extents.iter_mut().zip([state.x, state.y, state.z]) {
            extent.0 = extent.0.min(value);
            extent.1 = extent.1.max(value);
        }
    }
    extents
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Lorenz Attractor: RK4 Trajectory");
    println!("═══════════════════════════════════════════════════════════════\n");

    let params = LorenzParams::default();
    let initial = State::canonical();
    let dt = 0.01;
    let num_steps = 10_000;

    println!("System Parameters:");
    println!("  sigma = {:.2}", params.sigma);
    println!("  rho   = {:.2}", params.rho);
    println!("  beta  = {:.4}", params.beta);
    println!("  initial state = ({:.2}, {:.2}, {:.2})", initial.x, initial.y, initial.z);
    println!("  dt = {}, steps = {}", dt, num_steps);

    println!("\nIntegrating...");
    let trajectory = simulate(initial, num_steps, dt, &params)?;

    let [x_ext, y_ext, z_ext] = axis_extents(&trajectory);
    let last = trajectory.last();

    println!("\nAttractor Geometry ({} points):", trajectory.len());
    println!("  x ∈ [{:8.3}, {:8.3}]", x_ext.0, x_ext.1);
    println!("  y ∈ [{:8.3}, {:8.3}]", y_ext.0, y_ext.1);
    println!("  z ∈ [{:8.3}, {:8.3}]", z_ext.0, z_ext.1);
    println!("  final state = ({:.4}, {:.4}, {:.4})", last.x, last.y, last.z);

    // Sensitivity check: a 1e-8 jitter on the initial condition.
    println!("\nSensitivity to Initial Conditions:");
    let twin = simulate(initial.perturbed(1e-8), num_steps, dt, &params)?;
    for step in [0, 2_500, 5_000, 7_500, num_steps] {
        let separation = trajectory[step].distance(&twin[step]);
        println!("  step {:5}  separation = {:.3e}", step, separation);
    }

    let file = BufWriter::new(File::create(OUTPUT_PATH)?);
    CsvExport::new(file).show(&trajectory)?;
    println!("\nTrajectory written to {}", OUTPUT_PATH);

    Ok(())
}
