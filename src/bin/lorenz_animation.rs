//! Lorenz Attractor: Frame Replay
//!
//! Integrates the canonical configuration once, then replays the
//! finished trajectory as growing prefixes, the way an animated 3D view
//! consumes it. The progress lines stand in for a rendering backend;
//! each frame corresponds to one redraw of the curve up to its tip.
//!
//! The trajectory is computed eagerly and shared with the frame loop;
//! the animation never re-runs the simulation.

use std::error::Error;

use lorenz_dynamics::{simulate, Frames, LorenzParams, State};

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Lorenz Attractor: Animated Replay");
    println!("═══════════════════════════════════════════════════════════════\n");

    let params = LorenzParams::default();
    let initial = State::canonical();
    let dt = 0.01;
    let num_steps = 10_000;
    let stride = 500;

    println!("System Parameters:");
    println!("  sigma = {:.2}, rho = {:.2}, beta = {:.4}", params.sigma, params.rho, params.beta);
    println!("  initial state = ({:.2}, {:.2}, {:.2})", initial.x, initial.y, initial.z);
    println!("  dt = {}, steps = {}, frame stride = {}", dt, num_steps, stride);

    println!("\nIntegrating...");
    let trajectory = simulate(initial, num_steps, dt, &params)?;

    let frames = Frames::new(&trajectory, stride);
    println!("\nReplaying {} frames:", frames.len());

    for (n, frame) in frames.enumerate() {
        let tip = frame[frame.len() - 1];
        println!(
            "  frame {:3}  points {:5}  tip = ({:8.4}, {:8.4}, {:8.4})",
            n,
            frame.len(),
            tip.x,
            tip.y,
            tip.z
        );
    }

    println!("\nReplay complete.");
    Ok(())
}
