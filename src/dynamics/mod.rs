//! Integration Core: Vector Field, RK4 Stepper, Trajectory
//!
//! The core is strictly layered: the vector field is a pure leaf
//! function, the integrator composes four of its evaluations per step
//! and folds steps into a trajectory, and the trajectory is the sole
//! value handed to presentation consumers.

mod integrator;
mod lorenz;
mod state;
mod trajectory;

pub use integrator::{rk4_step, simulate};
pub use lorenz::{vector_field, LorenzParams};
pub use state::State;
pub use trajectory::Trajectory;
