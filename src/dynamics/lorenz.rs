//! Lorenz System: Deterministic Chaos in Three Variables
//!
//! The Lorenz equations model thermal convection in a fluid layer:
//!
//!   dx/dt = σ(y - x)
//!   dy/dt = x(ρ - z) - y
//!   dz/dt = xy - βz
//!
//! where:
//! - σ: Prandtl number
//! - ρ: Rayleigh number (control parameter)
//! - β: geometric aspect factor
//!
//! ## Chaotic Regime
//!
//! For the canonical parameters (σ, ρ, β) = (10, 28, 8/3) the system
//! settles onto a strange attractor. Trajectories stay bounded without
//! ever closing on themselves, and nearby initial conditions separate
//! exponentially.
//!
//! The origin is a fixed point for every parameter choice. For ρ > 1 it
//! is unstable and two further fixed points appear at
//! (±√(β(ρ−1)), ±√(β(ρ−1)), ρ−1), the centers of the attractor's wings.
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic Nonperiodic Flow.
//!   J. Atmos. Sci., 20(2), 130-141.
//! - Strogatz, S. H. (2015). Nonlinear Dynamics and Chaos. Westview Press.

use super::state::State;

/// Parameters of the Lorenz vector field
///
/// Fixed for the lifetime of one simulation run and passed explicitly
/// into every evaluation; there is no shared parameter state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    /// Prandtl number σ
    pub sigma: f64,
    /// Rayleigh number ρ
    pub rho: f64,
    /// Aspect factor β
    pub beta: f64,
}

impl LorenzParams {
    /// Create a parameter set
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }

    /// True when every parameter is a finite number
    pub fn is_finite(&self) -> bool {
        self.sigma.is_finite() && self.rho.is_finite() && self.beta.is_finite()
    }
}

impl Default for LorenzParams {
    /// Canonical chaotic parameters (σ, ρ, β) = (10, 28, 8/3)
    fn default() -> Self {
        Self::new(10.0, 28.0, 8.0 / 3.0)
    }
}

/// Instantaneous derivative of the Lorenz system at `state`
///
/// Pure and deterministic; every real-valued input is a valid domain
/// value.
pub fn vector_field(state: State, params: &LorenzParams) -> State {
    State::new(
        params.sigma * (state.y - state.x),
        state.x * (params.rho - state.z) - state.y,
        state.x * state.y - params.beta * state.z,
    )
}
