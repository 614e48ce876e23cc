//! # lorenz-dynamics
//!
//! Fixed-Step Integration of the Lorenz System
//!
//! ## Scope
//!
//! This crate numerically integrates one fixed vector field (the Lorenz
//! equations) with one fixed-order method, the classical fourth-order
//! Runge-Kutta scheme, and exposes the resulting orbit for rendering.
//!
//! It is deliberately not a general ODE framework: there is no adaptive
//! step-size control and no alternative integrator. The value of the
//! crate is a precise, validated implementation of exactly one
//! simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  dynamics                                            │
//! │    vector_field()   pure leaf: (state, params) → ds  │
//! │    rk4_step()       four field evaluations per step  │
//! │    simulate()       sequential fold → Trajectory     │
//! ├──────────────────────────────────────────────────────┤
//! │  view                                                │
//! │    TrajectoryView   whole-orbit consumers            │
//! │    Frames           prefix-growing animation replay  │
//! │    CsvExport        streaming column export          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The integration core produces a fully materialized [`Trajectory`];
//! presentation consumes it. Simulation parameters travel as an explicit
//! [`LorenzParams`] value in every call, so the integrator is pure and
//! two views of the same run always see identical data.
//!
//! Inputs are validated up front and divergence is detected after every
//! step ([`LorenzError`]); a returned trajectory never contains
//! non-finite values.
//!
//! ## Example
//!
//! ```
//! use lorenz_dynamics::{simulate, LorenzParams, State};
//!
//! let params = LorenzParams::default();
//! let trajectory = simulate(State::canonical(), 1000, 0.01, &params).unwrap();
//!
//! assert_eq!(trajectory.len(), 1001);
//! assert_eq!(trajectory.initial(), State::canonical());
//! ```
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic Nonperiodic Flow.
//!   J. Atmos. Sci., 20(2), 130-141.
//! - Hairer, Nørsett & Wanner, "Solving Ordinary Differential
//!   Equations I" (1993), classical Runge-Kutta methods.

pub mod dynamics;
pub mod error;
pub mod view;

// Re-exports from dynamics
pub use dynamics::{
    rk4_step,
    simulate,
    vector_field,
    LorenzParams,
    State,
    Trajectory,
};

// Re-exports from error
pub use error::LorenzError;

// Re-exports from view
pub use view::{
    CsvExport,
    Frames,
    TrajectoryView,
};
