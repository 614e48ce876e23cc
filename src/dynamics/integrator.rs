//! Fixed-Step RK4 Integration
//!
//! Classical fourth-order Runge-Kutta over the Lorenz vector field:
//!
//!   k1 = f(s)
//!   k2 = f(s + (dt/2)·k1)
//!   k3 = f(s + (dt/2)·k2)
//!   k4 = f(s + dt·k3)
//!   s' = s + (dt/6)·(k1 + 2k2 + 2k3 + k4)
//!
//! One fixed vector field, one fixed-order method; no adaptive step-size
//! control, no error estimation. A trajectory is the fold of `num_steps`
//! such steps from an initial state, every intermediate state recorded.
//!
//! ## Divergence
//!
//! The attractor is bounded for the canonical parameters, but a large
//! enough dt (or anomalous parameters) blows the iteration up. A step
//! that produces a non-finite component fails immediately with
//! [`LorenzError::NumericOverflow`] instead of letting NaN propagate
//! through the remainder of the trajectory.

use crate::error::LorenzError;

use super::lorenz::{vector_field, LorenzParams};
use super::state::State;
use super::trajectory::Trajectory;

fn check_dt(dt: f64) -> Result<(), LorenzError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(LorenzError::InvalidArgument {
            message: format!("step size must be a finite positive number, got {}", dt),
        });
    }
    Ok(())
}

fn check_initial(state: &State, params: &LorenzParams) -> Result<(), LorenzError> {
    if !params.is_finite() {
        return Err(LorenzError::InvalidArgument {
            message: format!(
                "parameters must be finite, got sigma={}, rho={}, beta={}",
                params.sigma, params.rho, params.beta
            ),
        });
    }
    if !state.is_finite() {
        return Err(LorenzError::InvalidArgument {
            message: format!(
                "initial state must be finite, got ({}, {}, {})",
                state.x, state.y, state.z
            ),
        });
    }
    Ok(())
}

/// Advance `state` by one RK4 step of size `dt`
///
/// Deterministic: identical inputs yield the identical next state on a
/// given platform.
///
/// # Errors
///
/// [`LorenzError::InvalidArgument`] when `dt` is non-positive or
/// non-finite.
pub fn rk4_step(state: State, dt: f64, params: &LorenzParams) -> Result<State, LorenzError> {
    check_dt(dt)?;

    let k1 = vector_field(state, params);
    let k2 = vector_field(state + k1 * (dt / 2.0), params);
    let k3 = vector_field(state + k2 * (dt / 2.0), params);
    let k4 = vector_field(state + k3 * dt, params);

    Ok(state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
}

/// Integrate `num_steps` RK4 steps of size `dt` from `initial`
///
/// Returns the full trajectory of `num_steps + 1` states; element 0 is
/// `initial`, untransformed. Each step is a pure function of the
/// previous state, so the loop is strictly sequential.
///
/// # Errors
///
/// [`LorenzError::InvalidArgument`] when `dt` is non-positive or
/// non-finite, or any initial-state or parameter component is
/// non-finite. [`LorenzError::NumericOverflow`] when integration
/// diverges, carrying the 1-based index of the offending step.
pub fn simulate(
    initial: State,
    num_steps: usize,
    dt: f64,
    params: &LorenzParams,
) -> Result<Trajectory, LorenzError> {
    check_initial(&initial, params)?;
    check_dt(dt)?;

    let mut states = Vec::with_capacity(num_steps + 1);
    states.push(initial);

    let mut state = initial;
    for step in 1..=num_steps {
        state = rk4_step(state, dt, params)?;
        if !state.is_finite() {
            return Err(LorenzError::NumericOverflow { step });
        }
        states.push(state);
    }

    Ok(Trajectory::new(states))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_steps_yields_initial_only() {
        let initial = State::new(0.1, 0.2, 0.3);
        let trajectory = simulate(initial, 0, 0.01, &LorenzParams::default()).unwrap();

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory[0], initial);
    }

    #[test]
    fn test_trajectory_length_is_steps_plus_one() {
        for num_steps in [1, 2, 100, 1000] {
            let trajectory =
                simulate(State::canonical(), num_steps, 0.01, &LorenzParams::default()).unwrap();
            assert_eq!(trajectory.len(), num_steps + 1);
        }
    }

    #[test]
    fn test_initial_state_stored_untransformed() {
        let initial = State::new(0.1, -2.5, 17.3);
        let trajectory = simulate(initial, 10, 0.01, &LorenzParams::default()).unwrap();
        assert_eq!(trajectory.initial(), initial);
    }

    #[test]
    fn test_step_is_deterministic() {
        let params = LorenzParams::default();
        let a = rk4_step(State::canonical(), 0.01, &params).unwrap();
        let b = rk4_step(State::canonical(), 0.01, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulate_is_pure() {
        let params = LorenzParams::default();
        let a = simulate(State::canonical(), 500, 0.01, &params).unwrap();
        let b = simulate(State::canonical(), 500, 0.01, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_origin_is_equilibrium() {
        let origin = State::new(0.0, 0.0, 0.0);
        let params = LorenzParams::default();

        let stepped = rk4_step(origin, 0.5, &params).unwrap();
        assert_eq!(stepped, origin);

        let trajectory = simulate(origin, 100, 0.5, &params).unwrap();
        assert!(trajectory.states().iter().all(|s| *s == origin));
    }

    #[test]
    fn test_rejects_bad_dt() {
        let params = LorenzParams::default();

        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let step = rk4_step(State::canonical(), dt, &params);
            assert!(
                matches!(step, Err(LorenzError::InvalidArgument { .. })),
                "dt = {} should be rejected by rk4_step",
                dt
            );

            let run = simulate(State::canonical(), 10, dt, &params);
            assert!(
                matches!(run, Err(LorenzError::InvalidArgument { .. })),
                "dt = {} should be rejected by simulate",
                dt
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_initial_state() {
        let result = simulate(
            State::new(f64::NAN, 1.0, 1.05),
            10,
            0.01,
            &LorenzParams::default(),
        );
        assert!(matches!(result, Err(LorenzError::InvalidArgument { .. })));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let params = LorenzParams::new(10.0, f64::INFINITY, 8.0 / 3.0);
        let result = simulate(State::canonical(), 10, 0.01, &params);
        assert!(matches!(result, Err(LorenzError::InvalidArgument { .. })));
    }

    #[test]
    fn test_divergence_is_detected() {
        // dt far beyond the stability region blows the iteration up
        // within a handful of steps.
        let result = simulate(State::canonical(), 1000, 100.0, &LorenzParams::default());

        match result {
            Err(LorenzError::NumericOverflow { step }) => {
                assert!(step >= 1 && step <= 1000, "implausible step {}", step);
            }
            other => panic!("expected NumericOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_run_stays_bounded() {
        let trajectory =
            simulate(State::canonical(), 10_000, 0.01, &LorenzParams::default()).unwrap();

        for state in &trajectory {
            assert!(state.is_finite());
            assert!(
                state.x.abs() < 100.0 && state.y.abs() < 100.0 && state.z.abs() < 100.0,
                "attractor should stay bounded, got {:?}",
                state
            );
        }
    }
}
