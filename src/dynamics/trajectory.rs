//! Trajectory: The Recorded Orbit
//!
//! `simulate` returns the full orbit as an owned, read-only sequence of
//! states. Rendering consumers read it column-wise (x, y, z arrays for a
//! static curve) or as growing prefixes (for animation); both access
//! patterns live here.

use std::ops::Index;

use ndarray::{Array1, Array2};

use super::state::State;

/// Ordered sequence of states produced by repeated integration steps
///
/// Element 0 is the initial state; element i is the state after i steps.
/// Fully populated before being returned and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    // Construction is reserved for the integrator; a trajectory always
    // holds at least the initial state.
    pub(crate) fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// Number of recorded states (num_steps + 1)
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no states are recorded
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All recorded states in step order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The caller-supplied initial state
    pub fn initial(&self) -> State {
        self.states[0]
    }

    /// The state after the final step
    pub fn last(&self) -> State {
        self.states[self.states.len() - 1]
    }

    /// The first `k` states (clamped to the full length)
    pub fn prefix(&self, k: usize) -> &[State] {
        &self.states[..k.min(self.states.len())]
    }

    /// x components in step order
    pub fn xs(&self) -> Array1<f64> {
        Array1::from_iter(self.states.iter().map(|s| s.x))
    }

    /// y components in step order
    pub fn ys(&self) -> Array1<f64> {
        Array1::from_iter(self.states.iter().map(|s| s.y))
    }

    /// z components in step order
    pub fn zs(&self) -> Array1<f64> {
        Array1::from_iter(self.states.iter().map(|s| s.z))
    }

    /// All states as a (len, 3) array, one row per state
    pub fn points(&self) -> Array2<f64> {
        let mut points = Array2::zeros((self.states.len(), 3));
        for (i, state) in self.states.iter().enumerate() {
            points[[i, 0]] = state.x;
            points[[i, 1]] = state.y;
            points[[i, 2]] = state.z;
        }
        points
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::{simulate, LorenzParams};

    fn short_run() -> Trajectory {
        simulate(State::canonical(), 9, 0.01, &LorenzParams::default()).unwrap()
    }

    #[test]
    fn test_accessors_agree_with_states() {
        let trajectory = short_run();

        assert_eq!(trajectory.len(), 10);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.initial(), trajectory[0]);
        assert_eq!(trajectory.last(), trajectory[9]);
        assert_eq!(trajectory.states().len(), trajectory.len());
    }

    #[test]
    fn test_columns_match_components() {
        let trajectory = short_run();
        let (xs, ys, zs) = (trajectory.xs(), trajectory.ys(), trajectory.zs());

        assert_eq!(xs.len(), trajectory.len());
        for (i, state) in trajectory.states().iter().enumerate() {
            assert_eq!(xs[i], state.x);
            assert_eq!(ys[i], state.y);
            assert_eq!(zs[i], state.z);
        }
    }

    #[test]
    fn test_points_layout() {
        let trajectory = short_run();
        let points = trajectory.points();

        assert_eq!(points.dim(), (trajectory.len(), 3));
        for (i, state) in trajectory.states().iter().enumerate() {
            assert_eq!(points[[i, 0]], state.x);
            assert_eq!(points[[i, 1]], state.y);
            assert_eq!(points[[i, 2]], state.z);
        }
    }

    #[test]
    fn test_prefix_clamps() {
        let trajectory = short_run();

        assert_eq!(trajectory.prefix(0).len(), 0);
        assert_eq!(trajectory.prefix(4).len(), 4);
        assert_eq!(trajectory.prefix(4), &trajectory.states()[..4]);
        assert_eq!(trajectory.prefix(usize::MAX).len(), trajectory.len());
    }

    #[test]
    fn test_iteration_order() {
        let trajectory = short_run();
        let collected: Vec<State> = (&trajectory).into_iter().copied().collect();
        assert_eq!(collected.as_slice(), trajectory.states());
    }
}
