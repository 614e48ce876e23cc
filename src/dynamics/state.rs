//! Phase-Space State: Points in ℝ³
//!
//! The Lorenz system evolves a three-component state (x, y, z). Each
//! integration step produces a fresh value; stage arithmetic is
//! component-wise and provided through `std::ops` so the Runge-Kutta
//! formulas read the way they are written on paper.

use std::ops::{Add, Mul, Sub};

use rand_distr::{Distribution, Normal};

/// A point in the phase space of the Lorenz system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Convection intensity
    pub x: f64,
    /// Horizontal temperature variation
    pub y: f64,
    /// Vertical temperature variation
    pub z: f64,
}

impl State {
    /// Create a state from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The conventional starting point near (but off) the attractor
    pub fn canonical() -> Self {
        Self::new(0.0, 1.0, 1.05)
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to another state
    pub fn distance(&self, other: &State) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Copy of this state with Gaussian noise of standard deviation
    /// `std_dev` added to each component
    ///
    /// On the attractor, nearby initial conditions separate
    /// exponentially; perturbing a starting point is how that
    /// sensitivity is observed.
    pub fn perturbed(&self, std_dev: f64) -> Self {
        let mut rng = rand::rng();
        let normal = Normal::new(0.0, std_dev).unwrap();

        Self {
            x: self.x + normal.sample(&mut rng),
            y: self.y + normal.sample(&mut rng),
            z: self.z + normal.sample(&mut rng),
        }
    }
}

impl Add for State {
    type Output = State;

    fn add(self, rhs: State) -> State {
        State::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for State {
    type Output = State;

    fn sub(self, rhs: State) -> State {
        State::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for State {
    type Output = State;

    fn mul(self, rhs: f64) -> State {
        State::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<State> for f64 {
    type Output = State;

    fn mul(self, rhs: State) -> State {
        rhs * self
    }
}
