//! Grids, learning rates and penalties of the demo problems.

/// Number of passes over the training points.
pub const EPOCHS: usize = 10;

/// Value fed to the bias input of every problem, so the output can be nonzero at the origin.
pub const BIAS: f64 = 1.0;

/// `const-1d`: training points `x = i * CONST_STEP` for `i` in `0..CONST_POINTS`.
pub const CONST_STEP: f64 = 0.1;
pub const CONST_POINTS: usize = 50;
pub const CONST_TARGET: f64 = 3.0;
pub const CONST_LEARNING_RATE: f64 = 0.1;

/// `poisson-2d`: a square grid of `POISSON_POINTS` points per side.
pub const POISSON_STEP: f64 = 0.05;
pub const POISSON_POINTS: usize = 20;
pub const POISSON_DIFFUSION: f64 = 2.0;
pub const POISSON_FORCING: f64 = 10.0;
pub const POISSON_LEARNING_RATE: f64 = 0.01;

/// `heat-1d-bc`: interior points `x = i * HEAT_STEP` for `i` in `1..HEAT_POINTS`, plus both
/// boundaries.
pub const HEAT_STEP: f64 = 0.01;
pub const HEAT_POINTS: usize = 100;
pub const HEAT_CONDUCTIVITY: f64 = 1.0;
pub const HEAT_SOURCE: f64 = 0.0;
pub const HEAT_LEFT: f64 = 1.0;
pub const HEAT_RIGHT: f64 = 7.0;
pub const HEAT_PENALTY: f64 = 1.0;
pub const HEAT_LEARNING_RATE: f64 = 0.1;
