//! Layer 3: Algorithms
//!
//! This layer implements the numerical core: the dense multiply kernel,
//! scaled binary exponentiation, and construction of the Kolmogorov
//! recursion matrix. It is orchestrated by the engine layer.

// Dense square-matrix product.
pub mod multiply;

// Binary exponentiation with decimal rescaling.
pub mod power;

// Kolmogorov recursion-matrix construction.
pub mod transition;
