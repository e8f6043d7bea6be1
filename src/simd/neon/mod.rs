//! ARM NEON lane backend (2 × 128-bit, 4 × f64).
//!
//! NEON registers hold two doubles, so one lane batch is a pair of
//! `float64x2_t` halves. This keeps the batch width, and therefore the
//! reduction order, identical to the other backends.

pub mod f64x4;
