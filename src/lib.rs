//! Deterministic xorshift128 pseudo-random numbers for simulation and sampling.
//!
//! Not suitable for cryptography.

mod global;
mod sampling;
mod xorshift128;

pub use global::{init_rand, rand_int};
pub use sampling::Sampling;
pub use xorshift128::{Xorshift128, Xorshift128Seed};
