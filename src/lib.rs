//! Swarm-intelligence metaheuristic optimizers.
//!
//! Provides generic implementations of two nature-inspired stochastic
//! search algorithms:
//!
//! - **Ant Colony Optimization (ACO)**: Tour construction over a set of
//!   cities, guided by pheromone trails that are reinforced by the
//!   quality of previously found tours.
//! - **Cuckoo Search (CS)**: Continuous minimization over a bounded box
//!   via Lévy-flight perturbation and random abandonment of poor
//!   candidates.
//!
//! # Architecture
//!
//! Each algorithm lives in its own module and follows the same contract:
//! a `*Problem` trait the user implements (or a built-in instance), a
//! `*Config` with chainable setters and validation, and a `*Runner` that
//! executes the loop and returns a `*Result` carrying the best solution,
//! run statistics, and a best-cost history. All randomness flows through
//! an injected `rand::Rng`, so seeded runs are fully reproducible.
//!
//! The two modules are independent: no state or data flows between them.

pub mod aco;
pub mod cuckoo;
