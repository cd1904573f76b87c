//! Ant Colony Optimization (ACO).
//!
//! A population-based constructive metaheuristic for tour minimization.
//! Each iteration, a colony of ants builds complete tours city by city,
//! sampling the next city from a distribution biased by pheromone
//! strength and inverse distance. Pheromone evaporates globally, then
//! every tour in the batch reinforces the edges it traversed in
//! proportion to its quality, so edges belonging to short tours become
//! more attractive over time.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"

mod config;
mod pheromone;
mod runner;
mod types;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{tour_length, AcoResult, AcoRunner};
pub use types::{AcoProblem, EuclideanTour};
