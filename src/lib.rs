//! Single-teller bank office simulation.
//!
//! Customers queue in a ring, the teller works a fixed batch per turn and
//! anyone with work left goes back to the end of the line.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::SimulationError;
pub use model::customer::{Customer, CustomerId};
pub use model::queues::CircularQueue;
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{BankSimulator, Summary, TurnRecord, TurnResult};
pub use strategy::implementations::{Teller, BATCH_SIZE};
pub use strategy::traits::ServicePolicy;
