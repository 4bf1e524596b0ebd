// src/simulation/config.rs

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub min_pending: u32,
    pub max_pending: u32,
    /// How many customers are already waiting when the office opens.
    pub min_initial_customers: u32,
    pub max_initial_customers: u32,
    /// Gap between automatic arrivals, in milliseconds.
    pub min_arrival_interval_ms: u32,
    pub max_arrival_interval_ms: u32,
    /// Simulated seconds between two processed turns.
    pub turn_interval_secs: u32,
    pub duration_secs: u32,
    pub seed: Option<u64>,
    /// Keep a [`TurnRecord`](crate::simulation::engine::TurnRecord) per served turn.
    pub record_history: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_pending: 15,
            max_pending: 30,
            min_initial_customers: 3,
            max_initial_customers: 10,
            min_arrival_interval_ms: 3000,
            max_arrival_interval_ms: 7000,
            turn_interval_secs: 2,
            duration_secs: 120,
            seed: None,
            record_history: true,
        }
    }
}

impl SimulationConfig {
    pub fn pending_range(&self) -> RangeInclusive<u32> {
        self.min_pending..=self.max_pending
    }

    pub fn initial_customers_range(&self) -> RangeInclusive<u32> {
        self.min_initial_customers..=self.max_initial_customers
    }

    pub fn arrival_interval_range(&self) -> RangeInclusive<u32> {
        self.min_arrival_interval_ms..=self.max_arrival_interval_ms
    }

    /// Rejects settings the uniform draws or the driver cannot work with.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_range("pending", self.min_pending, self.max_pending)?;
        check_range(
            "initial customers",
            self.min_initial_customers,
            self.max_initial_customers,
        )?;
        check_range(
            "arrival interval",
            self.min_arrival_interval_ms,
            self.max_arrival_interval_ms,
        )?;
        if self.turn_interval_secs == 0 {
            return Err(SimulationError::ZeroTurnInterval);
        }
        Ok(())
    }
}

fn check_range(name: &'static str, low: u32, high: u32) -> Result<(), SimulationError> {
    if low > high {
        return Err(SimulationError::InvalidRange { name, low, high });
    }
    Ok(())
}
