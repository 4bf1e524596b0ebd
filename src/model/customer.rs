// src/model/customer.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::fmt;
use std::ops::RangeInclusive;

/// Unique, monotonically increasing identifier handed out by the simulator.
pub type CustomerId = u64;

/// A person waiting at the office with some amount of abstract work left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    pending: u32,
}

impl Customer {
    /// Constructor with a known workload.
    pub fn new(id: CustomerId, pending: u32) -> Self {
        Self { id, pending }
    }

    /// Draws `pending` uniformly from `range` (both ends included).
    ///
    /// # Panics
    /// Panics if `range` is empty (start above end). A validated
    /// [`SimulationConfig`](crate::simulation::config::SimulationConfig)
    /// never produces one.
    pub fn random<R: Rng + ?Sized>(id: CustomerId, range: RangeInclusive<u32>, rng: &mut R) -> Self {
        let pending = Uniform::new_inclusive(*range.start(), *range.end()).sample(rng);
        Self::new(id, pending)
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Consumes up to `amount` units of work.
    ///
    /// Returns how many units were actually consumed, which is never more than
    /// what was pending. Asking an exhausted customer for work returns 0.
    pub fn consume(&mut self, amount: u32) -> u32 {
        let done = self.pending.min(amount);
        self.pending -= done;
        done
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer {} - pending transactions: {}",
            self.id, self.pending
        )
    }
}
