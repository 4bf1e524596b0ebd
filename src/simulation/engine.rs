// src/simulation/engine.rs

use crate::error::SimulationError;
use crate::model::customer::{Customer, CustomerId};
use crate::model::queues::CircularQueue;
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::{Teller, BATCH_SIZE};
use crate::strategy::traits::ServicePolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Outcome of a single turn at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Nobody was waiting; nothing changed.
    Empty,
    /// The customer finished and left the office.
    Completed { id: CustomerId, served: u32 },
    /// The customer still has work and went to the back of the line.
    Requeued {
        id: CustomerId,
        served: u32,
        remaining: u32,
    },
}

impl TurnResult {
    /// Units of work done this turn.
    pub fn served(&self) -> u32 {
        match self {
            TurnResult::Empty => 0,
            TurnResult::Completed { served, .. } | TurnResult::Requeued { served, .. } => *served,
        }
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnResult::Empty => write!(f, "No customers waiting."),
            TurnResult::Completed { id, served } => write!(
                f,
                "Customer {}: {} transactions served. All transactions completed.",
                id, served
            ),
            TurnResult::Requeued {
                id,
                served,
                remaining,
            } => write!(
                f,
                "Customer {}: {} transactions served. Remaining transactions: {} (back in queue)",
                id, served, remaining
            ),
        }
    }
}

/// Running totals for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_clients_served: u64,
    pub total_transactions: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customers fully served: {}, Total transactions processed: {}",
            self.total_clients_served, self.total_transactions
        )
    }
}

// Serialize so the turn log can go straight to CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: u64,
    pub customer_id: CustomerId,
    pub served: u32,
    pub remaining: u32,
    pub completed: bool,
    pub queue_len_after: usize,
}

/// Single-teller office: one circular queue, one service policy and the
/// counters that go with them.
///
/// All randomness comes from the injected `rng`, so a fixed seed replays
/// the same run.
pub struct BankSimulator<R: Rng = StdRng> {
    config: SimulationConfig,
    queue: CircularQueue<Customer>,
    teller: Box<dyn ServicePolicy>,
    rng: R,

    next_id: CustomerId,
    total_clients_served: u64,
    total_transactions: u64,

    turns: u64,
    pub history: Vec<TurnRecord>,
}

impl BankSimulator<StdRng> {
    pub fn from_seed(config: SimulationConfig, seed: u64) -> Result<Self, SimulationError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BankSimulator<R> {
    /// Builds a simulator served by a [`Teller`] working [`BATCH_SIZE`] units a turn.
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, SimulationError> {
        Self::with_policy(config, rng, Box::new(Teller::new()))
    }

    pub fn with_policy(
        config: SimulationConfig,
        rng: R,
        teller: Box<dyn ServicePolicy>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config,
            queue: CircularQueue::new(),
            teller,
            rng,
            next_id: 1,
            total_clients_served: 0,
            total_transactions: 0,
            turns: 0,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// A new customer with a random workload joins the end of the line.
    pub fn add_customer(&mut self) -> CustomerId {
        let id = self.allocate_id();
        let customer = Customer::random(id, self.config.pending_range(), &mut self.rng);
        self.admit(customer)
    }

    /// Same as [`add_customer`](Self::add_customer) with a known workload.
    pub fn add_customer_with_pending(&mut self, pending: u32) -> CustomerId {
        let id = self.allocate_id();
        self.admit(Customer::new(id, pending))
    }

    /// Fills the lobby at opening time. Returns how many customers arrived.
    pub fn seed_initial(&mut self) -> u32 {
        let count = self.rng.gen_range(self.config.initial_customers_range());
        for _ in 0..count {
            self.add_customer();
        }
        debug!(count, "seeded initial customers");
        count
    }

    /// Serves the customer at the head of the line for one batch.
    ///
    /// Unfinished customers go to the back of the line; finished ones leave.
    pub fn process_turn(&mut self) -> TurnResult {
        let mut customer = match self.queue.dequeue() {
            Some(customer) => customer,
            None => return TurnResult::Empty,
        };

        let served = self.teller.serve(&mut customer);
        debug_assert!(served <= BATCH_SIZE);
        self.total_transactions += u64::from(served);
        self.turns += 1;

        let id = customer.id();
        let remaining = customer.pending();
        let result = if customer.has_pending() {
            self.queue.enqueue(customer);
            TurnResult::Requeued {
                id,
                served,
                remaining,
            }
        } else {
            self.total_clients_served += 1;
            TurnResult::Completed { id, served }
        };

        debug!(turn = self.turns, id, served, remaining, "processed turn");
        if self.config.record_history {
            self.history.push(TurnRecord {
                turn: self.turns,
                customer_id: id,
                served,
                remaining,
                completed: remaining == 0,
                queue_len_after: self.queue.len(),
            });
        }
        result
    }

    /// Display strings for everyone waiting, head first.
    pub fn queue_snapshot(&self) -> Vec<String> {
        self.queue.snapshot()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_clients_served: self.total_clients_served,
            total_transactions: self.total_transactions,
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of turns that actually served someone.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    fn allocate_id(&mut self) -> CustomerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn admit(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id();
        debug!(id, pending = customer.pending(), "customer arrived");
        self.queue.enqueue(customer);
        id
    }
}
