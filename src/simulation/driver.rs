// src/simulation/driver.rs

use crate::error::SimulationError;
use crate::io::arrivals::ArrivalSchedule;
use crate::model::customer::CustomerId;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{BankSimulator, TurnResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, trace};

// Keeps the arrival stream independent of the customer workload stream.
const ARRIVAL_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Something that happened while the office was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Opened { initial_customers: u32 },
    Arrival { secs: u64, id: CustomerId },
    Turn { secs: u64, result: TurnResult },
}

/// Headless stand-in for an interactive front end.
///
/// Advances a simulated clock one second at a time, lets customers walk in
/// at random intervals and has the teller take a turn every
/// `turn_interval_secs` seconds.
pub struct OfficeDriver {
    simulator: BankSimulator<StdRng>,
    arrivals: ArrivalSchedule<StdRng>,
    seed: u64,
    clock_ms: u64,
    next_arrival_ms: u64,
    pub events: Vec<DriverEvent>,
}

impl OfficeDriver {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let arrivals = ArrivalSchedule::new(
            config.arrival_interval_range(),
            StdRng::seed_from_u64(seed ^ ARRIVAL_STREAM_SALT),
        );
        let simulator = BankSimulator::from_seed(config, seed)?;

        Ok(Self {
            simulator,
            arrivals,
            seed,
            clock_ms: 0,
            next_arrival_ms: 0,
            events: Vec::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn simulator(&self) -> &BankSimulator<StdRng> {
        &self.simulator
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.clock_ms / 1000
    }

    /// Opens the office and runs until the configured duration has passed.
    pub fn run(&mut self) {
        self.open();
        let duration = u64::from(self.simulator.config().duration_secs);
        while self.elapsed_secs() < duration {
            self.tick();
        }
        info!(summary = %self.simulator.summary(), "office closed");
    }

    /// Seeds the lobby; the first automatic arrival is due immediately.
    pub fn open(&mut self) {
        let initial_customers = self.simulator.seed_initial();
        info!(initial_customers, seed = self.seed, "office opened");
        self.events.push(DriverEvent::Opened { initial_customers });
        self.fire_due_arrivals();
    }

    /// Advances the clock by one second.
    pub fn tick(&mut self) {
        self.clock_ms += 1000;
        let secs = self.elapsed_secs();
        trace!(secs, "clock");

        self.fire_due_arrivals();

        let turn_interval = u64::from(self.simulator.config().turn_interval_secs);
        if secs % turn_interval == 0 {
            let result = self.simulator.process_turn();
            info!(secs, waiting = self.simulator.queue_len(), "{}", result);
            self.events.push(DriverEvent::Turn { secs, result });
        }
    }

    fn fire_due_arrivals(&mut self) {
        while self.next_arrival_ms <= self.clock_ms {
            let id = self.simulator.add_customer();
            let secs = self.elapsed_secs();
            info!(secs, id, "new customer arrived");
            self.events.push(DriverEvent::Arrival { secs, id });
            self.next_arrival_ms += self.arrivals.next_interval_ms();
        }
    }
}
