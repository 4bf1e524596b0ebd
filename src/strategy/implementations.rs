// src/strategy/implementations.rs

use crate::model::customer::Customer;
use crate::strategy::traits::ServicePolicy;

/// Units of work the teller gets through per turn.
pub const BATCH_SIZE: u32 = 5;

// =========================================================================
// Fixed Batch Teller
// =========================================================================

/// The single teller at the counter. Serves at most [`BATCH_SIZE`] units per
/// turn and remembers nothing between customers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teller;

impl Teller {
    pub fn new() -> Self {
        Self
    }
}

impl ServicePolicy for Teller {
    fn serve(&self, customer: &mut Customer) -> u32 {
        customer.consume(BATCH_SIZE)
    }
}
