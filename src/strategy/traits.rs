// src/strategy/traits.rs

use crate::model::customer::Customer;
use std::fmt::Debug;

/// Decides how much of a customer's pending work gets done in one turn.
///
/// Takes `&self`: a policy holds no per-turn state, so the same instance
/// can serve every customer in any order.
pub trait ServicePolicy: Debug + Send + Sync {
    /// Works on `customer` and returns the number of units actually consumed.
    fn serve(&self, customer: &mut Customer) -> u32;
}
