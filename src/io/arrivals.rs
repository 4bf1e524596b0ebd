// src/io/arrivals.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::ops::RangeInclusive;

/// Draws the waiting time until the next walk-in customer.
///
/// Intervals are uniform over the configured millisecond range, e.g.
/// `3000..=7000` for "somewhere between three and seven seconds".
#[derive(Debug, Clone)]
pub struct ArrivalSchedule<R: Rng> {
    interval: Uniform<u32>,
    rng: R,
}

impl<R: Rng> ArrivalSchedule<R> {
    /// Panics if `interval_ms` is empty; validate the config first.
    pub fn new(interval_ms: RangeInclusive<u32>, rng: R) -> Self {
        Self {
            interval: Uniform::new_inclusive(*interval_ms.start(), *interval_ms.end()),
            rng,
        }
    }

    /// Milliseconds until the next arrival. Never 0, so a clock driven by
    /// these intervals always moves forward.
    pub fn next_interval_ms(&mut self) -> u64 {
        u64::from(self.interval.sample(&mut self.rng).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate_arrival_gaps<R: Rng>(schedule: &mut ArrivalSchedule<R>, count: usize) -> Vec<u64> {
        (0..count).map(|_| schedule.next_interval_ms()).collect()
    }

    #[test]
    fn intervals_stay_in_range() {
        let mut schedule = ArrivalSchedule::new(3000..=7000, StdRng::seed_from_u64(1));
        for gap in generate_arrival_gaps(&mut schedule, 1000) {
            assert!((3000..=7000).contains(&gap));
        }
    }

    #[test]
    fn zero_interval_is_bumped() {
        let mut schedule = ArrivalSchedule::new(0..=0, StdRng::seed_from_u64(1));
        assert_eq!(schedule.next_interval_ms(), 1);
    }

    #[test]
    fn same_seed_same_gaps() {
        let mut a = ArrivalSchedule::new(3000..=7000, StdRng::seed_from_u64(9));
        let mut b = ArrivalSchedule::new(3000..=7000, StdRng::seed_from_u64(9));
        assert_eq!(
            generate_arrival_gaps(&mut a, 20),
            generate_arrival_gaps(&mut b, 20)
        );
    }
}
