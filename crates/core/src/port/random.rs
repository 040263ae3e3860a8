// Random Source Port
//
// Ticket numbers, wait estimates and seeded queues are random by nature.
// Injecting the source keeps the store reproducible under a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[low, high]`
    fn range_inclusive(&self, low: u32, high: u32) -> u32;
}

/// Thread-local RNG (production)
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn range_inclusive(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Seeded RNG, same sequence for the same seed
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range_inclusive(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        // A poisoned lock still holds a usable RNG
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(low..=high)
    }
}
