//! Fault Injection Module
//!
//! Decides whether an operation should fail on purpose. Production wiring uses
//! [`RandomFaults`]; tests pick a deterministic injector.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

// == Fault Injector Trait ==
/// Source of simulated failures, consulted once per operation on a cache miss
/// or before a write.
pub trait FaultInjector: Send + Sync + Debug {
    /// Returns true when the current operation must fail.
    ///
    /// # Arguments
    /// * `rate` - Configured failure probability for the operation
    fn should_fail(&self, rate: f64) -> bool;
}

/// Fails with the configured probability using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFaults;

impl FaultInjector for RandomFaults {
    fn should_fail(&self, rate: f64) -> bool {
        if rate <= 0.0 || rate.is_nan() {
            return false;
        }
        rand::thread_rng().gen_bool(rate.min(1.0))
    }
}

/// Never fails, whatever the rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverFail;

impl FaultInjector for NeverFail {
    fn should_fail(&self, _rate: f64) -> bool {
        false
    }
}

/// Always fails, whatever the rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysFail;

impl FaultInjector for AlwaysFail {
    fn should_fail(&self, _rate: f64) -> bool {
        true
    }
}

/// Fails the first `n` checks, then never again.
#[derive(Debug, Default)]
pub struct FailFirst {
    remaining: AtomicUsize,
}

impl FailFirst {
    /// Fails the next `n` checks.
    pub fn new(n: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(n),
        }
    }
}

impl FaultInjector for FailFirst {
    fn should_fail(&self, _rate: f64) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_faults_zero_rate_never_fails() {
        let faults = RandomFaults;
        assert!((0..1_000).all(|_| !faults.should_fail(0.0)));
    }

    #[test]
    fn test_random_faults_full_rate_always_fails() {
        let faults = RandomFaults;
        assert!((0..1_000).all(|_| faults.should_fail(1.0)));
        assert!(faults.should_fail(7.5));
    }

    #[test]
    fn test_random_faults_nan_rate_never_fails() {
        assert!(!RandomFaults.should_fail(f64::NAN));
    }

    #[test]
    fn test_fixed_injectors() {
        assert!(!NeverFail.should_fail(1.0));
        assert!(AlwaysFail.should_fail(0.0));
    }

    #[test]
    fn test_fail_first() {
        let faults = FailFirst::new(2);
        assert!(faults.should_fail(0.0));
        assert!(faults.should_fail(0.0));
        assert!(!faults.should_fail(1.0));
        assert!(!faults.should_fail(1.0));
    }
}
